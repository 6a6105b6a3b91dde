use sqlx::PgPool;

use crate::{error::AppResult, models::CandidateRow};

use super::CandidateSource;

/// Candidate source backed by the `movies` table
#[derive(Clone)]
pub struct PostgresCandidateSource {
    db_pool: PgPool,
}

impl PostgresCandidateSource {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait::async_trait]
impl CandidateSource for PostgresCandidateSource {
    async fn fetch_candidates(&self, limit: usize) -> AppResult<Vec<CandidateRow>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id,
                   title,
                   poster_path,
                   release_year,
                   genres,
                   (COALESCE(rating, 0) * COALESCE(popularity, 0))::float8 AS score
            FROM movies
            ORDER BY score DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db_pool)
        .await?;

        tracing::debug!(rows = rows.len(), "Fetched onboarding candidates");

        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
