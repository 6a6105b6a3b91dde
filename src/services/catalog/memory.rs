use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{error::AppResult, models::CandidateRow};

use super::CandidateSource;

/// Candidate source over rows held in memory
///
/// Used by the HTTP tests and for running the service without a database.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    rows: Arc<RwLock<Vec<CandidateRow>>>,
}

impl InMemoryCatalog {
    pub fn new(rows: Vec<CandidateRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub async fn insert(&self, row: CandidateRow) {
        self.rows.write().await.push(row);
    }
}

#[async_trait::async_trait]
impl CandidateSource for InMemoryCatalog {
    async fn fetch_candidates(&self, limit: usize) -> AppResult<Vec<CandidateRow>> {
        let mut rows = self.rows.read().await.clone();
        // stable: equal scores keep insertion order
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        rows.truncate(limit);
        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
