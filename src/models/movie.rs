use serde::{Deserialize, Serialize};

use crate::{error::AppError, services::genres::normalize_genres};

/// Catalog identifier of a movie
pub type MovieId = i64;

/// Raw catalog row as returned by a candidate source
///
/// Genres are kept in whatever JSON shape the catalog stored them in;
/// they are flattened into labels when the row becomes a [`Candidate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct CandidateRow {
    pub id: Option<MovieId>,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub genres: Option<serde_json::Value>,
    /// rating × popularity
    pub score: f64,
}

/// A movie eligible for onboarding recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    /// Normalized genre labels, in catalog order
    pub genres: Vec<String>,
    pub score: f64,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = AppError;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        let id = row.id.ok_or_else(|| {
            AppError::MalformedCandidate(format!("movie '{}' has no id", row.title))
        })?;

        let genres = row
            .genres
            .as_ref()
            .map(normalize_genres)
            .unwrap_or_default();

        Ok(Candidate {
            id,
            title: row.title,
            poster_path: row.poster_path,
            release_year: row.release_year,
            genres,
            score: row.score,
        })
    }
}

/// Movie summary returned to the client; internal scoring is not exposed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub genres: Vec<String>,
}

impl From<&Candidate> for MovieSummary {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id,
            title: candidate.title.clone(),
            poster_path: candidate.poster_path.clone(),
            release_year: candidate.release_year,
            genres: candidate.genres.clone(),
        }
    }
}
