//! Movie catalog access for onboarding
//!
//! The onboarding flow only needs one query from the catalog: the top movies
//! by `rating × popularity`. Sources implement that query; selection policy
//! lives in [`crate::services::diversity`].

use crate::{error::AppResult, models::CandidateRow};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCatalog;
pub use postgres::PostgresCandidateSource;

/// Supplies onboarding candidates
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CandidateSource: Send + Sync {
    /// Returns at most `limit` rows ordered by descending score
    ///
    /// Rows with equal scores keep a stable order between calls.
    async fn fetch_candidates(&self, limit: usize) -> AppResult<Vec<CandidateRow>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
