use std::sync::Arc;
use std::time::Instant;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{Candidate, MovieSummary},
    services::{
        catalog::CandidateSource,
        diversity::{DiversitySelector, SelectionPolicy},
    },
};

/// Picks the movies a new user rates during onboarding
///
/// Fetches the top-scored candidates, optionally through Redis, and runs the
/// genre-diversity selection over them.
#[derive(Clone)]
pub struct OnboardingService {
    source: Arc<dyn CandidateSource>,
    cache: Option<Cache>,
    candidate_limit: usize,
    cache_ttl: u64,
    selector: DiversitySelector,
}

impl OnboardingService {
    pub fn new(source: Arc<dyn CandidateSource>, candidate_limit: usize) -> Self {
        Self {
            source,
            cache: None,
            candidate_limit,
            cache_ttl: 600,
            selector: DiversitySelector::default(),
        }
    }

    /// Serves candidates from `cache` for `ttl` seconds
    pub fn with_cache(mut self, cache: Cache, ttl: u64) -> Self {
        self.cache = Some(cache);
        self.cache_ttl = ttl;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selector = DiversitySelector::new(policy);
        self
    }

    pub async fn onboarding_movies(&self) -> AppResult<Vec<MovieSummary>> {
        let start = Instant::now();

        let candidates: Vec<Candidate> = match &self.cache {
            Some(cache) => {
                let key = CacheKey::OnboardingCandidates(self.candidate_limit);
                cached!(cache, key, self.cache_ttl, self.load_candidates())
            }
            None => self.load_candidates().await?,
        };

        let selected = self.selector.select(&candidates);
        let movies: Vec<MovieSummary> = selected.into_iter().map(MovieSummary::from).collect();

        tracing::info!(
            candidates = candidates.len(),
            selected = movies.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Onboarding movies selected"
        );

        Ok(movies)
    }

    /// Fetches rows from the source and validates them into candidates
    async fn load_candidates(&self) -> AppResult<Vec<Candidate>> {
        if self.candidate_limit == 0 {
            return Err(AppError::Internal(
                "Onboarding candidate limit is not configured".to_string(),
            ));
        }

        let rows = self.source.fetch_candidates(self.candidate_limit).await?;

        tracing::debug!(
            source = self.source.name(),
            rows = rows.len(),
            "Loaded onboarding candidates"
        );

        rows.into_iter()
            .map(Candidate::try_from)
            .collect::<AppResult<Vec<_>>>()
            .inspect_err(|e| tracing::error!(error = %e, "Rejected onboarding candidate"))
    }
}
