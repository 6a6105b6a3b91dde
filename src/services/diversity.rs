use std::collections::HashSet;

use crate::models::{Candidate, MovieId};

/// Slot counts for the onboarding selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Maximum number of movies returned
    pub target: usize,
    /// Leading slots that only admit a candidate bringing an unseen genre
    pub diversity_slots: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            target: 10,
            diversity_slots: 5,
        }
    }
}

/// Picks onboarding movies from candidates ordered by descending score
///
/// Selection runs in up to two passes over the input, which is never
/// re-sorted:
/// 1. While fewer than `diversity_slots` movies are selected, a candidate
///    is admitted only if no genre has been seen yet or it carries at least
///    one unseen genre. After that every candidate is admitted until
///    `target` is reached.
/// 2. If the first pass ran out of input, the original list is walked again
///    and any movie not yet selected is appended.
///
/// The output is in insertion order and never holds the same id twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiversitySelector {
    policy: SelectionPolicy,
}

impl DiversitySelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn select<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        let target = self.policy.target;
        let mut selected: Vec<&Candidate> = Vec::with_capacity(target);
        let mut selected_ids: HashSet<MovieId> = HashSet::with_capacity(target);
        let mut used_genres: HashSet<&str> = HashSet::new();

        for candidate in candidates {
            if selected.len() >= target {
                break;
            }
            if selected_ids.contains(&candidate.id) {
                continue;
            }

            if selected.len() < self.policy.diversity_slots {
                let brings_new_genre = used_genres.is_empty()
                    || candidate
                        .genres
                        .iter()
                        .any(|genre| !used_genres.contains(genre.as_str()));
                if !brings_new_genre {
                    continue;
                }
            }

            used_genres.extend(candidate.genres.iter().map(String::as_str));
            selected_ids.insert(candidate.id);
            selected.push(candidate);
        }

        if selected.len() < target {
            let before = selected.len();
            for candidate in candidates {
                if selected.len() >= target {
                    break;
                }
                if selected_ids.insert(candidate.id) {
                    selected.push(candidate);
                }
            }
            tracing::debug!(
                diverse = before,
                backfilled = selected.len() - before,
                "Onboarding selection backfilled from skipped candidates"
            );
        }

        selected.truncate(target);
        selected
    }
}
