use crate::core::{filters::filter_eligible, scoring::rank};
use crate::models::{RoleSpec, TalentProfile};

/// Number of candidates surfaced per role
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matches: Vec<TalentProfile>,
    pub total_candidates: usize,
    pub eligible_count: usize,
}

impl MatchResult {
    pub fn talent_ids(&self) -> Vec<String> {
        self.matches.iter().map(|t| t.id.clone()).collect()
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Gender/age normalization of the role
/// 2. Strict eligibility filtering
/// 3. Voice-type relevance ranking (stable)
/// 4. Truncation to the page size
///
/// The matcher never reads shared state: callers pass a snapshot of the
/// talent pool, and the same inputs always produce the same ordered output.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    max_results: usize,
}

impl Matcher {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Find the best candidates for a role within a talent pool
    ///
    /// # Arguments
    /// * `role` - The role specification (free-text gender, age and voice type)
    /// * `pool` - Snapshot of the talent registry, in registry order
    ///
    /// # Returns
    /// MatchResult with at most `max_results` talents, most relevant first
    pub fn find_matches(&self, role: &RoleSpec, pool: &[TalentProfile]) -> MatchResult {
        let eligible = filter_eligible(role, pool);
        let eligible_count = eligible.len();

        let mut ranked = rank(role, eligible);
        ranked.truncate(self.max_results);

        tracing::trace!(
            "Matched role '{}': {} of {} talents eligible, returning {}",
            role.name,
            eligible_count,
            pool.len(),
            ranked.len()
        );

        MatchResult {
            matches: ranked.into_iter().cloned().collect(),
            total_candidates: pool.len(),
            eligible_count,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

/// Top-10 candidates for a role, using the default page size
pub fn find_matches(role: &RoleSpec, pool: &[TalentProfile]) -> Vec<TalentProfile> {
    Matcher::default().find_matches(role, pool).matches
}
