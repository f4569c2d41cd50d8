// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod normalizer;
pub mod opportunities;
pub mod scoring;
pub mod stats;
pub mod wizard;

pub use filters::{filter_eligible, is_eligible, matches_age, matches_gender, RoleConstraints};
pub use matcher::{find_matches, MatchResult, Matcher, DEFAULT_MAX_RESULTS};
pub use normalizer::{normalize_age_label, normalize_gender, ADULT_FANOUT};
pub use opportunities::{opportunities_for, ProjectOpportunity, RoleOpportunity};
pub use scoring::{rank, relevance_score, voice_keywords};
pub use stats::compute_stats;
pub use wizard::{build_prompt, CastingWizard, WizardError, WizardStep};
