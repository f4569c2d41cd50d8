//! Casting Match - talent matching and casting brief service
//!
//! This library provides the matching engine used to suggest voice talents
//! for casting roles: free-text gender/age normalization, strict eligibility
//! filtering and voice-type relevance ranking, capped to a page of ten.
//! Around it sit the brief-to-project wizard, an in-memory registry and the
//! JSON API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{find_matches, normalize_age_label, normalize_gender, CastingWizard, MatchResult, Matcher};
pub use models::{AgeLabel, CastingBrief, CastingProject, CastingRole, Gender, RoleSpec, TalentProfile};
