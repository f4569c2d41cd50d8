use serde::{Deserialize, Serialize};

use crate::core::WizardStep;
use crate::models::domain::{RoleSpec, TalentProfile};

/// Response for the match endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<TalentProfile>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCount")]
    pub eligible_count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// State of a brief session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub step: WizardStep,
}

/// A proposed role with its candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedRole {
    pub index: usize,
    #[serde(flatten)]
    pub spec: RoleSpec,
    /// Absent while an analysis is in flight; `[]` means no talent matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<TalentProfile>>,
    #[serde(rename = "selectedTalentId", skip_serializing_if = "Option::is_none")]
    pub selected_talent_id: Option<String>,
}

/// Reviewable proposal returned after a successful analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefProposalResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub step: WizardStep,
    pub title: String,
    pub roles: Vec<ProposedRole>,
}
