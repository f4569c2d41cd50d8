use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{ClientRef, ProjectStatus, RoleSpec};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Request to analyze a casting brief
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeBriefRequest {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub campaign: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
}

/// Request to pick a talent for a role
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectTalentRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "talent_id", rename = "talentId")]
    pub talent_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ProjectStatus,
}

/// Request to turn a reviewed brief into a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmBriefRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "client_id", rename = "clientId")]
    pub client_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "client_name", rename = "clientName")]
    pub client_name: String,
}

impl ConfirmBriefRequest {
    pub fn client(&self) -> ClientRef {
        ClientRef {
            client_id: self.client_id.clone(),
            client_name: self.client_name.clone(),
        }
    }
}

/// Request to create a project directly, without brief generation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(alias = "client_id", rename = "clientId")]
    pub client_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "client_name", rename = "clientName")]
    pub client_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roles: Vec<RoleSpec>,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Open
}
