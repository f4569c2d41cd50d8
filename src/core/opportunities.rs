use serde::{Deserialize, Serialize};

use crate::core::normalizer::normalize_gender;
use crate::models::{CastingProject, CastingRole, ProjectStatus, TalentProfile};

/// A role of an open project as seen by one talent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOpportunity {
    #[serde(flatten)]
    pub role: CastingRole,
    /// Gender-compatible with the talent
    #[serde(rename = "isMatch")]
    pub is_match: bool,
    /// The client picked this talent for the role
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOpportunity {
    #[serde(rename = "projectId")]
    pub project_id: String,
    pub title: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub roles: Vec<RoleOpportunity>,
}

/// Open castings annotated for a talent
///
/// Only the gender is checked here: talents browse every open role and the
/// age filter stays a concern of the client-side matcher.
pub fn opportunities_for(talent: &TalentProfile, projects: &[CastingProject]) -> Vec<ProjectOpportunity> {
    projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Open)
        .map(|project| ProjectOpportunity {
            project_id: project.id.clone(),
            title: project.title.clone(),
            client_name: project.client_name.clone(),
            created_at: project.created_at,
            roles: project
                .roles
                .iter()
                .map(|role| {
                    let role_gender = normalize_gender(&role.spec.gender);
                    RoleOpportunity {
                        role: role.clone(),
                        is_match: role_gender.is_compatible_with(talent.gender),
                        is_selected: role.selected_talent_id.as_deref() == Some(talent.id.as_str()),
                    }
                })
                .collect(),
        })
        .collect()
}
