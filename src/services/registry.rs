use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{CastingProject, ProjectStatus, TalentProfile};

/// Errors that can occur when reading or mutating the registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown talent: {0}")]
    UnknownTalent(String),

    #[error("Unknown role {role_id} in project {project_id}")]
    UnknownRole { project_id: String, role_id: String },

    #[error("Duplicate id: {0}")]
    Duplicate(String),
}

/// Talent catalogue
#[async_trait]
pub trait TalentRegistry: Send + Sync {
    /// Snapshot of every talent, in registry order
    async fn list_talents(&self) -> Vec<TalentProfile>;

    async fn get_talent(&self, id: &str) -> Result<TalentProfile, RegistryError>;

    /// Replace a talent profile, keeping its registry position
    async fn update_talent(&self, profile: TalentProfile) -> Result<TalentProfile, RegistryError>;
}

/// Casting projects
#[async_trait]
pub trait ProjectRegistry: Send + Sync {
    /// Snapshot of every project, newest first
    async fn list_projects(&self) -> Vec<CastingProject>;

    async fn get_project(&self, id: &str) -> Result<CastingProject, RegistryError>;

    async fn create_project(&self, project: CastingProject) -> Result<CastingProject, RegistryError>;

    async fn set_status(&self, id: &str, status: ProjectStatus) -> Result<CastingProject, RegistryError>;

    /// Record the client's pick for a role. The talent must exist.
    async fn select_talent(
        &self,
        project_id: &str,
        role_id: &str,
        talent_id: &str,
    ) -> Result<CastingProject, RegistryError>;
}

/// In-memory registry seeded at start-up
///
/// Lock order is always talents before projects.
pub struct InMemoryRegistry {
    talents: RwLock<Vec<TalentProfile>>,
    projects: RwLock<Vec<CastingProject>>,
}

impl InMemoryRegistry {
    pub fn new(talents: Vec<TalentProfile>, projects: Vec<CastingProject>) -> Self {
        Self {
            talents: RwLock::new(talents),
            projects: RwLock::new(projects),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

fn ensure_selections_exist(
    project: &CastingProject,
    talent_ids: &HashSet<&str>,
) -> Result<(), RegistryError> {
    for role in &project.roles {
        if let Some(selected) = &role.selected_talent_id {
            if !talent_ids.contains(selected.as_str()) {
                return Err(RegistryError::UnknownTalent(selected.clone()));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl TalentRegistry for InMemoryRegistry {
    async fn list_talents(&self) -> Vec<TalentProfile> {
        self.talents.read().await.clone()
    }

    async fn get_talent(&self, id: &str) -> Result<TalentProfile, RegistryError> {
        self.talents
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("talent {}", id)))
    }

    async fn update_talent(&self, profile: TalentProfile) -> Result<TalentProfile, RegistryError> {
        let mut talents = self.talents.write().await;

        let slot = talents
            .iter_mut()
            .find(|t| t.id == profile.id)
            .ok_or_else(|| RegistryError::NotFound(format!("talent {}", profile.id)))?;

        *slot = profile.clone();

        tracing::debug!("Updated talent profile {}", profile.id);

        Ok(profile)
    }
}

#[async_trait]
impl ProjectRegistry for InMemoryRegistry {
    async fn list_projects(&self) -> Vec<CastingProject> {
        self.projects.read().await.clone()
    }

    async fn get_project(&self, id: &str) -> Result<CastingProject, RegistryError> {
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("project {}", id)))
    }

    async fn create_project(&self, project: CastingProject) -> Result<CastingProject, RegistryError> {
        let talents = self.talents.read().await;
        let talent_ids: HashSet<&str> = talents.iter().map(|t| t.id.as_str()).collect();
        ensure_selections_exist(&project, &talent_ids)?;

        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(RegistryError::Duplicate(project.id));
        }

        projects.insert(0, project.clone());

        tracing::info!("Created project {} with {} roles", project.id, project.roles.len());

        Ok(project)
    }

    async fn set_status(&self, id: &str, status: ProjectStatus) -> Result<CastingProject, RegistryError> {
        let mut projects = self.projects.write().await;

        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RegistryError::NotFound(format!("project {}", id)))?;

        project.status = status;

        Ok(project.clone())
    }

    async fn select_talent(
        &self,
        project_id: &str,
        role_id: &str,
        talent_id: &str,
    ) -> Result<CastingProject, RegistryError> {
        let talents = self.talents.read().await;
        if !talents.iter().any(|t| t.id == talent_id) {
            return Err(RegistryError::UnknownTalent(talent_id.to_string()));
        }

        let mut projects = self.projects.write().await;

        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| RegistryError::NotFound(format!("project {}", project_id)))?;

        let role = project
            .roles
            .iter_mut()
            .find(|r| r.id == role_id)
            .ok_or_else(|| RegistryError::UnknownRole {
                project_id: project_id.to_string(),
                role_id: role_id.to_string(),
            })?;

        role.selected_talent_id = Some(talent_id.to_string());

        tracing::info!("Selected talent {} for role {} of project {}", talent_id, role_id, project_id);

        Ok(project.clone())
    }
}
