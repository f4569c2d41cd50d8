use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

use crate::core::matcher::{MatchResult, Matcher};
use crate::models::{CastingBrief, CastingProject, CastingRole, ClientRef, ProjectStatus, RoleSpec, TalentProfile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Project description is empty")]
    EmptyDescription,

    #[error("An analysis is already in progress")]
    AnalysisInFlight,

    #[error("No analysis is in progress")]
    NotAnalyzing,

    #[error("Casting analysis failed")]
    AnalysisFailed,

    #[error("No proposal to review")]
    NotReviewing,

    #[error("Role index {0} out of range")]
    RoleOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Input,
    Analyzing,
    Review,
    Done,
}

/// Brief-to-project flow of one client session
///
/// Input -> Analyzing -> Review -> Done. Only one analysis may be in flight;
/// a successful analysis replaces the whole proposal and drops earlier
/// candidate selections, a failed one leaves the previous proposal untouched.
#[derive(Debug, Clone)]
pub struct CastingWizard {
    step: WizardStep,
    resume_step: WizardStep,
    brand: String,
    campaign: String,
    description: String,
    title: String,
    roles: Vec<RoleSpec>,
    /// role index -> talent id
    selections: BTreeMap<usize, String>,
}

impl Default for CastingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CastingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Input,
            resume_step: WizardStep::Input,
            brand: String::new(),
            campaign: String::new(),
            description: String::new(),
            title: String::new(),
            roles: Vec::new(),
            selections: BTreeMap::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn roles(&self) -> &[RoleSpec] {
        &self.roles
    }

    pub fn selection(&self, role_index: usize) -> Option<&str> {
        self.selections.get(&role_index).map(String::as_str)
    }

    /// Start an analysis and return the prompt to send to the brief generator
    pub fn begin_analysis(
        &mut self,
        brand: &str,
        campaign: &str,
        description: &str,
    ) -> Result<String, WizardError> {
        match self.step {
            WizardStep::Analyzing => return Err(WizardError::AnalysisInFlight),
            WizardStep::Input | WizardStep::Review => {}
            WizardStep::Done => return Err(WizardError::NotReviewing),
        }

        if description.trim().is_empty() {
            return Err(WizardError::EmptyDescription);
        }

        self.brand = brand.to_string();
        self.campaign = campaign.to_string();
        self.description = description.to_string();
        self.resume_step = self.step;
        self.step = WizardStep::Analyzing;

        Ok(build_prompt(brand, campaign, description))
    }

    /// Apply the outcome of the in-flight analysis
    pub fn complete_analysis<E: Display>(
        &mut self,
        outcome: Result<CastingBrief, E>,
    ) -> Result<(), WizardError> {
        if self.step != WizardStep::Analyzing {
            return Err(WizardError::NotAnalyzing);
        }

        match outcome {
            Ok(brief) => {
                self.title = if self.campaign.trim().is_empty() {
                    brief.title
                } else {
                    self.campaign.clone()
                };
                self.roles = brief.roles;
                self.selections.clear();
                self.step = WizardStep::Review;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Casting analysis failed: {}", e);
                self.step = self.resume_step;
                Err(WizardError::AnalysisFailed)
            }
        }
    }

    fn ensure_role(&self, role_index: usize) -> Result<&RoleSpec, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotReviewing);
        }

        self.roles
            .get(role_index)
            .ok_or(WizardError::RoleOutOfRange(role_index))
    }

    /// Candidates for one proposed role
    pub fn candidates(
        &self,
        role_index: usize,
        matcher: &Matcher,
        pool: &[TalentProfile],
    ) -> Result<MatchResult, WizardError> {
        let role = self.ensure_role(role_index)?;
        Ok(matcher.find_matches(role, pool))
    }

    pub fn select_candidate(&mut self, role_index: usize, talent_id: &str) -> Result<(), WizardError> {
        self.ensure_role(role_index)?;
        self.selections.insert(role_index, talent_id.to_string());
        Ok(())
    }

    /// Turn the reviewed proposal into an open casting project
    pub fn confirm(
        &mut self,
        client: &ClientRef,
        matcher: &Matcher,
        pool: &[TalentProfile],
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<CastingProject, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotReviewing);
        }

        let roles = self
            .roles
            .iter()
            .enumerate()
            .map(|(i, spec)| CastingRole {
                id: format!("new-r-{}", i),
                spec: spec.clone(),
                suggested_talent_ids: matcher.find_matches(spec, pool).talent_ids(),
                selected_talent_id: self.selections.get(&i).cloned(),
            })
            .collect();

        let brand = self.brand.trim();

        let project = CastingProject {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title.clone(),
            client_id: client.client_id.clone(),
            client_name: client.client_name.clone(),
            brand: if brand.is_empty() { None } else { Some(brand.to_string()) },
            status: ProjectStatus::Open,
            created_at: now,
            description: self.description.clone(),
            roles,
        };

        self.step = WizardStep::Done;

        Ok(project)
    }

    /// Back to review after a confirmed project could not be stored
    ///
    /// Selections and roles are untouched, so the next `confirm` rebuilds the
    /// same proposal.
    pub fn reopen(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Done {
            return Err(WizardError::NotReviewing);
        }

        self.step = WizardStep::Review;
        Ok(())
    }
}

/// Prompt text sent to the brief generator
pub fn build_prompt(brand: &str, campaign: &str, description: &str) -> String {
    format!("Marca: {}. Campaña: {}. Descripción: {}", brand, campaign, description)
}
