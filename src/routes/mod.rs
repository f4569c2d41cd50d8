// Route exports
pub mod briefs;
pub mod matches;
pub mod projects;
pub mod talents;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::{Matcher, WizardError};
use crate::models::ErrorResponse;
use crate::services::{BriefGenerator, BriefSessions, ProjectRegistry, RegistryError, SessionError, TalentRegistry};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub talents: Arc<dyn TalentRegistry>,
    pub projects: Arc<dyn ProjectRegistry>,
    pub briefs: Arc<dyn BriefGenerator>,
    pub sessions: Arc<BriefSessions>,
    pub matcher: Matcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(talents::configure)
            .configure(projects::configure)
            .configure(briefs::configure),
    );
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

pub(crate) fn registry_error(err: RegistryError) -> HttpResponse {
    match &err {
        RegistryError::NotFound(_) | RegistryError::UnknownRole { .. } => {
            error_response(StatusCode::NOT_FOUND, "not_found", &err)
        }
        RegistryError::UnknownTalent(_) => error_response(StatusCode::BAD_REQUEST, "unknown_talent", &err),
        RegistryError::Duplicate(_) => error_response(StatusCode::CONFLICT, "duplicate", &err),
    }
}

pub(crate) fn session_error(err: SessionError) -> HttpResponse {
    match err {
        SessionError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "not_found", &err),
        SessionError::Wizard(wizard) => match wizard {
            WizardError::EmptyDescription => error_response(StatusCode::BAD_REQUEST, "validation_failed", wizard),
            WizardError::AnalysisInFlight => error_response(StatusCode::CONFLICT, "analysis_in_progress", wizard),
            WizardError::NotAnalyzing | WizardError::NotReviewing => {
                error_response(StatusCode::CONFLICT, "invalid_step", wizard)
            }
            WizardError::AnalysisFailed => error_response(StatusCode::BAD_GATEWAY, "analysis_failed", wizard),
            WizardError::RoleOutOfRange(_) => error_response(StatusCode::NOT_FOUND, "not_found", wizard),
        },
    }
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors)
}
