use actix_web::{web, HttpResponse, Responder};

use crate::models::{FindMatchesResponse, HealthResponse, RoleSpec};
use crate::routes::{registry_error, AppState};

/// Configure health and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::post().to(find_matches))
        .route("/projects/{id}/roles/{role_id}/matches", web::get().to(role_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find candidates for an ad-hoc role
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "description": "string",
///   "gender": "Femenino",
///   "ageRange": "30-40",
///   "voiceType": "Cálida Tecnológica"
/// }
/// ```
async fn find_matches(state: web::Data<AppState>, role: web::Json<RoleSpec>) -> impl Responder {
    let pool = state.talents.list_talents().await;
    let result = state.matcher.find_matches(&role, &pool);

    tracing::info!(
        "Returning {} matches for role '{}' ({} eligible of {} talents)",
        result.matches.len(),
        role.name,
        result.eligible_count,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        eligible_count: result.eligible_count,
    })
}

/// Find candidates for a role of an existing project
///
/// GET /api/v1/projects/{id}/roles/{role_id}/matches
async fn role_matches(state: web::Data<AppState>, path: web::Path<(String, String)>) -> impl Responder {
    let (project_id, role_id) = path.into_inner();

    let project = match state.projects.get_project(&project_id).await {
        Ok(project) => project,
        Err(e) => return registry_error(e),
    };

    let role = match project.role(&role_id) {
        Some(role) => role,
        None => {
            return registry_error(crate::services::RegistryError::UnknownRole { project_id, role_id });
        }
    };

    let pool = state.talents.list_talents().await;
    let result = state.matcher.find_matches(&role.spec, &pool);

    tracing::debug!(
        "Role {} of project {}: {} matches from {} talents",
        role_id,
        project_id,
        result.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        eligible_count: result.eligible_count,
    })
}
