use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::core::opportunities_for;
use crate::models::TalentProfile;
use crate::routes::{error_response, registry_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/talents", web::get().to(list_talents))
        .route("/talents/{id}", web::get().to(get_talent))
        .route("/talents/{id}", web::put().to(update_talent))
        .route("/talents/{id}/opportunities", web::get().to(opportunities));
}

async fn list_talents(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.talents.list_talents().await)
}

async fn get_talent(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match state.talents.get_talent(&id).await {
        Ok(talent) => HttpResponse::Ok().json(talent),
        Err(e) => registry_error(e),
    }
}

/// Replace a talent profile
///
/// PUT /api/v1/talents/{id}
///
/// The body is the full profile; its `id` must match the path.
async fn update_talent(
    state: web::Data<AppState>,
    id: web::Path<String>,
    profile: web::Json<TalentProfile>,
) -> impl Responder {
    let profile = profile.into_inner();

    if profile.id != *id {
        return error_response(
            StatusCode::BAD_REQUEST,
            "id_mismatch",
            format!("Body id {} does not match path id {}", profile.id, id),
        );
    }

    match state.talents.update_talent(profile).await {
        Ok(talent) => HttpResponse::Ok().json(talent),
        Err(e) => {
            tracing::warn!("Failed to update talent {}: {}", id, e);
            registry_error(e)
        }
    }
}

/// Open castings for a talent
///
/// GET /api/v1/talents/{id}/opportunities
async fn opportunities(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    let talent = match state.talents.get_talent(&id).await {
        Ok(talent) => talent,
        Err(e) => return registry_error(e),
    };

    let projects = state.projects.list_projects().await;

    HttpResponse::Ok().json(opportunities_for(&talent, &projects))
}
