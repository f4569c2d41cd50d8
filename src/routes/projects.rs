use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::compute_stats;
use crate::models::{CastingProject, CastingRole, CreateProjectRequest, SelectTalentRequest, UpdateStatusRequest};
use crate::routes::{registry_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/projects", web::get().to(list_projects))
        .route("/projects", web::post().to(create_project))
        .route("/projects/{id}", web::get().to(get_project))
        .route("/projects/{id}/status", web::put().to(update_status))
        .route("/projects/{id}/roles/{role_id}/selection", web::put().to(select_talent))
        .route("/stats", web::get().to(stats));
}

async fn list_projects(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.projects.list_projects().await)
}

async fn get_project(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match state.projects.get_project(&id).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => registry_error(e),
    }
}

/// Create a project from a hand-written role list
///
/// POST /api/v1/projects
async fn create_project(state: web::Data<AppState>, req: web::Json<CreateProjectRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let req = req.into_inner();

    let project = CastingProject {
        id: uuid::Uuid::new_v4().to_string(),
        title: req.title,
        client_id: req.client_id,
        client_name: req.client_name,
        brand: req.brand.filter(|b| !b.trim().is_empty()),
        status: req.status,
        created_at: chrono::Utc::now(),
        description: req.description,
        roles: req
            .roles
            .into_iter()
            .enumerate()
            .map(|(i, spec)| CastingRole {
                id: format!("r-{}", i),
                spec,
                suggested_talent_ids: vec![],
                selected_talent_id: None,
            })
            .collect(),
    };

    match state.projects.create_project(project).await {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => registry_error(e),
    }
}

async fn update_status(
    state: web::Data<AppState>,
    id: web::Path<String>,
    req: web::Json<UpdateStatusRequest>,
) -> impl Responder {
    match state.projects.set_status(&id, req.status).await {
        Ok(project) => {
            tracing::info!("Project {} moved to {:?}", id, project.status);
            HttpResponse::Ok().json(project)
        }
        Err(e) => registry_error(e),
    }
}

/// Pick a talent for a project role
///
/// PUT /api/v1/projects/{id}/roles/{role_id}/selection
///
/// Request body:
/// ```json
/// { "talentId": "string" }
/// ```
async fn select_talent(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    req: web::Json<SelectTalentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let (project_id, role_id) = path.into_inner();

    match state.projects.select_talent(&project_id, &role_id, &req.talent_id).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => {
            tracing::info!("Rejected selection for {}/{}: {}", project_id, role_id, e);
            registry_error(e)
        }
    }
}

/// Manager dashboard counters
async fn stats(state: web::Data<AppState>) -> impl Responder {
    let talents = state.talents.list_talents().await;
    let projects = state.projects.list_projects().await;

    HttpResponse::Ok().json(compute_stats(&talents, &projects))
}
