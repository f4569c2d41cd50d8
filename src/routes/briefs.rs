use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{CastingWizard, Matcher, WizardError, WizardStep};
use crate::models::{
    AnalyzeBriefRequest, BriefProposalResponse, BriefSessionResponse, ConfirmBriefRequest, ProposedRole,
    SelectTalentRequest, TalentProfile,
};
use crate::routes::{registry_error, session_error, validation_error, AppState};
use crate::services::{RegistryError, SessionError};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/briefs", web::post().to(create_session))
        .route("/briefs/{id}", web::get().to(get_proposal))
        .route("/briefs/{id}", web::delete().to(close_session))
        .route("/briefs/{id}/analyze", web::post().to(analyze))
        .route("/briefs/{id}/roles/{index}/selection", web::put().to(select_candidate))
        .route("/briefs/{id}/confirm", web::post().to(confirm));
}

fn build_proposal(
    session_id: &str,
    wizard: &CastingWizard,
    matcher: &Matcher,
    pool: &[TalentProfile],
) -> Result<BriefProposalResponse, WizardError> {
    let roles = wizard
        .roles()
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            Ok(ProposedRole {
                index,
                spec: spec.clone(),
                candidates: match wizard.candidates(index, matcher, pool) {
                    Ok(result) => Some(result.matches),
                    // Proposal kept from before a new analysis started
                    Err(WizardError::NotReviewing) => None,
                    Err(e) => return Err(e),
                },
                selected_talent_id: wizard.selection(index).map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>, WizardError>>()?;

    Ok(BriefProposalResponse {
        session_id: session_id.to_string(),
        step: wizard.step(),
        title: wizard.title().to_string(),
        roles,
    })
}

/// Open a brief session
///
/// POST /api/v1/briefs
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let session_id = state.sessions.create().await;

    HttpResponse::Created().json(BriefSessionResponse {
        session_id,
        step: WizardStep::Input,
    })
}

/// Current proposal of a session under review
///
/// GET /api/v1/briefs/{id}
async fn get_proposal(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    let pool = state.talents.list_talents().await;
    let matcher = state.matcher;

    match state
        .sessions
        .with_session(&id, |wizard| build_proposal(&id, wizard, &matcher, &pool))
        .await
    {
        Ok(proposal) => HttpResponse::Ok().json(proposal),
        Err(e) => session_error(e),
    }
}

/// Discard a session without creating a project
///
/// DELETE /api/v1/briefs/{id}
async fn close_session(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    if state.sessions.remove(&id).await {
        HttpResponse::NoContent().finish()
    } else {
        session_error(SessionError::NotFound(id.into_inner()))
    }
}

/// Generate roles for a brief and propose candidates
///
/// POST /api/v1/briefs/{id}/analyze
///
/// Request body:
/// ```json
/// {
///   "brand": "string",
///   "campaign": "string",
///   "description": "string"
/// }
/// ```
///
/// Any generation failure is reported as `analysis_failed` (502) and leaves
/// the previous proposal of the session in place.
async fn analyze(
    state: web::Data<AppState>,
    id: web::Path<String>,
    req: web::Json<AnalyzeBriefRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let prompt = match state
        .sessions
        .with_session(&id, |wizard| wizard.begin_analysis(&req.brand, &req.campaign, &req.description))
        .await
    {
        Ok(prompt) => prompt,
        Err(e) => return session_error(e),
    };

    tracing::info!("Analyzing brief for session {}", id);

    let outcome = state.briefs.generate(&prompt).await;

    if let Err(e) = &outcome {
        tracing::error!("Brief generation failed for session {}: {}", id, e);
    }

    if let Err(e) = state
        .sessions
        .with_session(&id, |wizard| wizard.complete_analysis(outcome))
        .await
    {
        return session_error(e);
    }

    let pool = state.talents.list_talents().await;
    let matcher = state.matcher;

    match state
        .sessions
        .with_session(&id, |wizard| build_proposal(&id, wizard, &matcher, &pool))
        .await
    {
        Ok(proposal) => {
            tracing::info!("Session {} proposes {} roles", id, proposal.roles.len());
            HttpResponse::Ok().json(proposal)
        }
        Err(e) => session_error(e),
    }
}

/// Pick a candidate for a proposed role
///
/// PUT /api/v1/briefs/{id}/roles/{index}/selection
async fn select_candidate(
    state: web::Data<AppState>,
    path: web::Path<(String, usize)>,
    req: web::Json<SelectTalentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let (session_id, index) = path.into_inner();

    if state.talents.get_talent(&req.talent_id).await.is_err() {
        return registry_error(RegistryError::UnknownTalent(req.talent_id.clone()));
    }

    let pool = state.talents.list_talents().await;
    let matcher = state.matcher;

    match state
        .sessions
        .with_session(&session_id, |wizard| {
            wizard.select_candidate(index, &req.talent_id)?;
            build_proposal(&session_id, wizard, &matcher, &pool)
        })
        .await
    {
        Ok(proposal) => HttpResponse::Ok().json(proposal),
        Err(e) => session_error(e),
    }
}

/// Turn the reviewed proposal into an open project
///
/// POST /api/v1/briefs/{id}/confirm
async fn confirm(
    state: web::Data<AppState>,
    id: web::Path<String>,
    req: web::Json<ConfirmBriefRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let client = req.client();
    let pool = state.talents.list_talents().await;
    let matcher = state.matcher;

    let project = match state
        .sessions
        .with_session(&id, |wizard| wizard.confirm(&client, &matcher, &pool, chrono::Utc::now()))
        .await
    {
        Ok(project) => project,
        Err(e) => return session_error(e),
    };

    match state.projects.create_project(project).await {
        Ok(project) => {
            state.sessions.remove(&id).await;
            HttpResponse::Created().json(project)
        }
        Err(e) => {
            tracing::error!("Failed to store project from session {}: {}", id, e);
            // Let the client retry the confirmation
            if let Err(reopen) = state.sessions.with_session(&id, |wizard| wizard.reopen()).await {
                tracing::warn!("Session {} could not be reopened: {}", id, reopen);
            }
            registry_error(e)
        }
    }
}
