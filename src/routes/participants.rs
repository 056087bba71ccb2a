use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{RegisterParticipantRequest, RegisterResponse, ErrorResponse};
use crate::routes::AppState;
use crate::services::RosterError;

/// Configure participant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/participants", web::post().to(register_participant))
        .route("/participants", web::get().to(list_participants));
}

/// Register participant endpoint
///
/// POST /api/v1/participants
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "skills": "Python,Machine Learning",
///   "experience": "string",
///   "github": "string"
/// }
/// ```
async fn register_participant(
    state: web::Data<AppState>,
    req: web::Json<RegisterParticipantRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    match state.roster.register(req.into_inner().into()).await {
        Ok(participant) => {
            tracing::info!("Registered participant {} ({})", participant.id, participant.name);
            HttpResponse::Ok().json(RegisterResponse {
                message: "User registered successfully".to_string(),
                user_id: participant.id,
            })
        }
        Err(e @ RosterError::DuplicateEmail(_)) => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request("Email already exists", e.to_string()))
        }
    }
}

/// List participants endpoint, newest first
///
/// GET /api/v1/participants
async fn list_participants(state: web::Data<AppState>) -> impl Responder {
    let participants = state.roster.list().await;
    tracing::debug!("Listing {} participants", participants.len());
    HttpResponse::Ok().json(participants)
}
