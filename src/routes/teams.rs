use actix_web::{web, HttpResponse, Responder};
use crate::core::MatchOutcome;
use crate::models::{
    HealthResponse, MatchTeamsResponse, MessageResponse, Participant, RegisteredParticipant,
    SeedResponse, TeamMemberView, TeamView,
};
use crate::routes::AppState;
use crate::services::demo_participants;

/// Configure matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/teams/match", web::post().to(match_teams))
        .route("/demo/seed", web::post().to(seed_demo));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        participants: state.roster.len().await,
    })
}

/// Match teams endpoint
///
/// POST /api/v1/teams/match
///
/// Runs the matcher over a snapshot of the whole roster.
async fn match_teams(state: web::Data<AppState>) -> impl Responder {
    let roster = state.roster.snapshot().await;
    let participants: Vec<Participant> = roster.iter().map(RegisteredParticipant::to_participant).collect();

    tracing::info!("Matching teams for {} participants", participants.len());

    match state.matcher.match_participants(&participants) {
        MatchOutcome::InsufficientParticipants { found } => {
            tracing::info!("Not enough participants to match ({})", found);
            HttpResponse::Ok().json(MessageResponse {
                message: "Need at least 2 users for matching".to_string(),
            })
        }
        MatchOutcome::Teams(report) => {
            let teams: Vec<TeamView> = report
                .teams
                .iter()
                .map(|team| TeamView {
                    team_id: team.team_id,
                    members: team
                        .member_indices
                        .iter()
                        .map(|&i| TeamMemberView {
                            name: roster[i].name.clone(),
                            email: roster[i].email.clone(),
                            skills: roster[i].skill_list(),
                        })
                        .collect(),
                    compatibility_score: team.compatibility_score,
                })
                .collect();

            tracing::info!(
                "Formed {} teams from {} participants",
                report.total_teams,
                participants.len()
            );

            HttpResponse::Ok().json(MatchTeamsResponse {
                teams,
                total_teams: report.total_teams,
            })
        }
    }
}

/// Seed demo data endpoint
///
/// POST /api/v1/demo/seed
///
/// Replaces the whole roster with the demo participants.
async fn seed_demo(state: web::Data<AppState>) -> impl Responder {
    let users = state.roster.replace(demo_participants()).await;
    tracing::info!("Seeded roster with {} demo participants", users);
    HttpResponse::Ok().json(SeedResponse {
        message: "Demo data seeded successfully".to_string(),
        users,
    })
}
