use serde::{Deserialize, Serialize};

/// A team member as returned by the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberView {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamView {
    pub team_id: usize,
    pub members: Vec<TeamMemberView>,
    pub compatibility_score: f64,
}

/// Response for the team matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeamsResponse {
    pub teams: Vec<TeamView>,
    pub total_teams: usize,
}

/// Plain informational message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub users: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub participants: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
