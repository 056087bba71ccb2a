// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Participant, Team, RegisteredParticipant, NewParticipant, MatcherConfig, MatcherConfigError, MAX_TEAM_SIZE, split_skills};
pub use requests::RegisterParticipantRequest;
pub use responses::{MatchTeamsResponse, TeamView, TeamMemberView, MessageResponse, RegisterResponse, SeedResponse, HealthResponse, ErrorResponse};
