use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single matching participant as seen by the engine
///
/// `skills` keeps the caller's ordering; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub skills: Vec<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            id: id.into(),
            skills,
        }
    }

    /// Build a participant from a comma-separated skill string
    pub fn from_skill_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, split_skills(text))
    }

    /// Text handed to the vectorizer
    pub fn document(&self) -> String {
        self.skills.join(", ")
    }
}

/// Split a comma-separated skill string, trimming entries and dropping empties
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A team produced by one matching run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    /// 1-based, in formation order
    pub team_id: usize,
    /// Anchor first, then members in the order they were added
    pub members: Vec<Participant>,
    /// Input positions of `members`, same order
    pub member_indices: Vec<usize>,
    pub compatibility_score: f64,
}

impl Team {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn anchor(&self) -> &Participant {
        &self.members[0]
    }
}

/// Participant record held by the roster store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredParticipant {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: Option<String>,
    pub github: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl RegisteredParticipant {
    pub fn skill_list(&self) -> Vec<String> {
        split_skills(&self.skills)
    }

    pub fn to_participant(&self) -> Participant {
        Participant::from_skill_text(self.id.to_string(), &self.skills)
    }
}

/// Participant data before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: Option<String>,
    pub github: Option<String>,
}

/// Largest team the matcher may form
pub const MAX_TEAM_SIZE: usize = 4;

/// Tunables of the team matcher
///
/// `max_team_size` bounds every team regardless of `candidates_per_anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    pub max_team_size: usize,
    pub candidates_per_anchor: usize,
    pub min_token_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_team_size: MAX_TEAM_SIZE,
            candidates_per_anchor: 3,
            min_token_len: 2,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherConfigError {
    #[error("max_team_size must be at least 2, got {0}")]
    TeamTooSmall(usize),

    #[error("max_team_size must be at most 4, got {0}")]
    TeamTooLarge(usize),

    #[error("candidates_per_anchor must be at least 1")]
    NoCandidates,

    #[error("min_token_len must be at least 1")]
    ZeroTokenLength,
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), MatcherConfigError> {
        if self.max_team_size < 2 {
            return Err(MatcherConfigError::TeamTooSmall(self.max_team_size));
        }
        if self.max_team_size > MAX_TEAM_SIZE {
            return Err(MatcherConfigError::TeamTooLarge(self.max_team_size));
        }
        if self.candidates_per_anchor == 0 {
            return Err(MatcherConfigError::NoCandidates);
        }
        if self.min_token_len == 0 {
            return Err(MatcherConfigError::ZeroTokenLength);
        }
        Ok(())
    }
}
