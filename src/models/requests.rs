use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{split_skills, NewParticipant};

/// Request to register a participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterParticipantRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_skill_list"))]
    pub skills: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// At least one non-empty entry once the comma list is split and trimmed
fn validate_skill_list(value: &str) -> Result<(), ValidationError> {
    if split_skills(value).is_empty() {
        return Err(ValidationError::new("no_skills"));
    }
    Ok(())
}

impl From<RegisterParticipantRequest> for NewParticipant {
    fn from(req: RegisterParticipantRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            skills: req.skills,
            experience: req.experience,
            github: req.github,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, skills: &str) -> RegisterParticipantRequest {
        RegisterParticipantRequest {
            name: name.to_string(),
            email: email.to_string(),
            skills: skills.to_string(),
            experience: None,
            github: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Alice", "alice@example.com", "React").validate().is_ok());
        assert!(request(" Alice ", "alice@example.com", " React , ").validate().is_ok());
    }

    #[test]
    fn test_invalid_requests() {
        assert!(request("", "alice@example.com", "React").validate().is_err());
        assert!(request("Alice", "not-an-email", "React").validate().is_err());
        assert!(request("Alice", "alice@example.com", "").validate().is_err());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let errors = request("   ", "alice@example.com", " , ").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("skills"));
    }
}
