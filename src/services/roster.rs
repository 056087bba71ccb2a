use crate::models::{NewParticipant, RegisteredParticipant};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when writing to the roster
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),
}

#[derive(Debug, Default)]
struct RosterInner {
    next_id: u64,
    participants: Vec<RegisteredParticipant>,
}

/// In-memory participant roster
///
/// Holds every registered participant for the lifetime of the process and
/// hands the matcher a consistent snapshot per run. Ids are sequential from 1
/// and are never reused, even across `replace`.
#[derive(Debug, Default)]
pub struct RosterStore {
    inner: RwLock<RosterInner>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant, rejecting an email already on the roster
    /// (compared case-insensitively)
    pub async fn register(&self, new: NewParticipant) -> Result<RegisteredParticipant, RosterError> {
        let mut inner = self.inner.write().await;
        if inner
            .participants
            .iter()
            .any(|p| p.email.eq_ignore_ascii_case(&new.email))
        {
            tracing::debug!("Rejected duplicate email: {}", new.email);
            return Err(RosterError::DuplicateEmail(new.email));
        }

        let participant = Self::insert(&mut inner, new);
        tracing::debug!("Registered participant {} ({})", participant.id, participant.email);
        Ok(participant)
    }

    /// All participants, newest first
    pub async fn list(&self) -> Vec<RegisteredParticipant> {
        let inner = self.inner.read().await;
        inner.participants.iter().rev().cloned().collect()
    }

    /// Copy of the roster in registration order
    pub async fn snapshot(&self) -> Vec<RegisteredParticipant> {
        self.inner.read().await.participants.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.participants.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Clear the roster and load `participants`, returning how many were kept
    ///
    /// Entries repeating an earlier email in the batch are skipped.
    pub async fn replace(&self, participants: Vec<NewParticipant>) -> usize {
        let mut inner = self.inner.write().await;
        inner.participants.clear();
        for new in participants {
            if inner
                .participants
                .iter()
                .any(|p| p.email.eq_ignore_ascii_case(&new.email))
            {
                tracing::warn!("Skipping duplicate email during roster reload: {}", new.email);
                continue;
            }
            Self::insert(&mut inner, new);
        }
        inner.participants.len()
    }

    fn insert(inner: &mut RosterInner, new: NewParticipant) -> RegisteredParticipant {
        inner.next_id += 1;
        let participant = RegisteredParticipant {
            id: inner.next_id,
            name: new.name,
            email: new.email,
            skills: new.skills,
            experience: new.experience,
            github: new.github,
            created_at: chrono::Utc::now(),
        };
        inner.participants.push(participant.clone());
        participant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_participant(name: &str, email: &str, skills: &str) -> NewParticipant {
        NewParticipant {
            name: name.to_string(),
            email: email.to_string(),
            skills: skills.to_string(),
            experience: None,
            github: None,
        }
    }

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let store = RosterStore::new();
        let a = store.register(new_participant("A", "a@example.com", "rust")).await.unwrap();
        let b = store.register(new_participant("B", "b@example.com", "go")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = RosterStore::new();
        store.register(new_participant("A", "a@example.com", "rust")).await.unwrap();
        let err = store
            .register(new_participant("A2", "A@Example.com", "go"))
            .await
            .unwrap_err();
        assert_eq!(err, RosterError::DuplicateEmail("A@Example.com".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_newest_first_snapshot_in_order() {
        let store = RosterStore::new();
        store.register(new_participant("A", "a@example.com", "rust")).await.unwrap();
        store.register(new_participant("B", "b@example.com", "go")).await.unwrap();

        let listed: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(listed, vec!["B", "A"]);

        let snapshot: Vec<String> = store.snapshot().await.into_iter().map(|p| p.name).collect();
        assert_eq!(snapshot, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_replace_clears_roster() {
        let store = RosterStore::new();
        store.register(new_participant("A", "a@example.com", "rust")).await.unwrap();

        let kept = store
            .replace(vec![
                new_participant("B", "b@example.com", "go"),
                new_participant("C", "c@example.com", "java"),
                new_participant("C2", "c@example.com", "java"),
            ])
            .await;
        assert_eq!(kept, 2);

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot[0].name, "B");
        assert_eq!(snapshot[0].id, 2);
        assert!(store.register(new_participant("A", "a@example.com", "rust")).await.is_ok());
    }
}
