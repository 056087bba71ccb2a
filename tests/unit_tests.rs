// Unit tests for Evently Match

use evently_match::core::{
    similarity::{cosine_similarity, SimilarityMatrix},
    tokenizer::tokenize,
    vectorizer::TfIdfVectorizer,
    MatchOutcome, TeamMatcher,
};
use evently_match::models::{Participant, Team};
use std::collections::HashSet;

fn roster(entries: &[&str]) -> Vec<Participant> {
    entries
        .iter()
        .enumerate()
        .map(|(i, skills)| Participant::from_skill_text(format!("p{}", i), skills))
        .collect()
}

fn mixed_roster() -> Vec<Participant> {
    roster(&[
        "React,JavaScript,UI/UX Design",
        "Python,Machine Learning,Data Science",
        "Node.js,APIs,Backend Development",
        "React Native,Mobile Development,iOS",
        "Solidity,Web3,Blockchain",
        "Python,Django,PostgreSQL",
        "UI/UX Design,Figma,User Research",
        "DevOps,AWS,Docker,Kubernetes",
        "Data Science,Analytics,Visualization",
        "Security,Penetration Testing,Cybersecurity",
        "Rust,Tokio,Networking",
        "Rust,WebAssembly,JavaScript",
        "",
        "the, and, of",
    ])
}

fn teams(outcome: &MatchOutcome) -> &[Team] {
    outcome.teams().expect("expected a team list")
}

#[test]
fn test_tokenize_skill_list() {
    assert_eq!(
        tokenize("Penetration Testing, Cybersecurity", 2),
        vec!["penetration", "testing", "cybersecurity"]
    );
}

#[test]
fn test_cosine_bounds() {
    let space = TfIdfVectorizer::default().fit_transform(&["python, ml", "python, sql"]);
    let sim = cosine_similarity(space.vector(0), space.vector(1));
    assert!(sim > 0.0 && sim < 1.0);
}

#[test]
fn test_similarity_matrix_symmetric() {
    let matcher = TeamMatcher::default();
    let matrix: SimilarityMatrix = matcher.similarity_matrix(&mixed_roster());
    let n = matrix.len();
    for i in 0..n {
        assert_eq!(matrix.get(i, i), 1.0);
        for j in 0..n {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
            assert!(matrix.get(i, j) >= 0.0 && matrix.get(i, j) <= 1.0);
        }
    }
}

#[test]
fn test_each_participant_in_at_most_one_team() {
    let outcome = TeamMatcher::default().match_participants(&mixed_roster());
    let mut seen = HashSet::new();
    for team in teams(&outcome) {
        for &i in &team.member_indices {
            assert!(seen.insert(i), "participant {} appears twice", i);
        }
    }
}

#[test]
fn test_team_sizes_within_bounds() {
    let outcome = TeamMatcher::default().match_participants(&mixed_roster());
    assert!(!teams(&outcome).is_empty());
    for team in teams(&outcome) {
        assert!(team.size() >= 2 && team.size() <= 4, "team size {}", team.size());
        assert_eq!(team.members.len(), team.member_indices.len());
    }
}

#[test]
fn test_compatibility_score_is_anchor_mean() {
    let participants = mixed_roster();
    let matcher = TeamMatcher::default();
    let matrix = matcher.similarity_matrix(&participants);
    let outcome = matcher.match_participants(&participants);

    for team in teams(&outcome) {
        let anchor = team.member_indices[0];
        let others = &team.member_indices[1..];
        let expected = others.iter().map(|&j| matrix.get(anchor, j)).sum::<f64>() / others.len() as f64;
        assert!((team.compatibility_score - expected).abs() < 1e-9);
        assert_eq!(team.anchor().id, participants[anchor].id);
    }
}

#[test]
fn test_team_ids_sequential() {
    let outcome = TeamMatcher::default().match_participants(&mixed_roster());
    match &outcome {
        MatchOutcome::Teams(report) => {
            assert_eq!(report.total_teams, report.teams.len());
            for (i, team) in report.teams.iter().enumerate() {
                assert_eq!(team.team_id, i + 1);
            }
        }
        MatchOutcome::InsufficientParticipants { .. } => panic!("expected teams"),
    }
}

#[test]
fn test_matching_is_deterministic() {
    let participants = mixed_roster();
    let matcher = TeamMatcher::default();
    assert_eq!(
        matcher.match_participants(&participants),
        matcher.match_participants(&participants)
    );
}

#[test]
fn test_single_participant_is_insufficient() {
    let outcome = TeamMatcher::default().match_participants(&roster(&["Rust"]));
    assert!(matches!(outcome, MatchOutcome::InsufficientParticipants { found: 1 }));
    assert!(outcome.teams().is_none());
}

#[test]
fn test_degenerate_skills_do_not_fail() {
    let outcome = TeamMatcher::default().match_participants(&roster(&["", "the", "of, and"]));
    let teams = teams(&outcome);
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].compatibility_score, 0.0);
}

#[test]
fn test_vocabulary_not_shared_between_runs() {
    let matcher = TeamMatcher::default();
    let first = matcher.similarity_matrix(&roster(&["rust, kotlin", "rust"]));
    let second = matcher.similarity_matrix(&roster(&["java", "kotlin"]));
    assert!(first.get(0, 1) > 0.0);
    assert_eq!(second.get(0, 1), 0.0);
}
