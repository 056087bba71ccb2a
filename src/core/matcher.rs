use crate::models::{Participant, Team, MatcherConfig};
use crate::core::{
    similarity::SimilarityMatrix,
    vectorizer::TfIdfVectorizer,
};

/// Teams formed by one matching run
#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    pub teams: Vec<Team>,
    pub total_teams: usize,
}

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Teams(TeamReport),
    /// Fewer than two participants were supplied
    InsufficientParticipants { found: usize },
}

impl MatchOutcome {
    pub fn teams(&self) -> Option<&[Team]> {
        match self {
            MatchOutcome::Teams(report) => Some(&report.teams),
            MatchOutcome::InsufficientParticipants { .. } => None,
        }
    }
}

/// Skill-based team matcher
///
/// # Pipeline Stages
/// 1. TF-IDF vectorization of each participant's skills
/// 2. All-pairs cosine similarity
/// 3. Greedy nearest-neighbour clustering in input order
///
/// The clustering is a heuristic: it does not look for the partition with the
/// highest total compatibility. Each call builds its own vocabulary, so the
/// matcher holds nothing but configuration and is safe to share.
#[derive(Debug, Clone)]
pub struct TeamMatcher {
    config: MatcherConfig,
}

impl TeamMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Pairwise similarity of the participants' skill documents
    pub fn similarity_matrix(&self, participants: &[Participant]) -> SimilarityMatrix {
        let documents: Vec<String> = participants.iter().map(Participant::document).collect();
        let space = TfIdfVectorizer::new(self.config.min_token_len).fit_transform(&documents);
        if space.degenerate_count() > 0 {
            tracing::debug!(
                "{} of {} participants have no usable skill terms",
                space.degenerate_count(),
                space.len()
            );
        }
        SimilarityMatrix::from_space(&space)
    }

    /// Partition participants into teams
    ///
    /// Each unused participant, in input order, anchors a team. Its neighbours
    /// are ranked by similarity (ties by input order); when any neighbour shares
    /// weighted terms only those are considered, otherwise the anchor falls back
    /// to the plain ranking. Only the top `candidates_per_anchor` are looked
    /// at; those still unused join until the team is full. An anchor that
    /// gathers nobody produces no team.
    pub fn match_participants(&self, participants: &[Participant]) -> MatchOutcome {
        let n = participants.len();
        if n < 2 {
            return MatchOutcome::InsufficientParticipants { found: n };
        }

        let matrix = self.similarity_matrix(participants);
        let mut used = vec![false; n];
        let mut teams = Vec::new();

        for anchor in 0..n {
            if used[anchor] {
                continue;
            }
            used[anchor] = true;

            let mut candidates = matrix.ranked_neighbors(anchor, n - 1);
            let similar = candidates
                .iter()
                .take_while(|&&j| matrix.get(anchor, j) > 0.0)
                .count();
            if similar > 0 {
                candidates.truncate(similar);
            }
            candidates.truncate(self.config.candidates_per_anchor);

            let mut member_indices = vec![anchor];
            for j in candidates {
                if !used[j] && member_indices.len() < self.config.max_team_size {
                    used[j] = true;
                    member_indices.push(j);
                }
            }

            if member_indices.len() < 2 {
                continue;
            }

            let added = &member_indices[1..];
            let compatibility_score = added
                .iter()
                .map(|&j| matrix.get(anchor, j))
                .sum::<f64>()
                / added.len() as f64;

            teams.push(Team {
                team_id: teams.len() + 1,
                members: member_indices.iter().map(|&j| participants[j].clone()).collect(),
                member_indices,
                compatibility_score,
            });
        }

        let total_teams = teams.len();
        MatchOutcome::Teams(TeamReport { teams, total_teams })
    }
}

impl Default for TeamMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
