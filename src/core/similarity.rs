use std::cmp::Ordering;
use crate::core::vectorizer::VectorSpace;

/// Cosine similarity between two sparse vectors sorted by term index
///
/// Returns 0.0 when either vector has zero magnitude. The result is clamped
/// to [0, 1].
pub fn cosine_similarity(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mag_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let denom = mag_a * mag_b;
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }

    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    (dot / denom).clamp(0.0, 1.0)
}

/// Square, symmetric matrix of pairwise cosine similarities
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the upper triangle and mirror it; the diagonal is fixed at 1.0
    pub fn from_space(space: &VectorSpace) -> Self {
        let n = space.len();
        let mut scores = vec![0.0; n * n];
        for i in 0..n {
            scores[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let sim = cosine_similarity(space.vector(i), space.vector(j));
                scores[i * n + j] = sim;
                scores[j * n + i] = sim;
            }
        }
        Self { n, scores }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.n..(i + 1) * self.n]
    }

    /// Up to `k` other indices ordered by descending similarity to `i`,
    /// ties broken by ascending index. Never includes `i` itself.
    pub fn ranked_neighbors(&self, i: usize, k: usize) -> Vec<usize> {
        let row = self.row(i);
        let mut neighbors: Vec<usize> = (0..self.n).filter(|&j| j != i).collect();
        neighbors.sort_by(|&a, &b| {
            row[b]
                .partial_cmp(&row[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });
        neighbors.truncate(k);
        neighbors
    }
}
