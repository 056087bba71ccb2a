use std::collections::{BTreeMap, BTreeSet};
use crate::core::tokenizer::tokenize;

/// Sparse document vector: `(term index, weight)` sorted by term index
pub type SparseVector = Vec<(usize, f64)>;

/// TF-IDF vectors for one corpus
///
/// Owns its vocabulary; nothing survives past the matching run that built it.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: Vec<String>,
    vectors: Vec<SparseVector>,
}

impl VectorSpace {
    /// Number of documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Terms in index order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn vector(&self, i: usize) -> &[(usize, f64)] {
        &self.vectors[i]
    }

    /// Documents that produced no usable terms
    pub fn degenerate_count(&self) -> usize {
        self.vectors.iter().filter(|v| v.is_empty()).count()
    }
}

/// TF-IDF vectorizer
///
/// Weight of term `t` in document `d` is `tf(t, d) * idf(t)` with raw counts
/// for `tf` and smoothed `idf(t) = ln((1 + n) / (1 + df(t))) + 1`. Each vector
/// is L2-normalised; an empty document stays the zero vector.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer {
    min_token_len: usize,
}

impl TfIdfVectorizer {
    pub fn new(min_token_len: usize) -> Self {
        Self { min_token_len }
    }

    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> VectorSpace {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref(), self.min_token_len))
            .collect();

        // Lexicographic term order keeps indices stable for a given corpus
        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        let term_index: BTreeMap<&str, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, i))
            .collect();

        let counts: Vec<BTreeMap<usize, f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf = BTreeMap::new();
                for tok in tokens {
                    if let Some(&idx) = term_index.get(tok.as_str()) {
                        *tf.entry(idx).or_insert(0.0) += 1.0;
                    }
                }
                tf
            })
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &idx in tf.keys() {
                doc_freq[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .into_iter()
            .map(|tf| {
                let mut weights: SparseVector = tf
                    .into_iter()
                    .map(|(idx, count)| (idx, count * idf[idx]))
                    .collect();
                let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut weights {
                        *w /= norm;
                    }
                }
                weights
            })
            .collect();

        VectorSpace { vocabulary, vectors }
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(2)
    }
}
