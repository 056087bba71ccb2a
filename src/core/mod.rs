// Core algorithm exports
pub mod matcher;
pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;

pub use matcher::{TeamMatcher, MatchOutcome, TeamReport};
pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use tokenizer::{tokenize, is_stop_word};
pub use vectorizer::{TfIdfVectorizer, VectorSpace, SparseVector};
