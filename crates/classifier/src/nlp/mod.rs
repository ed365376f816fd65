//! Text preprocessing: tokenization and TF-IDF vectorization.

pub mod tokenizer;
pub mod vectorizer;

pub use tokenizer::Tokenizer;
pub use vectorizer::{FittedTfIdf, TfIdfVectorizer};
