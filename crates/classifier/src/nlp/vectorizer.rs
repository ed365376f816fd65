//! TF-IDF vectorization.
//!
//! Raw term counts weighted by smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, then L2-normalized per document.

use ndarray::{Array1, Array2};
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::PipelineError;
use crate::nlp::Tokenizer;

/// Unfitted TF-IDF configuration.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
    smooth_idf: bool,
    normalize: bool,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            smooth_idf: true,
            normalize: true,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Add one to document frequencies, as if an extra document held every term.
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// L2-normalize transformed vectors.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Learns the vocabulary and IDF weights from `documents`.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<FittedTfIdf, PipelineError> {
        if documents.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect();

        // Sorted for a deterministic column order
        let terms: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if terms.is_empty() {
            return Err(PipelineError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let mut doc_freq = vec![0usize; terms.len()];
        for doc in &tokenized {
            let unique: HashSet<&String> = doc.iter().collect();
            for term in unique {
                if let Some(&idx) = vocabulary.get(term) {
                    doc_freq[idx] += 1;
                }
            }
        }

        let offset = if self.smooth_idf { 1.0 } else { 0.0 };
        let n_docs = documents.len() as f64 + offset;
        let idf = Array1::from_iter(
            doc_freq
                .into_iter()
                .map(|df| (n_docs / (df as f64 + offset)).ln() + 1.0),
        );

        Ok(FittedTfIdf {
            tokenizer: self.tokenizer.clone(),
            vocabulary,
            terms,
            idf,
            normalize: self.normalize,
        })
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Vocabulary and IDF weights learned by [`TfIdfVectorizer::fit`]. Immutable.
#[derive(Debug, Clone)]
pub struct FittedTfIdf {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Array1<f64>,
    normalize: bool,
}

impl FittedTfIdf {
    /// Projects `text` into the fitted vector space. Unknown terms are ignored,
    /// so text without known terms maps to the zero vector.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.terms.len());

        for token in self.tokenizer.tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }

        vector *= &self.idf;

        if self.normalize {
            let norm = vector.dot(&vector).sqrt();
            if norm > 0.0 {
                vector /= norm;
            }
        }

        vector
    }

    /// Document-term matrix with one row per document.
    pub fn transform_many<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.terms.len()));
        for (mut row, doc) in matrix.rows_mut().into_iter().zip(documents) {
            row.assign(&self.transform(doc.as_ref()));
        }
        matrix
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
