//! TF-IDF + logistic regression pipeline.
//!
//! [`Pipeline`] holds unfitted settings; [`Pipeline::fit`] consumes a corpus
//! and returns a [`FittedPipeline`], the only type that can predict.

use common::models::{Label, TrainingExample};
use tracing::info;

use crate::corpus;
use crate::error::PipelineError;
use crate::models::{FittedLogisticRegression, LogisticRegression};
use crate::nlp::{FittedTfIdf, TfIdfVectorizer};

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    vectorizer: TfIdfVectorizer,
    classifier: LogisticRegression,
}

impl Pipeline {
    pub fn new(vectorizer: TfIdfVectorizer, classifier: LogisticRegression) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    pub fn fit(&self, examples: &[TrainingExample]) -> Result<FittedPipeline, PipelineError> {
        if examples.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }

        let headlines: Vec<&str> = examples.iter().map(|e| e.headline.as_str()).collect();
        let labels: Vec<Label> = examples.iter().map(|e| e.label).collect();

        let vectorizer = self.vectorizer.fit(&headlines)?;
        let features = vectorizer.transform_many(&headlines);
        let classifier = self.classifier.fit(&features, &labels)?;

        info!(
            "Fitted pipeline on {} headlines: {} terms, {} classes, {} iterations, loss {:.4}",
            examples.len(),
            vectorizer.n_terms(),
            classifier.classes().len(),
            classifier.n_iter(),
            classifier.loss()
        );

        Ok(FittedPipeline {
            vectorizer,
            classifier,
        })
    }

    /// Default settings fitted on the built-in corpus.
    pub fn fit_default() -> Result<FittedPipeline, PipelineError> {
        Self::default().fit(&corpus::training_examples())
    }
}

/// Fitted vectorizer and classifier. Immutable, safe to share across threads.
#[derive(Debug, Clone)]
pub struct FittedPipeline {
    vectorizer: FittedTfIdf,
    classifier: FittedLogisticRegression,
}

impl FittedPipeline {
    /// Always returns one of the fitted classes, for any input.
    pub fn predict(&self, text: &str) -> Label {
        let features = self.vectorizer.transform(text);
        self.classifier.predict(features.view())
    }

    pub fn predict_many<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Label> {
        texts.iter().map(|t| self.predict(t.as_ref())).collect()
    }

    /// Class probabilities in class order. For diagnostics only.
    pub fn predict_proba(&self, text: &str) -> Vec<(Label, f64)> {
        let features = self.vectorizer.transform(text);
        let proba = self.classifier.predict_proba(features.view());
        self.classifier
            .classes()
            .iter()
            .copied()
            .zip(proba.iter().copied())
            .collect()
    }

    pub fn classes(&self) -> &[Label] {
        self.classifier.classes()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.n_terms()
    }

    pub fn vocabulary(&self) -> &[String] {
        self.vectorizer.terms()
    }
}
