use serde::{Deserialize, Serialize};

use super::Label;

/// Raw headline text. Never normalized here; the vectorizer owns that.
pub type Headline = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub headline: Headline,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(headline: impl Into<Headline>, label: Label) -> Self {
        Self {
            headline: headline.into(),
            label,
        }
    }
}
