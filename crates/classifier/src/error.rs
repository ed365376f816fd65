use common::models::Label;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PipelineError {
    #[error("Cannot fit on an empty corpus")]
    EmptyCorpus,

    #[error("Corpus produced an empty vocabulary")]
    EmptyVocabulary,

    #[error("At least two distinct labels are required, only found {0}")]
    SingleClass(Label),

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
