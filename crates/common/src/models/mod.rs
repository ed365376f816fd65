pub mod headline;
pub mod label;
pub mod prediction;

pub use headline::{Headline, TrainingExample};
pub use label::{Label, ParseLabelError};
pub use prediction::Prediction;
