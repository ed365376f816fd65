pub mod corpus;
pub mod error;
pub mod models;
pub mod nlp;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{FittedPipeline, Pipeline};
