pub mod logistic;

pub use logistic::{FittedLogisticRegression, LogisticRegression};
