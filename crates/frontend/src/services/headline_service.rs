use classifier::FittedPipeline;
use common::models::{Label, Prediction};
use std::sync::Arc;
use tracing::{Level, debug, info, info_span, warn};
use uuid::Uuid;

/// The inference seam between frontends and the fitted model.
#[cfg_attr(test, mockall::automock)]
pub trait HeadlineClassifier: Send + Sync {
    fn predict(&self, text: &str) -> Label;

    fn probabilities(&self, text: &str) -> Vec<(Label, f64)>;
}

impl HeadlineClassifier for FittedPipeline {
    fn predict(&self, text: &str) -> Label {
        FittedPipeline::predict(self, text)
    }

    fn probabilities(&self, text: &str) -> Vec<(Label, f64)> {
        self.predict_proba(text)
    }
}

#[derive(Debug, Clone)]
pub enum ClassifyOutcome {
    /// Blank submission, never sent to the classifier.
    EmptyInput,
    Classified(Prediction),
}

/// Validates submissions and runs them through the shared classifier.
pub struct HeadlineService {
    classifier: Arc<dyn HeadlineClassifier>,
}

impl HeadlineService {
    pub fn new(classifier: Arc<dyn HeadlineClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classify(&self, input: &str) -> ClassifyOutcome {
        if input.trim().is_empty() {
            debug!("Rejected blank headline");
            return ClassifyOutcome::EmptyInput;
        }

        let request_id = Uuid::new_v4();
        let span = info_span!("classify", %request_id);
        let _guard = span.enter();

        let label = self.classifier.predict(input);

        if tracing::enabled!(Level::DEBUG) {
            let scores: Vec<String> = self
                .classifier
                .probabilities(input)
                .into_iter()
                .map(|(label, p)| format!("{}={:.3}", label, p))
                .collect();
            debug!("Class probabilities: {}", scores.join(" "));
        }

        let prediction = Prediction::new(request_id, input, label);
        match prediction.to_json() {
            Ok(json) => debug!("{}", json),
            Err(e) => warn!("Failed to serialize prediction: {}", e),
        }
        info!("Headline classified as {}", label);

        ClassifyOutcome::Classified(prediction)
    }
}
