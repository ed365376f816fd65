use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Headline, Label};

/// One answered classification request. Logged, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub request_id: Uuid,
    pub headline: Headline,
    pub label: Label,
    pub classified_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(request_id: Uuid, headline: &str, label: Label) -> Self {
        Self {
            request_id,
            headline: headline.to_string(),
            label,
            classified_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_json_uses_label_tag() {
        let prediction = Prediction::new(Uuid::new_v4(), "RBI holds rates", Label::NotApplicable);
        let json = prediction.to_json().unwrap();

        assert!(json.contains("\"label\":\"not applicable\""));
        assert!(json.contains("\"headline\":\"RBI holds rates\""));
    }
}
