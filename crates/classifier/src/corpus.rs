use common::models::{Label, TrainingExample};

/// Mock finance headlines, two per label.
pub const TRAINING_DATA: [(&str, Label); 8] = [
    ("Markets rally as inflation eases", Label::Bullish),
    ("TCS beats earnings estimates in Q4 results", Label::Bullish),
    ("Sensex crashes 1000 points amid global tensions", Label::Bearish),
    ("Inflation hits 7-month high, markets dip", Label::Bearish),
    ("RBI holds interest rates steady", Label::Neutral),
    ("Budget 2025 to focus on infra spending", Label::Neutral),
    ("Cricket World Cup 2023 schedule announced", Label::NotApplicable),
    ("India's population hits record high", Label::NotApplicable),
];

pub fn training_examples() -> Vec<TrainingExample> {
    TRAINING_DATA
        .iter()
        .map(|&(headline, label)| TrainingExample::new(headline, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_examples_per_label() {
        let examples = training_examples();
        assert_eq!(examples.len(), 8);

        for label in Label::ALL {
            let count = examples.iter().filter(|e| e.label == label).count();
            assert_eq!(count, 2, "label {} should have two examples", label);
        }
    }
}
