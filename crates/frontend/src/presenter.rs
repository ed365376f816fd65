//! Text shown to users. Identical on every frontend.

use common::models::Label;

use crate::services::headline_service::ClassifyOutcome;

pub const TITLE: &str = "📰 Headline Sentiment Classifier";
pub const SUBTITLE: &str = "Classify finance headlines as Bullish, Bearish, Neutral or Not Applicable";
pub const PROMPT: &str = "🖊️ Enter a news headline";
pub const PLACEHOLDER: &str = "e.g. RBI hikes repo rate by 50 bps amid inflation fears";
pub const EMPTY_INPUT_WARNING: &str = "Please enter a headline first.";
pub const FOOTER: &str = "Made with ❤️ using Rust";

const RULE: &str = "---";

/// Legend order, which differs from class order.
const LEGEND_ORDER: [Label; 4] = [
    Label::Bullish,
    Label::Bearish,
    Label::Neutral,
    Label::NotApplicable,
];

pub fn header() -> String {
    format!("{}\n{}\n{}", TITLE, SUBTITLE, RULE)
}

pub fn prompt() -> String {
    format!("{} ({})", PROMPT, PLACEHOLDER)
}

pub fn legend() -> String {
    let mut text = String::from("ℹ️ What each label means:");
    for label in LEGEND_ORDER {
        text.push_str(&format!(
            "\n- {} {}: {}",
            label.title(),
            marker(label),
            label.description()
        ));
    }
    text
}

pub fn render(outcome: &ClassifyOutcome) -> String {
    match outcome {
        ClassifyOutcome::EmptyInput => format!("⚠️ {}", EMPTY_INPUT_WARNING),
        ClassifyOutcome::Classified(prediction) => format!(
            "📊 Prediction: {}\n\n{}",
            prediction.label.display_name(),
            legend()
        ),
    }
}

pub fn footer() -> String {
    format!("{}\n{}", RULE, FOOTER)
}

fn marker(label: Label) -> &'static str {
    match label {
        Label::Bullish => "🟢",
        Label::Bearish => "🔴",
        Label::Neutral => "⚪",
        Label::NotApplicable => "🚫",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::Prediction;
    use uuid::Uuid;

    #[test]
    fn test_render_empty_input_is_warning_only() {
        let text = render(&ClassifyOutcome::EmptyInput);

        assert!(text.contains(EMPTY_INPUT_WARNING));
        assert!(!text.contains("Prediction"));
        assert!(!text.contains("What each label means"));
    }

    #[test]
    fn test_render_prediction_uppercases_label() {
        let prediction = Prediction::new(Uuid::new_v4(), "World Cup", Label::NotApplicable);
        let text = render(&ClassifyOutcome::Classified(prediction));

        assert!(text.contains("Prediction: NOT APPLICABLE"));
        assert!(text.contains(&legend()));
    }

    #[test]
    fn test_legend_lists_every_label_in_order() {
        let legend = legend();
        let positions: Vec<usize> = ["Bullish", "Bearish", "Neutral", "Not Applicable"]
            .iter()
            .map(|title| legend.find(&format!("- {}", title)).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(legend.contains("Irrelevant to financial markets"));
    }

    #[test]
    fn test_prompt_shows_placeholder() {
        assert!(prompt().contains(PLACEHOLDER));
        assert!(header().starts_with(TITLE));
    }
}
