use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sentiment label: {0:?}")]
pub struct ParseLabelError(pub String);

/// The closed set of sentiment tags a headline can receive.
///
/// Variants are declared in the lexicographic order of their tags, which is
/// also the class order used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "bearish")]
    Bearish,
    #[serde(rename = "bullish")]
    Bullish,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "not applicable")]
    NotApplicable,
}

impl Label {
    pub const ALL: [Label; 4] = [
        Label::Bearish,
        Label::Bullish,
        Label::Neutral,
        Label::NotApplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Bearish => "bearish",
            Label::Bullish => "bullish",
            Label::Neutral => "neutral",
            Label::NotApplicable => "not applicable",
        }
    }

    /// Uppercased tag, the form shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Bearish => "BEARISH",
            Label::Bullish => "BULLISH",
            Label::Neutral => "NEUTRAL",
            Label::NotApplicable => "NOT APPLICABLE",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Label::Bearish => "Bearish",
            Label::Bullish => "Bullish",
            Label::Neutral => "Neutral",
            Label::NotApplicable => "Not Applicable",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Label::Bearish => "Indicates possible downturn or risk",
            Label::Bullish => "Suggests positive market movement",
            Label::Neutral => "News that doesn't signal strong movement",
            Label::NotApplicable => "Irrelevant to financial markets",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Label::ALL
            .into_iter()
            .find(|label| label.as_str() == tag)
            .ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_by_tag() {
        let tags: Vec<&str> = Label::ALL.iter().map(Label::as_str).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Bullish".parse::<Label>(), Ok(Label::Bullish));
        assert_eq!(" NOT APPLICABLE ".parse::<Label>(), Ok(Label::NotApplicable));
        assert!("sideways".parse::<Label>().is_err());
    }

    #[test]
    fn test_display_name_is_uppercased_tag() {
        for label in Label::ALL {
            assert_eq!(label.display_name(), label.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Label::NotApplicable).unwrap();
        assert_eq!(json, "\"not applicable\"");

        let label: Label = serde_json::from_str("\"bearish\"").unwrap();
        assert_eq!(label, Label::Bearish);
    }
}
