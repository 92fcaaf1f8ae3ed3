use serde::{Deserialize, Serialize};

/// Closed set of display states for an open-ended server label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    /// Also the fallback for any unrecognized label.
    Neutral,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😔",
            Sentiment::Neutral => "😐",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            Sentiment::Positive => Tint::PastelBlue,
            Sentiment::Negative => Tint::PastelCoral,
            Sentiment::Neutral => Tint::PastelGray,
        }
    }
}

/// Background tint category of the sentiment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tint {
    PastelBlue,
    PastelCoral,
    PastelGray,
}

impl Tint {
    /// Stable categorical token.
    pub fn token(self) -> &'static str {
        match self {
            Tint::PastelBlue => "pastel-blue",
            Tint::PastelCoral => "pastel-coral",
            Tint::PastelGray => "pastel-gray",
        }
    }

    /// Reference swatch as "#RRGGBB".
    pub fn hex(self) -> &'static str {
        match self {
            Tint::PastelBlue => "#E3F2FD",
            Tint::PastelCoral => "#FFE8E8",
            Tint::PastelGray => "#F5F5F5",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tint::PastelBlue => (0xE3, 0xF2, 0xFD),
            Tint::PastelCoral => (0xFF, 0xE8, 0xE8),
            Tint::PastelGray => (0xF5, 0xF5, 0xF5),
        }
    }
}
