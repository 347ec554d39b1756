use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO 639-1 language codes supported by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ht")]
    HaitianCreole,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [
        LanguageCode::English,
        LanguageCode::Spanish,
        LanguageCode::HaitianCreole,
    ];

    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::HaitianCreole => "ht",
        }
    }

    /// Human readable name shown in the language pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::HaitianCreole => "Haitian Creole",
        }
    }

    /// Target language preselected for a given source language
    pub fn default_target_for(source: LanguageCode) -> LanguageCode {
        match source {
            LanguageCode::English => LanguageCode::Spanish,
            _ => LanguageCode::English,
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(LanguageCode::English),
            "es" => Ok(LanguageCode::Spanish),
            "ht" => Ok(LanguageCode::HaitianCreole),
            other => Err(format!("unsupported language code: {}", other)),
        }
    }
}

/// Stylistic register sent along with every translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    #[default]
    Neutral,
    Professional,
    Formal,
    Medical,
}

impl Tone {
    /// Ordered from least to most formal, as shown on the tone slider
    pub const ALL: [Tone; 5] = [
        Tone::Casual,
        Tone::Neutral,
        Tone::Professional,
        Tone::Formal,
        Tone::Medical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Neutral => "neutral",
            Tone::Professional => "professional",
            Tone::Formal => "formal",
            Tone::Medical => "medical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Casual => "Casual",
            Tone::Neutral => "Neutral",
            Tone::Professional => "Professional",
            Tone::Formal => "Formal",
            Tone::Medical => "Medical",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unsupported tone: {}", s))
    }
}
