//! Display-language support for verdict labels
//!
//! The classifier is language-agnostic; only the labels shown to the user
//! are localized, keyed by the verdict value alone.

use serde::{Deserialize, Serialize};

use crate::analysis::Verdict;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Localized label for a verdict
pub fn verdict_label(lang: Language, verdict: Verdict) -> &'static str {
    match (lang, verdict) {
        (Language::En, Verdict::Safe) => "Safe",
        (Language::En, Verdict::Suspicious) => "Suspicious",
        (Language::En, Verdict::Phishing) => "Phishing",
        (Language::Es, Verdict::Safe) => "Seguro",
        (Language::Es, Verdict::Suspicious) => "Sospechoso",
        (Language::Es, Verdict::Phishing) => "Phishing",
        (Language::Fr, Verdict::Safe) => "Sûr",
        (Language::Fr, Verdict::Suspicious) => "Suspect",
        (Language::Fr, Verdict::Phishing) => "Hameçonnage",
    }
}

/// Severity color hint for a verdict, independent of language
pub fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Safe => "green",
        Verdict::Suspicious => "yellow",
        Verdict::Phishing => "red",
    }
}
