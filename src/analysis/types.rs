//! Analysis types and data structures

use serde::{Deserialize, Serialize};

/// Risk verdict for an analyzed email.
///
/// Ordered by severity: `Safe < Suspicious < Phishing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// No phishing indicators found
    Safe,
    /// Some indicators present, below the phishing threshold
    Suspicious,
    /// Blacklisted phrase hit or indicator score at/above threshold
    Phishing,
}

impl Verdict {
    /// Stable lowercase name, used for log fields and stats keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Phishing => "phishing",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single classification call.
///
/// A plain value with no identity; one is built per call and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Risk verdict
    pub verdict: Verdict,
    /// Human-readable explanation of the verdict
    pub explanation: String,
}

impl AnalysisResult {
    pub fn new(verdict: Verdict, explanation: impl Into<String>) -> Self {
        Self {
            verdict,
            explanation: explanation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_severity_order() {
        assert!(Verdict::Safe < Verdict::Suspicious);
        assert!(Verdict::Suspicious < Verdict::Phishing);
    }

    #[test]
    fn test_verdict_serde_names() {
        assert_eq!(serde_json::to_string(&Verdict::Phishing).unwrap(), "\"PHISHING\"");
        let v: Verdict = serde_json::from_str("\"SUSPICIOUS\"").unwrap();
        assert_eq!(v, Verdict::Suspicious);
    }
}
