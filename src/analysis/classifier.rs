//! Rule-based email risk classifier
//!
//! Two-stage heuristic: a short-circuiting blacklist pass over high-risk
//! phrases, then feature scoring (suspicious phrases, link density, urgency
//! language, generic greetings, disguised links) thresholded into a verdict.
//! The classifier is pure and total: any input, including empty or malformed
//! text, produces a verdict.

use regex::Regex;

use super::types::{AnalysisResult, Verdict};

/// High-risk phrases. A single hit forces a Phishing verdict.
///
/// List order is the tie-break for the explanation when several phrases are
/// present; it does not affect the verdict itself.
pub const HIGH_RISK_PHRASES: &[&str] = &[
    "verify your account",
    "update your payment",
    "password reset",
    "security alert",
    "urgent action required",
    "confirm your identity",
    "account suspended",
    "login attempt",
    "winner",
    "prize",
    "claim your reward",
    "invoice due",
    "shipping confirmation",
    "unusual activity",
    "de-activation",
    "confidential information",
    "ssn",
    "social security",
];

/// Lower-risk phrases, each worth one point in the scoring pass.
pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "click here",
    "unsubscribe",
    "limited time offer",
    "act now",
    "dear valued customer",
    "dear user",
];

/// Link markers counted for the link-density feature.
const LINK_MARKERS: &[&str] = &["<a href", "http:", "https:"];

/// Urgency terms; any one of them adds a flat two points.
const URGENCY_TERMS: &[&str] = &["urgent", "immediately", "within 24 hours"];

/// Score at or above which a non-blacklisted email is labeled phishing.
const PHISHING_SCORE_THRESHOLD: u32 = 3;

const EXPLANATION_EMPTY: &str = "Email content is empty.";
const EXPLANATION_SCORE_PHISHING: &str =
    "The email exhibits multiple characteristics of a phishing attempt, such as urgency and suspicious links.";
const EXPLANATION_SUSPICIOUS: &str =
    "This email contains some suspicious elements. Please verify the sender and be cautious with any links.";
const EXPLANATION_SAFE: &str =
    "No immediate signs of phishing were detected. As always, remain cautious when opening links or attachments.";

/// Email risk classifier
pub struct EmailClassifier {
    greeting_re: Regex,
    anchor_text_re: Regex,
}

impl EmailClassifier {
    /// Create a classifier. Patterns are fixed and compiled once.
    pub fn new() -> Self {
        Self {
            greeting_re: Regex::new(r"dear (user|customer|client|member|account holder)")
                .expect("valid greeting pattern"),
            // Intentionally naive anchor-text extraction: matches any
            // `>text</a>` span without parsing the surrounding markup.
            anchor_text_re: Regex::new(r">([^<]+)</a>").expect("valid anchor pattern"),
        }
    }

    /// Classify raw email text.
    ///
    /// Never fails; matching is case-insensitive. Identical input always
    /// yields identical output.
    pub fn classify(&self, email_text: &str) -> AnalysisResult {
        if email_text.trim().is_empty() {
            return AnalysisResult::new(Verdict::Safe, EXPLANATION_EMPTY);
        }

        let content = email_text.to_lowercase();

        // Blacklist pass: first hit in canonical list order wins outright.
        for phrase in HIGH_RISK_PHRASES {
            if content.contains(phrase) {
                return AnalysisResult::new(
                    Verdict::Phishing,
                    format!(
                        "High-risk phrase found: \"{}\". This is a common tactic used in phishing emails.",
                        phrase
                    ),
                );
            }
        }

        let score = self.feature_score(&content);

        if score >= PHISHING_SCORE_THRESHOLD {
            AnalysisResult::new(Verdict::Phishing, EXPLANATION_SCORE_PHISHING)
        } else if score > 0 {
            AnalysisResult::new(Verdict::Suspicious, EXPLANATION_SUSPICIOUS)
        } else {
            AnalysisResult::new(Verdict::Safe, EXPLANATION_SAFE)
        }
    }

    /// Sum the independent feature contributions over lowercased content.
    fn feature_score(&self, content: &str) -> u32 {
        let mut score = 0;

        // One point per distinct suspicious phrase present, uncapped.
        score += SUSPICIOUS_PHRASES
            .iter()
            .filter(|phrase| content.contains(*phrase))
            .count() as u32;

        let link_count: usize = LINK_MARKERS
            .iter()
            .map(|marker| content.matches(marker).count())
            .sum();
        if link_count > 4 {
            score += 2;
        } else if link_count > 1 {
            score += 1;
        }

        if URGENCY_TERMS.iter().any(|term| content.contains(term)) {
            score += 2;
        }

        if self.greeting_re.is_match(content) {
            score += 1;
        }

        if self.has_disguised_link(content) {
            score += 1;
        }

        score
    }

    /// Anchor text that is not itself a URL suggests the link target is
    /// being hidden. Emails carrying an unsubscribe link are exempt, as
    /// legitimate newsletters routinely use worded anchors.
    fn has_disguised_link(&self, content: &str) -> bool {
        if !content.contains("href") || content.contains("unsubscribe") {
            return false;
        }

        self.anchor_text_re
            .find_iter(content)
            .any(|span| !span.as_str().contains("http"))
    }
}

impl Default for EmailClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> AnalysisResult {
        EmailClassifier::new().classify(text)
    }

    #[test]
    fn test_empty_input_is_safe() {
        let result = classify("");
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(result.explanation, "Email content is empty.");
    }

    #[test]
    fn test_whitespace_only_is_safe() {
        let result = classify("   \n\t  ");
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(result.explanation, "Email content is empty.");
    }

    #[test]
    fn test_blacklist_phrase_forces_phishing() {
        let result = classify("YOU ARE A WINNER");
        assert_eq!(result.verdict, Verdict::Phishing);
        assert!(result.explanation.contains("\"winner\""));
    }

    #[test]
    fn test_blacklist_is_case_insensitive() {
        let result = classify("URGENT ACTION REQUIRED");
        assert_eq!(result.verdict, Verdict::Phishing);
        assert!(result.explanation.contains("\"urgent action required\""));
    }

    #[test]
    fn test_blacklist_explanation_follows_list_order() {
        // "prize" appears first in the text, but "winner" comes first in the
        // canonical phrase list and must be the one named.
        let result = classify("Your prize awaits, lucky winner");
        assert_eq!(result.verdict, Verdict::Phishing);
        assert!(result.explanation.contains("\"winner\""));
    }

    #[test]
    fn test_blacklist_short_circuits_scoring() {
        // Would score well past the threshold on its own, but the blacklist
        // hit must win and carry its own explanation.
        let result = classify("verify your account urgent click here act now http: http: http: http: http:");
        assert_eq!(result.verdict, Verdict::Phishing);
        assert!(result.explanation.contains("\"verify your account\""));
    }

    #[test]
    fn test_single_suspicious_phrase_scores_one() {
        let result = classify("click here");
        assert_eq!(result.verdict, Verdict::Suspicious);
        assert_eq!(
            result.explanation,
            "This email contains some suspicious elements. Please verify the sender and be cautious with any links."
        );
    }

    #[test]
    fn test_urgency_plus_two_phrases_reaches_phishing() {
        // urgency (+2) plus two suspicious phrases (+2) = 4
        let result = classify("It is urgent that you click here and act now");
        assert_eq!(result.verdict, Verdict::Phishing);
        assert_eq!(
            result.explanation,
            "The email exhibits multiple characteristics of a phishing attempt, such as urgency and suspicious links."
        );
    }

    #[test]
    fn test_five_links_score_two() {
        let result = classify("http: http: http: http: http:");
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_two_links_score_one() {
        let result = classify("see http: and https: for details");
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_single_link_scores_nothing() {
        let result = classify("our site is at https: example dot com");
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[test]
    fn test_generic_greeting_scores_one() {
        let result = classify("Dear customer, thanks for writing in.");
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_disguised_link_scores_one() {
        let result = classify(r#"<a href="evil.example">account details</a>"#);
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_url_anchor_text_is_not_disguised() {
        // Anchor text that shows the URL is not counted, and a single link
        // marker is below the density threshold.
        let result = classify(r#"see <a href="https://example.com">https://example.com</a>"#);
        assert_eq!(result.verdict, Verdict::Suspicious); // 2 link markers, +1
    }

    #[test]
    fn test_unsubscribe_suppresses_disguised_link() {
        // "unsubscribe" disables the disguised-link check but is itself a
        // suspicious phrase worth one point.
        let result = classify(r#"<a href="x">newsletter</a> unsubscribe"#);
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_plain_text_is_safe() {
        let result = classify("Hi team, the meeting moved to room 4 tomorrow morning.");
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(
            result.explanation,
            "No immediate signs of phishing were detected. As always, remain cautious when opening links or attachments."
        );
    }

    #[test]
    fn test_non_english_text_is_handled() {
        let result = classify("Bonjour, voici le compte rendu de la réunion d'hier.");
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = EmailClassifier::new();
        let text = "urgent: click here to claim";
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }
}
