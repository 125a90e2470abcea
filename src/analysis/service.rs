//! Analysis service wrapping the pure classifier
//!
//! Adds the operational concerns around classification: optional simulated
//! remote-call latency, caller-side timeouts, and in-memory counters.

use anyhow::{anyhow, Result};
use rand::Rng;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::AnalysisConfig;

use super::classifier::EmailClassifier;
use super::types::{AnalysisResult, Verdict};

/// Counters for analyses performed since startup. Not persisted.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct AnalysisStats {
    /// Total emails analyzed
    pub emails_analyzed: u64,
    /// Emails classified as safe
    pub safe: u64,
    /// Emails classified as suspicious
    pub suspicious: u64,
    /// Emails classified as phishing
    pub phishing: u64,
}

/// Analysis service
pub struct AnalysisService {
    classifier: EmailClassifier,
    config: AnalysisConfig,
    stats: RwLock<AnalysisStats>,
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            classifier: EmailClassifier::new(),
            config,
            stats: RwLock::new(AnalysisStats::default()),
        }
    }

    /// Analyze email text, applying the configured artificial latency.
    ///
    /// The delay emulates a remote analysis call for UX purposes and never
    /// affects the computed result.
    pub async fn analyze(&self, email_text: &str) -> AnalysisResult {
        if self.config.simulate_latency {
            tokio::time::sleep(self.latency()).await;
        }

        let result = self.classifier.classify(email_text);
        debug!(verdict = %result.verdict, "email analyzed");

        let mut stats = self.stats.write().await;
        stats.emails_analyzed += 1;
        match result.verdict {
            Verdict::Safe => stats.safe += 1,
            Verdict::Suspicious => stats.suspicious += 1,
            Verdict::Phishing => stats.phishing += 1,
        }

        result
    }

    /// Analyze with the configured deadline.
    ///
    /// Only the artificial delay can make this slow; exceeding the deadline
    /// cancels the call without touching the counters.
    pub async fn analyze_with_timeout(&self, email_text: &str) -> Result<AnalysisResult> {
        let deadline = Duration::from_millis(self.config.timeout_ms);
        tokio::time::timeout(deadline, self.analyze(email_text))
            .await
            .map_err(|_| anyhow!("analysis did not complete within {}ms", self.config.timeout_ms))
    }

    /// Snapshot of the counters
    pub async fn stats(&self) -> AnalysisStats {
        self.stats.read().await.clone()
    }

    fn latency(&self) -> Duration {
        let min = self.config.latency_min_ms;
        let max = self.config.latency_max_ms.max(min);
        let ms = rand::thread_rng().gen_range(min..=max);
        Duration::from_millis(ms)
    }
}
