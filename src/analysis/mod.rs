//! Email risk analysis module
//!
//! Provides the rule-based phishing classifier and the async service that
//! wraps it for callers.

pub mod classifier;
pub mod service;
pub mod types;

pub use classifier::EmailClassifier;
pub use service::{AnalysisService, AnalysisStats};
pub use types::{AnalysisResult, Verdict};
