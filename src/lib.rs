//! phishguard: heuristic email phishing analyzer
//!
//! A rule-based classifier that labels raw email text as safe, suspicious,
//! or phishing, with a human-readable explanation.
//!
//! # Features
//!
//! - **Classifier**: pure, total, deterministic two-stage heuristic
//!   (blacklist pass, then feature scoring)
//! - **Service**: async wrapper with optional simulated latency, timeouts,
//!   and in-memory counters
//! - **REST API**: paste or upload email text over HTTP
//! - **Localization**: verdict labels in English, Spanish, and French
//!
//! # Example
//!
//! ```
//! use phishguard::analysis::{EmailClassifier, Verdict};
//!
//! let classifier = EmailClassifier::new();
//! let result = classifier.classify("URGENT ACTION REQUIRED: verify now");
//! assert_eq!(result.verdict, Verdict::Phishing);
//! ```
//!
//! # Modules
//!
//! - [`analysis`]: classifier, service wrapper, and result types
//! - [`api`]: REST API server and handlers
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`i18n`]: verdict label localization
//! - [`utils`]: upload text decoding

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisResult, AnalysisService, EmailClassifier, Verdict};
pub use config::Config;
pub use error::{PhishguardError, Result};
