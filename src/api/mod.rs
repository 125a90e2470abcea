//! REST API module for phishguard
//!
//! Provides HTTP endpoints for email analysis

pub mod handlers;
pub mod server;

pub use server::ApiServer;
