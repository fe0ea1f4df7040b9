// Proposal Analyzer - Server Core
//
// This crate provides the HTTP presenter and CLI around the analysis
// library: configuration from the environment, shared state, routes,
// and a small export facility for the latest assessment.

pub mod config;
pub mod server;
pub mod state;

pub use config::*;
pub use state::AppState;
