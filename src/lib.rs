// ============================================================================
// Movies API Library
// ============================================================================

pub mod config;
pub mod core;
pub mod json;
pub mod service;
pub mod storage;
pub mod web;

// Re-export main types for convenience
pub use config::AppConfig;
pub use crate::core::{Genre, Movie, MovieError, MoviePatch, NewMovie, Result};
pub use json::{IssueCode, MovieSchema, ValidationErrors, ValidationIssue};
pub use service::MovieService;
pub use storage::MovieStore;
pub use web::{AllowedOrigins, AppState, build_router};
