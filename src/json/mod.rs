//! Movie Schema Validation Module
//!
//! Checks candidate JSON documents before they reach the store.
//!
//! # Architecture
//!
//! - `validator.rs` - Declarative field rule table (MovieSchema)
//! - `error.rs` - Structured issues returned to clients

mod error;
mod validator;

pub use error::{IssueCode, PathSegment, ValidationErrors, ValidationIssue, ValidationResult};
pub use validator::{MovieSchema, ValidationMode};
