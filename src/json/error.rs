//! Structured validation issues
//!
//! Every rule violation becomes one `ValidationIssue` carrying the path to the
//! offending value, a machine-readable code and a human-readable message.

use serde::Serialize;
use std::fmt;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    InvalidType,
    NotInteger,
    TooSmall,
    TooBig,
    InvalidUrl,
    InvalidEnumValue,
    UnrecognizedKeys,
    InvalidJson,
}

/// One step into the candidate document: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }

    pub fn field(code: IssueCode, field: &str, message: impl Into<String>) -> Self {
        Self::new(code, vec![field.into()], message)
    }

    /// Dotted rendering of the path, `<root>` when empty.
    pub fn path_display(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }
        self.path
            .iter()
            .map(|segment| match segment {
                PathSegment::Key(key) => key.clone(),
                PathSegment::Index(index) => index.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// The complete set of issues found in one candidate, never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    #[cfg(test)]
    pub(crate) fn has_code_at(&self, code: IssueCode, field: &str) -> bool {
        self.issues.iter().any(|issue| {
            issue.code == code && issue.path.first() == Some(&PathSegment::from(field))
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.path_display(), issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "validation failed: {rendered}")
    }
}

impl std::error::Error for ValidationErrors {}
