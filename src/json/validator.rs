//! Movie Schema Validator
//!
//! Validates candidate movie documents against a fixed rule table. Each
//! `FieldRule` names a field, its kind and whether it is required; the
//! schema evaluates every rule against the candidate and collects all
//! violations instead of stopping at the first one.

use super::error::{IssueCode, PathSegment, ValidationErrors, ValidationIssue, ValidationResult};
use crate::core::{Genre, MoviePatch, NewMovie};
use chrono::{Datelike, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value as JsonValue};
use url::Url;

pub const MIN_YEAR: i64 = 1900;
pub const MIN_RATE: f64 = 0.0;
pub const MAX_RATE: f64 = 10.0;

/// Whether missing required fields are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Full,
    Partial,
}

/// Shape and constraint of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    NonEmptyString,
    Integer { min: i64, max: i64 },
    Number { min: f64, max: f64 },
    Url,
    GenreList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Checks a present value, pushing every violation it finds.
    fn check(&self, value: &JsonValue, issues: &mut Vec<ValidationIssue>) {
        let field = self.name;
        match &self.kind {
            FieldKind::NonEmptyString => match value.as_str() {
                Some(text) if text.is_empty() => issues.push(ValidationIssue::field(
                    IssueCode::TooSmall,
                    field,
                    format!("{field} must not be empty"),
                )),
                Some(_) => {}
                None => issues.push(type_issue(vec![field.into()], "string", value)),
            },
            FieldKind::Integer { min, max } => check_integer(field, *min, *max, value, issues),
            FieldKind::Number { min, max } => match value.as_f64() {
                Some(number) if number < *min => issues.push(ValidationIssue::field(
                    IssueCode::TooSmall,
                    field,
                    format!("{field} must be greater than or equal to {min}"),
                )),
                Some(number) if number > *max => issues.push(ValidationIssue::field(
                    IssueCode::TooBig,
                    field,
                    format!("{field} must be less than or equal to {max}"),
                )),
                Some(_) => {}
                None => issues.push(type_issue(vec![field.into()], "number", value)),
            },
            FieldKind::Url => match value.as_str() {
                Some(text) if Url::parse(text).is_err() => issues.push(ValidationIssue::field(
                    IssueCode::InvalidUrl,
                    field,
                    format!("{field} must be a valid URL"),
                )),
                Some(_) => {}
                None => issues.push(type_issue(vec![field.into()], "string", value)),
            },
            FieldKind::GenreList => check_genres(field, value, issues),
        }
    }
}

fn check_integer(
    field: &'static str,
    min: i64,
    max: i64,
    value: &JsonValue,
    issues: &mut Vec<ValidationIssue>,
) {
    let JsonValue::Number(number) = value else {
        issues.push(type_issue(vec![field.into()], "integer", value));
        return;
    };

    let too_big = || {
        ValidationIssue::field(
            IssueCode::TooBig,
            field,
            format!("{field} must be less than or equal to {max}"),
        )
    };
    let too_small = || {
        ValidationIssue::field(
            IssueCode::TooSmall,
            field,
            format!("{field} must be greater than or equal to {min}"),
        )
    };

    match whole_number(number) {
        WholeNumber::Value(int) if int < min => issues.push(too_small()),
        WholeNumber::Value(int) if int > max => issues.push(too_big()),
        WholeNumber::Value(_) => {}
        WholeNumber::AboveRange => issues.push(too_big()),
        WholeNumber::BelowRange => issues.push(too_small()),
        WholeNumber::Fractional => issues.push(ValidationIssue::field(
            IssueCode::NotInteger,
            field,
            format!("{field} must be an integer"),
        )),
    }
}

enum WholeNumber {
    Value(i64),
    AboveRange,
    BelowRange,
    Fractional,
}

/// Integer view of a JSON number; `96.0` counts as the integer 96.
fn whole_number(number: &Number) -> WholeNumber {
    if let Some(int) = number.as_i64() {
        return WholeNumber::Value(int);
    }
    // Only u64 values above i64::MAX land here.
    if number.is_u64() {
        return WholeNumber::AboveRange;
    }
    match number.as_f64() {
        Some(float) if float.fract() != 0.0 => WholeNumber::Fractional,
        Some(float) if float >= I64_UPPER => WholeNumber::AboveRange,
        Some(float) if float < -I64_UPPER => WholeNumber::BelowRange,
        Some(float) => WholeNumber::Value(float as i64),
        None => WholeNumber::Fractional,
    }
}

/// 2^63 as f64, the first float outside the i64 range.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn check_genres(field: &'static str, value: &JsonValue, issues: &mut Vec<ValidationIssue>) {
    let Some(items) = value.as_array() else {
        issues.push(type_issue(vec![field.into()], "array", value));
        return;
    };

    if items.is_empty() {
        issues.push(ValidationIssue::field(
            IssueCode::TooSmall,
            field,
            format!("{field} must contain at least one genre"),
        ));
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let path = vec![PathSegment::from(field), PathSegment::from(index)];
        match item.as_str() {
            Some(name) if Genre::from_name(name).is_none() => {
                let expected = Genre::ALL
                    .iter()
                    .map(|genre| format!("'{genre}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                issues.push(ValidationIssue::new(
                    IssueCode::InvalidEnumValue,
                    path,
                    format!("Invalid enum value. Expected {expected}, received '{name}'"),
                ));
            }
            Some(_) => {}
            None => issues.push(type_issue(path, "string", item)),
        }
    }
}

fn type_issue(path: Vec<PathSegment>, expected: &str, received: &JsonValue) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::InvalidType,
        path,
        format!("Expected {expected}, received {}", json_type_name(received)),
    )
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// The movie rule table plus the evaluation entry points.
///
/// The year bound follows the clock at validation time unless pinned.
#[derive(Debug, Clone, Default)]
pub struct MovieSchema {
    pinned_year: Option<i64>,
}

impl MovieSchema {
    /// Schema whose upper year bound is next calendar year.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema that treats `current_year` as today's year.
    pub fn for_current_year(current_year: i64) -> Self {
        Self {
            pinned_year: Some(current_year),
        }
    }

    fn current_year(&self) -> i64 {
        self.pinned_year
            .unwrap_or_else(|| i64::from(Utc::now().year()))
    }

    fn rules(&self) -> Vec<FieldRule> {
        vec![
            FieldRule::required("title", FieldKind::NonEmptyString),
            FieldRule::required(
                "year",
                FieldKind::Integer {
                    min: MIN_YEAR,
                    max: self.current_year() + 1,
                },
            ),
            FieldRule::required("director", FieldKind::NonEmptyString),
            FieldRule::required(
                "duration",
                FieldKind::Integer {
                    min: 1,
                    max: i64::from(u32::MAX),
                },
            ),
            FieldRule::optional(
                "rate",
                FieldKind::Number {
                    min: MIN_RATE,
                    max: MAX_RATE,
                },
            ),
            FieldRule::required("poster", FieldKind::Url),
            FieldRule::required("genre", FieldKind::GenreList),
        ]
    }

    /// Every required field must be present and valid.
    pub fn validate_full(&self, candidate: &JsonValue) -> ValidationResult<NewMovie> {
        self.validate(candidate, ValidationMode::Full)
    }

    /// Present fields must be valid; an empty object is an empty patch.
    pub fn validate_partial(&self, candidate: &JsonValue) -> ValidationResult<MoviePatch> {
        self.validate(candidate, ValidationMode::Partial)
    }

    pub fn validate<T: DeserializeOwned>(
        &self,
        candidate: &JsonValue,
        mode: ValidationMode,
    ) -> ValidationResult<T> {
        let Some(object) = candidate.as_object() else {
            return Err(ValidationErrors::single(type_issue(
                vec![],
                "object",
                candidate,
            )));
        };

        let rules = self.rules();
        let issues = collect_issues(&rules, object, mode);
        if !issues.is_empty() {
            return Err(ValidationErrors::new(issues));
        }

        serde_json::from_value(normalize_integers(&rules, object)).map_err(|err| {
            ValidationErrors::single(ValidationIssue::new(
                IssueCode::InvalidType,
                vec![],
                err.to_string(),
            ))
        })
    }
}

/// Rewrites whole floats in integer fields (`96.0`) as integers so typed
/// deserialization accepts them.
fn normalize_integers(rules: &[FieldRule], object: &Map<String, JsonValue>) -> JsonValue {
    let mut normalized = object.clone();
    for rule in rules {
        if !matches!(rule.kind, FieldKind::Integer { .. }) {
            continue;
        }
        if let Some(JsonValue::Number(number)) = normalized.get(rule.name)
            && let WholeNumber::Value(int) = whole_number(number)
        {
            normalized.insert(rule.name.to_string(), JsonValue::from(int));
        }
    }
    JsonValue::Object(normalized)
}

fn collect_issues(
    rules: &[FieldRule],
    object: &Map<String, JsonValue>,
    mode: ValidationMode,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for rule in rules {
        match object.get(rule.name) {
            Some(value) => rule.check(value, &mut issues),
            None if rule.required && mode == ValidationMode::Full => {
                issues.push(ValidationIssue::field(
                    IssueCode::Required,
                    rule.name,
                    format!("{} is required", rule.name),
                ));
            }
            None => {}
        }
    }

    let unknown = object
        .keys()
        .filter(|key| !rules.iter().any(|rule| rule.name == key.as_str()))
        .map(|key| format!("'{key}'"))
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        issues.push(ValidationIssue::new(
            IssueCode::UnrecognizedKeys,
            vec![],
            format!("Unrecognized key(s) in object: {}", unknown.join(", ")),
        ));
    }

    issues
}
