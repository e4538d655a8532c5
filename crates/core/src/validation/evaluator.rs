//! Rule evaluator. Pure logic, no storage access.

use serde_json::Value;
use validator::ValidateUrl;

use super::rules::{FieldKind, FieldRule, FieldViolation, MovieField, ValidationMode, MOVIE_RULES};
use crate::error::CoreError;
use crate::movie::{genre_eq, MoviePatch, NewMovie};

/// A field value after type checking and normalisation.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    TextSet(Vec<String>),
}

/// Validate a create payload. Every field is required except `rate`,
/// which defaults when absent.
pub fn validate_movie(payload: &Value) -> Result<NewMovie, CoreError> {
    let patch = evaluate(payload, ValidationMode::Full).map_err(CoreError::Validation)?;
    NewMovie::try_from(patch)
}

/// Validate an update payload. Any non-empty subset of fields is accepted.
pub fn validate_partial_movie(payload: &Value) -> Result<MoviePatch, CoreError> {
    let patch = evaluate(payload, ValidationMode::Partial).map_err(CoreError::Validation)?;
    if patch.is_empty() {
        return Err(CoreError::Validation(vec![FieldViolation::new(
            "_",
            "empty_patch",
            "At least one movie field must be provided",
        )]));
    }
    Ok(patch)
}

/// Evaluate the whole rule table against `payload`.
///
/// Unknown keys are ignored. Every failing field is reported, in rule-table
/// order.
pub fn evaluate(payload: &Value, mode: ValidationMode) -> Result<MoviePatch, Vec<FieldViolation>> {
    let Some(object) = payload.as_object() else {
        return Err(vec![FieldViolation::new(
            "_",
            "invalid_payload",
            "Request body must be a JSON object",
        )]);
    };

    let mut patch = MoviePatch::default();
    let mut violations = Vec::new();

    for rule in MOVIE_RULES {
        let name = rule.field.as_str();
        match object.get(name) {
            None => {
                if mode == ValidationMode::Full {
                    if let Some(default) = rule.default {
                        assign(&mut patch, rule.field, FieldValue::Decimal(default));
                    } else if rule.required {
                        violations.push(FieldViolation::required(name));
                    }
                }
            }
            Some(value) => match check_field(rule, value) {
                Ok(normalized) => assign(&mut patch, rule.field, normalized),
                Err(violation) => violations.push(violation),
            },
        }
    }

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(violations)
    }
}

fn assign(patch: &mut MoviePatch, field: MovieField, value: FieldValue) {
    match (field, value) {
        (MovieField::Title, FieldValue::Text(v)) => patch.title = Some(v),
        (MovieField::Director, FieldValue::Text(v)) => patch.director = Some(v),
        (MovieField::Poster, FieldValue::Text(v)) => patch.poster = Some(v),
        (MovieField::Year, FieldValue::Integer(v)) => patch.year = i32::try_from(v).ok(),
        (MovieField::Duration, FieldValue::Integer(v)) => patch.duration = u32::try_from(v).ok(),
        (MovieField::Genre, FieldValue::TextSet(v)) => patch.genre = Some(v),
        (MovieField::Rate, FieldValue::Decimal(v)) => patch.rate = Some(v),
        _ => {}
    }
}

fn check_field(rule: &FieldRule, value: &Value) -> Result<FieldValue, FieldViolation> {
    let name = rule.field.as_str();
    match rule.kind {
        FieldKind::Text => check_text(name, value).map(FieldValue::Text),
        FieldKind::Url => {
            let text = check_text(name, value)?;
            if text.validate_url() {
                Ok(FieldValue::Text(text))
            } else {
                Err(FieldViolation::new(
                    name,
                    "invalid_url",
                    format!("{name} must be a valid URL"),
                ))
            }
        }
        FieldKind::Integer => {
            let n = as_whole_number(value).ok_or_else(|| {
                FieldViolation::new(name, "invalid_type", format!("{name} must be an integer"))
            })?;
            check_bounds(rule, n as f64)?;
            Ok(FieldValue::Integer(n))
        }
        FieldKind::Decimal => {
            let n = value.as_f64().ok_or_else(|| {
                FieldViolation::new(name, "invalid_type", format!("{name} must be a number"))
            })?;
            check_bounds(rule, n)?;
            Ok(FieldValue::Decimal(n))
        }
        FieldKind::TextSet => check_text_set(name, value).map(FieldValue::TextSet),
    }
}

fn check_text(name: &str, value: &Value) -> Result<String, FieldViolation> {
    let text = value.as_str().ok_or_else(|| {
        FieldViolation::new(name, "invalid_type", format!("{name} must be a string"))
    })?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldViolation::new(
            name,
            "too_small",
            format!("{name} must not be empty"),
        ));
    }
    Ok(trimmed.to_string())
}

fn check_text_set(name: &str, value: &Value) -> Result<Vec<String>, FieldViolation> {
    let items = value.as_array().ok_or_else(|| {
        FieldViolation::new(
            name,
            "invalid_type",
            format!("{name} must be an array of strings"),
        )
    })?;

    let mut set: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let entry = match item.as_str().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => {
                return Err(FieldViolation::new(
                    name,
                    "invalid_type",
                    format!("{name} entries must be non-empty strings"),
                ))
            }
        };
        if !set.iter().any(|existing| genre_eq(existing, entry)) {
            set.push(entry.to_string());
        }
    }

    if set.is_empty() {
        return Err(FieldViolation::new(
            name,
            "too_small",
            format!("{name} must contain at least one entry"),
        ));
    }
    Ok(set)
}

/// Accepts JSON integers and floats with no fractional part (`1999.0`).
fn as_whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn check_bounds(rule: &FieldRule, n: f64) -> Result<(), FieldViolation> {
    let name = rule.field.as_str();
    if let Some(min) = rule.min {
        if n < min {
            return Err(FieldViolation::new(
                name,
                "too_small",
                format!("{name} must be at least {min}"),
            ));
        }
    }
    if let Some(max) = rule.max {
        if n > max {
            return Err(FieldViolation::new(
                name,
                "too_big",
                format!("{name} must be at most {max}"),
            ));
        }
    }
    Ok(())
}
