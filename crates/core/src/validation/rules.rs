//! Field rule and violation types.

use serde::{Deserialize, Serialize};

/// Fields of a movie record that clients may supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieField {
    Title,
    Year,
    Director,
    Duration,
    Poster,
    Genre,
    Rate,
}

impl MovieField {
    pub const ALL: [MovieField; 7] = [
        MovieField::Title,
        MovieField::Year,
        MovieField::Director,
        MovieField::Duration,
        MovieField::Poster,
        MovieField::Genre,
        MovieField::Rate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Year => "year",
            MovieField::Director => "director",
            MovieField::Duration => "duration",
            MovieField::Poster => "poster",
            MovieField::Genre => "genre",
            MovieField::Rate => "rate",
        }
    }
}

/// The JSON shape a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string.
    Text,
    /// Whole number, optionally bounded.
    Integer,
    /// Any number, optionally bounded.
    Decimal,
    /// Absolute URL string.
    Url,
    /// Non-empty array of non-empty strings, deduplicated ignoring case.
    TextSet,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: MovieField,
    pub kind: FieldKind,
    /// Must be present in full mode unless a default is given.
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Applied in full mode when the field is absent.
    pub default: Option<f64>,
}

impl FieldRule {
    const fn new(field: MovieField, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            required: true,
            min: None,
            max: None,
            default: None,
        }
    }

    const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    const fn defaults_to(mut self, value: f64) -> Self {
        self.required = false;
        self.default = Some(value);
        self
    }
}

pub const MIN_YEAR: f64 = 1900.0;
pub const MAX_YEAR: f64 = 2100.0;
pub const MAX_RATE: f64 = 10.0;
pub const DEFAULT_RATE: f64 = 5.0;

/// The movie schema, evaluated in this order.
pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule::new(MovieField::Title, FieldKind::Text),
    FieldRule::new(MovieField::Year, FieldKind::Integer).range(MIN_YEAR, MAX_YEAR),
    FieldRule::new(MovieField::Director, FieldKind::Text),
    FieldRule::new(MovieField::Duration, FieldKind::Integer).range(1.0, u32::MAX as f64),
    FieldRule::new(MovieField::Poster, FieldKind::Url),
    FieldRule::new(MovieField::Genre, FieldKind::TextSet),
    FieldRule::new(MovieField::Rate, FieldKind::Decimal)
        .range(0.0, MAX_RATE)
        .defaults_to(DEFAULT_RATE),
];

/// Whether every field is required or any non-empty subset is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Full,
    Partial,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, rule: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "required", format!("{field} is required"))
    }
}
