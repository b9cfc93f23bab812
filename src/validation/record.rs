//! Whole-record validation of a user-entered health profile.
//!
//! `RecordValidator::validate` checks every field independently and
//! collects one `FieldError` per failing field, so the caller can show
//! every problem at once.  An invalid record is an ordinary return value,
//! never an `Err`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::rules::{number_in_range, text_in_bounds};
use crate::sanitize::strip_injection_tokens;

/// A health profile as submitted by the form layer.
///
/// Required numeric fields are still `Option` so a missing value is a
/// validation error instead of a parse failure.  A missing or `null` name
/// reads as the empty string for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Age in whole years.
    pub age: Option<i64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub systolic_mmhg: Option<f64>,
    pub diastolic_mmhg: Option<f64>,
    pub heart_rate_bpm: Option<f64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The fields of a `HealthProfile`, in validation order.
///
/// Serialized under the same key as the `HealthProfile` member it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "height_cm")]
    Height,
    #[serde(rename = "weight_kg")]
    Weight,
    #[serde(rename = "waist_cm")]
    Waist,
    #[serde(rename = "systolic_mmhg")]
    Systolic,
    #[serde(rename = "diastolic_mmhg")]
    Diastolic,
    #[serde(rename = "heart_rate_bpm")]
    HeartRate,
}

impl Field {
    /// Key of the matching `HealthProfile` member, which is also the key the
    /// UI uses to attach a message to its input.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Height => "height_cm",
            Field::Weight => "weight_kg",
            Field::Waist => "waist_cm",
            Field::Systolic => "systolic_mmhg",
            Field::Diastolic => "diastolic_mmhg",
            Field::HeartRate => "heart_rate_bpm",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Admissible values for every profile field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileBounds {
    pub max_name_chars: usize,
    pub age: Range,
    pub height_cm: Range,
    pub weight_kg: Range,
    pub waist_cm: Range,
    pub systolic_mmhg: Range,
    pub diastolic_mmhg: Range,
    pub heart_rate_bpm: Range,
}

impl Default for ProfileBounds {
    fn default() -> Self {
        Self {
            max_name_chars: 100,
            age: Range::new(60.0, 120.0),
            height_cm: Range::new(100.0, 250.0),
            weight_kg: Range::new(30.0, 300.0),
            waist_cm: Range::new(40.0, 200.0),
            systolic_mmhg: Range::new(60.0, 250.0),
            diastolic_mmhg: Range::new(40.0, 150.0),
            heart_rate_bpm: Range::new(40.0, 200.0),
        }
    }
}

/// One failing field and the message to show for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating a record: `valid` is `errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationOutcome {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// The error messages, in field order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    pub fn errors_for(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

/// Validates `HealthProfile`s against a set of `ProfileBounds`.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    bounds: ProfileBounds,
}

impl RecordValidator {
    pub fn new(bounds: ProfileBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &ProfileBounds {
        &self.bounds
    }

    /// Check every field; never stops at the first failure.
    pub fn validate(&self, record: &HealthProfile) -> ValidationOutcome {
        let b = &self.bounds;
        let mut errors = Vec::new();

        if record.name.trim().is_empty() {
            push(&mut errors, Field::Name, "Name is required".to_string());
        } else if !text_in_bounds(&record.name, b.max_name_chars) {
            push(
                &mut errors,
                Field::Name,
                format!("Name is too long (max {} characters)", b.max_name_chars),
            );
        }

        check_required(
            &mut errors,
            Field::Age,
            record.age.map(|a| a as f64),
            b.age,
            "Age",
            "years",
        );
        check_required(
            &mut errors,
            Field::Height,
            record.height_cm,
            b.height_cm,
            "Height",
            "cm",
        );
        check_required(
            &mut errors,
            Field::Weight,
            record.weight_kg,
            b.weight_kg,
            "Weight",
            "kg",
        );

        check_optional(
            &mut errors,
            Field::Waist,
            record.waist_cm,
            b.waist_cm,
            "Waist circumference",
            "cm",
        );
        check_optional(
            &mut errors,
            Field::Systolic,
            record.systolic_mmhg,
            b.systolic_mmhg,
            "Systolic pressure",
            "mmHg",
        );
        check_optional(
            &mut errors,
            Field::Diastolic,
            record.diastolic_mmhg,
            b.diastolic_mmhg,
            "Diastolic pressure",
            "mmHg",
        );
        check_optional(
            &mut errors,
            Field::HeartRate,
            record.heart_rate_bpm,
            b.heart_rate_bpm,
            "Heart rate",
            "bpm",
        );

        tracing::debug!(failed_fields = errors.len(), "validated health profile");
        ValidationOutcome::from_errors(errors)
    }

    /// Copy of `record` with its free-text fields passed through
    /// `strip_injection_tokens`.
    pub fn sanitize(&self, record: &HealthProfile) -> HealthProfile {
        HealthProfile {
            name: strip_injection_tokens(&record.name),
            ..record.clone()
        }
    }

    /// Sanitize, then validate the sanitized copy.
    pub fn prepare(&self, record: &HealthProfile) -> (HealthProfile, ValidationOutcome) {
        let sanitized = self.sanitize(record);
        let outcome = self.validate(&sanitized);
        (sanitized, outcome)
    }
}

fn push(errors: &mut Vec<FieldError>, field: Field, message: String) {
    errors.push(FieldError { field, message });
}

fn range_message(label: &str, range: Range, unit: &str) -> String {
    format!("{label} must be between {} and {} {unit}", range.min, range.max)
}

fn check_required(
    errors: &mut Vec<FieldError>,
    field: Field,
    value: Option<f64>,
    range: Range,
    label: &str,
    unit: &str,
) {
    let ok = value.is_some_and(|v| number_in_range(&v, range.min, range.max));
    if !ok {
        push(errors, field, range_message(label, range, unit));
    }
}

fn check_optional(
    errors: &mut Vec<FieldError>,
    field: Field,
    value: Option<f64>,
    range: Range,
    label: &str,
    unit: &str,
) {
    if let Some(v) = value {
        if !number_in_range(&v, range.min, range.max) {
            push(errors, field, range_message(label, range, unit));
        }
    }
}
