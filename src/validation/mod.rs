//! Field predicates and whole-record validation.

pub mod record;
pub mod rules;

pub use record::{
    Field, FieldError, HealthProfile, ProfileBounds, Range, RecordValidator, ValidationOutcome,
};
pub use rules::{email_format, number_in_range, text_in_bounds, NumericInput};
