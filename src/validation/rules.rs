//! Stateless field predicates.
//!
//! Every higher-level check in `record` is expressed through these three
//! functions; nothing else decides whether a number or string is acceptable.

use std::sync::OnceLock;

use regex::Regex;

/// A value that can be read as a floating-point number.
///
/// Strings are trimmed and parsed strictly; anything `f64::from_str`
/// rejects is "not a number".
pub trait NumericInput {
    fn to_number(&self) -> Option<f64>;
}

impl NumericInput for str {
    fn to_number(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl NumericInput for String {
    fn to_number(&self) -> Option<f64> {
        self.as_str().to_number()
    }
}

impl NumericInput for f64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self)
    }
}

macro_rules! numeric_input_via_f64 {
    ($($t:ty),*) => {
        $(impl NumericInput for $t {
            fn to_number(&self) -> Option<f64> {
                Some(f64::from(*self))
            }
        })*
    };
}

numeric_input_via_f64!(f32, i8, i16, i32, u8, u16, u32);

impl NumericInput for i64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl NumericInput for u64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

/// `true` iff `value` reads as a number inside `[min, max]` (inclusive).
///
/// Unparsable input and NaN are never in range.
pub fn number_in_range<T: NumericInput + ?Sized>(value: &T, min: f64, max: f64) -> bool {
    match value.to_number() {
        Some(n) if !n.is_nan() => n >= min && n <= max,
        _ => false,
    }
}

/// `true` iff `value` is not blank and has at most `max_chars` characters.
pub fn text_in_bounds(value: &str, max_chars: usize) -> bool {
    !value.trim().is_empty() && value.chars().count() <= max_chars
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Syntactic `local@domain.tld` check; says nothing about deliverability.
pub fn email_format(value: &str) -> bool {
    email_regex().is_match(value)
}
