//! Predicates and the records produced when they fail

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Which predicate a check evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Equals,
    NotEqual,
    Includes,
    IsTrue,
    IsFalse,
    GreaterThan,
    IsLessThan,
    NotNull,
    IsNull,
    IsDefined,
    IsUndefined,
    IsNumber,
    IsString,
}

impl Check {
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Equals => "equals",
            Check::NotEqual => "not_equal",
            Check::Includes => "includes",
            Check::IsTrue => "is_true",
            Check::IsFalse => "is_false",
            Check::GreaterThan => "greater_than",
            Check::IsLessThan => "is_less_than",
            Check::NotNull => "not_null",
            Check::IsNull => "is_null",
            Check::IsDefined => "is_defined",
            Check::IsUndefined => "is_undefined",
            Check::IsNumber => "is_number",
            Check::IsString => "is_string",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail { expected: String, actual: String },
}

impl Verdict {
    fn fail(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Verdict::Fail {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    fn from_bool(pass: bool, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        if pass {
            Verdict::Pass
        } else {
            Verdict::fail(expected, actual)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Value plus its kind, e.g. `"abc" (string)`
fn typed(value: &Value) -> String {
    format!("{} ({})", value, value.type_name())
}

pub fn equals(actual: &Value, expected: &Value) -> Verdict {
    Verdict::from_bool(actual.deep_eq(expected), expected.to_string(), actual.to_string())
}

pub fn not_equal(actual: &Value, forbidden: &Value) -> Verdict {
    Verdict::from_bool(
        !actual.deep_eq(forbidden),
        format!("anything but {}", forbidden),
        actual.to_string(),
    )
}

/// Substring for strings, deep-equal membership for arrays, key presence for
/// objects. Any other haystack fails.
pub fn includes(actual: &Value, expected: &Value) -> Verdict {
    let pass = match (actual, expected) {
        (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
        (Value::Array(items), needle) => items.iter().any(|item| item.deep_eq(needle)),
        (Value::Object(map), Value::String(key)) => map.contains_key(key),
        _ => false,
    };
    let expected = match actual {
        Value::Object(_) => format!("to have key {}", expected),
        _ => format!("to include {}", expected),
    };
    Verdict::from_bool(pass, expected, typed(actual))
}

pub fn is_true(value: &Value) -> Verdict {
    Verdict::from_bool(matches!(value, Value::Bool(true)), "true", typed(value))
}

pub fn is_false(value: &Value) -> Verdict {
    Verdict::from_bool(matches!(value, Value::Bool(false)), "false", typed(value))
}

/// Both sides must be numbers; NaN never compares.
fn compare(actual: &Value, expected: &Value, op: &str, wanted: Ordering) -> Verdict {
    let pass = actual.cmp_numeric(expected) == Some(wanted);
    let expected = if expected.is_numeric() {
        format!("{} {}", op, expected)
    } else {
        format!("{} {}", op, typed(expected))
    };
    Verdict::from_bool(pass, expected, typed(actual))
}

pub fn greater_than(actual: &Value, expected: &Value) -> Verdict {
    compare(actual, expected, ">", Ordering::Greater)
}

pub fn is_less_than(actual: &Value, expected: &Value) -> Verdict {
    compare(actual, expected, "<", Ordering::Less)
}

pub fn not_null(value: &Value) -> Verdict {
    Verdict::from_bool(!value.is_null(), "not null", typed(value))
}

pub fn is_null(value: &Value) -> Verdict {
    Verdict::from_bool(value.is_null(), "null", typed(value))
}

pub fn is_defined(value: &Value) -> Verdict {
    Verdict::from_bool(!value.is_absent(), "a defined value", typed(value))
}

pub fn is_undefined(value: &Value) -> Verdict {
    Verdict::from_bool(value.is_absent(), "undefined", typed(value))
}

pub fn is_number(value: &Value) -> Verdict {
    let pass = match value {
        Value::Int(_) => true,
        Value::Number(n) => !n.is_nan(),
        _ => false,
    };
    Verdict::from_bool(pass, "a number (not NaN)", typed(value))
}

pub fn is_string(value: &Value) -> Verdict {
    Verdict::from_bool(matches!(value, Value::String(_)), "a string", typed(value))
}

/// One failed check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub check: Check,
    pub description: String,
    pub expected: String,
    pub actual: String,

    /// Rendered message: `[check] description`, then expected and actual lines
    pub message: String,

    pub recorded_at: DateTime<Utc>,
}

impl FailureRecord {
    pub fn new(check: Check, description: &str, expected: String, actual: String) -> Self {
        let message = format!(
            "[{}] {}\n  expected: {}\n  actual:   {}",
            check, description, expected, actual
        );
        Self {
            check,
            description: description.to_string(),
            expected,
            actual,
            message,
            recorded_at: Utc::now(),
        }
    }
}
