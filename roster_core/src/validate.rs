//! Request validation. Each endpoint declares which rules apply to which
//! fields; the engine reports every rule a field fails, in declaration
//! order, with the message declared for that rule.

use crate::store::{Record, UserStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field that failed.
    pub field: String,

    /// The message declared for the failing rule.
    pub msg: String,
}

impl ValidationError {
    /// Build an error for one field/message pair.
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
        }
    }
}

/// A rule a field value can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value is text made of alphabetic characters only, at least one.
    Alphabetic,

    /// The value's character count is within `min..=max`.
    Length {
        /// Fewest acceptable characters.
        min: usize,
        /// Most acceptable characters.
        max: usize,
    },

    /// The value parses as a base-10 integer.
    Numeric,

    /// The value names an occupied position in the user store.
    ExistingUser,
}

impl Rule {
    /// Whether `value` satisfies this rule. `None` is a field that was not
    /// submitted, which no text rule accepts.
    ///
    /// `ExistingUser` only judges values that parse as integers; a value
    /// that does not parse is [`Rule::Numeric`]'s failure to report.
    pub fn evaluate(&self, value: Option<&Value>, users: &UserStore) -> bool {
        match self {
            Self::Alphabetic => as_text(value)
                .is_some_and(|text| !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())),
            Self::Length { min, max } => {
                as_text(value).is_some_and(|text| (*min..=*max).contains(&text.chars().count()))
            }
            Self::Numeric => parse_int(value).is_some(),
            Self::ExistingUser => parse_int(value)
                .map_or(true, |index| position(index).is_some_and(|p| users.contains(p))),
        }
    }
}

/// A rule paired with the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// The rule to evaluate.
    pub rule: Rule,

    /// The message reported on failure.
    pub message: &'static str,
}

/// Every check declared for one named field.
#[derive(Debug, Clone, Copy)]
pub struct FieldChecks {
    /// The field the checks read.
    pub field: &'static str,

    /// The checks, in the order their failures are reported.
    pub checks: &'static [Check],
}

/// Check `record` against the declared fields.
///
/// Every failing check contributes one error, field by field in declaration
/// order. An empty result means the record is valid.
pub fn check(record: &Record, fields: &[FieldChecks], users: &UserStore) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in fields {
        let value = record.get(field.field);

        for check in field.checks {
            if !check.rule.evaluate(value, users) {
                errors.push(ValidationError::new(field.field, check.message));
            }
        }
    }

    errors
}

/// The text a wire value is checked as: strings as-is, numbers and booleans
/// by their text form. Anything else is not text.
fn as_text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(text) => Some(Cow::Borrowed(text)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse a wire value as a base-10 integer. Accepts integer JSON numbers
/// and signed decimal strings; fractions fail.
pub fn parse_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Interpret a parsed integer as a store position.
pub fn position(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}
