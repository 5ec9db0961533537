use crate::store::Record;
use crate::validate::{Check, FieldChecks, Rule};

/// Where the register endpoint lives.
pub const PATH: &str = "/api/register";

/// Reported when a name carries digits, punctuation, or whitespace.
pub const NAME_NOT_ALPHABETIC: &str = "Name must have only alphabetical characters.";

/// Reported when a name is too short or too long.
pub const NAME_BAD_LENGTH: &str = "Name must be between 2 and 50 characters.";

/// The checks a registration must pass.
pub const CHECKS: &[FieldChecks] = &[FieldChecks {
    field: "name",
    checks: &[
        Check {
            rule: Rule::Alphabetic,
            message: NAME_NOT_ALPHABETIC,
        },
        Check {
            rule: Rule::Length { min: 2, max: 50 },
            message: NAME_BAD_LENGTH,
        },
    ],
}];

/// The request to register a new user: an open-ended record that must
/// carry a valid `name`. The whole record is stored as submitted.
pub type Req = Record;

/// The stored record, echoed back. Its position in the store is the new
/// user's ID.
pub type Resp = Record;
