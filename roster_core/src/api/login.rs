use crate::store::Record;
use crate::validate::{self, Check, FieldChecks, Rule};

/// Where the login endpoint lives.
pub const PATH: &str = "/api/login";

/// The field a login reads.
pub const FIELD: &str = "userID";

/// Reported when `userID` is missing or does not parse as a number.
pub const NOT_A_NUMBER: &str = "Authentication requires a number.";

/// Reported when `userID` names an unoccupied position.
pub const NO_SUCH_USER: &str = "That user does not exist.";

/// The checks a login must pass.
pub const CHECKS: &[FieldChecks] = &[FieldChecks {
    field: FIELD,
    checks: &[
        Check {
            rule: Rule::Numeric,
            message: NOT_A_NUMBER,
        },
        Check {
            rule: Rule::ExistingUser,
            message: NO_SUCH_USER,
        },
    ],
}];

/// The request to log in: a record carrying a `userID`, which may arrive
/// as a JSON number or a string.
pub type Req = Record;

/// The stored record at the submitted position.
pub type Resp = Record;

/// The store position named by the request's `userID`, if it parses as
/// one.
pub fn user_id(record: &Record) -> Option<usize> {
    validate::parse_int(record.get(FIELD)).and_then(validate::position)
}
