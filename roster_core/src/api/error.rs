use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};

/// The body of every rejected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// One entry per failed rule, in the order the rules are declared.
    pub errors: Vec<ValidationError>,
}
