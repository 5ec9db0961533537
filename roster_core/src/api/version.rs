use serde::{Deserialize, Serialize};

/// Where the version endpoint lives.
pub const PATH: &str = "/api";

/// The version the server reports. Fixed, independent of the crate
/// version.
pub const VERSION: &str = "1.0.0";

/// What the server reports about itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// The server version.
    pub version: String,
}
