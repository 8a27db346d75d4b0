use serde::{Deserialize, Serialize};

/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a state document to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// The bridge's response body was not valid JSON.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    /// A transport-level failure (DNS, refused, reset) that survived the
    /// retry budget.
    #[error("request failed after {attempts} attempts: {source}")]
    Connection {
        attempts: u32,
        source: reqwest::Error,
    },

    /// The request exceeded the connect/read timeouts on every attempt.
    #[error("request timeout after {attempts} attempts: {source}")]
    Timeout {
        attempts: u32,
        source: reqwest::Error,
    },

    /// The bridge rejected the configured credential (HTTP 401).
    #[error("invalid username/authentication")]
    Unauthorized,

    /// The requested resource does not exist on the bridge (HTTP 404).
    #[error("resource not found: {endpoint}")]
    NotFound { endpoint: String },

    /// A non-success HTTP status that survived the retry budget.
    #[error("unexpected http status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The retry loop ended without producing a response or a classified
    /// failure.
    #[error("unexpected error in request handling")]
    RetriesExhausted,

    /// The bridge answered with a structured error object.
    #[error("bridge error: {}", .0.description)]
    Bridge(ApiError),

    /// Reserved for explicit limiter-exhaustion signaling; the limiter
    /// currently waits instead of failing, so the core never constructs this.
    #[error("rate limit exceeded")]
    RateLimited,

    /// The light id is outside the addressable range.
    #[error("Light ID {0} is not valid. Must be 1-17.")]
    InvalidLightId(u8),

    /// The room name is not present in the room map.
    #[error("Unknown room '{room}'. Available rooms: {available}")]
    UnknownRoom { room: String, available: String },

    /// The action string is not one of the supported verbs.
    #[error("Invalid action '{0}'. Must be 'on', 'off', or 'toggle'.")]
    InvalidAction(String),

    /// A numeric parameter fell outside its documented range.
    #[error("{field} {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration for {field}: {reason}")]
    Config { field: &'static str, reason: String },
}

impl Error {
    /// Create a new not found error
    pub fn not_found(endpoint: &str) -> Self {
        Error::NotFound {
            endpoint: endpoint.to_string(),
        }
    }

    /// Create a new unexpected status error
    pub fn unexpected_status(status: u16, endpoint: &str) -> Self {
        Error::UnexpectedStatus {
            status,
            endpoint: endpoint.to_string(),
        }
    }

    /// Create a new unknown room error from the list of known names
    pub fn unknown_room(room: &str, available: &[&str]) -> Self {
        Error::UnknownRoom {
            room: room.to_string(),
            available: available.join(", "),
        }
    }

    /// Create a new out of range error
    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create a new configuration error
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Config {
            field,
            reason: reason.into(),
        }
    }

    /// Stable identifier for the failure class.
    ///
    /// Tool-facing results carry this tag instead of the Rust type name, so
    /// callers can branch on it without parsing messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Error;
    ///
    /// assert_eq!(Error::Unauthorized.kind(), "connection");
    /// assert_eq!(Error::InvalidLightId(99).kind(), "validation");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Error::ClientBuild(_)
            | Error::Connection { .. }
            | Error::Unauthorized
            | Error::UnexpectedStatus { .. }
            | Error::RetriesExhausted => "connection",
            Error::Timeout { .. } => "timeout",
            Error::NotFound { .. }
            | Error::InvalidLightId(_)
            | Error::UnknownRoom { .. }
            | Error::InvalidAction(_)
            | Error::OutOfRange { .. }
            | Error::Config { .. }
            | Error::JsonDump(_) => "validation",
            Error::RateLimited => "rate_limit",
            Error::Bridge(_) | Error::JsonLoad(_) => "bridge",
        }
    }
}

/// Error object carried in the bridge's JSON error envelope.
///
/// The bridge reports semantic rejections as
/// `[{"error": {"type": .., "address": .., "description": ..}}]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub code: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
