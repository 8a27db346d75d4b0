//! Result types returned by manager operations.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::Error;

/// Outcome of a manager operation.
///
/// Every public [`LightManager`](crate::LightManager) operation resolves to
/// one of these — failures are carried as data with a stable `error_kind`
/// tag instead of propagating, so callers always get a structured result.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ControlResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
    pub lights_affected: Option<Vec<u8>>,
}

impl ControlResponse {
    /// Successful outcome with an optional data payload.
    pub fn ok(message: impl Into<String>, data: Option<Value>) -> Self {
        ControlResponse {
            success: true,
            message: message.into(),
            data,
            lights_affected: None,
        }
    }

    /// Record the light ids this operation touched.
    pub fn with_lights(mut self, lights: Vec<u8>) -> Self {
        self.lights_affected = Some(lights);
        self
    }

    /// Failed outcome carrying the error's message and kind tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ControlResponse, Error};
    ///
    /// let response = ControlResponse::failure(&Error::InvalidLightId(99));
    /// assert!(!response.success);
    /// assert_eq!(response.data.unwrap()["error_kind"], "validation");
    /// ```
    pub fn failure(error: &Error) -> Self {
        ControlResponse {
            success: false,
            message: error.to_string(),
            data: Some(json!({"error_kind": error.kind()})),
            lights_affected: None,
        }
    }
}

/// Per-light outcome inside a room fan-out.
#[derive(Debug, Serialize, Clone)]
pub struct LightResult {
    pub light_id: u8,
    pub success: bool,
    pub result: ControlResponse,
}

fn unknown() -> String {
    "Unknown".to_string()
}

/// Normalized subset of the bridge configuration document.
///
/// Fields the bridge omits come back as `"Unknown"` rather than failing the
/// whole discovery call.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BridgeInfo {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown")]
    pub swversion: String,
    #[serde(default = "unknown")]
    pub apiversion: String,
    #[serde(default = "unknown")]
    pub mac: String,
    #[serde(rename(deserialize = "bridgeid"), default = "unknown")]
    pub bridge_id: String,
    #[serde(rename(deserialize = "modelid"), default = "unknown")]
    pub model_id: String,
}
