//! Inbound light documents and capability classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A light document as returned by `GET /lights/{id}`.
///
/// Fetched fresh before every control call: the bridge is the source of
/// truth and lights can be changed out-of-band, so nothing here is cached.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LightInfo {
    #[serde(default)]
    pub name: String,
    /// Device type string, e.g. `"Extended color light"`.
    #[serde(rename = "type", default)]
    pub light_type: String,
    #[serde(default)]
    pub state: LightState,
    #[serde(default)]
    pub capabilities: Capabilities,
}

/// The current state block inside a light document.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LightState {
    #[serde(default)]
    pub on: bool,
    pub bri: Option<u8>,
    pub ct: Option<u16>,
    pub xy: Option<[f64; 2]>,
    pub hue: Option<u16>,
    pub sat: Option<u8>,
    pub reachable: Option<bool>,
}

/// Advertised capabilities of a light.
///
/// The bridge reports controllable attributes under `capabilities.control`;
/// only the key set matters for classification, so the values stay opaque.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Capabilities {
    #[serde(default)]
    pub control: HashMap<String, Value>,
}

/// What color representations a light accepts, derived once per fetched
/// [`LightInfo`] instead of re-inspecting strings at every call site.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::{LightCapability, LightInfo};
///
/// let info: LightInfo = serde_json::from_value(serde_json::json!({
///     "name": "kitchen_1",
///     "type": "Extended color light",
///     "state": {"on": true},
/// })).unwrap();
/// assert_eq!(LightCapability::from_info(&info), LightCapability::Color { color_temp: true });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCapability {
    /// Full color support; `color_temp` records whether `ct` also works.
    Color { color_temp: bool },
    /// Tunable white only.
    ColorTemp,
    /// Plain on/off and brightness.
    OnOff,
}

/// Type strings that imply color temperature support.
const COLOR_TEMP_TYPES: [&str; 4] = [
    "color temperature light",
    "extended color light",
    "color light",
    "tunable white light",
];

/// Type strings that imply full color support.
const COLOR_TYPES: [&str; 2] = ["extended color light", "color light"];

impl LightCapability {
    /// Classify a fetched light document.
    ///
    /// The type string decides first; the `capabilities.control` key set is
    /// the fallback for bridges that report attributes without a matching
    /// type name.
    pub fn from_info(info: &LightInfo) -> Self {
        let light_type = info.light_type.to_lowercase();
        let control = &info.capabilities.control;

        let color = COLOR_TYPES.iter().any(|t| light_type.contains(t))
            || ["xy", "hue", "sat"].iter().any(|k| control.contains_key(*k));
        let color_temp = COLOR_TEMP_TYPES.iter().any(|t| light_type.contains(t))
            || control.contains_key("ct");

        if color {
            LightCapability::Color { color_temp }
        } else if color_temp {
            LightCapability::ColorTemp
        } else {
            LightCapability::OnOff
        }
    }

    pub fn supports_color(&self) -> bool {
        matches!(self, LightCapability::Color { .. })
    }

    pub fn supports_color_temp(&self) -> bool {
        matches!(
            self,
            LightCapability::Color { color_temp: true } | LightCapability::ColorTemp
        )
    }
}
