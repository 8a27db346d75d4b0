//! Control actions for lights and rooms.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The verb applied to a light or room.
///
/// `Toggle` is never sent to the bridge directly; the caller reads the
/// current power state first and substitutes `On` or `Off`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use hue_lights_rs::Action;
///
/// assert_eq!(Action::from_str("on").unwrap(), Action::On);
/// assert_eq!(Action::from_str("toggle").unwrap(), Action::Toggle);
/// assert!(Action::from_str("blink").is_err());
/// assert_eq!(Action::Off.to_string(), "off");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    On,
    Off,
    Toggle,
}
