//! Outbound state documents for light and group commands.

use serde::{Deserialize, Serialize};

use crate::types::{Brightness, ColorTemp, HueSat, Rgb, Xy};

/// A state document to send to the bridge.
///
/// State updates can carry multiple attributes (power, brightness, one color
/// representation) that the bridge applies in a single command. Absent
/// attributes are skipped during serialization and left untouched on the
/// light.
///
/// # Creating state updates
///
/// You can create an update in two ways:
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use hue_lights_rs::{ColorTemp, StateUpdate};
///    let state = StateUpdate::from(&ColorTemp::create(366).unwrap());
///    ```
///
/// 2. **Builder pattern** for combining multiple attributes:
///    ```
///    use hue_lights_rs::{Brightness, Rgb, StateUpdate};
///    let mut state = StateUpdate::new();
///    state.on(true);
///    state.brightness(&Brightness::create(200).unwrap());
///    state.rgb(&Rgb::new(255, 128, 0));
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StateUpdate {
    pub(crate) on: Option<bool>,
    pub(crate) bri: Option<u8>,
    pub(crate) ct: Option<u16>,
    pub(crate) xy: Option<[f64; 2]>,
    pub(crate) hue: Option<u16>,
    pub(crate) sat: Option<u8>,
}

impl StateUpdate {
    /// Create a new empty state update.
    ///
    /// At least one attribute must be set before sending it anywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::StateUpdate;
    ///
    /// let state = StateUpdate::new();
    /// assert_eq!(state.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this update contains at least one attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::StateUpdate;
    ///
    /// let mut state = StateUpdate::new();
    /// state.on(false);
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn is_valid(&self) -> bool {
        self.on.is_some()
            || self.bri.is_some()
            || self.ct.is_some()
            || self.xy.is_some()
            || (self.hue.is_some() && self.sat.is_some())
    }

    /// Set the power state.
    pub fn on(&mut self, on: bool) {
        self.on = Some(on);
    }

    /// Set the brightness level.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{Brightness, StateUpdate};
    ///
    /// let mut state = StateUpdate::new();
    /// state.brightness(&Brightness::create(128).unwrap());
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn brightness(&mut self, brightness: &Brightness) {
        self.bri = Some(brightness.value());
    }

    /// Set the color temperature.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{ColorTemp, StateUpdate};
    ///
    /// let mut state = StateUpdate::new();
    /// state.color_temp(&ColorTemp::create(366).unwrap());
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn color_temp(&mut self, ct: &ColorTemp) {
        self.ct = Some(ct.value());
    }

    /// Set the color as xy chromaticity coordinates.
    pub fn xy(&mut self, xy: &Xy) {
        self.xy = Some([xy.x, xy.y]);
    }

    /// Set the color from RGB, converted to xy chromaticity.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{Rgb, StateUpdate};
    ///
    /// let mut state = StateUpdate::new();
    /// state.rgb(&Rgb::new(0, 0, 255));
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn rgb(&mut self, rgb: &Rgb) {
        self.xy(&rgb.to_xy());
    }

    /// Set the color using hue and saturation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{HueSat, StateUpdate};
    ///
    /// let mut state = StateUpdate::new();
    /// state.hue_sat(&HueSat::create(46920, 254).unwrap());
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn hue_sat(&mut self, hs: &HueSat) {
        self.hue = Some(hs.hue());
        self.sat = Some(hs.saturation());
    }
}

impl From<&Rgb> for StateUpdate {
    fn from(rgb: &Rgb) -> Self {
        let mut state = StateUpdate::new();
        state.rgb(rgb);
        state
    }
}

impl From<&ColorTemp> for StateUpdate {
    fn from(ct: &ColorTemp) -> Self {
        let mut state = StateUpdate::new();
        state.color_temp(ct);
        state
    }
}

impl From<&Brightness> for StateUpdate {
    fn from(brightness: &Brightness) -> Self {
        let mut state = StateUpdate::new();
        state.brightness(brightness);
        state
    }
}

impl From<&HueSat> for StateUpdate {
    fn from(hs: &HueSat) -> Self {
        let mut state = StateUpdate::new();
        state.hue_sat(hs);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attributes_are_skipped() {
        let mut state = StateUpdate::new();
        state.on(true);
        state.brightness(&Brightness::create(200).unwrap());

        let value = serde_json::to_value(&state).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["on"], true);
        assert_eq!(object["bri"], 200);
    }

    #[test]
    fn test_xy_serializes_as_pair() {
        let mut state = StateUpdate::new();
        state.rgb(&Rgb::new(255, 255, 255));

        let value = serde_json::to_value(&state).unwrap();
        let xy = value["xy"].as_array().unwrap();
        assert_eq!(xy.len(), 2);
        assert!((xy[0].as_f64().unwrap() - 0.3127).abs() < 0.005);
        assert!((xy[1].as_f64().unwrap() - 0.3290).abs() < 0.005);
    }

    #[test]
    fn test_hue_sat_set_together() {
        let mut state = StateUpdate::new();
        state.hue_sat(&HueSat::create(0, 254).unwrap());

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["hue"], 0);
        assert_eq!(value["sat"], 254);
        assert!(value.get("xy").is_none());
    }
}
