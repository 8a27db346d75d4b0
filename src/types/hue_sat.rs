//! Hue and saturation color representation.

use serde::{Deserialize, Serialize};

/// Hue angle and saturation in the bridge's native units.
///
/// Hue is a 16-bit angle where 0-65535 spans the color wheel (0 and 65535
/// are both red); saturation runs from 0 (white) to 254 (fully saturated).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct HueSat {
    hue: u16,
    saturation: u8,
}

impl HueSat {
    pub const SAT_MAX: u8 = 254;

    /// Create a new HueSat with the given values.
    ///
    /// Hue covers the full 16-bit range, so only the saturation can be out
    /// of range. Returns `None` if saturation exceeds 254.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::HueSat;
    ///
    /// assert!(HueSat::create(0, 254).is_some());
    /// assert!(HueSat::create(46920, 200).is_some()); // blue
    /// assert!(HueSat::create(0, 255).is_none());
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        if saturation <= Self::SAT_MAX {
            Some(HueSat { hue, saturation })
        } else {
            None
        }
    }

    /// Get the hue value.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }
}
