//! Color temperature control in mireds.

use serde::{Deserialize, Serialize};

/// Color temperature in mireds, from 154 (cool) to 500 (warm).
///
/// The bridge uses the mired scale (1,000,000 / Kelvin), so lower values are
/// cooler: 154 is roughly 6500K daylight, 500 is roughly 2000K candlelight.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColorTemp {
    pub(crate) value: u16,
}

impl ColorTemp {
    pub const MIN: u16 = 154;
    pub const MAX: u16 = 500;
    const DEFAULT: u16 = 366;

    /// Create a new ColorTemp with the default value (366, warm white).
    pub fn new() -> Self {
        ColorTemp {
            value: Self::DEFAULT,
        }
    }

    /// Get the mired value.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Create a new ColorTemp with the given mired value.
    ///
    /// Returns `None` if value is outside the valid range (154-500).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorTemp;
    ///
    /// assert!(ColorTemp::create(153).is_none());
    /// assert!(ColorTemp::create(154).is_some());
    /// assert!(ColorTemp::create(500).is_some());
    /// assert!(ColorTemp::create(501).is_none());
    /// ```
    pub fn create(value: u16) -> Option<Self> {
        if Self::is_valid(value) {
            Some(ColorTemp { value })
        } else {
            None
        }
    }

    /// Create a ColorTemp, using the default if value is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::ColorTemp;
    ///
    /// assert_eq!(ColorTemp::create_or(250).value(), 250);
    /// assert_eq!(ColorTemp::create_or(1000).value(), 366);
    /// ```
    pub fn create_or(value: u16) -> Self {
        if Self::is_valid(value) {
            ColorTemp { value }
        } else {
            Self::new()
        }
    }

    fn is_valid(value: u16) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
