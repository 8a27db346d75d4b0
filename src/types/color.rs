//! RGB color input and xy chromaticity conversion.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Rgb {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Rgb {
    /// Create a color with the given RGB values.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Convert to xy chromaticity coordinates.
    ///
    /// Each channel is normalized, gamma-linearized, and transformed through
    /// the linear-sRGB-to-XYZ matrix; the chromaticity is the normalized
    /// X and Y shares. Black maps to `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Rgb;
    ///
    /// // White lands on the D65 white point.
    /// let xy = Rgb::new(255, 255, 255).to_xy();
    /// assert!((xy.x - 0.3127).abs() < 0.005);
    /// assert!((xy.y - 0.3290).abs() < 0.005);
    /// ```
    pub fn to_xy(&self) -> Xy {
        let r = linearize(self.red as f64 / 255.0);
        let g = linearize(self.green as f64 / 255.0);
        let b = linearize(self.blue as f64 / 255.0);

        let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
        let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
        let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

        let sum = x + y + z;
        if sum == 0.0 {
            return Xy { x: 0.0, y: 0.0 };
        }

        Xy {
            x: (x / sum).clamp(0.0, 1.0),
            y: (y / sum).clamp(0.0, 1.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Parse from comma-separated string (e.g., "255,128,0").
    fn from_str(s: &str) -> Result<Self, String> {
        let parts: Vec<u8> = s.split(',').map(|c| c.trim().parse().unwrap_or(0)).collect();
        if parts.len() == 3 {
            Ok(Self::new(parts[0], parts[1], parts[2]))
        } else {
            Err("Expected format: r,g,b".into())
        }
    }
}

/// A point in the bridge's xy chromaticity space, both axes in [0, 1].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

/// sRGB gamma expansion to a linear channel value.
fn linearize(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}
