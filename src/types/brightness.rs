//! Brightness control for Hue lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 1 to 254.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 254;
    const DEFAULT: u8 = 200;

    /// Create a new Brightness with the default level (200).
    pub fn new() -> Self {
        Brightness {
            value: Self::DEFAULT,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (1-254).
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Returns the default (200) if value is invalid.
    pub fn create_or(value: u8) -> Self {
        if Self::is_valid(value) {
            Brightness { value }
        } else {
            Self::new()
        }
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
