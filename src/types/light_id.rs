//! Bridge-assigned light identifiers.

/// A light id as assigned by the bridge, from 1 to 17.
///
/// Holding a `LightId` means the id has already passed range validation.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::LightId;
///
/// assert!(LightId::create(0).is_none());
/// assert_eq!(LightId::create(17).unwrap().value(), 17);
/// assert!(LightId::create(18).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId {
    value: u8,
}

impl LightId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 17;

    /// Returns None if the id is outside the addressable range (1-17).
    pub fn create(value: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(LightId { value })
        } else {
            None
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}
