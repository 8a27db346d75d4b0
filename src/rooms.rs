//! Room-to-light mappings.

use std::collections::HashMap;

/// What a room name resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomTarget {
    /// Individual light ids, controlled per-light with capability checks.
    Lights(Vec<u8>),
    /// The bridge's all-lights group (group id 0), controlled with a single
    /// broadcast command.
    AllLights,
}

/// Static mapping from room name to lights.
///
/// Loaded once at startup and never mutated; the default map matches the
/// author's bridge, and [`RoomMap::new`] accepts a custom one.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::{RoomMap, RoomTarget};
///
/// let rooms = RoomMap::default();
/// assert_eq!(rooms.resolve("office"), Some(&RoomTarget::Lights(vec![7])));
/// assert_eq!(rooms.resolve("all"), Some(&RoomTarget::AllLights));
/// assert!(rooms.resolve("garage").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RoomMap {
    rooms: HashMap<String, RoomTarget>,
}

/// Friendly names for the bridge-assigned light ids.
///
/// Id 11 is a gap on the bridge itself (a deleted light), so it has no name.
const LIGHT_NAMES: [(u8, &str); 16] = [
    (1, "neals_lamp"),
    (2, "front_door_sconce"),
    (3, "living_room_lamp"),
    (4, "caseys_lamp"),
    (5, "under_droor_left"),
    (6, "craft_room_1"),
    (7, "office_light"),
    (8, "front_porch_1"),
    (9, "front_porch_2"),
    (10, "kitchen_1"),
    (12, "kitchen_2"),
    (13, "kitchen_3"),
    (14, "craft_room_2"),
    (15, "under_droor_right"),
    (16, "basement_door"),
    (17, "stove_2"),
];

impl RoomMap {
    /// All-lights group id on the bridge.
    pub const ALL_LIGHTS_GROUP: u8 = 0;

    /// Build a map from explicit room entries.
    pub fn new(rooms: HashMap<String, RoomTarget>) -> Self {
        RoomMap { rooms }
    }

    /// Look up a room by name.
    pub fn resolve(&self, room: &str) -> Option<&RoomTarget> {
        self.rooms.get(room)
    }

    /// Known room names, sorted for stable error messages.
    pub fn available(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every light id addressable through the all-lights group.
    pub fn all_light_ids() -> Vec<u8> {
        (1..=17).collect()
    }

    /// Friendly name for a light id, if one is known.
    pub fn light_name(id: u8) -> Option<&'static str> {
        LIGHT_NAMES
            .iter()
            .find(|(light_id, _)| *light_id == id)
            .map(|(_, name)| *name)
    }
}

impl Default for RoomMap {
    fn default() -> Self {
        let mut rooms = HashMap::new();
        rooms.insert("kitchen".to_string(), RoomTarget::Lights(vec![10, 12, 13, 17]));
        rooms.insert("bedroom".to_string(), RoomTarget::Lights(vec![1, 4]));
        rooms.insert("office".to_string(), RoomTarget::Lights(vec![7]));
        rooms.insert(
            "basement".to_string(),
            RoomTarget::Lights(vec![5, 6, 14, 15, 16]),
        );
        rooms.insert("living_room".to_string(), RoomTarget::Lights(vec![3]));
        rooms.insert("all".to_string(), RoomTarget::AllLights);
        RoomMap { rooms }
    }
}
