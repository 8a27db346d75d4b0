//! Light and room control orchestration.

use std::str::FromStr;
use std::sync::Arc;

use futures::future::join_all;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Semaphore;

use crate::client::BridgeClient;
use crate::errors::Error;
use crate::light::{LightCapability, LightInfo};
use crate::response::{BridgeInfo, ControlResponse, LightResult};
use crate::rooms::{RoomMap, RoomTarget};
use crate::state::StateUpdate;
use crate::types::{Action, Brightness, ColorTemp, HueSat, LightId, Rgb};

type Result<T> = std::result::Result<T, Error>;

/// A single-light control request.
///
/// Fields arrive as raw numbers from the caller and are re-validated through
/// the crate's value types before anything touches the bridge. RGB takes
/// effect only when all three channels are present; hue/saturation only when
/// both are.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightCommand {
    pub light_id: u8,
    /// `"on"`, `"off"`, or `"toggle"`.
    pub action: String,
    pub brightness: Option<u8>,
    pub color_temp: Option<u16>,
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
    pub hue: Option<u16>,
    pub saturation: Option<u8>,
}

/// A room-level control request; same options as [`LightCommand`], applied
/// to every light in the room.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomCommand {
    pub room: String,
    /// `"on"`, `"off"`, or `"toggle"`.
    pub action: String,
    pub brightness: Option<u8>,
    pub color_temp: Option<u16>,
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
    pub hue: Option<u16>,
    pub saturation: Option<u8>,
}

/// Validated optional parameters shared by light and room commands.
struct CommandParams {
    brightness: Option<Brightness>,
    color_temp: Option<ColorTemp>,
    rgb: Option<Rgb>,
    hue_sat: Option<HueSat>,
}

impl LightCommand {
    /// Shorthand for a command with no brightness or color options.
    pub fn new(light_id: u8, action: &str) -> Self {
        LightCommand {
            light_id,
            action: action.to_string(),
            ..Default::default()
        }
    }

    fn params(&self) -> Result<CommandParams> {
        validate_params(
            self.brightness,
            self.color_temp,
            (self.red, self.green, self.blue),
            self.hue,
            self.saturation,
        )
    }
}

impl RoomCommand {
    /// Shorthand for a command with no brightness or color options.
    pub fn new(room: &str, action: &str) -> Self {
        RoomCommand {
            room: room.to_string(),
            action: action.to_string(),
            ..Default::default()
        }
    }

    fn params(&self) -> Result<CommandParams> {
        validate_params(
            self.brightness,
            self.color_temp,
            (self.red, self.green, self.blue),
            self.hue,
            self.saturation,
        )
    }

    fn light_command(&self, light_id: u8) -> LightCommand {
        LightCommand {
            light_id,
            action: self.action.clone(),
            brightness: self.brightness,
            color_temp: self.color_temp,
            red: self.red,
            green: self.green,
            blue: self.blue,
            hue: self.hue,
            saturation: self.saturation,
        }
    }
}

fn validate_params(
    brightness: Option<u8>,
    color_temp: Option<u16>,
    (red, green, blue): (Option<u8>, Option<u8>, Option<u8>),
    hue: Option<u16>,
    saturation: Option<u8>,
) -> Result<CommandParams> {
    let brightness = match brightness {
        Some(value) => Some(
            Brightness::create(value)
                .ok_or_else(|| Error::out_of_range("brightness", value as i64, 1, 254))?,
        ),
        None => None,
    };
    let color_temp = match color_temp {
        Some(value) => Some(
            ColorTemp::create(value)
                .ok_or_else(|| Error::out_of_range("color_temp", value as i64, 154, 500))?,
        ),
        None => None,
    };
    let rgb = match (red, green, blue) {
        (Some(r), Some(g), Some(b)) => Some(Rgb::new(r, g, b)),
        _ => None,
    };
    let hue_sat = match (hue, saturation) {
        (Some(h), Some(s)) => Some(
            HueSat::create(h, s)
                .ok_or_else(|| Error::out_of_range("saturation", s as i64, 0, 254))?,
        ),
        _ => None,
    };

    Ok(CommandParams {
        brightness,
        color_temp,
        rgb,
        hue_sat,
    })
}

fn parse_action(action: &str) -> Result<Action> {
    Action::from_str(action).map_err(|_| Error::InvalidAction(action.to_string()))
}

/// Build the state document for a resolved action.
///
/// One color representation at most is chosen, by priority RGB >
/// hue/saturation > color temperature, gated on what the light supports. The
/// broadcast path never queries group capability, so it passes
/// `Color { color_temp: true }` to allow every representation and maps
/// `Toggle` to a plain off.
fn build_state(action: Action, params: &CommandParams, capability: LightCapability) -> StateUpdate {
    let mut state = StateUpdate::new();
    match action {
        Action::On => {
            state.on(true);
            if let Some(brightness) = &params.brightness {
                state.brightness(brightness);
            }
            if capability.supports_color() {
                if let Some(rgb) = &params.rgb {
                    state.rgb(rgb);
                } else if let Some(hue_sat) = &params.hue_sat {
                    state.hue_sat(hue_sat);
                } else if capability.supports_color_temp() {
                    if let Some(color_temp) = &params.color_temp {
                        state.color_temp(color_temp);
                    }
                }
            } else if capability.supports_color_temp() {
                if let Some(color_temp) = &params.color_temp {
                    state.color_temp(color_temp);
                }
            }
        }
        Action::Off | Action::Toggle => state.on(false),
    }
    state
}

/// Orchestrates light and room operations over a [`BridgeClient`].
///
/// Every public operation resolves to a [`ControlResponse`]; errors are
/// caught at this boundary and converted into failure-flagged results, so
/// callers never see an `Err`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use hue_lights_rs::{
///     BridgeClient, BridgeConfig, LightCommand, LightManager, RateLimiter,
/// };
///
/// # async fn run() -> Result<(), hue_lights_rs::Error> {
/// let config = BridgeConfig::from_env()?;
/// let limiter = Arc::new(RateLimiter::from_config(&config));
/// let client = BridgeClient::new(&config, limiter)?;
/// let manager = LightManager::new(Arc::new(client));
///
/// let mut command = LightCommand::new(7, "on");
/// command.brightness = Some(200);
/// let response = manager.control_light(&command).await;
/// println!("{}", response.message);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LightManager {
    client: Arc<BridgeClient>,
    rooms: RoomMap,
}

impl LightManager {
    /// Concurrent in-flight light operations during a room fan-out.
    const MAX_CONCURRENT: usize = 5;

    /// Manager with the default room map.
    pub fn new(client: Arc<BridgeClient>) -> Self {
        Self::with_rooms(client, RoomMap::default())
    }

    /// Manager with a custom room map.
    pub fn with_rooms(client: Arc<BridgeClient>, rooms: RoomMap) -> Self {
        LightManager { client, rooms }
    }

    /// Control an individual light.
    pub async fn control_light(&self, command: &LightCommand) -> ControlResponse {
        match self.control_light_inner(command).await {
            Ok(response) => response,
            Err(e) => {
                error!("failed to control light {}: {e}", command.light_id);
                ControlResponse::failure(&e)
            }
        }
    }

    async fn control_light_inner(&self, command: &LightCommand) -> Result<ControlResponse> {
        let id = LightId::create(command.light_id)
            .ok_or(Error::InvalidLightId(command.light_id))?;
        let action = parse_action(&command.action)?;
        let params = command.params()?;

        // Fresh fetch on every call; lights change out-of-band.
        let raw = self.client.get_light(id).await?;
        let info: LightInfo = serde_json::from_value(raw).map_err(Error::JsonLoad)?;
        let capability = LightCapability::from_info(&info);

        let resolved = match action {
            Action::Toggle => {
                if info.state.on {
                    Action::Off
                } else {
                    Action::On
                }
            }
            other => other,
        };

        let state = build_state(resolved, &params, capability);
        let result = self.client.control_light(id, &state).await?;

        info!("successfully controlled light {}: {action}", id.value());
        Ok(
            ControlResponse::ok(
                format!("Light {} {} successfully", id.value(), action),
                Some(result),
            )
            .with_lights(vec![id.value()]),
        )
    }

    /// Control every light in a room.
    ///
    /// `"all"` broadcasts one group command; any other room fans out
    /// per-light operations concurrently and aggregates the outcomes.
    pub async fn control_room(&self, command: &RoomCommand) -> ControlResponse {
        match self.control_room_inner(command).await {
            Ok(response) => response,
            Err(e) => {
                error!("failed to control room {}: {e}", command.room);
                ControlResponse::failure(&e)
            }
        }
    }

    async fn control_room_inner(&self, command: &RoomCommand) -> Result<ControlResponse> {
        let target = self
            .rooms
            .resolve(&command.room)
            .ok_or_else(|| Error::unknown_room(&command.room, &self.rooms.available()))?
            .clone();

        match target {
            RoomTarget::AllLights => self.control_all_lights(command).await,
            RoomTarget::Lights(ids) => self.fan_out(&command.room, &ids, command).await,
        }
    }

    /// Broadcast to the all-lights group.
    ///
    /// Group capability is never queried, so every color representation is
    /// allowed and toggle degrades to off.
    async fn control_all_lights(&self, command: &RoomCommand) -> Result<ControlResponse> {
        let action = parse_action(&command.action)?;
        let params = command.params()?;

        let state = build_state(action, &params, LightCapability::Color { color_temp: true });
        let result = self
            .client
            .control_group(RoomMap::ALL_LIGHTS_GROUP, &state)
            .await?;

        info!("successfully controlled all lights: {action}");
        Ok(
            ControlResponse::ok(format!("All lights {action} successfully"), Some(result))
                .with_lights(RoomMap::all_light_ids()),
        )
    }

    /// Run per-light operations concurrently and aggregate the outcomes.
    ///
    /// Individual failures are isolated in their [`LightResult`] and never
    /// cancel sibling operations.
    async fn fan_out(
        &self,
        room: &str,
        ids: &[u8],
        command: &RoomCommand,
    ) -> Result<ControlResponse> {
        let semaphore = Arc::new(Semaphore::new(Self::MAX_CONCURRENT));

        let tasks = ids.iter().map(|&light_id| {
            let semaphore = Arc::clone(&semaphore);
            let light_command = command.light_command(light_id);
            async move {
                let _permit = semaphore.acquire().await.ok();
                let result = self.control_light(&light_command).await;
                if !result.success {
                    warn!("light {light_id} failed during room fan-out: {}", result.message);
                }
                LightResult {
                    light_id,
                    success: result.success,
                    result,
                }
            }
        });
        let results: Vec<LightResult> = join_all(tasks).await;

        let success_count = results.iter().filter(|r| r.success).count();
        let failed_count = results.len() - success_count;
        info!(
            "room control completed: {success_count}/{} lights successful",
            ids.len()
        );

        let details = serde_json::to_value(&results).map_err(Error::JsonDump)?;
        Ok(ControlResponse {
            success: failed_count == 0,
            message: format!("Controlled {success_count}/{} lights in {room}", ids.len()),
            data: Some(json!({
                "successful_operations": success_count,
                "failed_operations": failed_count,
                "details": details,
            })),
            lights_affected: Some(ids.to_vec()),
        })
    }

    /// Fetch the raw document of a single light.
    pub async fn get_light_status(&self, light_id: u8) -> ControlResponse {
        match self.get_light_status_inner(light_id).await {
            Ok(response) => response,
            Err(e) => {
                error!("failed to get light {light_id} status: {e}");
                ControlResponse::failure(&e)
            }
        }
    }

    async fn get_light_status_inner(&self, light_id: u8) -> Result<ControlResponse> {
        let id = LightId::create(light_id).ok_or(Error::InvalidLightId(light_id))?;
        let state = self.client.get_light(id).await?;
        Ok(ControlResponse::ok(
            format!("Retrieved status for light {light_id}"),
            Some(state),
        ))
    }

    /// Fetch the bridge's full light collection unmodified.
    pub async fn list_lights(&self) -> ControlResponse {
        match self.client.get_lights().await {
            Ok(lights) => {
                let count = lights.as_object().map_or(0, |map| map.len());
                ControlResponse::ok(format!("Retrieved {count} lights"), Some(lights))
            }
            Err(e) => {
                error!("failed to list lights: {e}");
                ControlResponse::failure(&e)
            }
        }
    }

    /// Fetch bridge configuration and republish the normalized subset.
    pub async fn discover_bridge(&self) -> ControlResponse {
        match self.discover_bridge_inner().await {
            Ok(response) => response,
            Err(e) => {
                error!("failed to discover bridge: {e}");
                ControlResponse::failure(&e)
            }
        }
    }

    async fn discover_bridge_inner(&self) -> Result<ControlResponse> {
        let config = self.client.get_config().await?;
        let info: BridgeInfo = serde_json::from_value(config).map_err(Error::JsonLoad)?;
        let data = serde_json::to_value(&info).map_err(Error::JsonDump)?;
        Ok(ControlResponse::ok("Bridge connection successful", Some(data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limiter::RateLimiter;
    use mockito::{Matcher, Server, ServerGuard};
    use std::time::Duration;

    fn manager(server: &ServerGuard) -> LightManager {
        let limiter = Arc::new(RateLimiter::new(100, Duration::from_millis(1)));
        let client = BridgeClient::for_tests(server.url(), limiter);
        LightManager::new(Arc::new(client))
    }

    fn params(
        brightness: Option<u8>,
        color_temp: Option<u16>,
        rgb: (Option<u8>, Option<u8>, Option<u8>),
        hue: Option<u16>,
        saturation: Option<u8>,
    ) -> CommandParams {
        validate_params(brightness, color_temp, rgb, hue, saturation).unwrap()
    }

    #[test]
    fn test_build_state_rgb_wins_on_color_light() {
        let full = params(
            Some(200),
            Some(366),
            (Some(0), Some(0), Some(255)),
            Some(46920),
            Some(254),
        );
        let state = build_state(
            Action::On,
            &full,
            LightCapability::Color { color_temp: true },
        );
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["on"], true);
        assert_eq!(value["bri"], 200);
        assert!(value.get("xy").is_some());
        assert!(value.get("hue").is_none());
        assert!(value.get("sat").is_none());
        assert!(value.get("ct").is_none());
    }

    #[test]
    fn test_build_state_hue_sat_without_rgb() {
        let hs_only = params(None, Some(366), (None, None, None), Some(46920), Some(254));
        let state = build_state(
            Action::On,
            &hs_only,
            LightCapability::Color { color_temp: true },
        );
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["hue"], 46920);
        assert_eq!(value["sat"], 254);
        assert!(value.get("xy").is_none());
        assert!(value.get("ct").is_none());
    }

    #[test]
    fn test_build_state_dimmable_drops_color() {
        let full = params(
            Some(128),
            Some(366),
            (Some(255), Some(0), Some(0)),
            None,
            None,
        );
        let state = build_state(Action::On, &full, LightCapability::OnOff);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["on"], true);
        assert_eq!(value["bri"], 128);
        assert!(value.get("xy").is_none());
        assert!(value.get("ct").is_none());
    }

    #[test]
    fn test_build_state_color_temp_fallback() {
        let ct_only = params(None, Some(250), (None, None, None), None, None);
        let state = build_state(Action::On, &ct_only, LightCapability::ColorTemp);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["ct"], 250);

        // A color-capable light without ct support drops the value.
        let state = build_state(
            Action::On,
            &ct_only,
            LightCapability::Color { color_temp: false },
        );
        let value = serde_json::to_value(&state).unwrap();
        assert!(value.get("ct").is_none());
    }

    #[test]
    fn test_build_state_off_only_sets_power() {
        let full = params(Some(200), Some(366), (None, None, None), None, None);
        let state = build_state(
            Action::Off,
            &full,
            LightCapability::Color { color_temp: true },
        );
        let value = serde_json::to_value(&state).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["on"], false);
    }

    #[tokio::test]
    async fn test_invalid_light_id_never_contacts_bridge() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let manager = manager(&server);

        for bad_id in [0u8, 18, 99] {
            let response = manager.control_light(&LightCommand::new(bad_id, "on")).await;
            assert!(!response.success);
            assert_eq!(response.data.unwrap()["error_kind"], "validation");
        }

        let response = manager.get_light_status(18).await;
        assert_eq!(
            response.message,
            "Light ID 18 is not valid. Must be 1-17."
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_action_fails_validation() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let manager = manager(&server);

        let response = manager.control_light(&LightCommand::new(1, "blink")).await;
        assert!(!response.success);
        assert_eq!(
            response.message,
            "Invalid action 'blink'. Must be 'on', 'off', or 'toggle'."
        );
        assert_eq!(response.data.unwrap()["error_kind"], "validation");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_out_of_range_brightness_fails_validation() {
        let server = Server::new_async().await;
        let manager = manager(&server);

        let mut command = LightCommand::new(1, "on");
        command.brightness = Some(0);
        let response = manager.control_light(&command).await;
        assert!(!response.success);
        assert_eq!(response.message, "brightness 0 is out of range (1-254)");
    }

    #[tokio::test]
    async fn test_unknown_room_lists_available() {
        let server = Server::new_async().await;
        let manager = manager(&server);

        let response = manager.control_room(&RoomCommand::new("garage", "on")).await;
        assert!(!response.success);
        assert_eq!(
            response.message,
            "Unknown room 'garage'. Available rooms: all, basement, bedroom, kitchen, living_room, office"
        );
        assert_eq!(response.data.unwrap()["error_kind"], "validation");
    }

    #[tokio::test]
    async fn test_toggle_inverts_current_state() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/lights/1")
            .with_status(200)
            .with_body(r#"{"type": "Dimmable light", "state": {"on": true}}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/lights/1/state")
            .match_body(Matcher::Json(json!({"on": false})))
            .with_status(200)
            .with_body(r#"[{"success": {"/lights/1/state/on": false}}]"#)
            .expect(1)
            .create_async()
            .await;

        let manager = manager(&server);
        let response = manager.control_light(&LightCommand::new(1, "toggle")).await;
        assert!(response.success);
        assert_eq!(response.message, "Light 1 toggle successfully");
        assert_eq!(response.lights_affected, Some(vec![1]));
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_toggle_turns_off_light_back_on() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/lights/4")
            .with_status(200)
            .with_body(r#"{"type": "Dimmable light", "state": {"on": false}}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/lights/4/state")
            .match_body(Matcher::Json(json!({"on": true})))
            .with_status(200)
            .with_body(r#"[{"success": {"/lights/4/state/on": true}}]"#)
            .expect(1)
            .create_async()
            .await;

        let manager = manager(&server);
        let response = manager.control_light(&LightCommand::new(4, "toggle")).await;
        assert!(response.success);
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_room_fan_out_aggregates_partial_failure() {
        let mut server = Server::new_async().await;
        for id in [5u8, 6, 14, 15, 16] {
            server
                .mock("GET", format!("/lights/{id}").as_str())
                .with_status(200)
                .with_body(r#"{"type": "Dimmable light", "state": {"on": false}}"#)
                .create_async()
                .await;
        }
        for id in [5u8, 6] {
            server
                .mock("PUT", format!("/lights/{id}/state").as_str())
                .with_status(200)
                .with_body(r#"[{"success": {"on": true}}]"#)
                .create_async()
                .await;
        }
        for id in [14u8, 15, 16] {
            server
                .mock("PUT", format!("/lights/{id}/state").as_str())
                .with_status(404)
                .create_async()
                .await;
        }

        let manager = manager(&server);
        let response = manager.control_room(&RoomCommand::new("basement", "on")).await;
        assert!(!response.success);
        assert_eq!(response.message, "Controlled 2/5 lights in basement");
        assert_eq!(response.lights_affected, Some(vec![5, 6, 14, 15, 16]));

        let data = response.data.unwrap();
        assert_eq!(data["successful_operations"], 2);
        assert_eq!(data["failed_operations"], 3);
        assert_eq!(data["details"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_all_lights_toggle_degrades_to_off() {
        let mut server = Server::new_async().await;
        let put = server
            .mock("PUT", "/groups/0/action")
            .match_body(Matcher::Json(json!({"on": false})))
            .with_status(200)
            .with_body(r#"[{"success": {"/groups/0/action/on": false}}]"#)
            .expect(1)
            .create_async()
            .await;

        let manager = manager(&server);
        let response = manager.control_room(&RoomCommand::new("all", "toggle")).await;
        assert!(response.success);
        assert_eq!(response.message, "All lights toggle successfully");
        assert_eq!(response.lights_affected.unwrap().len(), 17);
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_all_lights_color_skips_capability_checks() {
        let mut server = Server::new_async().await;
        let put = server
            .mock("PUT", "/groups/0/action")
            .match_body(Matcher::PartialJson(json!({"on": true, "bri": 180})))
            .with_status(200)
            .with_body(r#"[{"success": {}}]"#)
            .expect(1)
            .create_async()
            .await;

        let manager = manager(&server);
        let mut command = RoomCommand::new("all", "on");
        command.brightness = Some(180);
        command.red = Some(0);
        command.green = Some(0);
        command.blue = Some(255);
        let response = manager.control_room(&command).await;
        assert!(response.success);
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_light_status_returns_raw_document() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/lights/7")
            .with_status(200)
            .with_body(r#"{"name": "office_light", "type": "Dimmable light", "state": {"on": true, "bri": 254}}"#)
            .create_async()
            .await;

        let manager = manager(&server);
        let response = manager.get_light_status(7).await;
        assert!(response.success);
        assert_eq!(response.message, "Retrieved status for light 7");
        assert_eq!(response.data.unwrap()["state"]["bri"], 254);
    }

    #[tokio::test]
    async fn test_list_lights_counts_collection() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/lights")
            .with_status(200)
            .with_body(r#"{"1": {"name": "neals_lamp"}, "3": {"name": "living_room_lamp"}}"#)
            .create_async()
            .await;

        let manager = manager(&server);
        let response = manager.list_lights().await;
        assert!(response.success);
        assert_eq!(response.message, "Retrieved 2 lights");
    }

    #[tokio::test]
    async fn test_discover_bridge_normalizes_config() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/config")
            .with_status(200)
            .with_body(
                r#"{"name": "Philips hue", "swversion": "1963089030", "apiversion": "1.63.0",
                    "mac": "00:17:88:23:a1:89", "bridgeid": "001788FFFE23A189", "modelid": "BSB002",
                    "zigbeechannel": 25}"#,
            )
            .create_async()
            .await;

        let manager = manager(&server);
        let response = manager.discover_bridge().await;
        assert!(response.success);
        assert_eq!(response.message, "Bridge connection successful");
        let data = response.data.unwrap();
        assert_eq!(data["name"], "Philips hue");
        assert_eq!(data["bridge_id"], "001788FFFE23A189");
        assert_eq!(data["model_id"], "BSB002");
        assert!(data.get("zigbeechannel").is_none());
    }
}
