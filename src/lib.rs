//! # hue_lights_rs
//!
//! An async Rust library for controlling Philips Hue smart lights through
//! the bridge's local HTTP API.
//!
//! This crate maps high-level intents ("turn kitchen lights blue at 80%
//! brightness") into validated bridge state documents, executes them under
//! the bridge's documented rate limits, and aggregates partial-failure
//! results across multi-light operations.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use hue_lights_rs::{BridgeClient, BridgeConfig, LightManager, RateLimiter, RoomCommand};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads HUE_BRIDGE_IP and HUE_USERNAME from the environment
//!     let config = BridgeConfig::from_env()?;
//!     let limiter = Arc::new(RateLimiter::from_config(&config));
//!     let client = BridgeClient::new(&config, limiter)?;
//!     let manager = LightManager::new(Arc::new(client));
//!
//!     // Turn the kitchen blue at 80% brightness
//!     let mut command = RoomCommand::new("kitchen", "on");
//!     command.brightness = Some(200);
//!     command.red = Some(0);
//!     command.green = Some(0);
//!     command.blue = Some(255);
//!
//!     let response = manager.control_room(&command).await;
//!     println!("{}", response.message);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Per-light and per-room control**: on/off/toggle, brightness, color
//!   temperature, RGB, and hue/saturation via [`LightManager`]
//! - **Capability-aware color**: one representation per command, chosen by
//!   priority RGB > hue/saturation > color temperature and gated on the
//!   light's advertised [`LightCapability`]
//! - **Rate limiting**: a shared [`RateLimiter`] enforces the bridge's
//!   per-light token bucket and per-group interval proactively
//! - **Retry and classification**: [`BridgeClient`] retries transient
//!   failures with exponential backoff and converts the bridge's response
//!   envelope into typed [`Error`]s
//! - **Failures as data**: every manager operation returns a structured
//!   [`ControlResponse`] instead of propagating errors
//!
//! ## Communication
//!
//! All communication goes over plain HTTP to the bridge on the local
//! network (`http://{ip}/api/{username}`). The credential comes from the
//! bridge's one-time link-button pairing flow, which is outside this
//! crate's scope.

mod client;
mod config;
mod errors;
mod light;
mod limiter;
mod manager;
mod response;
mod rooms;
mod state;
mod types;

// Re-export public API
pub use client::BridgeClient;
pub use config::BridgeConfig;
pub use errors::{ApiError, Error};
pub use light::{Capabilities, LightCapability, LightInfo, LightState};
pub use limiter::RateLimiter;
pub use manager::{LightCommand, LightManager, RoomCommand};
pub use response::{BridgeInfo, ControlResponse, LightResult};
pub use rooms::{RoomMap, RoomTarget};
pub use state::StateUpdate;
pub use types::{Action, Brightness, ColorTemp, HueSat, LightId, Rgb, Xy};
