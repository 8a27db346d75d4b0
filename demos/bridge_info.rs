//! Minimal example: connect to the bridge and print its info.
//!
//! Expects HUE_BRIDGE_IP and HUE_USERNAME in the environment.
//!
//! Run with: cargo run --example bridge_info

use std::sync::Arc;

use hue_lights_rs::{BridgeClient, BridgeConfig, LightManager, RateLimiter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = BridgeConfig::from_env()?;
    println!("Connecting to bridge at {}...", config.bridge_ip);

    let limiter = Arc::new(RateLimiter::from_config(&config));
    let client = BridgeClient::new(&config, limiter)?;

    if !client.test_connection().await {
        eprintln!("Could not reach the bridge. Check HUE_BRIDGE_IP and HUE_USERNAME.");
        std::process::exit(1);
    }

    let manager = LightManager::new(Arc::new(client));
    let response = manager.discover_bridge().await;
    println!("{}", response.message);
    if let Some(data) = response.data {
        println!("  name:        {}", data["name"].as_str().unwrap_or("Unknown"));
        println!("  model:       {}", data["model_id"].as_str().unwrap_or("Unknown"));
        println!("  bridge id:   {}", data["bridge_id"].as_str().unwrap_or("Unknown"));
        println!("  mac:         {}", data["mac"].as_str().unwrap_or("Unknown"));
        println!("  sw version:  {}", data["swversion"].as_str().unwrap_or("Unknown"));
        println!("  api version: {}", data["apiversion"].as_str().unwrap_or("Unknown"));
    }

    Ok(())
}
