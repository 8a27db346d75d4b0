//! CLI application for controlling Hue lights.
//!
//! This example demonstrates a full command-line interface over
//! [`LightManager`], configured from environment variables.
//!
//! Run with: cargo run --example hue_cli -- --help

use std::sync::Arc;

use clap::{Parser, Subcommand};
use hue_lights_rs::{
    BridgeClient, BridgeConfig, ControlResponse, LightCommand, LightManager, RateLimiter, Rgb,
    RoomCommand, RoomMap, RoomTarget,
};

#[derive(Parser)]
#[command(name = "hue-cli")]
#[command(about = "Control Philips Hue lights from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Control a single light
    Light {
        /// Light ID (1-17)
        id: u8,

        /// Action: on, off, or toggle
        action: String,

        /// Brightness (1-254)
        #[arg(short, long, default_value = "200")]
        brightness: u8,

        /// Color temperature in mireds (154-500)
        #[arg(short, long, default_value = "366")]
        color_temp: u16,

        /// RGB color as "r,g,b" (e.g. 0,0,255)
        #[arg(long)]
        rgb: Option<Rgb>,

        /// Hue (0-65535); requires --saturation
        #[arg(long)]
        hue: Option<u16>,

        /// Saturation (0-254); requires --hue
        #[arg(long)]
        saturation: Option<u8>,
    },

    /// Control every light in a room
    Room {
        /// Room name (kitchen, bedroom, office, basement, living_room, all)
        name: String,

        /// Action: on, off, or toggle
        action: String,

        /// Brightness (1-254)
        #[arg(short, long, default_value = "200")]
        brightness: u8,

        /// Color temperature in mireds (154-500)
        #[arg(short, long, default_value = "366")]
        color_temp: u16,

        /// RGB color as "r,g,b" (e.g. 0,0,255)
        #[arg(long)]
        rgb: Option<Rgb>,

        /// Hue (0-65535); requires --saturation
        #[arg(long)]
        hue: Option<u16>,

        /// Saturation (0-254); requires --hue
        #[arg(long)]
        saturation: Option<u8>,
    },

    /// Get the current status of a light
    Status {
        /// Light ID (1-17)
        id: u8,
    },

    /// List all lights on the bridge
    List,

    /// Show the known rooms and their lights
    Rooms,

    /// List the bridge's groups
    Groups,

    /// Test the bridge connection and print its info
    Discover,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = BridgeConfig::from_env()?;
    let limiter = Arc::new(RateLimiter::from_config(&config));
    let client = Arc::new(BridgeClient::new(&config, limiter)?);
    let manager = LightManager::new(Arc::clone(&client));

    match cli.command {
        Commands::Light {
            id,
            action,
            brightness,
            color_temp,
            rgb,
            hue,
            saturation,
        } => {
            let mut command = LightCommand::new(id, &action);
            command.brightness = Some(brightness);
            command.color_temp = Some(color_temp);
            if let Some(rgb) = rgb {
                command.red = Some(rgb.red());
                command.green = Some(rgb.green());
                command.blue = Some(rgb.blue());
            }
            command.hue = hue;
            command.saturation = saturation;

            print_response(&manager.control_light(&command).await);
        }

        Commands::Room {
            name,
            action,
            brightness,
            color_temp,
            rgb,
            hue,
            saturation,
        } => {
            let mut command = RoomCommand::new(&name, &action);
            command.brightness = Some(brightness);
            command.color_temp = Some(color_temp);
            if let Some(rgb) = rgb {
                command.red = Some(rgb.red());
                command.green = Some(rgb.green());
                command.blue = Some(rgb.blue());
            }
            command.hue = hue;
            command.saturation = saturation;

            print_response(&manager.control_room(&command).await);
        }

        Commands::Status { id } => print_response(&manager.get_light_status(id).await),

        Commands::List => print_response(&manager.list_lights().await),

        Commands::Rooms => {
            let rooms = RoomMap::default();
            for room in rooms.available() {
                match rooms.resolve(room) {
                    Some(RoomTarget::Lights(ids)) => {
                        let names: Vec<String> = ids
                            .iter()
                            .map(|&id| match RoomMap::light_name(id) {
                                Some(name) => format!("{id} ({name})"),
                                None => id.to_string(),
                            })
                            .collect();
                        println!("{room}: {}", names.join(", "));
                    }
                    Some(RoomTarget::AllLights) => println!("{room}: group 0 (all lights)"),
                    None => {}
                }
            }
        }

        Commands::Groups => match client.get_groups().await {
            Ok(groups) => println!("{}", serde_json::to_string_pretty(&groups)?),
            Err(e) => eprintln!("Error fetching groups: {e}"),
        },

        Commands::Discover => print_response(&manager.discover_bridge().await),
    }

    Ok(())
}

fn print_response(response: &ControlResponse) {
    if response.success {
        println!("{}", response.message);
    } else {
        eprintln!("Error: {}", response.message);
    }
    if let Some(data) = &response.data {
        match serde_json::to_string_pretty(data) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{data}"),
        }
    }
}
