//! Value types for light control parameters.

mod action;
mod brightness;
mod color;
mod color_temp;
mod hue_sat;
mod light_id;

pub use action::Action;
pub use brightness::Brightness;
pub use color::{Rgb, Xy};
pub use color_temp::ColorTemp;
pub use hue_sat::HueSat;
pub use light_id::LightId;
