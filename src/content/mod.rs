//! Content domain: controller configuration and its loader.

mod config;
mod loader;
#[cfg(test)]
mod tests;

pub use config::{ControllerConfig, Variant};
pub use loader::{ConfigLoadError, load_controller_config, load_or_preset, parse_config};
