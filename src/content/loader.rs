//! Loader for controller config files (RON, or JSON by extension).

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::config::{ControllerConfig, Variant};

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("invalid config in {file}: {}", .problems.join("; "))]
    Invalid { file: String, problems: Vec<String> },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse config text. `json` selects the JSON reader instead of RON.
pub fn parse_config(
    contents: &str,
    json: bool,
    file: &str,
) -> Result<ControllerConfig, ConfigLoadError> {
    let config: ControllerConfig = if json {
        serde_json::from_str(contents).map_err(|e| ConfigLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?
    } else {
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigLoadError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?
    };

    let problems = config.validate();
    if !problems.is_empty() {
        return Err(ConfigLoadError::Invalid {
            file: file.to_string(),
            problems,
        });
    }
    Ok(config)
}

/// Load and validate a controller config file.
pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ConfigLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        file: file.clone(),
        source,
    })?;

    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_config(&contents, json, &file)
}

/// Load the config, falling back to a preset when the file is unusable.
pub fn load_or_preset(path: &Path, fallback: Variant) -> ControllerConfig {
    match load_controller_config(path) {
        Ok(config) => {
            info!(
                "Loaded controller config from {}: jump={:?}, combo={}",
                path.display(),
                config.jump,
                config.combo.is_some()
            );
            config
        }
        Err(e) => {
            warn!("{e}; using {:?} preset", fallback);
            ControllerConfig::preset(fallback)
        }
    }
}
