use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distance from the body corner to the arrow on corner placements
/// (`top-right`, `right-bottom`, ...).
pub const DEFAULT_ARROW_OFFSET: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    pub arrow_offset: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            arrow_offset: DEFAULT_ARROW_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub placement: PlacementConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PlacementConfigFile {
    arrow_offset: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    placement: Option<PlacementConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(contents)?,
    };

    let mut config = Config::default();
    if let Some(placement) = parsed.placement {
        if let Some(v) = placement.arrow_offset {
            if !v.is_finite() || v < 0.0 {
                return Err(anyhow::anyhow!(
                    "placement.arrowOffset must be a non-negative number, got {v}"
                ));
            }
            config.placement.arrow_offset = v;
        }
    }
    Ok(config)
}
