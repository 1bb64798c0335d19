use popover_placement::position_dump::PositionDump;
use popover_placement::{PlacementConfig, parse_scenarios};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacementOptions {
    arrow_offset: Option<f32>,
    explain: Option<bool>,
}

fn build_placement_config(options: &PlacementOptions) -> Result<PlacementConfig, String> {
    let mut config = PlacementConfig::default();
    if let Some(arrow_offset) = options.arrow_offset {
        if !arrow_offset.is_finite() || arrow_offset < 0.0 {
            return Err(format!(
                "arrowOffset must be a non-negative number, got {arrow_offset}"
            ));
        }
        config.arrow_offset = arrow_offset;
    }
    Ok(config)
}

fn calculate(scenario_json: &str, options: PlacementOptions) -> Result<String, String> {
    let config = build_placement_config(&options)?;
    let explain = options.explain.unwrap_or(false);
    let scenarios = parse_scenarios(scenario_json).map_err(|error| error.to_string())?;
    let dumps: Vec<PositionDump> = scenarios
        .iter()
        .map(|scenario| PositionDump::from_scenario(scenario, &config, explain))
        .collect();
    let json = match dumps.as_slice() {
        [single] => serde_json::to_string(single),
        _ => serde_json::to_string(&dumps),
    };
    json.map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn calculate_position_json(
    scenario_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<PlacementOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        PlacementOptions::default()
    };

    calculate(scenario_json, options).map_err(|error| JsValue::from_str(&error))
}
