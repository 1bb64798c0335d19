use crate::config::PlacementConfig;
use crate::position::{CandidateReport, PositionResult, Side, calculate_position_with, evaluate_candidates};
use crate::scenario::Scenario;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDump {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub preferred: Side,
    pub render_with_portal: bool,
    pub result: PositionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateReport>>,
}

impl PositionDump {
    pub fn from_scenario(scenario: &Scenario, config: &PlacementConfig, explain: bool) -> Self {
        let request = scenario.request();
        let result = calculate_position_with(config, &request);
        let candidates = explain.then(|| evaluate_candidates(config, &request));
        PositionDump {
            name: scenario.name.clone(),
            preferred: request.preferred,
            render_with_portal: request.render_with_portal,
            result,
            candidates,
        }
    }
}

/// Write one dump object, or an array when there is more than one scenario.
pub fn write_position_dump<W: Write>(writer: W, dumps: &[PositionDump]) -> anyhow::Result<()> {
    match dumps {
        [single] => serde_json::to_writer_pretty(writer, single)?,
        _ => serde_json::to_writer_pretty(writer, dumps)?,
    }
    Ok(())
}
