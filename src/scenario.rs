use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Rect, Size};
use crate::position::{PositionRequest, Side};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario input is empty")]
    Empty,
    #[error("invalid scenario document: {0}")]
    Syntax(#[from] json5::Error),
    #[error("scenario {index}{}: {message}", name_suffix(.name))]
    Invalid {
        index: usize,
        name: Option<String>,
        message: String,
    },
}

fn name_suffix(name: &Option<String>) -> String {
    name.as_deref()
        .map(|name| format!(" ({name})"))
        .unwrap_or_default()
}

/// One positioning problem as it appears in a scenario file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub preferred: Side,
    pub trigger: Rect,
    pub arrow: Size,
    pub body: Size,
    /// Defaults to the viewport when omitted.
    #[serde(default)]
    pub container: Option<Rect>,
    pub viewport: Rect,
    #[serde(default)]
    pub render_with_portal: bool,
}

impl Scenario {
    pub fn request(&self) -> PositionRequest {
        PositionRequest {
            preferred: self.preferred,
            trigger: self.trigger,
            arrow: self.arrow,
            body: self.body,
            container: self.container.unwrap_or(self.viewport),
            viewport: self.viewport,
            render_with_portal: self.render_with_portal,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScenarioDocument {
    Many(Vec<Scenario>),
    One(Box<Scenario>),
}

/// Parse a JSON or JSON5 document holding a single scenario or an array of them.
pub fn parse_scenarios(input: &str) -> Result<Vec<Scenario>, ScenarioError> {
    if input.trim().is_empty() {
        return Err(ScenarioError::Empty);
    }
    let document = match serde_json::from_str::<ScenarioDocument>(input) {
        Ok(document) => document,
        Err(_) => json5::from_str::<ScenarioDocument>(input)?,
    };
    let scenarios = match document {
        ScenarioDocument::Many(list) => list,
        ScenarioDocument::One(single) => vec![*single],
    };
    if scenarios.is_empty() {
        return Err(ScenarioError::Empty);
    }
    for (index, scenario) in scenarios.iter().enumerate() {
        validate(index, scenario)?;
    }
    Ok(scenarios)
}

// The calculator itself does not validate; reject what would make its output meaningless.
fn validate(index: usize, scenario: &Scenario) -> Result<(), ScenarioError> {
    let invalid = |message: String| ScenarioError::Invalid {
        index,
        name: scenario.name.clone(),
        message,
    };
    let mut sizes = vec![
        ("trigger", scenario.trigger.width, scenario.trigger.height),
        ("arrow", scenario.arrow.width, scenario.arrow.height),
        ("body", scenario.body.width, scenario.body.height),
        ("viewport", scenario.viewport.width, scenario.viewport.height),
    ];
    if let Some(container) = scenario.container {
        sizes.push(("container", container.width, container.height));
    }
    for (label, width, height) in sizes {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(invalid(format!(
                "{label} size must be finite and non-negative, got {width}x{height}"
            )));
        }
    }
    let origins = [
        ("trigger", scenario.trigger),
        ("viewport", scenario.viewport),
        ("container", scenario.container.unwrap_or(scenario.viewport)),
    ];
    for (label, rect) in origins {
        if !rect.top.is_finite() || !rect.left.is_finite() {
            return Err(invalid(format!("{label} origin must be finite")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "name": "centered",
        "preferred": "top",
        "trigger": {"top": 500, "left": 500, "width": 25, "height": 25},
        "arrow": {"width": 15, "height": 15},
        "body": {"width": 250, "height": 250},
        "viewport": {"top": 0, "left": 0, "width": 1000, "height": 1000}
    }"#;

    #[test]
    fn parses_single_scenario_and_defaults_container() {
        let scenarios = parse_scenarios(SINGLE).unwrap();
        assert_eq!(scenarios.len(), 1);
        let request = scenarios[0].request();
        assert_eq!(request.container, request.viewport);
        assert!(!request.render_with_portal);
        assert_eq!(scenarios[0].name.as_deref(), Some("centered"));
    }

    #[test]
    fn parses_json5_array() {
        let input = r#"[
            // portal popover in a tiny container
            {
                preferred: 'bottom',
                trigger: { top: 175, left: 175, width: 25, height: 25 },
                arrow: { width: 15, height: 15 },
                body: { width: 250, height: 250 },
                container: { top: 100, left: 100, width: 100, height: 100 },
                viewport: { top: 0, left: 0, width: 1000, height: 1000 },
                renderWithPortal: true,
            },
        ]"#;
        let scenarios = parse_scenarios(input).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert!(scenarios[0].render_with_portal);
        assert_eq!(scenarios[0].preferred, Side::Bottom);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_scenarios("  \n"), Err(ScenarioError::Empty)));
        assert!(matches!(parse_scenarios("[]"), Err(ScenarioError::Empty)));
    }

    #[test]
    fn rejects_unknown_side() {
        let input = SINGLE.replace("\"top\",", "\"middle\",");
        assert!(matches!(
            parse_scenarios(&input),
            Err(ScenarioError::Syntax(_))
        ));
    }

    #[test]
    fn rejects_negative_body() {
        let input = SINGLE.replace(r#""width": 250"#, r#""width": -250"#);
        let err = parse_scenarios(&input).unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid { index: 0, .. }));
        assert!(err.to_string().contains("(centered)"));
        assert!(err.to_string().contains("body"));
    }
}
