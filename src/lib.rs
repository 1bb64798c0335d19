#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod position;
pub mod position_dump;
pub mod scenario;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, PlacementConfig, load_config};
pub use geometry::{Rect, Size, intersect_rectangles};
pub use position::{
    CandidateReport, Placement, PositionRequest, PositionResult, PRIORITY_MAPPING, Side,
    calculate_position, calculate_position_with, evaluate_candidates,
};
pub use scenario::{Scenario, ScenarioError, parse_scenarios};
