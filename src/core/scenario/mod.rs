//! Scenario state machine: owns the current what-if parameters and the last
//! computed snapshot handed to the view layer.

pub mod controller;
pub mod types;

pub use controller::ScenarioController;
pub use types::{
    Counterfactual, EventAnnotation, Preset, ScenarioParameters, ScenarioSnapshot,
    ScenarioWarning, DEFAULT_SAVINGS_RATE,
};
