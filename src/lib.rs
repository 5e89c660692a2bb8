//! Buoyancy & fluid pressure teaching simulator
//!
//! Core modules:
//! - `sim`: Deterministic physics model (forces, pressure, float state)
//! - `presets`: Canned experiment scenarios
//! - `quiz`: Question bank and scoring
//! - `settings`: Persisted session state and slider ranges

pub mod presets;
pub mod quiz;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{FloatState, FluidProperties, InvalidInput, SimulationResult, SubmergedObject};

/// Simulation defaults
pub mod consts {
    use crate::sim::SubmergedObject;

    /// Default slider values on first launch and after a reset
    pub const DEFAULT_OBJECT: SubmergedObject = SubmergedObject {
        volume: 100.0,
        density: 0.8,
        depth: 10.0,
    };
}
