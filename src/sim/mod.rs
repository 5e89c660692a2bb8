//! Deterministic physics model
//!
//! All domain computation lives here. This module must be pure and stateless:
//! - Fixed fluid constants, read-only after construction
//! - No I/O, no hidden state, no time dependence
//! - Identical inputs always produce identical results
//!
//! Callers supply a [`SubmergedObject`] and receive a fully computed
//! [`SimulationResult`] plus an explanation string; presentation, presets,
//! and quiz content are plumbing around this one unit.

pub mod evaluate;
pub mod explain;
pub mod fluid;

pub use evaluate::{FloatState, InvalidInput, SimulationResult, SubmergedObject};
pub use explain::FormattedResults;
pub use fluid::FluidProperties;
