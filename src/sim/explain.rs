//! Human-readable explanation and display formatting for results
//!
//! Pure string building, no I/O. Units follow the CGS convention used by the
//! rest of the model (dynes, dynes/cm², cm³).

use super::evaluate::{FloatState, SimulationResult};
use super::fluid::FluidProperties;

impl FloatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatState::Floating => "floating",
            FloatState::Sinking => "sinking",
            FloatState::Suspended => "suspended",
        }
    }
}

impl FluidProperties {
    /// One-sentence explanation of why the object behaves the way it does,
    /// citing the object density carried in the result.
    pub fn explain(&self, result: &SimulationResult) -> String {
        match result.float_state {
            FloatState::Floating => format!(
                "The object floats because its density ({:.2} g/cm³) is less than \
                 water's density ({:.1} g/cm³). Only part of the object is submerged.",
                result.object.density, self.density
            ),
            FloatState::Sinking => format!(
                "The object sinks because its density ({:.2} g/cm³) is greater than \
                 water's density ({:.1} g/cm³). The buoyant force is not strong enough \
                 to support the object's weight.",
                result.object.density, self.density
            ),
            FloatState::Suspended => format!(
                "The object remains suspended because its density equals water's \
                 density ({:.1} g/cm³). The buoyant force exactly balances the \
                 object's weight.",
                self.density
            ),
        }
    }
}

/// Display-ready result strings with units attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResults {
    pub buoyant_force: String,
    pub weight: String,
    pub net_force: String,
    pub pressure: String,
    pub displacement_volume: String,
    pub float_state: &'static str,
}

impl SimulationResult {
    /// Format every quantity for display, two decimals with units
    pub fn formatted(&self) -> FormattedResults {
        FormattedResults {
            buoyant_force: format!("{:.2} dynes", self.buoyant_force),
            weight: format!("{:.2} dynes", self.weight),
            net_force: format!("{:.2} dynes", self.net_force),
            pressure: format!("{:.2} dynes/cm²", self.pressure),
            displacement_volume: format!("{:.2} cm³", self.displacement_volume),
            float_state: self.float_state.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SubmergedObject;

    const WATER: FluidProperties = FluidProperties::WATER;

    #[test]
    fn test_explain_floating_cites_object_density() {
        let cork = SubmergedObject {
            volume: 80.0,
            density: 0.24,
            depth: 15.0,
        };
        let result = WATER.evaluate(&cork).unwrap();
        let text = WATER.explain(&result);
        assert!(text.contains("floats"));
        assert!(text.contains("0.24 g/cm³"));
        assert!(text.contains("1.0 g/cm³"));
    }

    #[test]
    fn test_explain_sinking_and_suspended() {
        let steel = SubmergedObject {
            volume: 65.0,
            density: 7.8,
            depth: 25.0,
        };
        let result = WATER.evaluate(&steel).unwrap();
        assert!(WATER.explain(&result).contains("sinks"));

        let neutral = SubmergedObject {
            volume: 100.0,
            density: 1.0,
            depth: 20.0,
        };
        let result = WATER.evaluate(&neutral).unwrap();
        assert!(WATER.explain(&result).contains("suspended"));
    }

    #[test]
    fn test_formatted_results_carry_units() {
        let neutral = SubmergedObject {
            volume: 100.0,
            density: 1.0,
            depth: 20.0,
        };
        let formatted = WATER.evaluate(&neutral).unwrap().formatted();
        assert_eq!(formatted.pressure, "19620.00 dynes/cm²");
        assert_eq!(formatted.displacement_volume, "100.00 cm³");
        assert_eq!(formatted.float_state, "suspended");
    }
}
