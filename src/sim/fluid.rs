//! Fluid properties and fluid-column formulas
//!
//! The fluid is fixed configuration: density and gravitational acceleration
//! are set at construction and never change during a run. Pressure and
//! buoyant force are properties of the fluid column, so they live here.

use serde::{Deserialize, Serialize};

/// The fluid the object is submerged in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Fluid density in g/cm³
    pub density: f32,
    /// Gravitational acceleration in cm/s²
    pub gravity: f32,
}

impl FluidProperties {
    /// Water at standard gravity, in CGS units (g/cm³, cm/s²)
    pub const WATER: FluidProperties = FluidProperties {
        density: 1.0,
        gravity: 981.0,
    };

    /// Buoyant force (dynes) on a body displacing `displaced_volume` cm³
    /// of this fluid: F_b = ρ_fluid × V_displaced × g
    #[inline]
    pub fn buoyant_force(&self, displaced_volume: f32) -> f32 {
        self.density * displaced_volume * self.gravity
    }

    /// Hydrostatic pressure (dynes/cm²) at `depth` cm below the surface:
    /// P = ρ × g × h
    ///
    /// Depends only on the fluid column, never on the submerged object.
    #[inline]
    pub fn pressure_at_depth(&self, depth: f32) -> f32 {
        self.density * self.gravity * depth
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::WATER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_at_surface_is_zero() {
        assert_eq!(FluidProperties::WATER.pressure_at_depth(0.0), 0.0);
    }

    #[test]
    fn test_pressure_increases_with_depth() {
        let fluid = FluidProperties::WATER;
        let shallow = fluid.pressure_at_depth(5.0);
        let deep = fluid.pressure_at_depth(25.0);
        assert!(deep > shallow);
        assert!((fluid.pressure_at_depth(20.0) - 19_620.0).abs() < 0.01);
    }

    #[test]
    fn test_buoyant_force_scales_with_displacement() {
        let fluid = FluidProperties::WATER;
        assert!((fluid.buoyant_force(19.2) - 18_835.2).abs() < 0.1);
        assert!(fluid.buoyant_force(100.0) > fluid.buoyant_force(50.0));
    }
}
