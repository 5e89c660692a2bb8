//! Object evaluation: forces, displacement, and float-state classification
//!
//! Everything here is a pure function of the input snapshot. One
//! `SubmergedObject` plus one `FluidProperties` deterministically produce one
//! `SimulationResult`; evaluating twice with identical inputs yields
//! bit-identical output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fluid::FluidProperties;

/// The single object under evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmergedObject {
    /// Object volume in cm³ (must be positive)
    pub volume: f32,
    /// Object density in g/cm³ (must be positive)
    pub density: f32,
    /// Depth below the surface in cm (must be non-negative)
    pub depth: f32,
}

/// Rejection of a physically meaningless input field
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("volume must be positive, got {0} cm³")]
    Volume(f32),
    #[error("density must be positive, got {0} g/cm³")]
    Density(f32),
    #[error("depth must be non-negative, got {0} cm")]
    Depth(f32),
}

impl SubmergedObject {
    pub fn new(volume: f32, density: f32, depth: f32) -> Result<Self, InvalidInput> {
        let object = Self {
            volume,
            density,
            depth,
        };
        object.validate()?;
        Ok(object)
    }

    /// Reject non-positive volume/density and negative depth before any
    /// formula sees them. Never clamps; the caller gets the offending value
    /// back so it can show a corrective message.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !(self.volume > 0.0) {
            return Err(InvalidInput::Volume(self.volume));
        }
        if !(self.density > 0.0) {
            return Err(InvalidInput::Density(self.density));
        }
        if !(self.depth >= 0.0) {
            return Err(InvalidInput::Depth(self.depth));
        }
        Ok(())
    }
}

/// Qualitative equilibrium behavior of the object in the fluid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatState {
    /// Object density below fluid density; only part of it is submerged
    Floating,
    /// Object density above fluid density; buoyancy cannot hold it up
    Sinking,
    /// Object density equal to fluid density; forces balance exactly
    Suspended,
}

/// All derived quantities for one evaluation
///
/// Produced fresh per call. `net_force` is always `buoyant_force - weight`,
/// and `displacement_volume <= object.volume` with equality exactly when the
/// state is Sinking or Suspended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The input snapshot this result was computed from
    pub object: SubmergedObject,
    /// Upward force from fluid displacement (dynes)
    pub buoyant_force: f32,
    /// Object weight (dynes)
    pub weight: f32,
    /// Buoyant force minus weight (dynes); sign gives motion direction
    pub net_force: f32,
    /// Fluid pressure at the object's depth (dynes/cm²)
    pub pressure: f32,
    /// Volume of fluid displaced by the object (cm³)
    pub displacement_volume: f32,
    /// Qualitative classification of equilibrium behavior
    pub float_state: FloatState,
}

impl FluidProperties {
    /// Volume of fluid the object displaces (cm³)
    ///
    /// A floating object (density below the fluid's) only submerges the
    /// fraction of its volume needed to balance its weight; anything else is
    /// fully submerged and displaces its whole volume.
    pub fn displaced_volume(&self, object: &SubmergedObject) -> Result<f32, InvalidInput> {
        object.validate()?;
        if object.density < self.density {
            Ok((object.density / self.density) * object.volume)
        } else {
            Ok(object.volume)
        }
    }

    /// Object weight (dynes): W = ρ_object × V × g
    #[inline]
    pub fn weight(&self, object: &SubmergedObject) -> f32 {
        object.density * object.volume * self.gravity
    }

    /// Classify float behavior by comparing densities
    ///
    /// Strict comparison: `Suspended` requires exact equality, no epsilon.
    pub fn classify(&self, object: &SubmergedObject) -> FloatState {
        if object.density < self.density {
            FloatState::Floating
        } else if object.density > self.density {
            FloatState::Sinking
        } else {
            FloatState::Suspended
        }
    }

    /// Run the complete evaluation for one object
    ///
    /// Validates the input, then computes displacement, forces, pressure, and
    /// classification in one pass. Net force is computed by subtraction so
    /// the `net = buoyant - weight` invariant holds bit-exactly.
    pub fn evaluate(&self, object: &SubmergedObject) -> Result<SimulationResult, InvalidInput> {
        let displacement_volume = self.displaced_volume(object)?;
        let buoyant_force = self.buoyant_force(displacement_volume);
        let weight = self.weight(object);
        let net_force = buoyant_force - weight;
        let pressure = self.pressure_at_depth(object.depth);
        let float_state = self.classify(object);

        Ok(SimulationResult {
            object: *object,
            buoyant_force,
            weight,
            net_force,
            pressure,
            displacement_volume,
            float_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WATER: FluidProperties = FluidProperties::WATER;

    fn object(volume: f32, density: f32, depth: f32) -> SubmergedObject {
        SubmergedObject {
            volume,
            density,
            depth,
        }
    }

    #[test]
    fn test_cork_floats() {
        // Cork preset: very light material, mostly above the surface
        let cork = object(80.0, 0.24, 15.0);
        let result = WATER.evaluate(&cork).unwrap();

        assert_eq!(result.float_state, FloatState::Floating);
        assert!((result.displacement_volume - 19.2).abs() < 0.001);
        assert!((result.buoyant_force - 18_835.2).abs() < 0.1);
        assert!((result.weight - 18_835.2).abs() < 0.1);
        assert!(result.displacement_volume < cork.volume);
    }

    #[test]
    fn test_steel_sinks() {
        let steel = object(65.0, 7.8, 25.0);
        let result = WATER.evaluate(&steel).unwrap();

        assert_eq!(result.float_state, FloatState::Sinking);
        assert_eq!(result.displacement_volume, steel.volume);
        assert!(result.net_force < 0.0);
    }

    #[test]
    fn test_neutral_is_suspended() {
        let neutral = object(100.0, 1.0, 20.0);
        let result = WATER.evaluate(&neutral).unwrap();

        assert_eq!(result.float_state, FloatState::Suspended);
        assert_eq!(result.displacement_volume, neutral.volume);
        assert!(result.net_force.abs() < 0.001);
        assert!((result.pressure - 19_620.0).abs() < 0.01);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert_eq!(
            WATER.evaluate(&object(0.0, 1.0, 10.0)),
            Err(InvalidInput::Volume(0.0))
        );
        assert_eq!(
            WATER.evaluate(&object(-5.0, 1.0, 10.0)),
            Err(InvalidInput::Volume(-5.0))
        );
        assert_eq!(
            WATER.evaluate(&object(100.0, 0.0, 10.0)),
            Err(InvalidInput::Density(0.0))
        );
        assert_eq!(
            WATER.evaluate(&object(100.0, 1.0, -1.0)),
            Err(InvalidInput::Depth(-1.0))
        );
        assert!(SubmergedObject::new(100.0, f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_invalid_evaluation_does_not_poison_later_ones() {
        let _ = WATER.evaluate(&object(0.0, 1.0, 10.0));
        let result = WATER.evaluate(&object(100.0, 0.8, 10.0)).unwrap();
        assert_eq!(result.float_state, FloatState::Floating);
    }

    #[test]
    fn test_pressure_ignores_the_object() {
        let light = WATER.evaluate(&object(50.0, 0.3, 12.0)).unwrap();
        let heavy = WATER.evaluate(&object(500.0, 7.8, 12.0)).unwrap();
        assert_eq!(light.pressure, heavy.pressure);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let obj = object(123.0, 0.77, 18.0);
        let a = WATER.evaluate(&obj).unwrap();
        let b = WATER.evaluate(&obj).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_net_force_is_buoyant_minus_weight(
            volume in 1.0f32..500.0,
            density in 0.01f32..10.0,
            depth in 0.0f32..30.0,
        ) {
            let result = WATER.evaluate(&object(volume, density, depth)).unwrap();
            prop_assert_eq!(result.net_force, result.buoyant_force - result.weight);
        }

        #[test]
        fn prop_light_objects_float_partially_submerged(
            volume in 1.0f32..500.0,
            density in 0.01f32..0.999,
            depth in 0.0f32..30.0,
        ) {
            let result = WATER.evaluate(&object(volume, density, depth)).unwrap();
            prop_assert_eq!(result.float_state, FloatState::Floating);
            prop_assert!(result.displacement_volume < volume);
            let expected = (density / WATER.density) * volume;
            prop_assert!((result.displacement_volume - expected).abs() < 1e-3);
        }

        #[test]
        fn prop_dense_objects_sink_fully_submerged(
            volume in 1.0f32..500.0,
            density in 1.001f32..10.0,
            depth in 0.0f32..30.0,
        ) {
            let result = WATER.evaluate(&object(volume, density, depth)).unwrap();
            prop_assert_eq!(result.float_state, FloatState::Sinking);
            prop_assert_eq!(result.displacement_volume, volume);
        }

        #[test]
        fn prop_pressure_depends_only_on_depth(
            volume in 1.0f32..500.0,
            density in 0.01f32..10.0,
            depth in 0.0f32..30.0,
        ) {
            let result = WATER.evaluate(&object(volume, density, depth)).unwrap();
            prop_assert_eq!(result.pressure, WATER.pressure_at_depth(depth));
        }
    }
}
