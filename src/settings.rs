//! User settings and session state
//!
//! Persisted separately from any one evaluation, as a JSON file next to the
//! executable's working directory. Holds the current slider values and the
//! best quiz score so a session can be picked up where it left off.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_OBJECT;
use crate::sim::SubmergedObject;

/// Inclusive slider bounds with a step size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the slider's bounds
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Snap a value to the nearest step, then clamp into bounds
    pub fn snap(&self, value: f32) -> f32 {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

/// Density slider: 0.1 (very light) to 2.0 (very heavy) g/cm³
pub const DENSITY_RANGE: SliderRange = SliderRange::new(0.1, 2.0, 0.1);
/// Volume slider: 50 to 500 cm³
pub const VOLUME_RANGE: SliderRange = SliderRange::new(50.0, 500.0, 10.0);
/// Depth slider: 5 to 30 cm
pub const DEPTH_RANGE: SliderRange = SliderRange::new(5.0, 30.0, 1.0);

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Current slider values
    pub object: SubmergedObject,
    /// Best quiz score achieved so far
    pub best_quiz_score: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            object: DEFAULT_OBJECT,
            best_quiz_score: None,
        }
    }
}

impl Settings {
    /// Settings file name, relative to the working directory
    const STORAGE_FILE: &'static str = "buoyancy_sim_settings.json";

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::STORAGE_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::STORAGE_FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::STORAGE_FILE, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }

    /// Restore the default slider values
    pub fn reset_object(&mut self) {
        self.object = DEFAULT_OBJECT;
    }

    /// Record a quiz score, keeping the best one
    pub fn record_quiz_score(&mut self, score: usize) {
        match self.best_quiz_score {
            Some(best) if best >= score => {}
            _ => self.best_quiz_score = Some(score),
        }
    }
}
