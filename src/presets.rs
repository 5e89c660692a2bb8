//! Pre-configured experiment scenarios
//!
//! Canned objects for guided exploration. Scenarios feed the exact same
//! `evaluate` entry point as manual slider input; there is no special-cased
//! path for presets.

use crate::sim::SubmergedObject;

/// A guided experiment: a canned object plus the teaching framing around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub object: SubmergedObject,
    pub expected_outcome: &'static str,
    pub learning_goal: &'static str,
}

/// All built-in experiments
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "cork",
        title: "Cork in Water",
        description: "Test a cork (very light material) in water",
        object: SubmergedObject {
            density: 0.24,
            volume: 80.0,
            depth: 15.0,
        },
        expected_outcome: "Floats high on surface",
        learning_goal: "Understand how very low density materials behave",
    },
    Scenario {
        id: "ice",
        title: "Ice Cube",
        description: "See how ice floats in water",
        object: SubmergedObject {
            density: 0.92,
            volume: 125.0,
            depth: 10.0,
        },
        expected_outcome: "Floats with most submerged",
        learning_goal: "Learn why ice floats despite being solid water",
    },
    Scenario {
        id: "steel",
        title: "Steel Ball",
        description: "Drop a steel ball into water",
        object: SubmergedObject {
            density: 7.8,
            volume: 65.0,
            depth: 25.0,
        },
        expected_outcome: "Sinks rapidly",
        learning_goal: "Observe high-density materials in water",
    },
    Scenario {
        id: "neutral",
        title: "Neutrally Buoyant Object",
        description: "An object with the same density as water",
        object: SubmergedObject {
            density: 1.0,
            volume: 100.0,
            depth: 20.0,
        },
        expected_outcome: "Suspended in water",
        learning_goal: "Understand neutral buoyancy",
    },
    Scenario {
        id: "oil",
        title: "Oil Drop",
        description: "See how oil behaves in water",
        object: SubmergedObject {
            density: 0.85,
            volume: 150.0,
            depth: 8.0,
        },
        expected_outcome: "Floats on surface",
        learning_goal: "Compare different liquid densities",
    },
];

/// Look up a scenario by its id
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
