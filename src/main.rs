//! Buoyancy simulator entry point
//!
//! Interactive terminal front end: reads commands from stdin, re-evaluates
//! the physics model on every committed parameter change, and renders the
//! result panel with an explanation.

use std::io::{self, BufRead, Write};

use buoyancy_sim::presets;
use buoyancy_sim::quiz::{self, QuizSession};
use buoyancy_sim::settings::{DENSITY_RANGE, DEPTH_RANGE, Settings, VOLUME_RANGE};
use buoyancy_sim::sim::{FluidProperties, SubmergedObject};

const HELP: &str = "\
Commands:
  set density <g/cm³>   set object density (0.1 - 2.0)
  set volume <cm³>      set object volume (50 - 500)
  set depth <cm>        set object depth (5 - 30)
  preset <id>           apply an experiment preset
  presets               list available presets
  show                  show results for the current object
  formulas              show the governing formulas
  quiz                  take the physics quiz
  reset                 restore default object
  help                  show this help
  quit                  save settings and exit";

fn main() {
    env_logger::init();
    log::info!("Buoyancy simulator starting...");

    let fluid = FluidProperties::WATER;
    let mut settings = Settings::load();

    println!("Physics Simulation: Buoyancy & Fluid Pressure");
    println!("Explore how object density affects buoyancy and fluid pressure.\n");
    println!("{HELP}\n");
    render(&fluid, &settings.object);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else { break };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["show"] => render(&fluid, &settings.object),
            ["formulas"] => print_formulas(),
            ["reset"] => {
                settings.reset_object();
                render(&fluid, &settings.object);
            }
            ["presets"] => {
                for scenario in presets::SCENARIOS {
                    println!(
                        "  {:<8} {} - {} (expected: {})",
                        scenario.id, scenario.title, scenario.description,
                        scenario.expected_outcome
                    );
                }
            }
            ["preset", id] => match presets::find(id) {
                Some(scenario) => {
                    println!("{}: {}", scenario.title, scenario.learning_goal);
                    settings.object = scenario.object;
                    render(&fluid, &settings.object);
                }
                None => println!("Unknown preset '{id}'. Try 'presets'."),
            },
            ["set", field, value] => match value.parse::<f32>() {
                Ok(value) => {
                    if set_field(&mut settings.object, field, value) {
                        render(&fluid, &settings.object);
                    }
                }
                Err(_) => println!("'{value}' is not a number."),
            },
            ["quiz"] => {
                if let Some(score) = run_quiz(&mut lines) {
                    settings.record_quiz_score(score);
                }
            }
            _ => println!("Unrecognized command. Try 'help'."),
        }
    }

    settings.save();
    log::info!("Goodbye");
}

/// Apply one slider change, snapping to the slider's range.
/// Returns false (with a message) for an unknown field name.
fn set_field(object: &mut SubmergedObject, field: &str, value: f32) -> bool {
    match field {
        "density" => object.density = DENSITY_RANGE.snap(value),
        "volume" => object.volume = VOLUME_RANGE.snap(value),
        "depth" => object.depth = DEPTH_RANGE.snap(value),
        _ => {
            println!("Unknown field '{field}'. Use density, volume, or depth.");
            return false;
        }
    }
    true
}

/// Evaluate the current object and print the results panel
fn render(fluid: &FluidProperties, object: &SubmergedObject) {
    println!(
        "Object: density {:.2} g/cm³, volume {:.0} cm³, depth {:.0} cm",
        object.density, object.volume, object.depth
    );

    match fluid.evaluate(object) {
        Ok(result) => {
            let f = result.formatted();
            println!("  Float state:    {}", f.float_state.to_uppercase());
            println!("  Weight:         {}", f.weight);
            println!("  Buoyant force:  {}", f.buoyant_force);
            println!("  Net force:      {}", f.net_force);
            println!("  Displaced vol:  {}", f.displacement_volume);
            println!("  Pressure at {:.0} cm: {}", object.depth, f.pressure);
            println!("  {}", fluid.explain(&result));
        }
        Err(err) => println!("  Cannot evaluate: {err}"),
    }
}

fn print_formulas() {
    println!("  Buoyant force  F_b = ρ × V × g   (ρ = fluid density, V = displaced volume)");
    println!("  Pressure       P   = ρ × g × h   (h = depth)");
    println!("  Weight         W   = m × g       (m = object density × volume)");
}

/// Walk through the question bank; returns the final score, or None if
/// input ended mid-quiz.
fn run_quiz(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<usize> {
    let mut session = QuizSession::new();

    while let Some(question) = session.current_question() {
        println!(
            "\nQuestion {} of {}: {}",
            session.current_index() + 1,
            session.total(),
            question.prompt
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        print!("answer (1-{}): ", question.options.len());
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        let choice = match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("Please answer with a number between 1 and {}.", question.options.len());
                continue;
            }
        };

        match session.answer(choice) {
            Some(true) => println!("Correct! {}", question.explanation),
            Some(false) => println!(
                "Not quite. The answer is '{}'. {}",
                question.options[question.correct], question.explanation
            ),
            None => println!("Please answer with a number between 1 and {}.", question.options.len()),
        }
    }

    let score = session.score();
    println!("\nQuiz complete! Your score: {}/{}", score, session.total());
    println!("{}", quiz::grade_message(score, session.total()));
    Some(score)
}
