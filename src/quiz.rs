//! Physics quiz: static question bank and scoring
//!
//! Independent of the physics model's runtime values; the questions only
//! share domain vocabulary. Score is the count of selected answers matching
//! the correct indices.

/// A multiple-choice question with one correct option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`
    pub correct: usize,
    pub explanation: &'static str,
}

/// The built-in question bank
pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "If an object has a density of 0.8 g/cm³, what will happen when placed in water?",
        options: [
            "It will sink",
            "It will float",
            "It will remain suspended",
            "It depends on the volume",
        ],
        correct: 1,
        explanation: "Objects with density less than water (1.0 g/cm³) will float because \
                      the buoyant force exceeds their weight.",
    },
    Question {
        prompt: "What happens to pressure as you go deeper in a fluid?",
        options: [
            "It decreases",
            "It stays the same",
            "It increases",
            "It becomes zero",
        ],
        correct: 2,
        explanation: "Pressure increases with depth according to P = ρgh, where h is the depth.",
    },
    Question {
        prompt: "An object with density equal to water (1.0 g/cm³) will:",
        options: [
            "Float on the surface",
            "Sink to the bottom",
            "Remain suspended at any depth",
            "Bounce up and down",
        ],
        correct: 2,
        explanation: "When densities are equal, the buoyant force exactly balances the \
                      weight, so the object remains suspended.",
    },
    Question {
        prompt: "Which force is responsible for objects floating?",
        options: [
            "Gravitational force",
            "Buoyant force",
            "Magnetic force",
            "Friction force",
        ],
        correct: 1,
        explanation: "Buoyant force, discovered by Archimedes, pushes upward on objects \
                      submerged in fluids.",
    },
];

/// One pass through the question bank
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    /// Selected option index per question, in answer order
    answers: Vec<usize>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently awaiting an answer, or None when complete
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.answers.len())
    }

    /// Index (0-based) of the question currently awaiting an answer
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// Record an answer for the current question; returns whether it was
    /// correct, or None if the quiz is already complete or the option index
    /// is out of range.
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        let question = self.current_question()?;
        if option >= question.options.len() {
            return None;
        }
        self.answers.push(option);
        Some(option == question.correct)
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= QUESTIONS.len()
    }

    /// Count of answers matching the correct indices
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(QUESTIONS)
            .filter(|(selected, question)| **selected == question.correct)
            .count()
    }

    pub fn total(&self) -> usize {
        QUESTIONS.len()
    }
}

/// Closing message for a finished quiz
pub fn grade_message(score: usize, total: usize) -> &'static str {
    if score == total {
        "Perfect! You have mastered buoyancy and pressure concepts!"
    } else if score as f32 >= total as f32 * 0.7 {
        "Great job! You have a good understanding of the concepts."
    } else {
        "Keep practicing! Try the simulation more to better understand the concepts."
    }
}
