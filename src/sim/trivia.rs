//! Trivia questions asked by NPCs

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<String>,
    /// Index into `answers`
    pub correct: usize,
}

impl Question {
    pub fn new(text: &str, answers: &[&str], correct: usize) -> Self {
        Self {
            text: text.to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            correct,
        }
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct
    }

    pub fn has_answer(&self, answer: usize) -> bool {
        answer < self.answers.len()
    }
}

/// Ordered pool of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Question index for each of `count` NPCs.
    ///
    /// Without a seed NPC `i` gets question `i mod len`. With a seed the bank
    /// is shuffled once and dealt cyclically. Empty banks deal nothing.
    pub fn deal(&self, count: usize, seed: Option<u64>) -> Vec<usize> {
        if self.questions.is_empty() {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..self.questions.len()).collect();
        if let Some(seed) = seed {
            let mut rng = Pcg32::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }

        order.iter().copied().cycle().take(count).collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(vec![
            Question::new("Calculate 77 + 33?", &["100", "110", "120"], 1),
            Question::new("What is the square root of 169?", &["13", "17", "19"], 0),
            Question::new("Evaluate 2(x+3)+5=-1", &["-1", "-2", "-3"], 2),
            Question::new("Is zero an integer?", &["Yes", "No", "Zero isn't a number"], 0),
            Question::new("What's the sum of the first 5 even numbers?", &["10", "20", "22"], 1),
            Question::new("Is every square a rectangle?", &["Yes", "No", "Maybe"], 0),
            Question::new(
                "What is the graph of xy = 1?",
                &["An ellipse", "A parabola", "A hyperbola"],
                2,
            ),
            Question::new("Limit as x -> 0 of sin x / x", &["Infinity", "0", "1"], 2),
            Question::new(
                "Sum of the inverses of the natural numbers",
                &["Converges to 0", "Converges to 1/2", "Diverges"],
                2,
            ),
        ])
    }
}
