use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{AppState, Letter, Question};
use crate::scenario::{Scenario, ScenarioError};
use crate::verify::Evaluation;

/// One pass over a question bank: the question order and the running score.
pub struct QuizSession<S> {
    state: AppState,
    questions: Vec<Question<S>>,
    current_question_index: usize,
    score: usize,
}

impl<S> QuizSession<S> {
    /// Keeps the questions in the given order.
    pub fn in_order(questions: Vec<Question<S>>) -> Self {
        let state = if questions.is_empty() {
            AppState::Finished
        } else {
            AppState::PresentQuestion
        };
        Self {
            state,
            questions,
            current_question_index: 0,
            score: 0,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(mut questions: Vec<Question<S>>, rng: &mut R) -> Self {
        questions.shuffle(rng);
        Self::in_order(questions)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_question(&self) -> Option<&Question<S>> {
        match self.state {
            AppState::Finished => None,
            _ => self.questions.get(self.current_question_index),
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question<S>] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Marks the current question as shown.
    pub fn present(&mut self) {
        if self.state == AppState::PresentQuestion {
            self.state = AppState::AwaitAnswer;
        }
    }

    /// Leaves the feedback or invalid-answer screen.
    pub fn acknowledge(&mut self) {
        if !matches!(
            self.state,
            AppState::InvalidAnswer | AppState::ShowFeedback(_)
        ) {
            return;
        }

        self.current_question_index += 1;
        self.state = if self.current_question_index >= self.questions.len() {
            AppState::Finished
        } else {
            AppState::PresentQuestion
        };
    }
}

impl<S: Scenario> QuizSession<S> {
    /// Takes one line of input for the current question.
    ///
    /// An unknown letter moves to `InvalidAnswer` without scoring. A valid
    /// letter runs that option against a fresh scenario and moves to
    /// `ShowFeedback`. Only a scenario that cannot be built is an error.
    pub fn answer(&mut self, input: &str) -> Result<(), ScenarioError> {
        if self.state != AppState::AwaitAnswer {
            return Ok(());
        }
        let Some(question) = self.questions.get(self.current_question_index) else {
            return Ok(());
        };

        let Some(choice) = Letter::parse_answer(input) else {
            self.state = AppState::InvalidAnswer;
            return Ok(());
        };

        let actual = question.scenario.run(question.command(choice))?;
        let evaluation = Evaluation::new(choice, actual, &question.expected_output);
        if evaluation.correct {
            self.score += 1;
        }
        self.state = AppState::ShowFeedback(evaluation);
        Ok(())
    }
}
