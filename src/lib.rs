//! # shell-quiz
//!
//! Terminal quizzes that teach command-line tools by running the learner's
//! chosen command against a throwaway scenario and checking its exact output.
//!
//! Two banks ship with the crate: `jq` filters run against a JSON document,
//! and `find` expressions run inside a generated directory tree.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shell_quiz::{data, Quiz, QuizError, QuizOptions};
//!
//! fn main() -> Result<(), QuizError> {
//!     let questions = data::jq_questions()?;
//!     let score = Quiz::new(questions, QuizOptions::new("📘 JQ QUIZ")).run()?;
//!     println!("{score}");
//!     Ok(())
//! }
//! ```

mod app;
pub mod data;
pub mod exec;
pub mod logging;
mod models;
pub mod scenario;
pub mod sound;
pub mod terminal;
mod ui;
pub mod verify;

use std::io::{self, BufRead, Write};

use thiserror::Error;

pub use app::QuizSession;
pub use data::LoadError;
pub use models::{AppState, FsEntry, Letter, Mtime, Question};
pub use scenario::{FsLayout, JsonDocument, Scenario, ScenarioError};
pub use sound::Chime;
pub use verify::Evaluation;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank could not be loaded.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// A question's scenario could not be built.
    #[error("Failed to build scenario: {0}")]
    Scenario(#[from] ScenarioError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// How a quiz run looks and behaves.
#[derive(Debug, Clone)]
pub struct QuizOptions {
    /// Banner printed once at the start.
    pub title: String,
    /// Clear the terminal between screens.
    pub clear_screen: bool,
    /// Played after each correct answer.
    pub chime: Option<Chime>,
    /// Randomize question order.
    pub shuffle: bool,
}

impl QuizOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clear_screen: true,
            chime: Some(Chime::default()),
            shuffle: true,
        }
    }

    /// No screen clearing, no sound and authoring order.
    pub fn plain(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clear_screen: false,
            chime: None,
            shuffle: false,
        }
    }
}

/// A quiz ready to run over some input and output.
pub struct Quiz<S> {
    session: QuizSession<S>,
    options: QuizOptions,
}

impl<S: Scenario> Quiz<S> {
    pub fn new(questions: Vec<Question<S>>, options: QuizOptions) -> Self {
        let session = if options.shuffle {
            QuizSession::shuffled(questions, &mut rand::thread_rng())
        } else {
            QuizSession::in_order(questions)
        };
        Self { session, options }
    }

    /// Run the quiz on the process's stdin and stdout. Returns the score.
    pub fn run(self) -> Result<usize, QuizError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the quiz over arbitrary input and output. Returns the score.
    ///
    /// End of input reads as an empty line, so remaining questions are
    /// skipped as invalid answers and the run still completes.
    pub fn run_with<R: BufRead, W: Write>(
        mut self,
        mut input: R,
        mut output: W,
    ) -> Result<usize, QuizError> {
        if self.options.clear_screen {
            terminal::clear(&mut output)?;
        }
        ui::render_banner(&mut output, &self.options.title)?;

        while self.step(&mut input, &mut output)? {}

        Ok(self.session.score())
    }

    pub fn session(&self) -> &QuizSession<S> {
        &self.session
    }

    /// Handles the current state. Returns false once the quiz is finished.
    fn step<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<bool, QuizError> {
        match self.session.state() {
            AppState::PresentQuestion => {
                if let Some(question) = self.session.current_question() {
                    ui::render_question(
                        output,
                        question,
                        self.session.current_question_number(),
                        self.session.total_questions(),
                    )?;
                }
                self.session.present();
            }
            AppState::AwaitAnswer => {
                ui::render_answer_prompt(output)?;
                let line = read_line(input)?;
                self.session.answer(&line)?;
            }
            AppState::InvalidAnswer => {
                ui::render_invalid(output)?;
                self.pause(input, output)?;
                self.session.acknowledge();
            }
            AppState::ShowFeedback(evaluation) => {
                if let Some(question) = self.session.current_question() {
                    ui::render_feedback(output, question, evaluation)?;
                }
                output.flush()?;
                if evaluation.correct {
                    if let Some(chime) = &self.options.chime {
                        chime.play();
                    }
                }
                self.pause(input, output)?;
                self.session.acknowledge();
            }
            AppState::Finished => {
                ui::render_summary(output, self.session.score(), self.session.total_questions())?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn pause<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<(), QuizError> {
        ui::render_continue_prompt(output)?;
        read_line(input)?;
        if self.options.clear_screen {
            terminal::clear(output)?;
        }
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
