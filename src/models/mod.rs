mod entry;
mod question;

pub use entry::{FsEntry, Mtime};
pub use question::{Letter, Question};

use crate::verify::Evaluation;

/// Where a quiz session is in the question cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// The current question has not been shown yet.
    PresentQuestion,
    /// Question shown, waiting for a letter.
    AwaitAnswer,
    /// The input did not name one of the offered options.
    InvalidAnswer,
    /// The chosen command ran and was checked.
    ShowFeedback(Evaluation),
    /// Every question has been shown once.
    Finished,
}
