//! Exact comparison of captured command output against the expected text.

use crate::models::Letter;

/// Outcome of running one chosen option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub choice: Letter,
    pub actual: String,
    pub correct: bool,
}

impl Evaluation {
    pub fn new(choice: Letter, actual: String, expected: &str) -> Self {
        let correct = verify(&actual, expected);
        Self {
            choice,
            actual,
            correct,
        }
    }
}

/// Byte-for-byte equality. Whitespace, including the trailing newline, counts.
pub fn verify(actual: &str, expected: &str) -> bool {
    actual == expected
}
