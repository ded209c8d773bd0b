use std::fmt;

use serde::Deserialize;

/// One multiple-choice question. `S` is the scenario the option commands run against.
#[derive(Debug, Clone, Deserialize)]
pub struct Question<S> {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(flatten)]
    pub scenario: S,
    pub options: [String; 4],
    pub expected_output: String,
    pub answer: Letter,
}

impl<S> Question<S> {
    pub fn command(&self, letter: Letter) -> &str {
        &self.options[letter.index()]
    }

    /// Options in letter order.
    pub fn labeled_options(&self) -> impl Iterator<Item = (Letter, &str)> {
        Letter::ALL
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}

/// Option key shown next to each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
        }
    }

    /// Reads a typed answer. Surrounding whitespace and case are ignored;
    /// anything other than a single A-D letter is rejected.
    pub fn parse_answer(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Letter::A),
            "B" => Some(Letter::B),
            "C" => Some(Letter::C),
            "D" => Some(Letter::D),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
        };
        f.write_str(label)
    }
}
