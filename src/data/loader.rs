use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::Question;
use crate::scenario::Scenario;

/// A question bank that cannot be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse {bank} question bank: {source}")]
    Parse {
        bank: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} question bank must contain at least one question")]
    Empty(&'static str),

    #[error("question {number} of the {bank} bank has an empty prompt")]
    EmptyPrompt { bank: &'static str, number: usize },

    #[error("option {letter} of question {number} in the {bank} bank cannot run against its scenario: {command}")]
    UnusableCommand {
        bank: &'static str,
        number: usize,
        letter: crate::models::Letter,
        command: String,
    },
}

/// Parses and checks a JSON question bank. `bank` names it in errors.
pub fn parse_questions<S>(bank: &'static str, json: &str) -> Result<Vec<Question<S>>, LoadError>
where
    S: Scenario + DeserializeOwned,
{
    let questions: Vec<Question<S>> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse { bank, source })?;

    if questions.is_empty() {
        return Err(LoadError::Empty(bank));
    }

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;
        if question.text.trim().is_empty() {
            return Err(LoadError::EmptyPrompt { bank, number });
        }
        if let Some((letter, command)) = question
            .labeled_options()
            .find(|(_, command)| !S::accepts_command(command))
        {
            return Err(LoadError::UnusableCommand {
                bank,
                number,
                letter,
                command: command.to_string(),
            });
        }
    }

    Ok(questions)
}
