use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::models::Question;
use crate::scenario::Scenario;
use crate::verify::Evaluation;

pub fn render<W: Write, S: Scenario>(
    out: &mut W,
    question: &Question<S>,
    evaluation: &Evaluation,
) -> io::Result<()> {
    if evaluation.correct {
        return writeln!(out, "{}", "✅ Correct!".green().bold());
    }

    writeln!(
        out,
        "{}",
        format!("❌ Incorrect. The correct answer was {}", question.answer).red()
    )?;
    if S::SHOWS_OUTPUT {
        writeln!(out, "Expected:\n{}", question.expected_output)?;
        writeln!(out, "Got:\n{}", evaluation.actual)?;
    }
    Ok(())
}
