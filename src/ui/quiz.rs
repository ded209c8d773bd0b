use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::models::Question;
use crate::scenario::Scenario;

pub fn render<W: Write, S: Scenario>(
    out: &mut W,
    question: &Question<S>,
    number: usize,
    total: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("{}/{}", number, total).dark_grey())?;
    writeln!(out, "{}", question.text.as_str().white().bold())?;
    writeln!(out)?;
    writeln!(out, "{}", question.scenario.describe().yellow())?;
    writeln!(out)?;

    for (letter, command) in question.labeled_options() {
        writeln!(out, "{}: {}", letter.to_string().cyan(), command)?;
    }
    Ok(())
}

pub fn render_answer_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Your answer (A/B/C/D): ")?;
    out.flush()
}

pub fn render_invalid<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "❌ Invalid option.".red())
}
