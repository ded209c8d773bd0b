use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

pub fn render<W: Write>(out: &mut W, score: usize, total: usize) -> io::Result<()> {
    let summary = format!(
        "🎯 Quiz complete! You got {} out of {} correct.",
        score, total
    );
    writeln!(out, "\n{}", summary.with(grade_color(score, total)).bold())?;
    out.flush()
}

/// Green from 90%, cyan from 70%, yellow from 50%, red below. An empty quiz is red.
fn grade_color(score: usize, total: usize) -> Color {
    if total == 0 {
        return Color::Red;
    }
    let percent = score * 100 / total;
    if percent >= 90 {
        Color::Green
    } else if percent >= 70 {
        Color::Cyan
    } else if percent >= 50 {
        Color::Yellow
    } else {
        Color::Red
    }
}
