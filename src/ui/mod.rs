mod feedback;
mod quiz;
mod result;
mod welcome;

pub use feedback::render as render_feedback;
pub use quiz::{render as render_question, render_answer_prompt, render_invalid};
pub use result::render as render_summary;
pub use welcome::render as render_banner;

use std::io::{self, Write};

use crossterm::style::Stylize;

const WRAP_WIDTH: usize = 70;
const INDENT: &str = "  ";

pub fn render_continue_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", "Press Enter to continue...".dark_grey())?;
    out.flush()
}

/// Wraps `text` at 70 columns and indents every line by two spaces.
///
/// Words longer than a line are split.
pub fn fill_indented(text: &str) -> String {
    wrap(text, WRAP_WIDTH)
        .iter()
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed <= width {
                if line_len > 0 {
                    line.push(' ');
                    line_len += 1;
                }
                line.extend(word.iter());
                line_len += word.len();
                break;
            }
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_indented_on_one_line() {
        assert_eq!(fill_indented("link.txt → original.txt"), "  link.txt → original.txt");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let text = "garden/ with two sub-directories and several files below them (plants/ and tools/).";
        let filled = fill_indented(text);
        let lines: Vec<&str> = filled.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.chars().count() <= WRAP_WIDTH + INDENT.len()));
        assert_eq!(
            lines.join(" ").split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        let lines = wrap("abcdefghij xy", 4);
        assert_eq!(lines, ["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(wrap("  a \n\n b  ", 10), ["a b"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
