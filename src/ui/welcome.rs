use std::io::{self, Write};

use crossterm::style::Stylize;

pub fn render<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}\n", title.cyan().bold())
}
