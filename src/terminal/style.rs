use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub fn heading(out: &mut impl Write, text: &str) -> io::Result<()> {
    let rule = "─".repeat(UnicodeWidthStr::width(text));
    queue!(
        out,
        Print("\n"),
        SetForegroundColor(Color::Cyan),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        Print("\n"),
        Print(rule),
        ResetColor,
        Print("\n")
    )
}

pub fn plain(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(out, Print(text), Print("\n"))
}

pub fn dim(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(text),
        ResetColor,
        Print("\n")
    )
}

pub fn warning(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Yellow),
        Print(text),
        ResetColor,
        Print("\n")
    )
}

pub fn error(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )
}

pub fn success(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Green),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )
}

/// Prompt text without a trailing newline; flushes so it shows before input.
pub fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        Print(" ")
    )?;
    out.flush()
}
