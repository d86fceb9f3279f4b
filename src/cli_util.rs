//! Shared helpers for the command-line front ends.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use nu_ansi_term::Color;

use crate::error::{CompileError, RuntimeError};

/// Read a source file. Bytes that are not valid UTF-8 become replacement
/// characters, which compile to no-ops like any other comment.
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Print a compile error with a caret under the offending bracket.
pub fn print_compile_error(program: &str, code: &str, err: &CompileError) {
    let msg = format!("{program}: {}: {err}", label("compile error"));
    print_error_with_context(&msg, code, err.position());
}

/// Print a runtime error with a caret under the failing instruction.
pub fn print_runtime_error(program: &str, code: &str, err: &RuntimeError) {
    let msg = format!("{program}: {}: {err}", label("runtime error"));
    print_error_with_context(&msg, code, err.ip());
}

fn label(text: &str) -> String {
    if io::stderr().is_terminal() {
        Color::Red.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Print `prefix` followed by a short window of `code` around `pos` and a caret.
pub fn print_error_with_context(prefix: &str, code: &str, pos: usize) {
    eprintln!("{prefix}");
    eprint!("{}", render_context(code, pos));
    let _ = io::stderr().flush();
}

/// Two lines: the source window around char index `pos`, then the caret.
/// Line breaks in the window are shown as spaces so the caret stays aligned.
pub fn render_context(code: &str, pos: usize) -> String {
    const WINDOW_CHARS: usize = 32;

    let total_chars = code.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let slice: String = code
        .chars()
        .skip(start_char)
        .take(end_char.saturating_sub(start_char))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let caret_offset_chars = pos.saturating_sub(start_char);
    format!("  {slice}\n  {}^\n", " ".repeat(caret_offset_chars))
}
