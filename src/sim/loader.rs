//! Program source loader.
//!
//! Reads a program file and normalizes it into the instruction sequence
//! the interpreter consumes. Two surface syntaxes are accepted:
//!
//! * plain text, one instruction or label per line;
//! * a list assignment, `name = [ "line1", "line2", ... ]`.
//!
//! Normalization strips `#` comments, removes commas, collapses
//! whitespace, and splits `name: instr` into a label line followed by the
//! instruction.

use crate::common::SimError;
use crate::isa::Program;
use std::fs;
use std::path::Path;

/// Reads `path` and returns its normalized instruction lines.
pub fn load_lines(path: &Path) -> Result<Vec<String>, SimError> {
    let content = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = parse_source(&content);
    log::debug!(
        "[Loader] {} line(s) from {}",
        lines.len(),
        path.display()
    );
    Ok(lines)
}

/// Reads, normalizes, and decodes the program at `path`.
pub fn load_program(path: &Path) -> Result<Program, SimError> {
    Program::from_lines(&load_lines(path)?)
}

/// Normalizes raw program text into instruction lines.
pub fn parse_source(content: &str) -> Vec<String> {
    let stripped: Vec<&str> = content.lines().map(strip_comment).collect();
    let body = stripped.join("\n");

    let entries: Vec<String> = match body.split_once('=') {
        Some((_, list)) => list_entries(list),
        None => body.lines().map(str::to_string).collect(),
    };

    let mut out = Vec::with_capacity(entries.len());
    for entry in &entries {
        normalize_into(entry, &mut out);
    }
    out
}

/// Cuts `line` at the first `#` that is not inside a double-quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    for (pos, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '#' if !quoted => return &line[..pos],
            _ => {}
        }
    }
    line
}

/// Extracts entries from the right-hand side of a list assignment.
///
/// Quoted entries are taken verbatim, which also handles several entries on
/// one line. A list without quotes falls back to one entry per line.
fn list_entries(list: &str) -> Vec<String> {
    let quoted: Vec<String> = list
        .split('"')
        .skip(1)
        .step_by(2)
        .map(str::to_string)
        .collect();
    if !quoted.is_empty() {
        return quoted;
    }

    list.replace('[', "")
        .replace(']', "")
        .lines()
        .map(|l| l.trim().trim_matches(',').to_string())
        .collect()
}

/// Drops an entry's own comment, collapses whitespace and commas, and
/// splits a leading `label:` off.
fn normalize_into(entry: &str, out: &mut Vec<String>) {
    let tokens: Vec<&str> = strip_comment(entry)
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.split_first() {
        None => {}
        Some((first, rest)) if first.len() > 1 && first.ends_with(':') && !rest.is_empty() => {
            out.push(first.to_string());
            out.push(rest.join(" "));
        }
        Some(_) => out.push(tokens.join(" ")),
    }
}
