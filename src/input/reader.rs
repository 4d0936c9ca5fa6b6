use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub struct InputReader;

impl InputReader {
    /// Resolves the input line sequence from exactly one source.
    ///
    /// Priority order: stdin, then file, then the literal argument.
    pub fn resolve(text: Option<&str>, file: Option<&str>, use_stdin: bool) -> Result<Vec<String>> {
        if use_stdin {
            Self::read_stdin()
        } else if let Some(path) = file {
            Self::read_file(path)
        } else if let Some(text) = text {
            Ok(vec![text.to_string()])
        } else {
            bail!("No input provided. Use a text argument, -f/--file, or --stdin. See --help.")
        }
    }

    fn read_file(path: &str) -> Result<Vec<String>> {
        if !Path::new(path).exists() {
            bail!("Input file not found: {path}");
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

        Ok(contents.lines().map(str::to_string).collect())
    }

    fn read_stdin() -> Result<Vec<String>> {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;

        Ok(split_stdin_lines(&buffer))
    }
}

/// Splits raw stdin input on newlines.
///
/// Only the final trailing newline is dropped; carriage returns and other
/// whitespace are kept as-is.
fn split_stdin_lines(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let input = input.strip_suffix('\n').unwrap_or(input);
    input.split('\n').map(str::to_string).collect()
}
