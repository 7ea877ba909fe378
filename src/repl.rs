use std::io::{self, BufRead, Write};

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate, lexer::tokenize},
    parse_line,
};

/// Prompt printed before each line in interactive sessions.
pub const PROMPT: &str = "spi> ";
/// Greeting printed once at the start of interactive sessions.
pub const BANNER: &str = "spi: enter an arithmetic expression per line (Ctrl+D to exit)";

/// Controls what the loop prints besides results and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Printed once before the first line is read.
    pub banner:      Option<String>,
    /// Printed before every line is read.
    pub prompt:      Option<String>,
    /// Print the parse tree of each line before its value.
    pub show_tree:   bool,
    /// Print the tokens of each line before its value.
    pub show_tokens: bool,
}

/// Line counts of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a value.
    pub evaluated: usize,
    /// Lines that ended with an error.
    pub failed:    usize,
    /// Empty lines.
    pub skipped:   usize,
}

/// Runs the read-eval-print loop until `input` is exhausted.
///
/// Every non-empty line is an independent pipeline run. Values go to `out`,
/// one per line. Errors go to `err`, one per line, and the loop moves on to
/// the next line.
///
/// # Errors
/// Returns an error only when reading `input` or writing `out`/`err` fails.
///
/// # Example
/// ```
/// use spi::repl::{ReplOptions, run};
///
/// let input = "1 + 2 * 3\n\n5 / 0\n7 / 2\n";
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// let summary = run(input.as_bytes(), &mut out, &mut err, &ReplOptions::default()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "7\n3.5\n");
/// assert_eq!(String::from_utf8(err).unwrap(), "Division by zero at position 2.\n");
/// assert_eq!((summary.evaluated, summary.failed, summary.skipped), (2, 1, 1));
/// ```
pub fn run<R, W, E>(mut input: R,
                    mut out: W,
                    mut err: E,
                    options: &ReplOptions)
                    -> io::Result<Summary>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut summary = Summary::default();
    let mut buffer = String::new();
    let mut line_number = 0usize;

    log::info!("session started");

    if let Some(banner) = &options.banner {
        writeln!(out, "{banner}")?;
    }

    loop {
        if let Some(prompt) = &options.prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            if options.prompt.is_some() {
                writeln!(out)?;
            }
            break;
        }
        line_number += 1;

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            log::debug!("line {line_number}: empty, skipped");
            summary.skipped += 1;
            continue;
        }

        match run_line(line, &mut out, options)? {
            Ok(()) => summary.evaluated += 1,
            Err(e) => {
                log::debug!("line {line_number}: {} ({e:?})", e.kind());
                writeln!(err, "{e}")?;
                summary.failed += 1;
            },
        }
        out.flush()?;
    }

    log::info!("session ended: {} evaluated, {} failed, {} skipped",
               summary.evaluated,
               summary.failed,
               summary.skipped);

    Ok(summary)
}

/// Runs the pipeline on one line and writes its output.
///
/// The outer result carries I/O failures, the inner one the line's own
/// failure.
fn run_line<W: Write>(line: &str, out: &mut W, options: &ReplOptions) -> io::Result<Result<(), Error>> {
    if options.show_tokens
       && let Ok(tokens) = tokenize(line)
    {
        let rendered = tokens.iter()
                             .map(|(token, _)| token.to_string())
                             .collect::<Vec<_>>()
                             .join(" ");
        writeln!(out, "{rendered}")?;
    }

    let tree = match parse_line(line) {
        Ok(tree) => tree,
        Err(e) => return Ok(Err(e)),
    };

    if options.show_tree {
        writeln!(out, "{tree}")?;
    }

    match evaluate(&tree) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(Ok(()))
        },
        Err(e) => Ok(Err(e.into())),
    }
}
