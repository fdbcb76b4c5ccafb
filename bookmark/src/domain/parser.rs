// bookmark/src/domain/parser.rs
//! Line parser for bookmark files.
//!
//! One bookmark per line: a name, whitespace, then the value. The split is made
//! at the first whitespace run, so values may contain spaces but names may not.
//! Blank lines and lines starting with `#` (after trimming) are ignored.
use crate::domain::bookmark::{Bookmark, Bookmarks};
use crate::domain::error::{DomainError, DomainResult};
use crate::util::path::normalize_path;
use std::fmt;
use std::io::{self, BufRead};
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Rewrite every value as a canonical absolute path
    pub expand_paths: bool,
}

/// Result of classifying a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Skip,
    Entry(Bookmark),
    Invalid,
}

/// A line that did not split into exactly a name and a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based physical line number
    pub line: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error on line {}", self.line)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub bookmarks: Bookmarks,
    pub errors: Vec<SyntaxError>,
}

pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return LineOutcome::Skip;
    }

    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => {
            let value = rest.trim_start();
            if name.is_empty() || value.is_empty() {
                LineOutcome::Invalid
            } else {
                LineOutcome::Entry(Bookmark::new(name, value))
            }
        }
        None => LineOutcome::Invalid,
    }
}

/// Parse every line of `reader`.
///
/// Syntax errors do not stop parsing. Each one is handed to `on_error` as soon
/// as its line is read, then kept in the report in line order. Only a failing
/// read (including invalid UTF-8) or a failing `on_error` is an error.
#[instrument(level = "debug", skip(reader, on_error))]
pub fn parse_bookmarks<R, F>(
    reader: R,
    options: ParseOptions,
    mut on_error: F,
) -> DomainResult<ParseReport>
where
    R: BufRead,
    F: FnMut(&SyntaxError) -> io::Result<()>,
{
    let mut report = ParseReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(DomainError::Io)?;

        match parse_line(&line) {
            LineOutcome::Skip => trace!("line {}: skipped", line_num),
            LineOutcome::Invalid => {
                debug!("line {}: invalid: {:?}", line_num, line);
                let syntax_error = SyntaxError { line: line_num };
                on_error(&syntax_error)?;
                report.errors.push(syntax_error);
            }
            LineOutcome::Entry(mut bookmark) => {
                if options.expand_paths {
                    bookmark.value = normalize_path(&bookmark.value)
                        .to_string_lossy()
                        .into_owned();
                }
                trace!("line {}: {}", line_num, bookmark);
                report.bookmarks.push(bookmark);
            }
        }
    }

    debug!(
        "Parsed {} bookmarks, {} syntax errors",
        report.bookmarks.len(),
        report.errors.len()
    );
    Ok(report)
}
