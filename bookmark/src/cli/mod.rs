// src/cli/mod.rs
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::invocation::{Invocation, Query, Source};
use crate::config::{generate_default_config, load_settings};
use crate::domain::parser::{parse_bookmarks, ParseOptions, ParseReport, SyntaxError};
use crate::exitcode;
use crate::util::helper::read_trimmed_line;
use crate::util::path::open_bookmark_file;
use crate::TOOL_NAME;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

pub mod args;
pub mod error;
pub mod invocation;

/// Entry point used by `main`: wires the process streams into [`run`].
pub fn execute_command(cli: Cli) -> CliResult<i32> {
    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(exitcode::SUCCESS);
    }
    if cli.generate_config {
        println!("{}", generate_default_config());
        return Ok(exitcode::SUCCESS);
    }

    let invocation = Invocation::from_cli(&cli, || {
        cli.config
            .as_deref()
            .map(load_settings)
            .unwrap_or_default()
    })?;
    debug!("{:?}", invocation);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = run(
        &invocation,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    io::stdout().flush()?;
    Ok(code)
}

/// Parse, list, then resolve.
///
/// Returns the process exit code: [`exitcode::NOT_FOUND`] when a query was
/// given but matched nothing, [`exitcode::SUCCESS`] otherwise.
#[instrument(level = "debug", skip(stdin, out, err))]
pub fn run<I, O, E>(invocation: &Invocation, stdin: &mut I, out: &mut O, err: &mut E) -> CliResult<i32>
where
    I: BufRead,
    O: Write,
    E: Write,
{
    let options = ParseOptions {
        expand_paths: invocation.expand_paths,
    };

    let report = load_bookmarks(&invocation.source, options, stdin, err)?;
    let bookmarks = report.bookmarks;

    if invocation.list_stdout {
        for name in bookmarks.names() {
            writeln!(out, "{}", name)?;
        }
    }
    if invocation.list_stderr {
        for name in bookmarks.names() {
            writeln!(err, "{}", name)?;
        }
    }

    let query = match &invocation.query {
        Some(Query::Name(name)) => name.clone(),
        Some(Query::Stdin) => read_trimmed_line(stdin)?.ok_or(CliError::EmptyQuery)?,
        None => return Ok(exitcode::SUCCESS),
    };

    match bookmarks.resolve(&query) {
        Some(bookmark) => {
            writeln!(out, "{}", bookmark.value)?;
            Ok(exitcode::SUCCESS)
        }
        None => {
            debug!("Bookmark not found: {}", query);
            Ok(exitcode::NOT_FOUND)
        }
    }
}

fn load_bookmarks<I: BufRead, E: Write>(
    source: &Source,
    options: ParseOptions,
    stdin: &mut I,
    err: &mut E,
) -> CliResult<ParseReport> {
    let report_error = |e: &SyntaxError| writeln!(err, "{}: {}", TOOL_NAME, e);
    let report = match source {
        // the file handle is dropped when this arm ends, on success or error
        Source::File(path) => parse_bookmarks(open_bookmark_file(path)?, options, report_error)?,
        Source::Stdin => parse_bookmarks(stdin, options, report_error)?,
    };
    Ok(report)
}
