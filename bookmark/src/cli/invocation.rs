// src/cli/invocation.rs
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use std::path::PathBuf;

/// Where bookmark data is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

/// Where the name to resolve comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Name(String),
    Stdin,
}

/// Validated options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: Source,
    pub query: Option<Query>,
    pub list_stdout: bool,
    pub list_stderr: bool,
    pub expand_paths: bool,
}

/// Rejects flag combinations that cannot run. Pure, no I/O.
pub fn check_conflicts(cli: &Cli) -> CliResult<()> {
    if cli.bookmark.is_some() && cli.bookmark_stdin {
        return Err(CliError::IncompatibleArgs("-b, -B"));
    }
    if cli.bookmark_file.is_some() && cli.bookmark_file_stdin {
        return Err(CliError::IncompatibleArgs("-f, -F"));
    }
    if cli.bookmark_stdin && cli.bookmark_file_stdin {
        return Err(CliError::IncompatibleArgs("-B, -F"));
    }
    if cli.bookmark_file.is_none() && !cli.bookmark_file_stdin {
        return Err(CliError::MissingSource);
    }
    Ok(())
}

impl Invocation {
    /// Builds the invocation from parsed arguments.
    ///
    /// `settings` is only called after the flags passed validation, so a
    /// rejected command line never touches the config file.
    pub fn from_cli<F>(cli: &Cli, settings: F) -> CliResult<Self>
    where
        F: FnOnce() -> Settings,
    {
        check_conflicts(cli)?;
        let settings = settings();

        let source = match &cli.bookmark_file {
            Some(path) => Source::File(path.clone()),
            None => Source::Stdin,
        };

        let query = match (&cli.bookmark, cli.bookmark_stdin) {
            (Some(name), _) => Some(Query::Name(name.clone())),
            (None, true) => Some(Query::Stdin),
            (None, false) => None,
        };

        Ok(Self {
            source,
            query,
            list_stdout: cli.list,
            list_stderr: cli.list_stderr,
            expand_paths: cli.expand_paths || settings.expand_paths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cli_with(f: impl FnOnce(&mut Cli)) -> Cli {
        let mut cli = Cli::default();
        f(&mut cli);
        cli
    }

    fn no_settings() -> Settings {
        panic!("settings must not be loaded for an invalid command line")
    }

    #[rstest]
    #[case::query_twice(
        cli_with(|c| { c.bookmark = Some("home".into()); c.bookmark_stdin = true; c.bookmark_file = Some("b".into()); }),
        "incompatible args: -b, -B"
    )]
    #[case::source_twice(
        cli_with(|c| { c.bookmark_file = Some("b".into()); c.bookmark_file_stdin = true; }),
        "incompatible args: -f, -F"
    )]
    #[case::stdin_twice(
        cli_with(|c| { c.bookmark_stdin = true; c.bookmark_file_stdin = true; }),
        "incompatible args: -B, -F"
    )]
    #[case::no_source(
        cli_with(|c| { c.bookmark = Some("home".into()); c.config = Some("cfg.toml".into()); }),
        "Please use either -f or -F"
    )]
    #[case::list_without_source(cli_with(|c| c.list = true), "Please use either -f or -F")]
    fn given_invalid_flags_when_from_cli_then_rejected_before_settings(
        #[case] cli: Cli,
        #[case] message: &str,
    ) {
        let err = Invocation::from_cli(&cli, no_settings).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn given_no_source_when_check_conflicts_then_missing_source() {
        let cli = cli_with(|c| c.bookmark = Some("home".into()));
        assert!(matches!(check_conflicts(&cli), Err(CliError::MissingSource)));
    }

    #[test]
    fn given_settings_with_expand_paths_when_from_cli_then_enabled() {
        let cli = cli_with(|c| c.bookmark_file = Some("mine".into()));
        let inv = Invocation::from_cli(&cli, || Settings { expand_paths: true }).unwrap();
        assert_eq!(inv.source, Source::File(PathBuf::from("mine")));
        assert!(inv.expand_paths);
        assert!(inv.query.is_none());
    }

    #[test]
    fn given_file_and_stdin_query_when_from_cli_then_valid() {
        let cli = cli_with(|c| {
            c.bookmark_file = Some("mine".into());
            c.bookmark_stdin = true;
        });
        let inv = Invocation::from_cli(&cli, Settings::default).unwrap();
        assert_eq!(inv.source, Source::File(PathBuf::from("mine")));
        assert_eq!(inv.query, Some(Query::Stdin));
        assert!(!inv.expand_paths);
    }

    #[test]
    fn given_stdin_data_and_named_query_when_from_cli_then_valid() {
        let cli = cli_with(|c| {
            c.bookmark_file_stdin = true;
            c.bookmark = Some("home".into());
            c.list = true;
            c.list_stderr = true;
        });
        let inv = Invocation::from_cli(&cli, Settings::default).unwrap();
        assert_eq!(inv.source, Source::Stdin);
        assert_eq!(inv.query, Some(Query::Name("home".into())));
        assert!(inv.list_stdout && inv.list_stderr);
    }
}
