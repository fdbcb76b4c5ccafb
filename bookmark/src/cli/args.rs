// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "bookmark", author, about, long_about = None, disable_version_flag = true)]
/// Resolve a bookmark name to its destination
pub struct Cli {
    #[arg(long = "version", help = "display version, then exit")]
    pub version: bool,

    #[arg(
        short = 'b',
        long = "bookmark",
        value_name = "NAME",
        help = "bookmark name to resolve, incompatible with -B"
    )]
    pub bookmark: Option<String>,

    #[arg(
        short = 'B',
        long = "bookmark-stdin",
        help = "read bookmark to resolve from stdin, incompatible with -b, -F"
    )]
    pub bookmark_stdin: bool,

    #[arg(
        short = 'f',
        long = "bookmark-file",
        value_name = "FILE",
        help = "file that holds your bookmarks, incompatible with -F"
    )]
    pub bookmark_file: Option<PathBuf>,

    #[arg(
        short = 'F',
        long = "bookmark-file-stdin",
        help = "read bookmark data from stdin, incompatible with -f, -B"
    )]
    pub bookmark_file_stdin: bool,

    #[arg(
        short = 'l',
        long = "list",
        help = "print bookmark names to stdout, runs alongside -L if present"
    )]
    pub list: bool,

    #[arg(
        short = 'L',
        long = "list-stderr",
        help = "print bookmark names to stderr, runs alongside -l if present"
    )]
    pub list_stderr: bool,

    #[arg(
        long = "expand-paths",
        help = "treat bookmark destinations as paths and fully resolve them"
    )]
    pub expand_paths: bool,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[arg(long = "generate-config", help = "print a default configuration file")]
    pub generate_config: bool,
}
