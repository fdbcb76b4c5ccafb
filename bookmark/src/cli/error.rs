// src/cli/error.rs
use crate::domain::error::DomainError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("incompatible args: {0}")]
    IncompatibleArgs(&'static str),

    #[error("Please use either -f or -F")]
    MissingSource,

    #[error("no bookmark name on stdin")]
    EmptyQuery,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
