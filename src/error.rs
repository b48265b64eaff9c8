//! Error types for loading cities and parsing shield commands.
//!
//! The geometry core (`coverage`, `placement`) is total over its inputs and
//! never returns these; they only surface from the loader and the command
//! parser.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a city file or handling user input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShieldError {
    /// The city file could not be read.
    #[error("failed to read city file {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The city file is not a valid JSON list of cities.
    #[error("invalid city data in {}: {source}", path.display())]
    Json {
        /// Path that was being parsed (`<memory>` for in-memory input)
        path: PathBuf,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A command line typed by the user could not be understood.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Malformed command input. Reported back to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[error("empty command, type 'help' for the list of commands")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),

    /// The command got the wrong number of arguments.
    #[error("'{command}' expects {expected}, got {found} argument(s)")]
    WrongArity {
        /// Canonical command name
        command: &'static str,
        /// Human readable description of the expected arguments
        expected: &'static str,
        /// Number of arguments actually supplied
        found: usize,
    },

    /// An argument that should be a number is not one.
    #[error("'{0}' is not a number, enter coordinates and radius as 'x y r'")]
    InvalidNumber(String),

    /// A number parsed but is infinite or NaN.
    #[error("'{0}' is not a finite number")]
    NonFinite(String),

    /// A radius below zero was supplied.
    #[error("radius must not be negative, got {0}")]
    NegativeRadius(f64),
}

/// Result alias used by the loader.
pub type Result<T> = std::result::Result<T, ShieldError>;
