// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// An [Arg](crate::Arg) was registered without a primary identifier.
    #[error("missing argument identifier")]
    MissingId,

    /// An identifier was registered twice and
    /// [Settings::reject_duplicates](crate::Settings::reject_duplicates)
    /// is set.
    #[error("argument already registered: {0}")]
    DuplicateArg(String),

    /// Failed to write the usage statement.
    #[error("I/O error: {0}")]
    Io(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// The argument was found but no value token follows it.
    #[error("Couldn't find a value for argument: {0}")]
    MissingValue(String),

    /// The value token could not be converted to the requested type
    /// (not a number, or out of range for the type).
    #[error("Couldn't convert '{token}' to type <{type_name}>.")]
    InvalidFormat {
        /// The offending token, verbatim.
        token: String,
        /// Display name of the requested type.
        type_name: String,
    },

    /// An argument without a default value was not specified.
    #[error("Couldn't find required argument: {0}")]
    MissingRequiredArg(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
