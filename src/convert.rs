// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Conversion of command-line tokens into typed values.

use log::debug;

use crate::args::Args;
use crate::cmdline::{CommandLine, Position};
use crate::error::{Error, Result};

/// Trait implemented by every type an argument value can be converted to.
///
/// Implementations are provided for [String], all integer types, [f32],
/// [f64], [LongDouble] and [Vec] of any of those.
pub trait Argument: Sized {
    /// Name of the type used in error messages.
    fn type_name() -> String;

    /// Convert the value(s) of the argument whose identifier is at
    /// `position`.
    ///
    /// By default, this converts the single token following the identifier.
    fn parse(cmdline: &CommandLine, args: &Args, position: Position) -> Result<Self> {
        Self::convert(cmdline, args, position.saturating_add(1))
    }

    /// Convert the value expected at `position`.
    ///
    /// # Errors
    ///
    /// - [Error::MissingValue] if there is no token at `position`.
    /// - [Error::InvalidFormat] if the token cannot be converted.
    fn convert(cmdline: &CommandLine, args: &Args, position: Position) -> Result<Self>;
}

/// Extended precision floating-point value (`long double`).
///
/// Rust has no native type wider than [f64], so the value is held as an
/// [f64]; the wrapper exists so callers can ask for the widest float
/// available by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LongDouble(pub f64);

impl From<LongDouble> for f64 {
    fn from(value: LongDouble) -> Self {
        value.0
    }
}

impl From<f64> for LongDouble {
    fn from(value: f64) -> Self {
        LongDouble(value)
    }
}

fn value_at(cmdline: &CommandLine, position: Position) -> Result<&str> {
    cmdline
        .get(position)
        .ok_or_else(|| Error::MissingValue(cmdline.preceding(position)))
}

fn invalid_format(token: &str, type_name: &str) -> Error {
    debug!("cannot convert {:?} to {}", token, type_name);

    Error::InvalidFormat {
        token: token.into(),
        type_name: type_name.into(),
    }
}

// Rust parses overflowing floats as infinity rather than failing.
fn is_infinity(token: &str) -> bool {
    let unsigned = token.trim_start_matches(|c: char| c == '+' || c == '-');

    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl Argument for String {
    fn type_name() -> String {
        "string".into()
    }

    /// The token is returned verbatim.
    fn convert(cmdline: &CommandLine, _args: &Args, position: Position) -> Result<Self> {
        value_at(cmdline, position).map(String::from)
    }
}

// Integers are parsed strictly: "4.5", " 4" and "4abc" are all invalid.
macro_rules! integer_argument {
    ($($t:ty => $name:expr),* $(,)?) => {
        $(
            impl Argument for $t {
                fn type_name() -> String {
                    $name.into()
                }

                fn convert(cmdline: &CommandLine, _args: &Args, position: Position) -> Result<Self> {
                    let token = value_at(cmdline, position)?;

                    token
                        .parse::<$t>()
                        .map_err(|_| invalid_format(token, $name))
                }
            }
        )*
    };
}

integer_argument! {
    i8 => "i8",
    i16 => "short",
    i32 => "int",
    i64 => "long",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "unsigned short",
    u32 => "unsigned int",
    u64 => "unsigned long",
    u128 => "u128",
    usize => "usize",
}

macro_rules! float_argument {
    ($($t:ty => $name:expr),* $(,)?) => {
        $(
            impl Argument for $t {
                fn type_name() -> String {
                    $name.into()
                }

                fn convert(cmdline: &CommandLine, _args: &Args, position: Position) -> Result<Self> {
                    let token = value_at(cmdline, position)?;

                    match token.parse::<$t>() {
                        Ok(value) if value.is_infinite() && !is_infinity(token) => {
                            Err(invalid_format(token, $name))
                        }
                        Ok(value) => Ok(value),
                        Err(_) => Err(invalid_format(token, $name)),
                    }
                }
            }
        )*
    };
}

float_argument! {
    f32 => "float",
    f64 => "double",
}

impl Argument for LongDouble {
    fn type_name() -> String {
        "long double".into()
    }

    fn convert(cmdline: &CommandLine, args: &Args, position: Position) -> Result<Self> {
        f64::convert(cmdline, args, position)
            .map(LongDouble)
            .map_err(|e| match e {
                Error::InvalidFormat { token, .. } => Error::InvalidFormat {
                    token,
                    type_name: Self::type_name(),
                },
                e => e,
            })
    }
}

impl<T: Argument> Argument for Vec<T> {
    fn type_name() -> String {
        format!("vector<{}>", T::type_name())
    }

    /// Convert every value following the identifier up to the next
    /// registered identifier. Fails on the first value that cannot be
    /// converted.
    fn parse(cmdline: &CommandLine, args: &Args, position: Position) -> Result<Self> {
        cmdline
            .collect_values(args, position)
            .into_iter()
            .map(|p| T::convert(cmdline, args, p))
            .collect()
    }

    /// Convert the run of values starting at `position`.
    fn convert(cmdline: &CommandLine, args: &Args, position: Position) -> Result<Self> {
        cmdline
            .value_run(args, position)
            .into_iter()
            .map(|p| T::convert(cmdline, args, p))
            .collect()
    }
}
