// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for parsing typed command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! To understand what "simple" means, see the [Limitations](#limitations) section.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate looks up flags and options on the command line by name and
//! converts their values into typed values: strings, integers,
//! floating-point numbers, or sequences of any of those.
//!
//! # Quickstart
//!
//! 1. Create a [Parser] for the program's arguments with
//!    [Parser::new()] (or [Parser::with_args()] to specify the arguments
//!    yourself).
//!
//!    ```rust
//!    use tap::Parser;
//!
//!    let mut parser = Parser::with_args("my app", vec!["-t".into(), "3".into()]);
//!    ```
//!
//! 1. Register an [Arg] for each flag or option you wish to support. An
//!    [Arg] has an identifier, an optional alternative identifier and a
//!    description (used in the usage statement).
//!
//!    ```rust
//!    # use tap::{Arg, Parser, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut parser = Parser::with_args("my app", vec!["-t".into(), "3".into()]);
//!    #
//!    let help = parser.add_help()?;
//!    let time = parser.add(Arg::new("-t").alt("--time").help("time in seconds"))?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Query the values, specifying the type you want:
//!
//!    ```rust
//!    # use tap::{Arg, Parser, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut parser = Parser::with_args("my app", vec!["-t".into(), "3".into()]);
//!    #
//!    # let help = parser.add_help()?;
//!    # let time = parser.add(Arg::new("-t").alt("--time").help("time in seconds"))?;
//!    #
//!    if parser.get_flag(&help) {
//!        print!("{}", parser.usage());
//!    }
//!
//!    let seconds: u32 = parser.get_option(&time)?;
//!    assert_eq!(seconds, 3);
//!    # Ok(())
//!    # }
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing flags, options with and without a
//! default value, sequence options and a positional argument.
//!
//! ```rust
//! use tap::{Arg, Error, Parser, Result};
//!
//! fn main() -> Result<()> {
//!     let cli_args = vec!["-n", "3", "-o", "out.txt", "-f", "1.5", "2.5", "-v", "input.txt"];
//!
//!     let mut parser = Parser::with_args(
//!         "my app",
//!         cli_args.into_iter().map(String::from).collect(),
//!     );
//!
//!     let verbose = parser.add(Arg::new("-v").alt("--verbose").help("be chatty"))?;
//!     let count = parser.add(Arg::new("-n").help("repeat count"))?;
//!     let factors = parser.add(Arg::new("-f").help("scaling factors"))?;
//!     let depth = parser.add(Arg::new("-d").help("search depth"))?;
//!     let output = parser.add(Arg::new("-o").help("output file"))?;
//!     let input = parser.add_positional("input file");
//!
//!     assert!(parser.get_flag(&verbose));
//!     assert_eq!(parser.get_option::<i32>(&count)?, 3);
//!     assert_eq!(parser.get_option::<Vec<f64>>(&factors)?, vec![1.5, 2.5]);
//!     assert_eq!(parser.get_option_or::<u8>(&depth, 5)?, 5);
//!     assert_eq!(parser.get_option::<String>(&output)?, "out.txt");
//!     assert_eq!(parser.get_positional::<String>(&input)?, "input.txt");
//!
//!     // The value is not a number.
//!     assert_eq!(
//!         parser.get_option::<i32>(&output),
//!         Err(Error::InvalidFormat {
//!             token: "out.txt".into(),
//!             type_name: "int".into(),
//!         })
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -a 4 -b -150 --output /tmp/testfile
//! $ cargo run --example positional-args -- -v input.txt output.txt
//! $ cargo run --example sequence-args -- -t 3 6 20 -f 5
//! $ cargo run --example error-handling -- -c THIS SHOULD RAISE AN ERROR
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - A "token" is a single command-line argument.
//!
//!   > **Note:** A single or double quoted string counts as _one_ token,
//!   > even if that string comprises more than one word (this magic is handled
//!   > by the shell).
//!
//! - An "identifier" is a token naming a flag or option, for example `-t`
//!   or `--time`. An [Arg] has one identifier and optionally an
//!   alternative identifier.
//!
//! - A "flag" is an argument with no value. Only its presence matters.
//!
//! - An "option" is an identifier followed by a single value token.
//!
//! - A "sequence option" is an identifier followed by any number of value
//!   tokens. The values end at the next registered identifier or at the
//!   end of the command line.
//!
//! - A "positional argument" is a value identified by its position on the
//!   command line rather than by an identifier.
//!
//! ### Example of argument types
//!
//! Assume `-t` and `-f` are registered and a program is run as follows:
//!
//! ```bash
//! $ myprog -t 3 6 20 -f 5
//! ```
//!
//! Querying `-t` as a `Vec<i32>` gives `[3, 6, 20]` whereas querying it as
//! an `i32` gives `3`. Querying `-f` as an `i32` gives `5`.
//!
//! # Summary of features and behaviour
//!
//! - Simple and intuitive ("ergonomic") API.
//! - Values are converted to the type requested by the caller
//!   (see [Argument]).
//! - Options can have a default value which is used only if the option is
//!   not specified: a specified option with a bad value is always an error.
//! - Errors name the offending token or identifier and the expected type.
//! - Querying never modifies the parser: the same query always gives the
//!   same answer.
//! - Generates an aligned usage statement from the registered arguments.
//! - Diagnostics are emitted using the [`log`](https://crates.io/crates/log)
//!   crate.
//!
//! # Limitations
//!
//! - Option bundling is not supported
//!
//!   **Example:** `-d -v -a "foo bar"` is valid, but `-dva "foo bar"` is not.
//!
//! - Options and their values must be separated by whitespace.
//!
//!   **Example:** `--time 3` is valid, but `--time=3` is not.
//!
//! - Identifiers must match exactly: there is no abbreviation of long
//!   identifiers.
//!
//! - Only the first occurrence of an identifier is considered.
//!
//! - A positional argument is read from the token following the furthest
//!   registered identifier found on the command line (further positional
//!   arguments take the following tokens). Positional arguments should
//!   therefore come first, or follow a flag.
//!
//! - There are no subcommands, constraints or shell completions.

mod args;
mod cmdline;
mod convert;
mod error;
mod parser;

pub use error::{Error, Result};

pub use args::{Arg, Args};
pub use cmdline::{get_args, CommandLine, Position};
pub use convert::{Argument, LongDouble};
pub use parser::{Parser, Settings, HELP_ALT_ID, HELP_DESCRIPTION, HELP_ID};
