// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::io::Write;

use log::{debug, warn};

use crate::args::{Arg, Args};
use crate::cmdline::{get_args, CommandLine, Position};
use crate::convert::Argument;
use crate::error::{Error, Result};

/// Identifier of the default help argument.
pub const HELP_ID: &str = "-h";

/// Alternative identifier of the default help argument.
pub const HELP_ALT_ID: &str = "--help";

/// Description of the default help argument.
pub const HELP_DESCRIPTION: &str = "Display this information";

const USAGE_PREFIX_SPACES: &str = "  ";

/// Spaces between the widest identifier column and the descriptions.
const USAGE_COLUMN_GAP: usize = 3;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, registering an identifier that is already registered is an
    /// error. By default it is allowed and the first registered argument
    /// wins.
    reject_duplicates: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify that registering a flag/option whose identifier (or
    /// alternative identifier) is already registered should fail with
    /// [Error::DuplicateArg].
    pub fn reject_duplicates(self) -> Self {
        Settings {
            reject_duplicates: true,
        }
    }
}

/// The main object used to query the command line.
///
/// Register every flag/option first, then any positional arguments, then
/// query the values. Queries never modify the parser, so they can be
/// repeated and always give the same answer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Parser {
    description: String,
    settings: Settings,
    cmdline: CommandLine,
    args: Args,
}

impl Parser {
    /// Create a parser for the arguments passed to the program.
    pub fn new(description: &str) -> Self {
        Parser::with_args(description, get_args())
    }

    /// Create a parser for a set of command line arguments (without the
    /// program name).
    pub fn with_args(description: &str, cli_args: Vec<String>) -> Self {
        Parser {
            description: description.into(),
            cmdline: CommandLine::new(cli_args),
            ..Default::default()
        }
    }

    /// Specify any settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        Parser { settings, ..self }
    }

    /// The command line being parsed.
    pub fn cmdline(&self) -> &CommandLine {
        &self.cmdline
    }

    /// The registered arguments.
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Register a flag or option.
    ///
    /// Returns the registered [Arg] (with its position set) which is used
    /// to query the value.
    pub fn add(&mut self, arg: Arg) -> Result<Arg> {
        if arg.is_positional() {
            return Err(Error::MissingId);
        }

        let ids = std::iter::once(arg.id.as_str()).chain(arg.id_alt.as_deref());

        for id in ids {
            if self.args.exists(id) {
                if self.settings.reject_duplicates {
                    return Err(Error::DuplicateArg(id.into()));
                }

                warn!("argument {:?} already registered: first registered wins", id);
            }
        }

        let position = self.cmdline.find_position(&arg.id, arg.id_alt.as_deref());

        let arg = Arg { position, ..arg };

        self.args.add(arg.clone());

        Ok(arg)
    }

    /// Register the default help argument: `-h`, `--help`.
    ///
    /// # Note
    ///
    /// Nothing happens automatically if help is requested: call
    /// [Parser::get_flag()] and [Parser::usage()] as required.
    pub fn add_help(&mut self) -> Result<Arg> {
        self.add(Arg::new(HELP_ID).alt(HELP_ALT_ID).help(HELP_DESCRIPTION))
    }

    /// Register a positional argument.
    ///
    /// The value is read from the position following the furthest
    /// flag/option registered so far, so register all flags and options
    /// first. Each further positional argument takes the next position.
    pub fn add_positional(&mut self, description: &str) -> Arg {
        let position = self.args.next_positional_slot();

        debug!(
            "positional argument {:?} assigned position {}",
            description, position
        );

        let arg = Arg {
            position: Some(position),
            ..Arg::default().help(description)
        };

        self.args.add_positional(arg.clone());

        arg
    }

    fn find(&self, arg: &Arg) -> Option<Position> {
        if arg.is_positional() {
            return None;
        }

        self.cmdline.find_position(&arg.id, arg.id_alt.as_deref())
    }

    /// Returns `true` if either identifier of the argument was specified.
    pub fn get_flag(&self, arg: &Arg) -> bool {
        self.find(arg).is_some()
    }

    /// Returns the value of a required option.
    ///
    /// # Errors
    ///
    /// - [Error::MissingRequiredArg] if the option was not specified.
    /// - [Error::MissingValue] if the option has no value.
    /// - [Error::InvalidFormat] if the value cannot be converted.
    pub fn get_option<T: Argument>(&self, arg: &Arg) -> Result<T> {
        let position = self
            .find(arg)
            .ok_or_else(|| Error::MissingRequiredArg(arg.name()))?;

        debug!("get_option: {:?} <{}> at {}", arg.id, T::type_name(), position);

        T::parse(&self.cmdline, &self.args, position)
    }

    /// Returns the value of an option, or `default_value` if the option was
    /// not specified.
    ///
    /// # Note
    ///
    /// The default only applies if the option is absent: an option that is
    /// specified with a missing or invalid value is still an error.
    pub fn get_option_or<T: Argument>(&self, arg: &Arg, default_value: T) -> Result<T> {
        match self.find(arg) {
            Some(position) => T::parse(&self.cmdline, &self.args, position),
            None => {
                debug!("get_option_or: {:?} not specified, using default", arg.id);

                Ok(default_value)
            }
        }
    }

    /// Returns the value of a positional argument.
    ///
    /// If `T` is a [Vec], all values from the positional arguments position
    /// up to the next registered identifier are returned.
    pub fn get_positional<T: Argument>(&self, arg: &Arg) -> Result<T> {
        let position = arg
            .position
            .ok_or_else(|| Error::MissingValue(arg.name()))?;

        debug!(
            "get_positional: {:?} <{}> at {}",
            arg.name(),
            T::type_name(),
            position
        );

        T::convert(&self.cmdline, &self.args, position).map_err(|e| match e {
            Error::MissingValue(_) => Error::MissingValue(arg.name()),
            e => e,
        })
    }

    /// Generate the usage statement using the parsers description as the
    /// header.
    pub fn usage(&self) -> String {
        self.usage_with_header(&self.description)
    }

    /// Generate the usage statement with the specified header.
    ///
    /// Each flag/option is shown on its own line with the descriptions
    /// aligned in a single column.
    pub fn usage_with_header(&self, header: &str) -> String {
        format!(
            "{}\n\n{}{}",
            header,
            self.usage_positionals(),
            self.usage_args()
        )
    }

    /// Write the usage statement to the specified writer.
    pub fn generate_usage<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self.usage())?;

        Ok(())
    }

    // Positional arguments are not listed.
    fn usage_positionals(&self) -> String {
        String::new()
    }

    fn usage_args(&self) -> String {
        let width = self
            .args
            .iter()
            .map(|a| a.to_string().len())
            .max()
            .unwrap_or_default()
            + USAGE_COLUMN_GAP;

        self.args
            .iter()
            .map(|a| {
                let ids = a.to_string();

                if a.description.is_empty() {
                    format!("{}{}\n", USAGE_PREFIX_SPACES, ids)
                } else {
                    format!(
                        "{}{:<width$}{}\n",
                        USAGE_PREFIX_SPACES,
                        ids,
                        a.description,
                        width = width
                    )
                }
            })
            .collect()
    }
}
