// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::args::Args;

/// Index of a token on the command line.
///
/// A position equal to (or beyond) [CommandLine::end()] refers to no token
/// at all, meaning "no value present".
pub type Position = usize;

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [CommandLine::from_env()] and [Parser::new()](crate::Parser::new).
/// Call [Parser::with_args()](crate::Parser::with_args) if you want to
/// specify your own arguments.
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// The ordered, immutable sequence of command-line tokens.
///
/// Positions into it are stable for its whole lifetime.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a set of tokens (without the program
    /// name).
    pub fn new(tokens: Vec<String>) -> Self {
        CommandLine { tokens }
    }

    /// Create a command line from the arguments passed to the program.
    pub fn from_env() -> Self {
        CommandLine::new(get_args())
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The position one past the last token.
    pub fn end(&self) -> Position {
        self.tokens.len()
    }

    /// Returns the token at the specified position, or [None] if the
    /// position is at or beyond [CommandLine::end()].
    pub fn get(&self, position: Position) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    /// All tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Find the position of an argument on the command line.
    ///
    /// The first token exactly matching `id` wins. Only if `id` is not
    /// present is the first token matching `id_alt` returned (an empty
    /// alternative is ignored). Matching is case sensitive and there is
    /// no abbreviation or prefix matching.
    pub fn find_position(&self, id: &str, id_alt: Option<&str>) -> Option<Position> {
        let position = self
            .tokens
            .iter()
            .position(|t| t == id)
            .or_else(|| match id_alt {
                Some(alt) if !alt.is_empty() => self.tokens.iter().position(|t| t == alt),
                _ => None,
            });

        debug!(
            "find_position: id: {:?}, id_alt: {:?}, position: {:?}",
            id, id_alt, position
        );

        position
    }

    /// Collect the positions of the values belonging to the argument whose
    /// identifier is at `position`.
    ///
    /// The run starts immediately after the identifier and stops at the
    /// next token that is a registered identifier, or at the end of the
    /// command line. An empty run is valid (zero values).
    pub fn collect_values(&self, args: &Args, position: Position) -> Vec<Position> {
        self.value_run(args, position.saturating_add(1))
    }

    /// Collect the positions from `start` (inclusive) up to the next
    /// registered identifier or the end of the command line.
    pub fn value_run(&self, args: &Args, start: Position) -> Vec<Position> {
        let positions: Vec<Position> = (start..self.end())
            .take_while(|p| !args.is_identifier(&self.tokens[*p]))
            .collect();

        trace!("value_run: start: {}, positions: {:?}", start, positions);

        positions
    }

    /// Returns the token immediately before `position`, which for an option
    /// is its identifier.
    pub(crate) fn preceding(&self, position: Position) -> String {
        position
            .checked_sub(1)
            .and_then(|p| self.get(p))
            .unwrap_or_default()
            .to_string()
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(tokens: Vec<String>) -> Self {
        CommandLine::new(tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for CommandLine {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CommandLine::new(iter.into_iter().map(Into::into).collect())
    }
}
