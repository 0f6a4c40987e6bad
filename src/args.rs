// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use log::debug;

use crate::cmdline::Position;

/// Separator shown between the identifier and the alternative identifier.
const ALT_SEPARATOR: char = '|';

/// Name shown for a positional argument that has no description.
const POSITIONAL_NAME: &str = "<positional>";

/// An argument descriptor: either a flag/option, or a positional argument.
///
/// Flags and options are identified by [Arg.id] (and optionally
/// [Arg.id_alt]). Positional arguments have no identifier and are resolved
/// by [Arg.position] alone.
///
/// # Note
///
/// - All members are public for convenience.
/// - Only the parser sets [Arg.position].
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Arg {
    /// Primary identifier, for example `-t` (empty for positional
    /// arguments). This is the name used in error messages.
    pub id: String,
    /// Alternative identifier, for example `--time`.
    pub id_alt: Option<String>,
    /// Description of the argument (shown in the usage statement).
    pub description: String,

    //----------------------------------------
    // The following is set by the parser.
    //----------------------------------------
    /// Position on the command line.
    ///
    /// - For flags/options, where the identifier was found when the
    ///   argument was registered ([None] if it was not specified).
    /// - For positional arguments, the slot the value is read from.
    pub position: Option<Position>,
}

impl Arg {
    /// Create a new flag/option descriptor.
    pub fn new(id: &str) -> Self {
        Arg::default().id(id)
    }

    /// Specify the primary identifier.
    pub fn id(self, id: &str) -> Self {
        Arg {
            id: id.into(),
            ..self
        }
    }

    /// Specify the alternative identifier. An empty value means there is
    /// no alternative.
    pub fn alt(self, id_alt: &str) -> Self {
        let id_alt = match id_alt {
            "" => None,
            alt => Some(alt.into()),
        };

        Arg { id_alt, ..self }
    }

    /// Specify the description for the argument.
    pub fn help(self, description: &str) -> Self {
        Arg {
            description: description.into(),
            ..self
        }
    }

    /// Returns `true` if the argument is positional (has no identifier).
    pub fn is_positional(&self) -> bool {
        self.id.is_empty()
    }

    /// Returns `true` if the token is either of this arguments identifiers.
    pub fn matches(&self, token: &str) -> bool {
        if self.is_positional() {
            return false;
        }

        self.id == token || self.id_alt.as_deref() == Some(token)
    }

    /// The name used to refer to the argument in error messages.
    pub fn name(&self) -> String {
        if !self.is_positional() {
            self.id.clone()
        } else if !self.description.is_empty() {
            self.description.clone()
        } else {
            POSITIONAL_NAME.into()
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.id_alt {
            Some(alt) => write!(f, "{}{}{}", self.id, ALT_SEPARATOR, alt),
            None => write!(f, "{}", self.id),
        }
    }
}

/// The argument registry.
///
/// Holds flag/option descriptors and positional descriptors separately,
/// both in registration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Args {
    entries: Vec<Arg>,
    positionals: Vec<Arg>,
}

impl Args {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Args::default()
    }

    /// Returns the number of registered flags/options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no flags/options are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a flag/option.
    pub fn add(&mut self, arg: Arg) {
        debug!("registering argument: {:?}", arg);

        self.entries.push(arg);
    }

    /// Register a positional argument.
    pub fn add_positional(&mut self, arg: Arg) {
        debug!("registering positional argument: {:?}", arg);

        self.positionals.push(arg);
    }

    /// Determine if a flag/option has been registered whose identifier or
    /// alternative identifier is `id`.
    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the first registered flag/option matching `id`.
    pub fn get(&self, id: &str) -> Option<&Arg> {
        self.entries.iter().find(|a| a.matches(id))
    }

    /// Returns `true` if `token` names any registered flag/option.
    pub fn is_identifier(&self, token: &str) -> bool {
        self.entries.iter().any(|a| a.matches(token))
    }

    /// Iterate over the registered flags/options.
    pub fn iter(&self) -> impl Iterator<Item = &Arg> {
        self.entries.iter()
    }

    /// Iterate over the registered positional arguments.
    pub fn positionals(&self) -> impl Iterator<Item = &Arg> {
        self.positionals.iter()
    }

    /// The position the next positional argument will be read from.
    ///
    /// This is one past the furthest identifier found for any registered
    /// flag/option, offset by the number of positional arguments already
    /// registered.
    pub fn next_positional_slot(&self) -> Position {
        let base = self
            .entries
            .iter()
            .filter_map(|a| a.position)
            .max()
            .map_or(0, |p| p + 1);

        base + self.positionals.len()
    }
}
