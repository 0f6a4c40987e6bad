// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to handle positional arguments.
///
/// Positional arguments are read from the tokens following the furthest
/// flag, so specify them first or after the flags:
///
/// ```bash
/// $ cargo run --example positional-args -- -v input.txt output.txt
/// ```
use tap::{Arg, Parser, Result};

fn main() -> Result<()> {
    let mut parser = Parser::new("positional-args: copy a file");

    // Flags and options must be registered before positional arguments.
    let verbose = parser.add(Arg::new("-v").alt("--verbose").help("be chatty"))?;

    let input = parser.add_positional("input file");
    let output = parser.add_positional("output file");

    let input: String = parser.get_positional(&input)?;
    let output: String = parser.get_positional(&output)?;

    if parser.get_flag(&verbose) {
        println!("INFO: copying {:?} to {:?}", input, output);
    }

    println!("{} -> {}", input, output);

    Ok(())
}
