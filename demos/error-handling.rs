// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to deal with errors.
///
/// Every query returns a [Result] so the caller decides which failures are
/// fatal.
use tap::{Arg, Error, Parser, Result};

fn main() -> Result<()> {
    let mut parser = Parser::new("error-handling: inspect failures");

    let c = parser.add(Arg::new("-c").help("a count"))?;
    let level = parser.add(Arg::new("-l").alt("--level").help("log level"))?;

    // Optional: report but carry on.
    match parser.get_option_or::<i32>(&c, 0) {
        Ok(c) => println!("INFO: -c = {}", c),
        Err(e @ Error::InvalidFormat { .. }) => println!("WARNING: {}", e),
        Err(e) => println!("WARNING: unexpected error: {}", e),
    }

    // Required: fatal if missing or invalid.
    let level: u8 = parser.get_option(&level).map_err(|e| {
        eprintln!("ERROR: {}", e);
        e
    })?;

    println!("INFO: --level = {}", level);

    Ok(())
}
