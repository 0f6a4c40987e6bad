// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to query flags and options.
use tap::{Arg, Parser, Result};

fn main() -> Result<()> {
    let mut parser = Parser::new("simple: show some typed options");

    let help = parser.add_help()?;
    let a = parser.add(Arg::new("-a").help("an integer"))?;
    let b = parser.add(Arg::new("-b").help("another integer (default 0)"))?;
    let ratio = parser.add(Arg::new("-r").alt("--ratio").help("a ratio"))?;
    let output = parser.add(Arg::new("-o").alt("--output").help("output file"))?;

    if parser.get_flag(&help) {
        print!("{}", parser.usage());
        return Ok(());
    }

    // Required: fails if '-a' is not specified.
    let a: i32 = parser.get_option(&a)?;
    println!("INFO: -a = {}", a);

    let b: i64 = parser.get_option_or(&b, 0)?;
    println!("INFO: -b = {}", b);

    let ratio: f64 = parser.get_option_or(&ratio, 30.1251)?;
    println!("INFO: --ratio = {}", ratio);

    let output: String = parser.get_option_or(&output, "/dev/stdout".into())?;
    println!("INFO: --output = {:?}", output);

    Ok(())
}
