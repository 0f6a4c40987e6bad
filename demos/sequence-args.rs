// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing options that accept multiple values.
///
/// ```bash
/// $ cargo run --example sequence-args -- -t 3 6 20 -f 5
/// ```
use tap::{Arg, Parser, Result};

fn main() -> Result<()> {
    let mut parser = Parser::new("sequence-args: sum some numbers");

    let times = parser.add(Arg::new("-t").alt("--times").help("list of times"))?;
    let factors = parser.add(Arg::new("-f").alt("--factors").help("list of factors"))?;
    let names = parser.add(Arg::new("-n").alt("--names").help("list of names"))?;

    // The values of an option end at the next registered identifier.
    let times: Vec<u32> = parser.get_option(&times)?;
    let factors: Vec<f32> = parser.get_option_or(&factors, vec![1.0])?;
    let names: Vec<String> = parser.get_option_or(&names, Vec::new())?;

    println!("INFO: times: {:?}", times);
    println!("INFO: factors: {:?}", factors);
    println!("INFO: names: {:?}", names);

    let total: f32 = times
        .iter()
        .map(|t| factors.iter().map(|f| *t as f32 * f).sum::<f32>())
        .sum();

    println!("total: {}", total);

    Ok(())
}
