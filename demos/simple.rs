//! Generate the full string rule set and print it.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use string_grammar::{generate, to_string, GrammarOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let rules = generate(&GrammarOptions::new());

    let yaml = to_string(&rules)?;
    println!("{}", yaml);

    eprintln!("{} rules", rules.len());
    Ok(())
}
