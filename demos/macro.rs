//! Building value trees with the value! macro and rendering them.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use string_grammar::{to_string, value};

fn main() -> Result<(), Box<dyn Error>> {
    let repository = value!({
        "string-escapes": {
            "match": "\\\\.",
            "name": "constant.character.escape.hitori"
        },
        "embedded-format": {
            "match": "%[-+ #0]*\\d*[sdif]",
            "name": "constant.other.placeholder.hitori"
        },
        "captures": {
            "0": {"name": "punctuation.section.embedded.begin.hitori"},
            "1": {"name": "punctuation.section.embedded.end.hitori"}
        },
        "notes": "multi-line\ncomment kept verbatim",
        "tags": ["-flag", "'quoted'", "tab\tinside", "plain"]
    });

    println!("{}", to_string(&repository)?);
    Ok(())
}
