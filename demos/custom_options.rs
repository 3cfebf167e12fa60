//! Customizing generation and layout.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use string_grammar::{
    build_rule, generate, to_string_with_options, EmitOptions, GrammarOptions, MarkerSet, Quote,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Only single-marker combinations, scoped for another language
    let grammar = GrammarOptions::new().with_language("toy").with_max_markers(1);
    let rules = generate(&grammar);
    println!("{} rules for `toy`", rules.len());

    // Four-space indentation and a final newline
    let emit = EmitOptions::new().with_indent(4).with_trailing_newline(true);
    print!("{}", to_string_with_options(&rules, emit)?);

    // A single verbatim rule and the literals it treats as escapes
    let verbatim = build_rule(
        Quote::Single,
        false,
        MarkerSet::parse("\\$").ok_or("unknown marker")?,
        &grammar,
    );
    println!("\n{}", verbatim.description);
    if let Some(pattern) = &verbatim.escape_pattern {
        println!("doubled literals: {}", pattern);
    }

    Ok(())
}
