//! Stub emission from a declaration table.
//!
//! Walks each root and its members, classifying every node into a stub
//! shape and formatting one statement per emitted scope.

mod emitter;
mod walk;


pub use emitter::Emitter;

use shimgen_core::{Environment, Origin};

use crate::{Config, DeclarationTable, LineEnding, Result};

/// Generate stub statements for everything `origin` declares.
pub fn generate(environment: &Environment, origin: &Origin) -> Result<Vec<String>> {
    generate_with_config(environment, origin, &Config::default())
}

/// Generate stub statements with a custom config.
pub fn generate_with_config(
    environment: &Environment,
    origin: &Origin,
    config: &Config,
) -> Result<Vec<String>> {
    let table = DeclarationTable::build(environment, origin, &config.module_prefix);
    Emitter::new(&environment.types, &table, origin).emit()
}

/// Join statements into module text with one trailing line ending.
pub fn render(statements: &[String], line_ending: LineEnding) -> String {
    if statements.is_empty() {
        return String::new();
    }
    let eol = line_ending.as_str();
    let mut output = statements.join(eol);
    output.push_str(eol);
    output
}
