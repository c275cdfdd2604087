//! Provides the line-oriented parser for whole world descriptions.

use crate::parsed_types::{DirectiveLine, WorldDescription};
use crate::parsers::parse_directive_line;
use crate::world::WorldError;

/// Parses a world description. Blank lines and lines starting with `#` are
/// skipped; every other line must be a well-formed directive.
///
/// Only syntax is checked here. Semantic rules, such as the `GRID` header
/// coming first, are enforced when the description is turned into a
/// [`crate::Grid`].
pub fn parse_world(text: &str) -> Result<WorldDescription, WorldError> {
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;
        let (_, directive) = parse_directive_line(line)
            .map_err(|_| WorldError::Syntax(line.to_string()).at_line(number))?;
        lines.push(DirectiveLine::new(number, directive));
    }
    Ok(WorldDescription::new(lines))
}
