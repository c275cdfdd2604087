use crate::parsed_types::Directive;
use crate::parsers::parse_world;
use crate::world::WorldError;
use std::str::FromStr;

/// A directive together with the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveLine {
    number: usize,
    directive: Directive,
}

impl DirectiveLine {
    pub const fn new(number: usize, directive: Directive) -> Self {
        Self { number, directive }
    }

    pub const fn number(&self) -> usize {
        self.number
    }

    pub const fn directive(&self) -> &Directive {
        &self.directive
    }
}

/// All directives of a world description, in file order. Blank lines and
/// comments are not represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldDescription {
    lines: Vec<DirectiveLine>,
}

impl WorldDescription {
    pub const fn new(lines: Vec<DirectiveLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[DirectiveLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromStr for WorldDescription {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_world(s)
    }
}
