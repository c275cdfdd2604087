//! Utility parsers.

use crate::parsers::{ParseResult, Span};
use crate::world::Position;
use nom::bytes::complete::take_while1;
use nom::character::complete::{i32 as integer, space1};
use nom::combinator::map;
use nom::sequence::{pair, preceded};

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes the blanks separating it from the previous field.
pub fn field<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(space1, inner)
}

/// Parses two blank-separated integer fields as a position, i.e. ` <x> <y>`.
pub fn parse_position<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Position> {
    map(pair(field(integer), field(integer)), |(x, y)| {
        Position::new(x, y)
    })(input.into())
}

/// Parses an agent identifier field: any run of non-blank characters.
pub fn parse_agent_id<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, String> {
    map(
        field(take_while1(|c: char| !c.is_whitespace())),
        |id: Span| id.fragment().to_string(),
    )(input.into())
}
