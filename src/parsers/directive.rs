//! Provides parsers for single world-description directives.

use crate::{
    parsed_types::Directive,
    parsers::{
        field, ignore_comment, parse_agent_id, parse_position, ParseError, ParseResult,
        Span,
    },
};
use nom::{
    bytes::complete::take_while1,
    character::complete::{i32 as integer, u64 as edge_cost},
    combinator::{all_consuming, map, rest},
    sequence::{pair, terminated, tuple},
};

/// Parses a directive: a case-insensitive keyword followed by its
/// blank-separated fields. Unrecognised keywords produce
/// [`Directive::Unknown`] and swallow the rest of the input.
///
/// ## Example
/// ```
/// # use courier::parsed_types::Directive;
/// # use courier::parsers::{parse_directive, preamble::*};
/// # use courier::Position;
/// assert!(parse_directive("GRID 5 4").is_value(Directive::Grid { width: 5, height: 4 }));
/// assert!(parse_directive("dest 1 2").is_value(Directive::Destination(Position::new(1, 2))));
/// assert!(parse_directive("Edge 0 0 1 0 3").is_value(Directive::Edge {
///     from: Position::new(0, 0),
///     to: Position::new(1, 0),
///     cost: 3,
/// }));
/// assert!(parse_directive("EDGE 0 0 1 0 -3").is_err());
/// assert!(parse_directive("GRID five 4").is_err());
/// ```
pub fn parse_directive<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Directive> {
    let (input, keyword) = take_while1::<_, Span<'a>, ParseError<'a>>(|c: char| {
        c.is_ascii_alphanumeric() || c == '_'
    })(input.into())?;

    match keyword.fragment().to_ascii_uppercase().as_str() {
        "GRID" => map(pair(field(integer), field(integer)), |(width, height)| {
            Directive::Grid { width, height }
        })(input),
        "STORE" => map(parse_position, Directive::Store)(input),
        "DEST" => map(parse_position, Directive::Destination)(input),
        "AGENT" => map(pair(parse_agent_id, parse_position), |(id, position)| {
            Directive::Agent { id, position }
        })(input),
        "EDGE" => map(
            tuple((parse_position, parse_position, field(edge_cost))),
            |(from, to, cost)| Directive::Edge { from, to, cost },
        )(input),
        "UNDIRECTED_EDGE" => map(
            tuple((parse_position, parse_position, field(edge_cost))),
            |(from, to, cost)| Directive::UndirectedEdge { from, to, cost },
        )(input),
        "BLOCK" => map(pair(parse_position, parse_position), |(from, to)| {
            Directive::Block { from, to }
        })(input),
        "TUNNEL" => map(pair(parse_position, parse_position), |(from, to)| {
            Directive::Tunnel { from, to }
        })(input),
        _ => map(rest, |_| Directive::Unknown(keyword.fragment().to_string()))(input),
    }
}

/// Parses a whole directive line, allowing a trailing `#` comment and
/// rejecting any other leftover input.
pub fn parse_directive_line<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Directive> {
    all_consuming(terminated(parse_directive, ignore_comment))(input.into())
}

impl crate::parsers::Parser for Directive {
    type Item = Directive;

    /// Parses a directive line.
    ///
    /// ## See also
    /// See [`parse_directive_line`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_directive_line(input)
    }
}
