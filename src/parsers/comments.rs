use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::{char, space0};
use nom::combinator::{opt, value};
use nom::sequence::{pair, preceded};

/// Consumes trailing blanks and an optional `#` comment running to the end of
/// the line.
pub fn ignore_comment<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        preceded(space0, opt(pair(char('#'), opt(is_not("\r\n"))))),
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_hash() {
        let (remainder, _comment) = ignore_comment("#").unwrap();
        assert!(remainder.is_empty());
    }

    #[test]
    fn comment_only() {
        let (remainder, _comment) = ignore_comment("   # a comment").unwrap();
        assert!(remainder.is_empty());
    }

    #[test]
    fn keeps_text_without_comment() {
        let (remainder, _comment) = ignore_comment("  next").unwrap();
        assert_eq!(remainder.fragment(), &"next");
    }
}
