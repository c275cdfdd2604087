//! Syntax-level representation of a world description, as produced by the
//! [`crate::parsers`] and consumed by [`crate::Grid::from_description`].

mod directive;
mod world_description;

pub use directive::Directive;
pub use world_description::{DirectiveLine, WorldDescription};
