use derive_more::From;
use serde::Serialize;

use crate::sequence::PolygonSequence;

use super::polygon::Polygon;

/// Any value a [`Polygon`] can be asked to compare itself against.
#[derive(Debug, Clone, From, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Polygon(Polygon),
    Sequence(PolygonSequence),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Sequence(_) => "sequence",
        }
    }
}
