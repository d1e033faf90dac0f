use std::fmt;

use serde::Serialize;

use crate::{
    error::{PolygonError, Result},
    input::Input,
};

/// Smallest edge count of a polygon (a triangle).
pub const MIN_EDGES: u32 = 3;

/// Smallest accepted circumradius.
pub const MIN_CIRCUMRADIUS: u32 = 1;

/// Validated `(edges, circumradius)` pair shared by [`Polygon`](super::polygon::Polygon) and
/// [`PolygonSequence`](crate::sequence::PolygonSequence).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PolygonSpec {
    edges: u32,
    circumradius: u32,
}

impl PolygonSpec {
    /// Both arguments must be integers: `edges > 2` and `circumradius >= 1`.
    pub fn new(edges: impl Into<Input>, circumradius: impl Into<Input>) -> Result<Self> {
        let edges = whole("edges", "must be an integer greater than 2", edges.into(), MIN_EDGES)?;
        let circumradius = whole(
            "circumradius",
            "must be an integer of at least 1",
            circumradius.into(),
            MIN_CIRCUMRADIUS,
        )?;
        Ok(PolygonSpec { edges, circumradius })
    }

    pub fn edges(&self) -> u32 {
        self.edges
    }

    pub fn circumradius(&self) -> u32 {
        self.circumradius
    }

    /// Every polygon from the triangle up to this one, on the same circle.
    pub fn family(self) -> impl Iterator<Item = PolygonSpec> {
        let circumradius = self.circumradius;
        (MIN_EDGES..=self.edges).map(move |edges| PolygonSpec { edges, circumradius })
    }
}

fn whole(field: &'static str, requirement: &'static str, input: Input, min: u32) -> Result<u32> {
    input
        .int()
        .filter(|i| *i >= i64::from(min))
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| PolygonError::invalid(field, requirement, input))
}

impl fmt::Display for PolygonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.edges, self.circumradius)
    }
}
