use std::fmt;

use serde::Serialize;

use crate::geometry::{
    formula::{self, Properties},
    spec::PolygonSpec,
};

/// Properties of one member of a [`PolygonSequence`](super::PolygonSequence), plus its
/// area-to-perimeter ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, derive_more::Deref)]
pub struct PolygonRecord {
    #[deref]
    #[serde(flatten)]
    pub properties: Properties,
    pub ratio: f64,
}

impl PolygonRecord {
    pub fn new(spec: PolygonSpec) -> Self {
        let properties = formula::properties(spec);
        PolygonRecord {
            properties,
            ratio: properties.ratio(),
        }
    }
}

impl fmt::Display for PolygonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.properties;
        write!(
            f,
            "PolygonRecord(edges={}, vertices={}, interior_angle={}, edge_length={}, apothem={}, area={}, perimeter={}, ratio={})",
            p.edges, p.vertices, p.interior_angle, p.edge_length, p.apothem, p.area, p.perimeter, self.ratio,
        )
    }
}
