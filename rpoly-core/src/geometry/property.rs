use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::Serialize;

use crate::error::{PolygonError, Result};

/// Names accepted by [`Polygon::get`](super::polygon::Polygon::get).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Edges,
    Vertices,
    InteriorAngle,
    EdgeLength,
    Apothem,
    Area,
    Perimeter,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Edges,
        Property::Vertices,
        Property::InteriorAngle,
        Property::EdgeLength,
        Property::Apothem,
        Property::Area,
        Property::Perimeter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Property::Edges => "edges",
            Property::Vertices => "vertices",
            Property::InteriorAngle => "interior_angle",
            Property::EdgeLength => "edge_length",
            Property::Apothem => "apothem",
            Property::Area => "area",
            Property::Perimeter => "perimeter",
        }
    }

    pub fn accepted() -> String {
        Property::ALL.iter().map(Property::name).join(", ")
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Property {
    type Err = PolygonError;

    fn from_str(s: &str) -> Result<Self> {
        Property::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PolygonError::KeyNotFound {
                name: s.to_string(),
                accepted: Property::accepted(),
            })
    }
}

/// Edge and vertex counts are integers; every other property is a float.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(u32),
    Float(f64),
}

impl PropertyValue {
    pub fn as_int(&self) -> Option<u32> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            PropertyValue::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Int(_) => None,
            PropertyValue::Float(f) => Some(*f),
        }
    }

    /// Widen to `f64` regardless of variant.
    pub fn to_f64(&self) -> f64 {
        match self {
            PropertyValue::Int(i) => f64::from(*i),
            PropertyValue::Float(f) => *f,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_names() {
        for p in Property::ALL {
            assert_eq!(p.name().parse::<Property>(), Ok(p));
            assert_eq!(p.to_string(), p.name());
        }
    }

    #[test]
    fn unknown_name() {
        let err = "not_a_real_property".parse::<Property>().unwrap_err();
        assert_eq!(
            err,
            PolygonError::KeyNotFound {
                name: "not_a_real_property".to_string(),
                accepted: "edges, vertices, interior_angle, edge_length, apothem, area, perimeter".to_string(),
            }
        );
        assert!(err.to_string().contains("interior_angle"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Area".parse::<Property>().is_err());
        assert!(" area".parse::<Property>().is_err());
    }

    #[test]
    fn values() {
        assert_eq!(PropertyValue::Int(4).as_int(), Some(4));
        assert_eq!(PropertyValue::Int(4).as_float(), None);
        assert_eq!(PropertyValue::Float(2.5).as_float(), Some(2.5));
        assert_eq!(PropertyValue::Float(2.5).as_int(), None);
        assert_eq!(PropertyValue::Int(4).to_f64(), 4.);
    }
}
