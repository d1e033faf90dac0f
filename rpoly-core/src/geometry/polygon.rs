use std::{cmp::Ordering, fmt};

use serde::Serialize;

use crate::{
    error::{PolygonError, Result},
    input::Input,
};

use super::{
    formula::Properties,
    property::{Property, PropertyValue},
    shape::Shape,
    spec::PolygonSpec,
};

/// A regular polygon inscribed in a circle.
///
/// Equality compares edges and circumradius; ordering compares edges only. Two polygons with the
/// same edge count but different radii are unequal and unordered (`partial_cmp` is `None`), which
/// keeps `==`, `<`, `>`, `<=` and `>=` mutually consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, derive_more::Deref)]
pub struct Polygon(PolygonSpec);

impl Polygon {
    pub fn new(edges: impl Into<Input>, circumradius: impl Into<Input>) -> Result<Self> {
        Ok(Polygon(PolygonSpec::new(edges, circumradius)?))
    }

    pub fn spec(&self) -> PolygonSpec {
        self.0
    }

    pub fn vertices(&self) -> u32 {
        self.edges()
    }

    pub fn properties(&self) -> Properties {
        self.0.into()
    }

    pub fn property(&self, property: Property) -> PropertyValue {
        self.properties().get(property)
    }

    /// Look up a property by name (`"edges"`, `"interior_angle"`, …).
    pub fn get(&self, name: &str) -> Result<PropertyValue> {
        Ok(self.property(name.parse()?))
    }

    pub fn interior_angle(&self) -> f64 {
        self.properties().interior_angle
    }

    pub fn edge_length(&self) -> f64 {
        self.properties().edge_length
    }

    pub fn apothem(&self) -> f64 {
        self.properties().apothem
    }

    pub fn area(&self) -> f64 {
        self.properties().area
    }

    pub fn perimeter(&self) -> f64 {
        self.properties().perimeter
    }
}

/// Comparisons against an arbitrary [`Shape`]; anything but a polygon is a
/// [`PolygonError::TypeMismatch`].
impl Polygon {
    fn expect_polygon(other: &Shape) -> Result<&Polygon> {
        match other {
            Shape::Polygon(p) => Ok(p),
            other => Err(PolygonError::TypeMismatch { other: other.kind() }),
        }
    }

    pub fn try_eq(&self, other: &Shape) -> Result<bool> {
        Ok(self == Self::expect_polygon(other)?)
    }

    pub fn try_gt(&self, other: &Shape) -> Result<bool> {
        Ok(self.edges() > Self::expect_polygon(other)?.edges())
    }

    pub fn try_lt(&self, other: &Shape) -> Result<bool> {
        let other = Self::expect_polygon(other)?;
        Ok(other.edges() > self.edges())
    }

    pub fn try_ge(&self, other: &Shape) -> Result<bool> {
        Ok(self.try_gt(other)? || self.try_eq(other)?)
    }

    pub fn try_le(&self, other: &Shape) -> Result<bool> {
        Ok(self.try_lt(other)? || self.try_eq(other)?)
    }
}

impl PartialOrd for Polygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.edges().cmp(&other.edges()) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon with {} edges and inscribed in a circle of radius {}",
            self.edges(),
            self.circumradius()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::PolygonSequence;
    use approx::assert_relative_eq;
    use test_log::test;

    fn polygon(edges: i64, circumradius: i64) -> Polygon {
        Polygon::new(edges, circumradius).unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(
            polygon(3, 5).to_string(),
            "Polygon with 3 edges and inscribed in a circle of radius 5"
        );
    }

    #[test]
    fn invalid_inputs() {
        for (edges, circumradius) in [
            (Input::Int(1), Input::Int(4)),
            (Input::Float(3.5), Input::Int(4)),
            (Input::Int(3), Input::Int(0)),
            (Input::Int(3), Input::Float(4.5)),
        ] {
            assert!(
                matches!(Polygon::new(edges, circumradius), Err(PolygonError::InvalidArgument { .. })),
                "({}, {})",
                edges,
                circumradius
            );
        }
    }

    #[test]
    fn unit_circumradius() {
        let p = polygon(3, 1);
        assert_eq!(p.circumradius(), 1);
        assert!(p.area() > 0.);
    }

    #[test]
    fn get_types() {
        let triangle = polygon(3, 4);
        for name in ["edges", "vertices"] {
            assert_eq!(triangle.get(name).unwrap(), PropertyValue::Int(3));
        }
        for name in ["interior_angle", "edge_length", "apothem", "area", "perimeter"] {
            let value = triangle.get(name).unwrap().as_float().unwrap();
            assert!(value > 0., "{}: {}", name, value);
        }
    }

    #[test]
    fn get_values() {
        let square = polygon(4, 6);
        assert_eq!(square.get("interior_angle").unwrap(), PropertyValue::Float(90.));
        assert_relative_eq!(square.get("area").unwrap().to_f64(), 72., epsilon = 1e-9);
        assert_eq!(square.get("perimeter").unwrap().to_f64(), square.perimeter());
        assert_eq!(square.get("edge_length").unwrap().to_f64(), square.edge_length());
        assert_eq!(square.get("apothem").unwrap().to_f64(), square.apothem());
        assert_eq!(square.vertices(), 4);
    }

    #[test]
    fn get_unknown() {
        let triangle = polygon(3, 4);
        assert!(matches!(
            triangle.get("any_string"),
            Err(PolygonError::KeyNotFound { name, .. }) if name == "any_string"
        ));
    }

    #[test]
    fn equality() {
        assert_eq!(polygon(3, 4), polygon(3, 4));
        assert_ne!(polygon(3, 4), polygon(3, 5));
        assert_ne!(polygon(3, 4), polygon(4, 4));
    }

    #[test]
    fn ordering() {
        let triangle = polygon(3, 4);
        let square = polygon(4, 5);
        let pentagon = polygon(5, 5);
        let pentagon_2 = polygon(5, 6);

        assert!(pentagon > square && square > triangle);
        assert!(!(pentagon_2 > pentagon));
        assert!(!(pentagon_2 < pentagon));
        assert!(!(pentagon_2 >= pentagon));
        assert_eq!(pentagon_2.partial_cmp(&pentagon), None);

        // Radius is ignored
        assert!(polygon(6, 1) > polygon(5, 100));
        assert!(polygon(5, 100) < polygon(6, 1));

        assert!(pentagon >= pentagon);
        assert!(pentagon <= pentagon);
        assert!(triangle <= square);
    }

    #[test]
    fn try_comparisons() {
        let triangle = polygon(3, 4);
        let square: Shape = polygon(4, 4).into();
        assert_eq!(triangle.try_eq(&square), Ok(false));
        assert_eq!(triangle.try_eq(&polygon(3, 4).into()), Ok(true));
        assert_eq!(triangle.try_gt(&square), Ok(false));
        assert_eq!(triangle.try_lt(&square), Ok(true));
        assert_eq!(triangle.try_ge(&square), Ok(false));
        assert_eq!(triangle.try_le(&square), Ok(true));
        assert_eq!(triangle.try_ge(&triangle.into()), Ok(true));
        assert_eq!(triangle.try_le(&triangle.into()), Ok(true));

        let other = polygon(3, 5).into();
        assert_eq!(triangle.try_eq(&other), Ok(false));
        assert_eq!(triangle.try_gt(&other), Ok(false));
        assert_eq!(triangle.try_lt(&other), Ok(false));
        assert_eq!(triangle.try_ge(&other), Ok(false));
        assert_eq!(triangle.try_le(&other), Ok(false));
    }

    #[test]
    fn type_mismatch() {
        let triangle = polygon(3, 4);
        let sequence: Shape = PolygonSequence::new(5, 4).unwrap().into();
        let mismatch = Err(PolygonError::TypeMismatch { other: "sequence" });
        assert_eq!(triangle.try_eq(&sequence), mismatch);
        assert_eq!(triangle.try_gt(&sequence), mismatch);
        assert_eq!(triangle.try_lt(&sequence), mismatch);
        assert_eq!(triangle.try_ge(&sequence), mismatch);
        assert_eq!(triangle.try_le(&sequence), mismatch);
    }
}
