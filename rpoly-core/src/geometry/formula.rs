//! Closed-form properties of a regular polygon inscribed in a circle.
//!
//! With `n` edges and circumradius `r`, each edge subtends a central angle of `2π/n`, so half an
//! edge is `r·sin(π/n)` and the apothem is `r·cos(π/n)`. The polygon is `n` isosceles triangles
//! of base `edge_length` and height `apothem`.

use std::f64::consts::PI;

use serde::Serialize;

use super::{
    property::{Property, PropertyValue},
    spec::PolygonSpec,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Properties {
    pub edges: u32,
    pub vertices: u32,
    /// Degrees.
    pub interior_angle: f64,
    pub edge_length: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
}

/// Operation order is fixed so results are bit-for-bit reproducible. Taking a validated
/// [`PolygonSpec`] keeps `edges >= 3` here.
pub fn properties(spec: PolygonSpec) -> Properties {
    let edges = spec.edges();
    let n = f64::from(edges);
    let r = f64::from(spec.circumradius());
    let interior_angle = (f64::from(edges - 2) * 180.) / n;
    let edge_length = (2. * r) * (PI / n).sin();
    let apothem = r * (PI / n).cos();
    let area = (0.5 * n) * (edge_length * apothem);
    let perimeter = n * edge_length;
    Properties {
        edges,
        vertices: edges,
        interior_angle,
        edge_length,
        apothem,
        area,
        perimeter,
    }
}

impl From<PolygonSpec> for Properties {
    fn from(spec: PolygonSpec) -> Self {
        properties(spec)
    }
}

impl Properties {
    pub fn get(&self, property: Property) -> PropertyValue {
        match property {
            Property::Edges => PropertyValue::Int(self.edges),
            Property::Vertices => PropertyValue::Int(self.vertices),
            Property::InteriorAngle => PropertyValue::Float(self.interior_angle),
            Property::EdgeLength => PropertyValue::Float(self.edge_length),
            Property::Apothem => PropertyValue::Float(self.apothem),
            Property::Area => PropertyValue::Float(self.area),
            Property::Perimeter => PropertyValue::Float(self.perimeter),
        }
    }

    /// Area over perimeter; approaches `r/2` as the edge count grows.
    pub fn ratio(&self) -> f64 {
        self.area / self.perimeter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::error::PolygonError;
    use test_log::test;

    fn props(edges: u32, circumradius: u32) -> Properties {
        properties(PolygonSpec::new(edges, circumradius).unwrap())
    }

    #[test]
    fn square() {
        let p = props(4, 6);
        assert_eq!(p.edges, 4);
        assert_eq!(p.vertices, 4);
        assert_relative_eq!(p.interior_angle, 90.);
        assert_relative_eq!(p.edge_length, 6. * 2f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(p.apothem, 6. / 2f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(p.area, 72., epsilon = 1e-9);
        assert_relative_eq!(p.perimeter, 24. * 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn triangle() {
        let p = props(3, 4);
        assert_relative_eq!(p.interior_angle, 60.);
        assert_relative_eq!(p.edge_length, 4. * 3f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(p.apothem, 2., epsilon = 1e-9);
        assert_relative_eq!(p.area, 12. * 3f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(p.perimeter, 12. * 3f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(p.ratio(), 1., epsilon = 1e-9);
    }

    #[test]
    fn hexagon() {
        // Edges of an inscribed hexagon equal the radius
        let p = props(6, 5);
        assert_relative_eq!(p.interior_angle, 120.);
        assert_relative_eq!(p.edge_length, 5., epsilon = 1e-9);
        assert_relative_eq!(p.perimeter, 30., epsilon = 1e-9);
    }

    #[test]
    fn bit_exact() {
        let p = props(5, 3);
        let edge_length = 6. * (PI / 5.).sin();
        let apothem = 3. * (PI / 5.).cos();
        assert_eq!(p.interior_angle, 108.);
        assert_eq!(p.edge_length, edge_length);
        assert_eq!(p.apothem, apothem);
        assert_eq!(p.area, 2.5 * (edge_length * apothem));
        assert_eq!(p.perimeter, 5. * edge_length);
    }

    #[test]
    fn approaches_circle() {
        let p = props(10_000, 2);
        assert_relative_eq!(p.perimeter, 4. * PI, epsilon = 1e-5);
        assert_relative_eq!(p.area, 4. * PI, epsilon = 1e-5);
        assert_relative_eq!(p.ratio(), 1., epsilon = 1e-5);
        assert!(p.ratio() < 1.);
    }

    #[test]
    fn positive() {
        for edges in 3..50 {
            for r in 1..5 {
                let p = props(edges, r);
                for property in Property::ALL {
                    assert!(p.get(property).to_f64() > 0., "{} of ({}, {})", property, edges, r);
                }
            }
        }
    }

    #[test]
    fn get() {
        let p = props(4, 6);
        assert_eq!(p.get(Property::Edges), PropertyValue::Int(4));
        assert_eq!(p.get(Property::Vertices), PropertyValue::Int(4));
        assert_eq!(p.get(Property::Area), PropertyValue::Float(p.area));
        assert_eq!(p.get(Property::Apothem), PropertyValue::Float(p.apothem));
    }

    #[test]
    fn degenerate_edges_never_reach_formula() {
        for edges in [0, 1, 2] {
            assert!(matches!(
                PolygonSpec::new(edges, 5),
                Err(PolygonError::InvalidArgument { field: "edges", .. })
            ));
        }
        let triangle = props(3, 1);
        assert_relative_eq!(triangle.interior_angle, 60.);
        assert!(triangle.area > 0.);
    }
}
