//! Geometric properties of regular polygons inscribed in a circle.
//!
//! - [`Polygon`]: one regular polygon; its seven properties are computed on demand.
//! - [`PolygonSequence`]: every polygon from the triangle up to `max_edges` edges, sharing one
//!   circumradius, with Python-style indexing over their area-to-perimeter ratios.

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod error;
pub mod geometry;
pub mod input;
pub mod sequence;

pub use geometry::formula;
pub use geometry::polygon;
pub use geometry::property;
pub use geometry::shape;

pub use error::{PolygonError, Result};
pub use formula::{properties, Properties};
pub use geometry::spec::{PolygonSpec, MIN_CIRCUMRADIUS, MIN_EDGES};
pub use input::Input;
pub use polygon::Polygon;
pub use property::{Property, PropertyValue};
pub use sequence::{Index, Indexed, PolygonRecord, PolygonSequence, Slice};
pub use shape::Shape;

/// Parse a log level string into LevelFilter.
///
/// `None` and `""` mean "info"; unknown names are returned as the error.
pub fn parse_log_level(level: Option<&str>) -> std::result::Result<log::LevelFilter, String> {
    match level {
        Some("off") => Ok(log::LevelFilter::Off),
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(format!("invalid log level: {}", level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("")), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("debug")), Ok(log::LevelFilter::Debug));
        assert_eq!(parse_log_level(Some("off")), Ok(log::LevelFilter::Off));
        assert_eq!(parse_log_level(Some("loud")), Err("invalid log level: loud".to_string()));
    }
}
