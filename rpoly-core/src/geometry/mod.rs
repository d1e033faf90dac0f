pub mod formula;
pub mod polygon;
pub mod property;
pub mod shape;
pub mod spec;
