//! Numeric constructor arguments.
//!
//! Callers may hand either an integer or a float to the polygon constructors; only integers
//! pass validation. Keeping the float case representable lets a `3.5` (or a `3.0`) coming from
//! the command line be rejected with a descriptive [`PolygonError::InvalidArgument`] instead of
//! being silently truncated.

use std::{fmt, str::FromStr};

use crate::error::{PolygonError, Result};

#[derive(Clone, Copy, Debug, PartialEq, derive_more::From)]
pub enum Input {
    Int(i64),
    Float(f64),
}

impl Input {
    /// The integer value, or `None` for any float (whole or not).
    pub fn int(self) -> Option<i64> {
        match self {
            Input::Int(i) => Some(i),
            Input::Float(_) => None,
        }
    }
}

impl From<i32> for Input {
    fn from(i: i32) -> Self {
        Input::Int(i.into())
    }
}

impl From<u32> for Input {
    fn from(u: u32) -> Self {
        Input::Int(u.into())
    }
}

impl From<f32> for Input {
    fn from(f: f32) -> Self {
        Input::Float(f.into())
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Int(i) => write!(f, "{}", i),
            // `{:?}` keeps the trailing ".0" on whole floats
            Input::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl FromStr for Input {
    type Err = PolygonError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Input::Int(i));
        }
        s.parse::<f64>()
            .map(Input::Float)
            .map_err(|_| PolygonError::invalid("number", "must be an integer or a float", s))
    }
}
