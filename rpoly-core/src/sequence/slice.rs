//! Python-style `start:stop:step` slices over `[0, len)`.

use std::{
    fmt,
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo},
    str::FromStr,
};

use crate::error::{PolygonError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Slice { start, stop, step }
    }

    /// `[::-1]`
    pub fn rev() -> Self {
        Slice::new(None, None, Some(-1))
    }

    pub fn step_by(self, step: isize) -> Self {
        Slice { step: Some(step), ..self }
    }

    /// Resolve to concrete `(start, stop, step)` for a sequence of length `len`.
    ///
    /// Missing bounds default to the ends (swapped for a negative step), negative bounds count
    /// from the end, and everything is clamped so iteration never leaves `[0, len)`.
    pub fn indices(&self, len: usize) -> Result<(isize, isize, isize)> {
        let len = len as isize;
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(PolygonError::invalid("slice step", "cannot be zero", step));
        }
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self.start.map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);
        Ok((start, stop, step))
    }

    pub fn iter(&self, len: usize) -> Result<SliceIter> {
        let (start, stop, step) = self.indices(len)?;
        Ok(SliceIter { next: start, stop, step })
    }
}

#[derive(Clone, Debug)]
pub struct SliceIter {
    next: isize,
    stop: isize,
    step: isize,
}

impl Iterator for SliceIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let done = if self.step > 0 { self.next >= self.stop } else { self.next <= self.stop };
        if done {
            return None;
        }
        let cur = self.next;
        // An overflowing stride has nowhere left to go
        self.next = self.next.checked_add(self.step).unwrap_or(self.stop);
        Some(cur as usize)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::default()
    }
}

impl From<Range<isize>> for Slice {
    fn from(r: Range<isize>) -> Self {
        Slice::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(r: RangeInclusive<isize>) -> Self {
        let (start, end) = r.into_inner();
        // `-1..=-1` would become `-1..0`, which is empty; `..=isize::MAX` has no exclusive end
        let stop = match end {
            -1 => None,
            end => end.checked_add(1),
        };
        Slice::new(Some(start), stop, None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Slice::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(r: RangeTo<isize>) -> Self {
        Slice::new(None, Some(r.end), None)
    }
}

impl FromStr for Slice {
    type Err = PolygonError;

    /// Parse `"start:stop"` or `"start:stop:step"`, any part optional (`"::-1"`, `"2:"`).
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(PolygonError::invalid("slice", "must look like start:stop[:step]", s));
        }
        let part = |i: usize| -> Result<Option<isize>> {
            match parts.get(i).map(|p| p.trim()) {
                None | Some("") => Ok(None),
                Some(p) => p
                    .parse()
                    .map(Some)
                    .map_err(|_| PolygonError::invalid("slice", "bounds must be integers", s)),
            }
        };
        Ok(Slice::new(part(0)?, part(1)?, part(2)?))
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<isize>| b.map(|b| b.to_string()).unwrap_or_default();
        write!(f, "{}:{}", show(self.start), show(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        Ok(())
    }
}
