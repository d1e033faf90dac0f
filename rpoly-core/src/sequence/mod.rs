//! Regular polygons with 3 to `max_edges` edges, all inscribed in one circle.
//!
//! Every member's [`PolygonRecord`] is computed once, when the sequence is built. Indexing
//! follows Python conventions: index 0 is the triangle, negative indices count from the end, and
//! [`Slice`]s select ratios in any stride or direction.

use std::{cmp::Reverse, collections::BTreeMap, fmt};

use derive_more::From;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    error::{PolygonError, Result},
    geometry::spec::{PolygonSpec, MIN_EDGES},
    input::Input,
};

pub mod record;
pub mod slice;


pub use record::PolygonRecord;
pub use slice::Slice;

/// Argument to [`PolygonSequence::at`].
#[derive(Clone, Copy, Debug, From, PartialEq)]
pub enum Index {
    At(isize),
    Slice(Slice),
}

macro_rules! index_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Index {
                /// Values beyond `isize` saturate, which is out of range for any sequence.
                fn from(i: $int) -> Self {
                    let saturated = if i > <$int>::default() { isize::MAX } else { isize::MIN };
                    Index::At(isize::try_from(i).unwrap_or(saturated))
                }
            }
        )*
    };
}

index_from_int!(i32, i64, u32, u64, usize);

macro_rules! index_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for Index {
                fn from(r: $range) -> Self {
                    Index::Slice(r.into())
                }
            }
        )*
    };
}

index_from_range!(
    std::ops::RangeFull,
    std::ops::Range<isize>,
    std::ops::RangeInclusive<isize>,
    std::ops::RangeFrom<isize>,
    std::ops::RangeTo<isize>
);

/// Result of [`PolygonSequence::at`]: one ratio for an integer index, a list for a slice.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Indexed {
    Ratio(f64),
    Ratios(Vec<f64>),
}

impl Indexed {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Indexed::Ratio(r) => Some(*r),
            Indexed::Ratios(_) => None,
        }
    }

    pub fn ratios(self) -> Option<Vec<f64>> {
        match self {
            Indexed::Ratio(_) => None,
            Indexed::Ratios(rs) => Some(rs),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolygonSequence {
    max_edges: u32,
    circumradius: u32,
    /// Area-to-perimeter ratio, keyed by edge count.
    #[serde(skip)]
    ratios: BTreeMap<u32, f64>,
    /// Records in the order they were computed.
    records: Vec<PolygonRecord>,
}

impl PolygonSequence {
    /// Same validation as [`Polygon::new`](crate::geometry::polygon::Polygon::new), with
    /// `max_edges` in the role of `edges`.
    pub fn new(max_edges: impl Into<Input>, circumradius: impl Into<Input>) -> Result<Self> {
        let spec = PolygonSpec::new(max_edges, circumradius)?;
        let mut sequence = PolygonSequence {
            max_edges: spec.edges(),
            circumradius: spec.circumradius(),
            ratios: BTreeMap::new(),
            records: Vec::with_capacity((spec.edges() - 2) as usize),
        };
        for member in spec.family() {
            sequence.ratio_for(member);
        }
        debug!("{}: cached {} records", sequence, sequence.records.len());
        Ok(sequence)
    }

    /// Memoized on edge count: the circumradius is fixed per sequence, so each record is computed
    /// and logged only on first request.
    fn ratio_for(&mut self, member: PolygonSpec) -> f64 {
        let PolygonSequence { ratios, records, .. } = self;
        *ratios.entry(member.edges()).or_insert_with(|| {
            let record = PolygonRecord::new(member);
            trace!("computed {}", record);
            records.push(record);
            record.ratio
        })
    }

    pub fn max_edges(&self) -> u32 {
        self.max_edges
    }

    pub fn circumradius(&self) -> u32 {
        self.circumradius
    }

    /// Number of polygons: triangle through `max_edges`-gon.
    pub fn len(&self) -> usize {
        (self.max_edges - 2) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Ratio at `index`, or a list of ratios for a slice.
    pub fn at(&self, index: impl Into<Index>) -> Result<Indexed> {
        match index.into() {
            Index::At(i) => self.ratio(i).map(Indexed::Ratio),
            Index::Slice(s) => self.ratios(s).map(Indexed::Ratios),
        }
    }

    /// Area-to-perimeter ratio of the polygon at `index` (0 is the triangle; negative counts
    /// from the end).
    pub fn ratio(&self, index: isize) -> Result<f64> {
        let len = self.len();
        let out_of_range = || PolygonError::IndexOutOfRange { index, len };
        let normalized = if index < 0 { index + len as isize } else { index };
        if normalized < 0 || normalized >= len as isize {
            return Err(out_of_range());
        }
        let edges = MIN_EDGES + normalized as u32;
        self.ratios.get(&edges).copied().ok_or_else(out_of_range)
    }

    pub fn ratios(&self, slice: impl Into<Slice>) -> Result<Vec<f64>> {
        let len = self.len();
        slice
            .into()
            .iter(len)?
            .map(|i| self.ratio(i as isize))
            .collect()
    }

    /// Edge count with the largest area-to-perimeter ratio; ties go to the fewest edges.
    pub fn max_efficiency_edges(&self) -> u32 {
        let best = self
            .ratios
            .iter()
            .min_by_key(|(_, ratio)| Reverse(OrderedFloat(**ratio)))
            .map(|(edges, _)| *edges);
        debug!("max efficiency: {:?}", best);
        // The cache holds at least the triangle
        best.unwrap_or(MIN_EDGES)
    }

    /// All records, in the order they were computed (ascending edge count).
    pub fn records(&self) -> &[PolygonRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.ratios.values().copied()
    }
}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Regular Polygons with edges ranging from 3 to {} all inscribed in a circle of radius {}",
            self.max_edges, self.circumradius
        )
    }
}
