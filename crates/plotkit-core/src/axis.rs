//! Axis and binning layer
//!
//! An [`Axis`] is a validated, strictly ascending sequence of bin edges:
//! `n + 1` edges for `n` bins. [`AxisSpec`] is the tagged construction
//! surface (explicit edges or a uniform range), and
//! [`AxisSpec::parse_args`] reproduces the positional constructor contract
//! where a dimension consumes either one edge sequence or an
//! `(nbins, low, high)` triple, left to right.

use crate::error::{Error, Result};

/// Location of a coordinate along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinLocation {
    /// Below the first edge
    Underflow,
    /// Inside content bin `i` (half-open `[edges[i], edges[i+1])`)
    Bin(usize),
    /// At or above the last edge
    Overflow,
}

impl BinLocation {
    /// Translate into a cell index: `-1` for underflow, `n` for overflow.
    pub fn cell_index(self, nbins: usize) -> isize {
        match self {
            BinLocation::Underflow => -1,
            BinLocation::Bin(i) => i as isize,
            BinLocation::Overflow => nbins as isize,
        }
    }
}

/// One validated axis: ordered bin edges, uniform or irregular.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    edges: Vec<f64>,
}

impl Axis {
    /// Create an axis from explicit bin edges.
    ///
    /// Edges must be finite, strictly ascending, and describe at least one
    /// bin (two edges).
    pub fn from_edges(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidBinEdges(format!(
                "need at least 2 edges for 1 bin, got {}",
                edges.len()
            )));
        }
        if let Some(bad) = edges.iter().find(|e| !e.is_finite()) {
            return Err(Error::InvalidBinEdges(format!("non-finite edge {bad}")));
        }
        for pair in edges.windows(2) {
            if pair[0] >= pair[1] {
                return Err(Error::InvalidBinEdges(format!(
                    "edges must be strictly ascending and unique, found {} before {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { edges })
    }

    /// Create an axis with `nbins` uniform bins over `[low, high)`.
    pub fn uniform(nbins: usize, low: f64, high: f64) -> Result<Self> {
        if nbins < 1 {
            return Err(Error::InvalidBinCount(nbins));
        }
        if !(low.is_finite() && high.is_finite()) || low >= high {
            return Err(Error::InvalidRange { low, high });
        }
        let width = (high - low) / nbins as f64;
        let mut edges = Vec::with_capacity(nbins + 1);
        for i in 0..nbins {
            edges.push(low + i as f64 * width);
        }
        // Last edge lands exactly on the upper bound.
        edges.push(high);
        Ok(Self { edges })
    }

    /// Number of content bins.
    pub fn nbins(&self) -> usize {
        self.edges.len() - 1
    }

    /// All bin edges, `nbins() + 1` of them.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Lower bound (first edge).
    pub fn low(&self) -> f64 {
        self.edges[0]
    }

    /// Upper bound (last edge).
    pub fn high(&self) -> f64 {
        *self.edges.last().unwrap()
    }

    /// Midpoints of adjacent edges.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Width of content bin `i`.
    pub fn width(&self, i: usize) -> Result<f64> {
        if i >= self.nbins() {
            return Err(Error::index_out_of_range(i as isize, self.nbins()));
        }
        Ok(self.edges[i + 1] - self.edges[i])
    }

    /// Locate a coordinate: content bin, underflow, or overflow.
    pub fn find_bin(&self, x: f64) -> BinLocation {
        if x < self.edges[0] {
            return BinLocation::Underflow;
        }
        if x >= self.high() {
            return BinLocation::Overflow;
        }
        // partition_point yields the first edge > x; the bin is one left.
        let idx = self.edges.partition_point(|e| *e <= x) - 1;
        BinLocation::Bin(idx)
    }
}

/// Tagged per-dimension binning specification.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisSpec {
    /// Explicit ascending, unique bin edges
    Edges(Vec<f64>),
    /// `nbins` uniform bins over `[low, high)`
    Range { nbins: usize, low: f64, high: f64 },
}

impl AxisSpec {
    /// Validate and resolve into an [`Axis`].
    pub fn resolve(&self) -> Result<Axis> {
        match self {
            AxisSpec::Edges(edges) => Axis::from_edges(edges.clone()),
            AxisSpec::Range { nbins, low, high } => Axis::uniform(*nbins, *low, *high),
        }
    }

    /// Parse a flat positional argument list into `dim` specs.
    ///
    /// Groups are consumed left to right: an edge sequence consumes one
    /// argument, an `(nbins, low, high)` triple consumes three numbers.
    /// Exactly `dim` groups with zero leftover arguments must result.
    pub fn parse_args(dim: usize, args: &[BinningArg]) -> Result<Vec<AxisSpec>> {
        let mut specs = Vec::with_capacity(dim);
        let mut rest = args;
        for _ in 0..dim {
            match rest {
                [] => {
                    return Err(Error::argument_count(
                        dim,
                        "ran out of arguments before all dimensions were specified",
                    ))
                }
                [BinningArg::Edges(edges), tail @ ..] => {
                    specs.push(AxisSpec::Edges(edges.clone()));
                    rest = tail;
                }
                [BinningArg::Num(nbins), BinningArg::Num(low), BinningArg::Num(high), tail @ ..] =>
                {
                    if nbins.fract() != 0.0 || *nbins < 0.0 {
                        return Err(Error::ArgumentType(format!(
                            "bin count must be a non-negative integer, got {nbins}"
                        )));
                    }
                    specs.push(AxisSpec::Range {
                        nbins: *nbins as usize,
                        low: *low,
                        high: *high,
                    });
                    rest = tail;
                }
                [BinningArg::Num(_), ..] if rest.len() >= 3 => {
                    return Err(Error::ArgumentType(
                        "elements of an (nbins, low, high) triple must be numbers".to_string(),
                    ))
                }
                _ => {
                    return Err(Error::argument_count(
                        dim,
                        format!("{} trailing argument(s) do not form a group", rest.len()),
                    ))
                }
            }
        }
        if !rest.is_empty() {
            return Err(Error::argument_count(
                dim,
                format!("{} leftover argument(s)", rest.len()),
            ));
        }
        Ok(specs)
    }
}

/// One positional constructor argument: an edge sequence or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum BinningArg {
    /// An explicit edge sequence (one group)
    Edges(Vec<f64>),
    /// One number of an `(nbins, low, high)` triple
    Num(f64),
}
