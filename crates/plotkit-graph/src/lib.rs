//! Point-sampled graphs for the plotkit data model
//!
//! An ordered set of `(x, y)` points with asymmetric error bars, plus the
//! geometric transforms (crop, reverse, invert, scale, stretch, shift)
//! and trapezoidal integration. Graphs are built from a point count, a
//! two-column text file, or the content bins of a 1D histogram.
//!
//! # Example
//!
//! ```rust
//! use plotkit_graph::Graph;
//!
//! let mut g = Graph::new(3);
//! g.set_point(0, 0.0, 0.0)?;
//! g.set_point(1, 1.0, 2.0)?;
//! g.set_point(2, 2.0, 0.0)?;
//! assert_eq!(g.integrate(), 2.0);
//!
//! let reversed = g.reversed();
//! assert_eq!(reversed.integrate(), -2.0);
//! assert_eq!(g.point(0)?.x, 0.0);
//! # Ok::<(), plotkit_core::Error>(())
//! ```

pub mod graph;

pub use graph::{Graph, Point};

pub use plotkit_core::{Error, Result};
