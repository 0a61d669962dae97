//! plotkit: a data model for binned and point-sampled statistical data
//!
//! This facade re-exports the workspace crates:
//!
//! - [`plotkit_core`]: axes, bin storage, views, errors, style surface
//! - [`plotkit_hist`]: histograms and histogram stacks
//! - [`plotkit_graph`]: point graphs with asymmetric errors
//!
//! # Example
//!
//! ```rust
//! use plotkit::{AxisSpec, Graph, Histogram};
//!
//! let mut h = Histogram::<f64>::new_1d(AxisSpec::Range {
//!     nbins: 4,
//!     low: 0.0,
//!     high: 4.0,
//! })?;
//! h.fill(&[0.5])?;
//! h.fill_weighted(&[2.5], 3.0)?;
//!
//! let g = Graph::from_histogram(&h)?;
//! assert_eq!(g.len(), 4);
//! assert_eq!(g.cached_integral(), 4.0);
//! # Ok::<(), plotkit::Error>(())
//! ```

pub use plotkit_core::{
    from_f64, to_f64, Axis, AxisSpec, BinLocation, BinSlice, BinSliceMut, BinStore, BinValue,
    BinningArg, Error, Nested, Plottable, Result, Style, MAX_DIM,
};
pub use plotkit_graph::{Graph, Point};
pub use plotkit_hist::{HistStack, Histogram, Operand, Sign, StackMember};
