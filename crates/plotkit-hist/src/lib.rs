//! Histograms and histogram stacks for the plotkit data model
//!
//! Composes the core axis/storage layer into dimension-aware histograms
//! with fill semantics, arithmetic, extrema with or without error bands,
//! and ordered stacks with aggregate queries.
//!
//! # Examples
//!
//! ```rust
//! use plotkit_hist::{Histogram, Operand, Sign};
//! use plotkit_core::AxisSpec;
//!
//! let mut h = Histogram::<f64>::new_1d(AxisSpec::Range {
//!     nbins: 10,
//!     low: 0.0,
//!     high: 10.0,
//! })?;
//! h.fill(&[5.5])?;
//! h.fill_weighted(&[5.5], 2.0)?;
//! assert_eq!(h.value(5)?, 3.0);
//!
//! // A scalar "add" is a weighted fill of that coordinate, not an offset.
//! let shifted = h.combined(Operand::Scalar(5.5), Sign::Add)?;
//! assert_eq!(shifted.value(5)?, 4.0);
//! assert_eq!(h.value(5)?, 3.0);
//! # Ok::<(), plotkit_core::Error>(())
//! ```
//!
//! ```rust
//! use plotkit_hist::{HistStack, Histogram};
//! use plotkit_core::AxisSpec;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let h = Rc::new(RefCell::new(Histogram::<f64>::new_1d(
//!     AxisSpec::Edges(vec![0.0, 1.0, 4.0]),
//! )?));
//! let mut stack = HistStack::new();
//! stack.add(Rc::clone(&h))?;
//! stack.add(h)?; // same object: no-op
//! assert_eq!(stack.len(), 1);
//! # Ok::<(), plotkit_core::Error>(())
//! ```

pub mod histogram;
pub mod stack;

pub use histogram::{Histogram, Operand, Sign};
pub use stack::{HistStack, StackMember};

pub use plotkit_core::{Error, Result};
