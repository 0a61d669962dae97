//! Core layer of the plotkit data model
//!
//! This crate holds the pieces the histogram and graph crates are built
//! from:
//!
//! - [`Axis`] / [`AxisSpec`]: validated 1D bin-edge sequences and the
//!   tagged per-dimension construction surface
//! - [`BinStore`]: dense 1–3 dimensional bin contents with under/overflow
//!   sentinel cells
//! - [`BinSlice`] / [`BinSliceMut`]: non-owning views for nested indexed
//!   access over 2D/3D stores
//! - [`Error`] / [`Result`]: the unified error taxonomy
//! - [`Style`] / [`Plottable`]: the read/style contract rendering
//!   collaborators consume
//!
//! # Example
//!
//! ```rust
//! use plotkit_core::{Axis, BinStore};
//!
//! let axis = Axis::uniform(4, 0.0, 4.0)?;
//! assert_eq!(axis.centers(), vec![0.5, 1.5, 2.5, 3.5]);
//!
//! let mut store = BinStore::<f64>::new(vec![axis])?;
//! store.fill(&[2.5], 1.0)?;
//! assert_eq!(store.get(&[2])?, 1.0);
//! # Ok::<(), plotkit_core::Error>(())
//! ```

pub mod axis;
pub mod error;
pub mod numeric;
pub mod store;
pub mod style;
pub mod view;

pub use axis::{Axis, AxisSpec, BinLocation, BinningArg};
pub use error::{Error, Result};
pub use numeric::{from_f64, to_f64, BinValue};
pub use store::{BinStore, Nested, MAX_DIM};
pub use style::{Plottable, Style};
pub use view::{BinSlice, BinSliceMut};
