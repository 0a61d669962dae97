//! Dimension-aware histograms
//!
//! A [`Histogram`] composes one [`Axis`] per dimension with a dense
//! [`BinStore`] of contents and a parallel store of per-bin errors. All
//! arithmetic goes through two explicit method families:
//!
//! - [`Histogram::combine_in_place`] / [`Histogram::combined`] carry the
//!   add/subtract surface, where the operand kind decides between a
//!   weighted fill and a bin-wise combine
//! - `scale`/`divide_scalar`/`multiply`/`divide` and their owned
//!   counterparts carry the multiplicative surface
//!
//! Owned variants never mutate the receiver; in-place variants mutate and
//! return it for chaining.

use plotkit_core::{
    from_f64, Axis, AxisSpec, BinSlice, BinSliceMut, BinStore, BinValue, BinningArg, Error,
    Nested, Plottable, Result, Style,
};

/// Direction of a combine: add or subtract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Add,
    Sub,
}

impl Sign {
    /// Multiplicative factor carried by the sign.
    pub fn factor(self) -> f64 {
        match self {
            Sign::Add => 1.0,
            Sign::Sub => -1.0,
        }
    }
}

/// Operand of an add/subtract combine.
///
/// The operand kind selects the semantics: scalars and coordinate tuples
/// perform a weighted fill, another histogram combines bin-wise.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T: BinValue = f64> {
    /// A bare coordinate; 1D histograms only
    Scalar(f64),
    /// A coordinate tuple of length `dim`, or `dim + 1` with a trailing weight
    Coords(&'a [f64]),
    /// Another histogram of identical shape
    Hist(&'a Histogram<T>),
}

/// A 1, 2, or 3 dimensional histogram with optional per-bin errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<T: BinValue = f64> {
    name: String,
    title: String,
    contents: BinStore<T>,
    errors: BinStore<T>,
    style: Style,
}

impl<T: BinValue> Histogram<T> {
    /// Create a histogram from one [`AxisSpec`] per dimension (1 to 3).
    pub fn new(specs: &[AxisSpec]) -> Result<Self> {
        let axes = specs
            .iter()
            .map(AxisSpec::resolve)
            .collect::<Result<Vec<_>>>()?;
        let contents = BinStore::new(axes.clone())?;
        let errors = BinStore::new(axes)?;
        Ok(Self {
            name: String::new(),
            title: String::new(),
            contents,
            errors,
            style: Style::default(),
        })
    }

    /// 1D convenience constructor.
    pub fn new_1d(spec: AxisSpec) -> Result<Self> {
        Self::new(&[spec])
    }

    /// 2D convenience constructor.
    pub fn new_2d(x: AxisSpec, y: AxisSpec) -> Result<Self> {
        Self::new(&[x, y])
    }

    /// 3D convenience constructor.
    pub fn new_3d(x: AxisSpec, y: AxisSpec, z: AxisSpec) -> Result<Self> {
        Self::new(&[x, y, z])
    }

    /// Create a `dim`-dimensional histogram from a flat positional
    /// argument list, grouped left to right per [`AxisSpec::parse_args`].
    pub fn parse(dim: usize, args: &[BinningArg]) -> Result<Self> {
        let specs = AxisSpec::parse_args(dim, args)?;
        Self::new(&specs)
    }

    /// Set the object name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.contents.dim()
    }

    /// Axis of dimension `d`.
    pub fn axis(&self, d: usize) -> Result<&Axis> {
        self.contents.axis(d)
    }

    /// Content bin count of dimension `d`.
    pub fn nbins(&self, d: usize) -> Result<usize> {
        self.contents.nbins(d)
    }

    /// Whether another histogram has identical binning on every axis.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.contents.same_shape(&other.contents)
    }

    // --- filling ---------------------------------------------------------

    /// Fill the bin containing `coords` with weight 1.
    pub fn fill(&mut self, coords: &[f64]) -> Result<()> {
        self.fill_weighted(coords, 1.0)
    }

    /// Fill the bin containing `coords` with the given weight.
    ///
    /// Out-of-range coordinates land in the under/overflow cells.
    pub fn fill_weighted(&mut self, coords: &[f64], weight: f64) -> Result<()> {
        self.contents.fill(coords, from_f64(weight))
    }

    // --- add / subtract --------------------------------------------------

    /// Add or subtract an operand in place; the single dispatch site for
    /// the fill-vs-combine ambiguity.
    ///
    /// A scalar operand performs a weighted fill of that coordinate into a
    /// 1D histogram, not a per-bin offset. This mirrors the historic
    /// operator behavior and is worth knowing before reaching for
    /// `Operand::Scalar`.
    pub fn combine_in_place(&mut self, op: Operand<'_, T>, sign: Sign) -> Result<&mut Self> {
        match op {
            Operand::Scalar(x) => {
                if self.dim() != 1 {
                    return Err(Error::UnsupportedOperand(format!(
                        "scalar fill requires a 1-dimensional histogram, got {}D",
                        self.dim()
                    )));
                }
                self.fill_weighted(&[x], sign.factor())?;
            }
            Operand::Coords(coords) => {
                let dim = self.dim();
                if coords.len() == dim {
                    self.fill_weighted(coords, sign.factor())?;
                } else if coords.len() == dim + 1 {
                    // Last element is the weight; subtract negates it.
                    let weight = coords[dim] * sign.factor();
                    self.fill_weighted(&coords[..dim], weight)?;
                } else {
                    return Err(Error::dimension_mismatch(dim, coords.len()));
                }
            }
            Operand::Hist(other) => {
                self.contents
                    .combine(&other.contents, from_f64(sign.factor()))?;
                self.errors.combine_quadrature(&other.errors)?;
            }
        }
        Ok(self)
    }

    /// Add or subtract an operand on an independent copy.
    pub fn combined(&self, op: Operand<'_, T>, sign: Sign) -> Result<Self> {
        let mut copy = self.clone();
        copy.combine_in_place(op, sign)?;
        Ok(copy)
    }

    // --- multiply / divide -----------------------------------------------

    /// Multiply every bin (and its error) by a scalar, in place.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.contents.scale(factor);
        self.errors.scale(factor.abs());
        self
    }

    /// Multiply every bin by a scalar on an independent copy.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut copy = self.clone();
        copy.scale(factor);
        copy
    }

    /// Divide every bin by a scalar, in place.
    pub fn divide_scalar(&mut self, divisor: f64) -> Result<&mut Self> {
        if divisor == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.scale(1.0 / divisor))
    }

    /// Divide every bin by a scalar on an independent copy.
    pub fn divided_scalar(&self, divisor: f64) -> Result<Self> {
        let mut copy = self.clone();
        copy.divide_scalar(divisor)?;
        Ok(copy)
    }

    /// Bin-wise product with a histogram of identical shape, in place.
    ///
    /// Per-bin errors are left untouched.
    pub fn multiply(&mut self, other: &Self) -> Result<&mut Self> {
        self.contents.mul_store(&other.contents)?;
        Ok(self)
    }

    /// Bin-wise product on an independent copy.
    pub fn multiplied(&self, other: &Self) -> Result<Self> {
        let mut copy = self.clone();
        copy.multiply(other)?;
        Ok(copy)
    }

    /// Bin-wise quotient with a histogram of identical shape, in place.
    ///
    /// 0/0 follows IEEE division; per-bin errors are left untouched.
    pub fn divide(&mut self, other: &Self) -> Result<&mut Self> {
        self.contents.div_store(&other.contents)?;
        Ok(self)
    }

    /// Bin-wise quotient on an independent copy.
    pub fn divided(&self, other: &Self) -> Result<Self> {
        let mut copy = self.clone();
        copy.divide(other)?;
        Ok(copy)
    }

    // --- extrema and integral --------------------------------------------

    /// Largest content cell, optionally widened by the per-bin error.
    ///
    /// Sentinel cells are excluded; the receiver is never mutated.
    pub fn maximum(&self, include_error: bool) -> T {
        let contents = self.contents.content_values();
        let errors = self.errors.content_values();
        contents
            .iter()
            .zip(&errors)
            .map(|(&c, &e)| if include_error { c + e } else { c })
            .fold(T::neg_infinity(), T::max)
    }

    /// Smallest content cell, optionally narrowed by the per-bin error.
    pub fn minimum(&self, include_error: bool) -> T {
        let contents = self.contents.content_values();
        let errors = self.errors.content_values();
        contents
            .iter()
            .zip(&errors)
            .map(|(&c, &e)| if include_error { c - e } else { c })
            .fold(T::infinity(), T::min)
    }

    /// Sum of content cells, over an optional inclusive 1D bin range.
    pub fn integral(&self, range: Option<(usize, usize)>) -> Result<T> {
        match range {
            None => Ok(self.contents.content_sum()),
            Some((start, end)) => {
                if self.dim() != 1 {
                    return Err(Error::UnsupportedOperand(
                        "bin-range integral requires a 1-dimensional histogram".to_string(),
                    ));
                }
                let n = self.nbins(0)?;
                if end >= n || start > end {
                    return Err(Error::index_out_of_range(end as isize, n));
                }
                let mut sum = T::zero();
                for i in start..=end {
                    sum = sum + self.contents.get(&[i as isize])?;
                }
                Ok(sum)
            }
        }
    }

    // --- indexed access --------------------------------------------------

    /// Content of bin `i` of a 1D histogram.
    ///
    /// Only content bins `[0, n)` are addressable here; the under/overflow
    /// cells are reachable through [`Histogram::cell`] with `-1`/`n`.
    pub fn value(&self, i: usize) -> Result<T> {
        self.check_1d_content(i)?;
        self.contents.get(&[i as isize])
    }

    /// Overwrite the content of bin `i` of a 1D histogram.
    pub fn set_value(&mut self, i: usize, value: T) -> Result<()> {
        self.check_1d_content(i)?;
        self.contents.set(&[i as isize], value)
    }

    fn check_1d_content(&self, i: usize) -> Result<()> {
        if self.dim() != 1 {
            return Err(Error::UnsupportedOperand(format!(
                "single-index content access requires a 1-dimensional histogram, got {}D",
                self.dim()
            )));
        }
        let n = self.nbins(0)?;
        if i >= n {
            return Err(Error::index_out_of_range(i as isize, n));
        }
        Ok(())
    }

    /// Content bins of a 1D histogram in order.
    pub fn values(&self) -> Result<Vec<T>> {
        if self.dim() != 1 {
            return Err(Error::UnsupportedOperand(
                "flat content listing requires a 1-dimensional histogram".to_string(),
            ));
        }
        Ok(self.contents.content_values())
    }

    /// Read one cell by full index tuple; sentinels `-1`/`n` are valid.
    pub fn cell(&self, indices: &[isize]) -> Result<T> {
        self.contents.get(indices)
    }

    /// Overwrite one cell by full index tuple.
    pub fn set_cell(&mut self, indices: &[isize], value: T) -> Result<()> {
        self.contents.set(indices, value)
    }

    /// Per-bin error of one cell.
    pub fn bin_error(&self, indices: &[isize]) -> Result<T> {
        self.errors.get(indices)
    }

    /// Set the per-bin error of one cell.
    pub fn set_bin_error(&mut self, indices: &[isize], error: T) -> Result<()> {
        self.errors.set(indices, error)
    }

    /// View of the slice at index `i` of the first axis (2D/3D).
    pub fn slice(&self, i: isize) -> Result<BinSlice<'_, T>> {
        self.contents.slice(i)
    }

    /// Mutable view of the slice at index `i` of the first axis (2D/3D).
    pub fn slice_mut(&mut self, i: isize) -> Result<BinSliceMut<'_, T>> {
        self.contents.slice_mut(i)
    }

    /// Full content as nested sequences, outermost = last declared axis.
    pub fn nested(&self) -> Nested<T> {
        self.contents.nested()
    }
}

impl<T: BinValue> Plottable for Histogram<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}
