//! Dense bin-content storage for 1 to 3 dimensional layouts
//!
//! Every axis contributes `nbins + 2` cells: the content bins plus one
//! underflow and one overflow cell. Cells are addressed by signed index
//! tuples where `-1` is underflow and `nbins` is overflow; anything outside
//! `[-1, nbins]` is rejected.

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::numeric::{from_f64, BinValue};

/// Maximum supported dimension count.
pub const MAX_DIM: usize = 3;

/// Dense per-bin storage, one [`Axis`] per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct BinStore<T: BinValue = f64> {
    axes: Vec<Axis>,
    data: Vec<T>,
}

/// Full content materialized as nested sequences.
///
/// Ordering matches iteration order of the original model: the outermost
/// sequence runs over the last declared axis, the innermost over the first.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    One(Vec<T>),
    Two(Vec<Vec<T>>),
    Three(Vec<Vec<Vec<T>>>),
}

impl<T: BinValue> BinStore<T> {
    /// Create a zeroed store over the given axes (1 to 3 of them).
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() || axes.len() > MAX_DIM {
            return Err(Error::argument_count(
                axes.len(),
                format!("a bin store supports 1 to {MAX_DIM} axes"),
            ));
        }
        let extent: usize = axes.iter().map(|a| a.nbins() + 2).product();
        Ok(Self {
            axes,
            data: vec![T::zero(); extent],
        })
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.axes.len()
    }

    /// Axis of dimension `d`.
    pub fn axis(&self, d: usize) -> Result<&Axis> {
        self.axes
            .get(d)
            .ok_or_else(|| Error::index_out_of_range(d as isize, self.axes.len()))
    }

    /// All axes in declared order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Content bin count of dimension `d`.
    pub fn nbins(&self, d: usize) -> Result<usize> {
        Ok(self.axis(d)?.nbins())
    }

    /// Whether another store has identical binning on every axis.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.axes == other.axes
    }

    fn offset(&self, indices: &[isize]) -> Result<usize> {
        if indices.len() != self.dim() {
            return Err(Error::dimension_mismatch(self.dim(), indices.len()));
        }
        let mut offset = 0;
        for (axis, &idx) in self.axes.iter().zip(indices) {
            let n = axis.nbins();
            if idx < -1 || idx > n as isize {
                return Err(Error::index_out_of_range(idx, n));
            }
            // Shift by one so underflow lands in slot 0.
            offset = offset * (n + 2) + (idx + 1) as usize;
        }
        Ok(offset)
    }

    /// Read one cell; sentinel indices `-1` and `nbins` are valid.
    pub fn get(&self, indices: &[isize]) -> Result<T> {
        Ok(self.data[self.offset(indices)?])
    }

    /// Overwrite one cell.
    pub fn set(&mut self, indices: &[isize], value: T) -> Result<()> {
        let offset = self.offset(indices)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Add `weight` to one cell.
    pub fn add_at(&mut self, indices: &[isize], weight: T) -> Result<()> {
        let offset = self.offset(indices)?;
        self.data[offset] = self.data[offset] + weight;
        Ok(())
    }

    /// Weighted fill: route a coordinate tuple into its cell, including the
    /// under/overflow cells for out-of-range coordinates.
    pub fn fill(&mut self, coords: &[f64], weight: T) -> Result<()> {
        if coords.len() != self.dim() {
            return Err(Error::dimension_mismatch(self.dim(), coords.len()));
        }
        let indices: Vec<isize> = self
            .axes
            .iter()
            .zip(coords)
            .map(|(axis, &x)| axis.find_bin(x).cell_index(axis.nbins()))
            .collect();
        self.add_at(&indices, weight)
    }

    /// Bin-wise `self += factor * other` over every cell, sentinels included.
    pub fn combine(&mut self, other: &Self, factor: T) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::shape_mismatch("bin-wise combine"));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a = *a + factor * *b;
        }
        Ok(())
    }

    /// Bin-wise error propagation: `self = sqrt(self^2 + other^2)`.
    pub fn combine_quadrature(&mut self, other: &Self) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::shape_mismatch("quadrature combine"));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a = (*a * *a + *b * *b).sqrt();
        }
        Ok(())
    }

    /// Multiply every cell by a factor.
    pub fn scale(&mut self, factor: f64) {
        let f = from_f64::<T>(factor);
        for v in &mut self.data {
            *v = *v * f;
        }
    }

    /// Bin-wise product with another store of identical shape.
    pub fn mul_store(&mut self, other: &Self) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::shape_mismatch("bin-wise product"));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a = *a * *b;
        }
        Ok(())
    }

    /// Bin-wise quotient with another store of identical shape.
    ///
    /// 0/0 and x/0 follow IEEE float division; no special casing here.
    pub fn div_store(&mut self, other: &Self) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::shape_mismatch("bin-wise quotient"));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a = *a / *b;
        }
        Ok(())
    }

    /// Content cell values in storage order, sentinels excluded.
    pub fn content_values(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.axes.iter().map(Axis::nbins).product());
        self.visit_content(&mut |_, v| out.push(v));
        out
    }

    /// Sum of all content cells.
    pub fn content_sum(&self) -> T {
        let mut sum = T::zero();
        self.visit_content(&mut |_, v| sum = sum + v);
        sum
    }

    fn visit_content(&self, f: &mut impl FnMut(&[isize], T)) {
        let dims: Vec<usize> = self.axes.iter().map(Axis::nbins).collect();
        let mut idx = vec![0isize; dims.len()];
        loop {
            let v = self.get(&idx).expect("content index in range");
            f(&idx, v);
            // Odometer increment, last axis fastest.
            let mut d = dims.len();
            loop {
                if d == 0 {
                    return;
                }
                d -= 1;
                idx[d] += 1;
                if (idx[d] as usize) < dims[d] {
                    break;
                }
                idx[d] = 0;
            }
        }
    }

    /// Materialize the content cells as nested sequences.
    pub fn nested(&self) -> Nested<T> {
        match self.dim() {
            1 => {
                let n = self.axes[0].nbins();
                Nested::One(
                    (0..n)
                        .map(|i| self.get(&[i as isize]).expect("content index"))
                        .collect(),
                )
            }
            2 => {
                let (nx, ny) = (self.axes[0].nbins(), self.axes[1].nbins());
                Nested::Two(
                    (0..ny)
                        .map(|j| {
                            (0..nx)
                                .map(|i| {
                                    self.get(&[i as isize, j as isize]).expect("content index")
                                })
                                .collect()
                        })
                        .collect(),
                )
            }
            _ => {
                let (nx, ny, nz) = (
                    self.axes[0].nbins(),
                    self.axes[1].nbins(),
                    self.axes[2].nbins(),
                );
                Nested::Three(
                    (0..nz)
                        .map(|k| {
                            (0..ny)
                                .map(|j| {
                                    (0..nx)
                                        .map(|i| {
                                            self.get(&[i as isize, j as isize, k as isize])
                                                .expect("content index")
                                        })
                                        .collect()
                                })
                                .collect()
                        })
                        .collect(),
                )
            }
        }
    }
}
