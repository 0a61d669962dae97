//! Dimensional views over a bin store
//!
//! Indexing one axis of a 2D/3D store yields a view bound to the remaining
//! axes instead of a copy. A view is a store reference plus a fixed index
//! prefix; writes through a mutable view land in the exact backing cell.
//! Because views borrow the store, the borrow checker rules out use after
//! the store has been replaced or resized.

use crate::error::{Error, Result};
use crate::numeric::BinValue;
use crate::store::BinStore;

/// Read-only view over one axis-slice of a [`BinStore`].
#[derive(Debug)]
pub struct BinSlice<'a, T: BinValue = f64> {
    store: &'a BinStore<T>,
    prefix: Vec<isize>,
}

/// Mutable view over one axis-slice of a [`BinStore`].
#[derive(Debug)]
pub struct BinSliceMut<'a, T: BinValue = f64> {
    store: &'a mut BinStore<T>,
    prefix: Vec<isize>,
}

fn check_prefix<T: BinValue>(store: &BinStore<T>, prefix: &[isize]) -> Result<()> {
    if prefix.is_empty() || prefix.len() >= store.dim() {
        return Err(Error::dimension_mismatch(store.dim(), prefix.len()));
    }
    for (d, &idx) in prefix.iter().enumerate() {
        let n = store.axis(d)?.nbins();
        if idx < -1 || idx > n as isize {
            return Err(Error::index_out_of_range(idx, n));
        }
    }
    Ok(())
}

fn full_index(prefix: &[isize], rest: isize) -> Vec<isize> {
    let mut indices = Vec::with_capacity(prefix.len() + 1);
    indices.extend_from_slice(prefix);
    indices.push(rest);
    indices
}

impl<'a, T: BinValue> BinSlice<'a, T> {
    pub(crate) fn new(store: &'a BinStore<T>, prefix: Vec<isize>) -> Result<Self> {
        check_prefix(store, &prefix)?;
        Ok(Self { store, prefix })
    }

    /// Number of axes not yet fixed by the prefix.
    pub fn remaining(&self) -> usize {
        self.store.dim() - self.prefix.len()
    }

    /// Read the cell at `j` along the next free axis.
    ///
    /// Only valid on a view with a single free axis.
    pub fn get(&self, j: isize) -> Result<T> {
        if self.remaining() != 1 {
            return Err(Error::dimension_mismatch(1, self.remaining()));
        }
        self.store.get(&full_index(&self.prefix, j))
    }

    /// Fix the next free axis, yielding a deeper view (3D only).
    pub fn index(self, j: isize) -> Result<BinSlice<'a, T>> {
        if self.remaining() < 2 {
            return Err(Error::dimension_mismatch(2, self.remaining()));
        }
        BinSlice::new(self.store, full_index(&self.prefix, j))
    }

    /// Content values along the single free axis.
    pub fn values(&self) -> Result<Vec<T>> {
        if self.remaining() != 1 {
            return Err(Error::dimension_mismatch(1, self.remaining()));
        }
        let n = self.store.axis(self.prefix.len())?.nbins();
        (0..n).map(|j| self.get(j as isize)).collect()
    }
}

impl<'a, T: BinValue> BinSliceMut<'a, T> {
    pub(crate) fn new(store: &'a mut BinStore<T>, prefix: Vec<isize>) -> Result<Self> {
        check_prefix(store, &prefix)?;
        Ok(Self { store, prefix })
    }

    /// Number of axes not yet fixed by the prefix.
    pub fn remaining(&self) -> usize {
        self.store.dim() - self.prefix.len()
    }

    /// Read the cell at `j` along the next free axis.
    pub fn get(&self, j: isize) -> Result<T> {
        if self.remaining() != 1 {
            return Err(Error::dimension_mismatch(1, self.remaining()));
        }
        self.store.get(&full_index(&self.prefix, j))
    }

    /// Write the backing cell at `j` along the next free axis.
    pub fn set(&mut self, j: isize, value: T) -> Result<()> {
        if self.remaining() != 1 {
            return Err(Error::dimension_mismatch(1, self.remaining()));
        }
        self.store.set(&full_index(&self.prefix, j), value)
    }

    /// Fix the next free axis, yielding a deeper mutable view (3D only).
    ///
    /// Consumes the view so only one live mutable path into the store
    /// exists at a time.
    pub fn index(self, j: isize) -> Result<BinSliceMut<'a, T>> {
        if self.remaining() < 2 {
            return Err(Error::dimension_mismatch(2, self.remaining()));
        }
        BinSliceMut::new(self.store, full_index(&self.prefix, j))
    }
}

impl<T: BinValue> BinStore<T> {
    /// View of the slice at index `i` of the first axis (2D/3D stores).
    pub fn slice(&self, i: isize) -> Result<BinSlice<'_, T>> {
        BinSlice::new(self, vec![i])
    }

    /// Mutable view of the slice at index `i` of the first axis.
    pub fn slice_mut(&mut self, i: isize) -> Result<BinSliceMut<'_, T>> {
        BinSliceMut::new(self, vec![i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    fn store_3d() -> BinStore<f64> {
        BinStore::new(vec![
            Axis::uniform(2, 0.0, 2.0).unwrap(),
            Axis::uniform(3, 0.0, 3.0).unwrap(),
            Axis::uniform(4, 0.0, 4.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_slice_writes_through() {
        let mut store = BinStore::<f64>::new(vec![
            Axis::uniform(3, 0.0, 3.0).unwrap(),
            Axis::uniform(2, 0.0, 2.0).unwrap(),
        ])
        .unwrap();

        {
            let mut row = store.slice_mut(1).unwrap();
            assert_eq!(row.remaining(), 1);
            row.set(0, 3.5).unwrap();
        }
        assert_eq!(store.get(&[1, 0]).unwrap(), 3.5);
        assert_eq!(store.slice(1).unwrap().get(0).unwrap(), 3.5);
    }

    #[test]
    fn test_nested_3d_indexing() {
        let mut store = store_3d();
        store
            .slice_mut(1)
            .unwrap()
            .index(2)
            .unwrap()
            .set(3, 9.0)
            .unwrap();
        assert_eq!(store.get(&[1, 2, 3]).unwrap(), 9.0);

        let v = store.slice(1).unwrap().index(2).unwrap().get(3).unwrap();
        assert_eq!(v, 9.0);
    }

    #[test]
    fn test_slice_bounds() {
        let mut store = store_3d();
        assert!(store.slice(5).is_err());
        assert!(store.slice(-2).is_err());
        // Sentinel slices are addressable
        assert!(store.slice(-1).is_ok());
        assert!(store.slice(2).is_ok());
        // A 3D slice still has two free axes: scalar access is rejected
        assert!(store.slice(0).unwrap().get(0).is_err());
        assert!(store.slice_mut(0).unwrap().set(0, 1.0).is_err());
    }

    #[test]
    fn test_slice_values() {
        let mut store = BinStore::<f64>::new(vec![
            Axis::uniform(2, 0.0, 2.0).unwrap(),
            Axis::uniform(3, 0.0, 3.0).unwrap(),
        ])
        .unwrap();
        store.set(&[0, 2], 1.5).unwrap();
        assert_eq!(store.slice(0).unwrap().values().unwrap(), vec![0.0, 0.0, 1.5]);
    }
}
