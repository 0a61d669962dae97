//! Numeric storage kinds for bin contents
//!
//! The original design generated one histogram class per storage type. Here a
//! single trait bound selects the storage kind, with `f64` as the default.

use num_traits::Float;
use std::fmt::Debug;

/// Trait bound for per-bin values.
///
/// Satisfied by `f32` and `f64`; histogram arithmetic, extrema, and
/// integrals all operate in this type.
pub trait BinValue: Float + Debug + Default + Send + Sync + 'static {}

impl<T> BinValue for T where T: Float + Debug + Default + Send + Sync + 'static {}

/// Convert an `f64` into a bin value.
///
/// Lossless for `f64`; rounds for narrower kinds, like any assignment into a
/// narrower storage type would.
pub fn from_f64<T: BinValue>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert a bin value back into `f64` for interop with graph coordinates.
pub fn to_f64<T: BinValue>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_f64() {
        assert_eq!(to_f64(from_f64::<f64>(2.5)), 2.5);
        assert_eq!(to_f64(from_f64::<f32>(0.5)), 0.5);
    }
}
