//! Algebraic identities of histogram arithmetic.

use approx::assert_relative_eq;
use plotkit_core::AxisSpec;
use plotkit_hist::{Histogram, Operand, Sign};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn filled_pair(seed: u64) -> (Histogram<f64>, Histogram<f64>) {
    let spec = AxisSpec::Range {
        nbins: 8,
        low: -4.0,
        high: 4.0,
    };
    let mut h1 = Histogram::new_1d(spec.clone()).unwrap();
    let mut h2 = Histogram::new_1d(spec).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..200 {
        // Deliberately overshoot the axis range so flow cells get traffic.
        h1.fill_weighted(&[rng.gen_range(-6.0..6.0)], rng.gen_range(-1.0..2.0))
            .unwrap();
        h2.fill_weighted(&[rng.gen_range(-6.0..6.0)], rng.gen_range(-1.0..2.0))
            .unwrap();
    }
    (h1, h2)
}

#[test]
fn add_then_subtract_restores_contents() {
    let (h1, h2) = filled_pair(7);
    let sum = h1.combined(Operand::Hist(&h2), Sign::Add).unwrap();
    let back = sum.combined(Operand::Hist(&h2), Sign::Sub).unwrap();
    for i in -1..=8 {
        assert_relative_eq!(
            back.cell(&[i]).unwrap(),
            h1.cell(&[i]).unwrap(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn divide_then_scale_restores_contents() {
    let (h, _) = filled_pair(11);
    let divided = h.divided_scalar(3.5).unwrap();
    let restored = divided.scaled(3.5);
    for i in 0..8 {
        assert_relative_eq!(
            restored.value(i).unwrap(),
            h.value(i).unwrap(),
            epsilon = 1e-12
        );
    }
}

proptest! {
    #[test]
    fn prop_scalar_division_round_trip(d in prop::num::f64::NORMAL.prop_filter(
        "bounded divisor",
        |d| *d != 0.0 && d.abs() > 1e-6 && d.abs() < 1e6,
    )) {
        let (h, _) = filled_pair(3);
        let restored = h.divided_scalar(d).unwrap().scaled(d);
        for i in 0..8 {
            let orig = h.value(i).unwrap();
            prop_assert!((restored.value(i).unwrap() - orig).abs() <= 1e-9 * orig.abs().max(1.0));
        }
    }

    #[test]
    fn prop_fill_preserves_total_weight(xs in prop::collection::vec(-10.0..10.0f64, 1..64)) {
        let mut h = Histogram::<f64>::new_1d(AxisSpec::Range {
            nbins: 5,
            low: -5.0,
            high: 5.0,
        }).unwrap();
        for &x in &xs {
            h.fill(&[x]).unwrap();
        }
        // Every fill lands somewhere: content plus flow cells add up.
        let total = h.cell(&[-1]).unwrap()
            + h.cell(&[5]).unwrap()
            + h.integral(None).unwrap();
        prop_assert!((total - xs.len() as f64).abs() < 1e-9);
    }
}
