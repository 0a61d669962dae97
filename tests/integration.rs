//! Cross-crate flows: histogram -> graph -> transforms, and stacks.

use std::{cell::RefCell, rc::Rc};

use approx::assert_relative_eq;
use plotkit::{AxisSpec, Graph, HistStack, Histogram, Operand, Plottable, Sign};

#[test]
fn fill_convert_transform_round_trip() {
    let mut h = Histogram::<f64>::new_1d(AxisSpec::Range {
        nbins: 4,
        low: 0.0,
        high: 4.0,
    })
    .unwrap()
    .with_name("spectrum");
    for x in [0.5, 1.5, 1.7, 2.5, 2.6, 2.7] {
        h.fill(&[x]).unwrap();
    }

    let mut g = Graph::from_histogram(&h).unwrap();
    assert_eq!(g.name(), "spectrum_graph");
    assert_eq!(g.xs(), vec![0.5, 1.5, 2.5, 3.5]);
    assert_eq!(g.ys(), vec![1.0, 2.0, 3.0, 0.0]);
    assert_relative_eq!(g.cached_integral(), 6.0);

    g.scale(2.0).shift(1.0);
    assert_eq!(g.xs(), vec![1.5, 2.5, 3.5, 4.5]);
    assert_eq!(g.ys(), vec![2.0, 4.0, 6.0, 0.0]);
    assert_relative_eq!(g.cached_integral(), 12.0);

    // Trapezoid over the scaled points, then over the reversed order.
    assert_relative_eq!(g.integrate(), 11.0);
    assert_relative_eq!(g.reversed().integrate(), -11.0);
}

#[test]
fn stack_aggregates_track_member_arithmetic() {
    let spec = AxisSpec::Range {
        nbins: 3,
        low: 0.0,
        high: 3.0,
    };
    let signal = Rc::new(RefCell::new(
        Histogram::<f64>::new_1d(spec.clone()).unwrap(),
    ));
    let background = Rc::new(RefCell::new(Histogram::<f64>::new_1d(spec).unwrap()));
    signal.borrow_mut().fill_weighted(&[1.5], 4.0).unwrap();
    background.borrow_mut().fill_weighted(&[0.5], 1.0).unwrap();

    let mut stack = HistStack::new().with_title("model");
    stack.add(Rc::clone(&signal)).unwrap();
    stack.add(Rc::clone(&background)).unwrap();
    assert_eq!(stack.integral(None).unwrap(), 5.0);
    assert_eq!(stack.maximum(false).unwrap(), 4.0);

    // Arithmetic on a member through its handle is visible to the stack.
    let bump = signal
        .borrow()
        .combined(Operand::Scalar(1.5), Sign::Add)
        .unwrap();
    *signal.borrow_mut() = bump;
    assert_eq!(stack.integral(None).unwrap(), 6.0);

    let copy = stack.clone_deep();
    stack.scale(10.0);
    assert_eq!(stack.integral(None).unwrap(), 60.0);
    assert_eq!(copy.integral(None).unwrap(), 6.0);
}
