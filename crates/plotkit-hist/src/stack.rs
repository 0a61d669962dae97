//! Ordered stacks of histograms
//!
//! A [`HistStack`] orders shared histogram handles without duplicating
//! their data. Aggregate queries (extrema, integral) fold over the members;
//! only [`HistStack::scale`] mutates them.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use plotkit_core::{BinValue, Error, Plottable, Result, Style};

use crate::histogram::Histogram;

/// Shared handle to a stacked histogram.
pub type StackMember<T> = Rc<RefCell<Histogram<T>>>;

/// An ordered collection of 1D/2D histograms with aggregate arithmetic.
#[derive(Debug, Clone, Default)]
pub struct HistStack<T: BinValue = f64> {
    name: String,
    title: String,
    norm: Option<f64>,
    hists: Vec<StackMember<T>>,
    style: Style,
}

impl<T: BinValue> HistStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            norm: None,
            hists: Vec::new(),
            style: Style::default(),
        }
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

    /// Set the normalization attached to this stack.
    pub fn with_norm(mut self, norm: f64) -> Self {
        self.norm = Some(norm);
        self
    }

    /// Normalization setting, if any.
    pub fn norm(&self) -> Option<f64> {
        self.norm
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.hists.len()
    }

    /// Whether the stack has no members.
    pub fn is_empty(&self) -> bool {
        self.hists.is_empty()
    }

    /// Member handles in stacking order.
    pub fn members(&self) -> &[StackMember<T>] {
        &self.hists
    }

    /// Handle to member `i`, if present.
    pub fn get(&self, i: usize) -> Option<StackMember<T>> {
        self.hists.get(i).cloned()
    }

    /// Add a histogram to the stack.
    ///
    /// Only 1D and 2D histograms are stackable. Adding a handle to the
    /// same underlying histogram twice is a no-op; identity is the shared
    /// allocation, not value equality.
    pub fn add(&mut self, hist: StackMember<T>) -> Result<()> {
        let dim = hist.borrow().dim();
        if dim > 2 {
            return Err(Error::UnsupportedMemberType(format!(
                "only 1D and 2D histograms can be stacked, got {dim}D"
            )));
        }
        if !self.push_member(hist) {
            debug!("stack {:?}: skipping histogram already in stack", self.name);
        }
        Ok(())
    }

    /// Append a member unless it is already present. Returns whether it
    /// was inserted. Callers must have validated the kind already.
    fn push_member(&mut self, hist: StackMember<T>) -> bool {
        if self.hists.iter().any(|h| Rc::ptr_eq(h, &hist)) {
            return false;
        }
        self.hists.push(hist);
        true
    }

    /// Union of two stacks: all of `self`'s members, then all of
    /// `other`'s, duplicates skipped. Neither operand is mutated.
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for h in &self.hists {
            out.push_member(Rc::clone(h));
        }
        for h in &other.hists {
            out.push_member(Rc::clone(h));
        }
        out
    }

    /// Append `other`'s members into this stack.
    pub fn merge_in_place(&mut self, other: &Self) -> &mut Self {
        for h in &other.hists {
            self.push_member(Rc::clone(h));
        }
        self
    }

    /// Scale every member in place.
    pub fn scale(&mut self, factor: f64) {
        for h in &self.hists {
            h.borrow_mut().scale(factor);
        }
    }

    /// Sum of member integrals over an optional inclusive 1D bin range.
    pub fn integral(&self, range: Option<(usize, usize)>) -> Result<T> {
        let mut sum = T::zero();
        for h in &self.hists {
            sum = sum + h.borrow().integral(range)?;
        }
        Ok(sum)
    }

    /// Largest member maximum, optionally widened by error bands.
    pub fn maximum(&self, include_error: bool) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyStack("maximum of a stack with no members".to_string()));
        }
        Ok(self
            .hists
            .iter()
            .map(|h| h.borrow().maximum(include_error))
            .fold(T::neg_infinity(), T::max))
    }

    /// Smallest member minimum, optionally narrowed by error bands.
    pub fn minimum(&self, include_error: bool) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyStack("minimum of a stack with no members".to_string()));
        }
        Ok(self
            .hists
            .iter()
            .map(|h| h.borrow().minimum(include_error))
            .fold(T::infinity(), T::min))
    }

    /// Deep-clone every member into a new stack, preserving title and
    /// normalization.
    pub fn clone_deep(&self) -> Self {
        let mut out = Self::new()
            .with_name(self.name.clone())
            .with_title(self.title.clone());
        out.norm = self.norm;
        out.style = self.style.clone();
        for h in &self.hists {
            out.hists.push(Rc::new(RefCell::new(h.borrow().clone())));
        }
        out
    }
}

impl<T: BinValue> Plottable for HistStack<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use plotkit_core::AxisSpec;

    fn member(nbins: usize) -> StackMember<f64> {
        Rc::new(RefCell::new(
            Histogram::new_1d(AxisSpec::Range {
                nbins,
                low: 0.0,
                high: nbins as f64,
            })
            .unwrap(),
        ))
    }

    #[test]
    fn test_add_identity_dedup() {
        let mut stack = HistStack::new();
        let h = member(5);
        stack.add(Rc::clone(&h)).unwrap();
        stack.add(Rc::clone(&h)).unwrap();
        assert_eq!(stack.len(), 1);

        // A value-equal but distinct histogram is a separate member.
        let other = Rc::new(RefCell::new(h.borrow().clone()));
        stack.add(other).unwrap();
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_member_kind_check() {
        let mut stack = HistStack::new();
        let h3 = Rc::new(RefCell::new(
            Histogram::<f64>::new_3d(
                AxisSpec::Range { nbins: 2, low: 0.0, high: 1.0 },
                AxisSpec::Range { nbins: 2, low: 0.0, high: 1.0 },
                AxisSpec::Range { nbins: 2, low: 0.0, high: 1.0 },
            )
            .unwrap(),
        ));
        assert!(matches!(
            stack.add(h3),
            Err(Error::UnsupportedMemberType(_))
        ));

        // Mixing 1D and 2D members is allowed.
        let h2 = Rc::new(RefCell::new(
            Histogram::<f64>::new_2d(
                AxisSpec::Range { nbins: 2, low: 0.0, high: 1.0 },
                AxisSpec::Range { nbins: 2, low: 0.0, high: 1.0 },
            )
            .unwrap(),
        ));
        stack.add(member(3)).unwrap();
        stack.add(h2).unwrap();
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_merged_order_and_in_place() {
        let (a, b, c) = (member(2), member(2), member(2));
        let mut left = HistStack::new();
        left.add(Rc::clone(&a)).unwrap();
        left.add(Rc::clone(&b)).unwrap();
        let mut right = HistStack::new();
        right.add(Rc::clone(&b)).unwrap();
        right.add(Rc::clone(&c)).unwrap();

        let union = left.merged(&right);
        assert_eq!(union.len(), 3);
        assert!(Rc::ptr_eq(&union.members()[0], &a));
        assert!(Rc::ptr_eq(&union.members()[2], &c));
        assert_eq!(left.len(), 2);

        left.merge_in_place(&right);
        assert_eq!(left.len(), 3);
    }

    #[test]
    fn test_scale_and_integral() {
        let mut stack = HistStack::new();
        let h1 = member(2);
        let h2 = member(2);
        h1.borrow_mut().set_value(0, 1.0).unwrap();
        h2.borrow_mut().set_value(1, 2.0).unwrap();
        stack.add(Rc::clone(&h1)).unwrap();
        stack.add(Rc::clone(&h2)).unwrap();

        assert_eq!(stack.integral(None).unwrap(), 3.0);
        assert_eq!(stack.integral(Some((0, 0))).unwrap(), 1.0);

        stack.scale(2.0);
        // Members are mutated in place.
        assert_eq!(h1.borrow().value(0).unwrap(), 2.0);
        assert_eq!(stack.integral(None).unwrap(), 6.0);
    }

    #[test]
    fn test_extrema_across_members() {
        let mut stack = HistStack::<f64>::new();
        assert!(matches!(stack.maximum(false), Err(Error::EmptyStack(_))));

        let h1 = member(2);
        let h2 = member(2);
        h1.borrow_mut().set_value(0, 5.0).unwrap();
        h2.borrow_mut().set_value(1, -3.0).unwrap();
        h2.borrow_mut().set_bin_error(&[1], 2.0).unwrap();
        stack.add(h1).unwrap();
        stack.add(h2).unwrap();

        assert_eq!(stack.maximum(false).unwrap(), 5.0);
        assert_eq!(stack.minimum(false).unwrap(), -3.0);
        assert_eq!(stack.minimum(true).unwrap(), -5.0);
    }

    #[test]
    fn test_clone_deep_is_independent() {
        let mut stack = HistStack::new().with_title("sum").with_norm(1.0);
        let h = member(2);
        stack.add(Rc::clone(&h)).unwrap();

        let copy = stack.clone_deep();
        assert_eq!(copy.title(), "sum");
        assert_eq!(copy.norm(), Some(1.0));
        assert_eq!(copy.len(), 1);
        assert!(!Rc::ptr_eq(&copy.members()[0], &h));

        h.borrow_mut().set_value(0, 9.0).unwrap();
        assert_eq!(copy.members()[0].borrow().value(0).unwrap(), 0.0);
    }
}
