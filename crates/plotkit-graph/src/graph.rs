//! Ordered point sets with asymmetric error bars
//!
//! A [`Graph`] owns an ordered sequence of `(x, y)` points, each with
//! asymmetric x and y errors, and implements the geometric transforms
//! (crop, reverse, invert, scale, stretch, shift) plus trapezoidal
//! integration. Every transform comes as an in-place form and an owned
//! `-ed` form that leaves the receiver untouched.

use std::fs;
use std::path::Path;

use log::debug;
use plotkit_core::{to_f64, BinValue, Error, Plottable, Result, Style};
use plotkit_hist::Histogram;

/// One graph point: coordinate plus asymmetric error bars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub ex_low: f64,
    pub ex_high: f64,
    pub ey_low: f64,
    pub ey_high: f64,
}

impl Point {
    /// A bare coordinate with zero errors.
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }
}

/// An ordered set of points with asymmetric errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    name: String,
    title: String,
    points: Vec<Point>,
    /// Integral carried alongside the points; set by histogram conversion,
    /// kept in sync by `scale`.
    integral: f64,
    /// Display limits of the x axis, preserved across `scale`.
    x_limits: Option<(f64, f64)>,
    style: Style,
}

impl Graph {
    /// Create a graph of `npoints` zeroed points.
    pub fn new(npoints: usize) -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            points: vec![Point::default(); npoints],
            integral: 0.0,
            x_limits: None,
            style: Style::default(),
        }
    }

    /// Parse a graph from a two-column text file.
    ///
    /// Each line is stripped of leading/trailing spaces and `/` characters
    /// and must then split into exactly two floats; lines that do not are
    /// skipped without error. Two slack slots beyond the line count are
    /// reserved so a later `crop` can insert boundary points without
    /// reallocating.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let lines: Vec<&str> = text.lines().collect();
        let mut points = Vec::with_capacity(lines.len() + 2);
        for line in lines {
            let trimmed = line.trim_matches(|c| c == ' ' || c == '/');
            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            match tokens.as_slice() {
                [a, b] => match (a.parse::<f64>(), b.parse::<f64>()) {
                    (Ok(x), Ok(y)) => points.push(Point::at(x, y)),
                    _ => debug!("skipping unparsable graph line: {line:?}"),
                },
                _ => debug!("skipping graph line without two columns: {line:?}"),
            }
        }
        let mut graph = Self::new(0);
        graph.points = points;
        Ok(graph)
    }

    /// Build a graph from the content bins of a 1D histogram.
    ///
    /// One point per bin at the bin center; x errors are half bin widths,
    /// y errors the symmetric per-bin error. The histogram integral is
    /// cached on the graph.
    pub fn from_histogram<T: BinValue>(hist: &Histogram<T>) -> Result<Self> {
        if hist.dim() != 1 {
            return Err(Error::UnsupportedOperand(format!(
                "graph conversion requires a 1-dimensional histogram, got {}D",
                hist.dim()
            )));
        }
        let axis = hist.axis(0)?;
        let mut graph = Self::new(axis.nbins());
        for (i, center) in axis.centers().into_iter().enumerate() {
            let half_width = axis.width(i)? / 2.0;
            let error = to_f64(hist.bin_error(&[i as isize])?);
            graph.points[i] = Point {
                x: center,
                y: to_f64(hist.value(i)?),
                ex_low: half_width,
                ex_high: half_width,
                ey_low: error,
                ey_high: error,
            };
        }
        graph.integral = to_f64(hist.integral(None)?);
        graph.name = format!("{}_graph", hist.name());
        graph.title = hist.title().to_string();
        Ok(graph)
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

    // --- point access ----------------------------------------------------

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the graph has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Resize the point sequence; new points are zeroed.
    pub fn set_len(&mut self, npoints: usize) {
        self.points.resize(npoints, Point::default());
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Point `i`.
    pub fn point(&self, i: usize) -> Result<Point> {
        self.points
            .get(i)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(i as isize, self.points.len()))
    }

    /// Overwrite the coordinate of point `i`, keeping its errors.
    pub fn set_point(&mut self, i: usize, x: f64, y: f64) -> Result<()> {
        let len = self.points.len();
        let p = self
            .points
            .get_mut(i)
            .ok_or_else(|| Error::index_out_of_range(i as isize, len))?;
        p.x = x;
        p.y = y;
        Ok(())
    }

    /// Overwrite the error bars of point `i`.
    pub fn set_point_error(
        &mut self,
        i: usize,
        ex_low: f64,
        ex_high: f64,
        ey_low: f64,
        ey_high: f64,
    ) -> Result<()> {
        let len = self.points.len();
        let p = self
            .points
            .get_mut(i)
            .ok_or_else(|| Error::index_out_of_range(i as isize, len))?;
        p.ex_low = ex_low;
        p.ex_high = ex_high;
        p.ey_low = ey_low;
        p.ey_high = ey_high;
        Ok(())
    }

    /// All points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// X coordinates in order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates in order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Low-side x errors in order.
    pub fn ex_low(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ex_low).collect()
    }

    /// High-side x errors in order.
    pub fn ex_high(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ex_high).collect()
    }

    /// Low-side y errors in order.
    pub fn ey_low(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ey_low).collect()
    }

    /// High-side y errors in order.
    pub fn ey_high(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ey_high).collect()
    }

    /// Copy asymmetric y errors from the signed contents of a 1D
    /// histogram: positive content becomes the high error, negative the
    /// low error. A bin-count/point-count mismatch is a silent no-op.
    pub fn set_errors_from_hist<T: BinValue>(&mut self, hist: &Histogram<T>) -> Result<()> {
        if hist.dim() != 1 {
            return Err(Error::UnsupportedOperand(
                "error transfer requires a 1-dimensional histogram".to_string(),
            ));
        }
        if hist.nbins(0)? != self.points.len() {
            return Ok(());
        }
        for (i, p) in self.points.iter_mut().enumerate() {
            let content = to_f64(hist.value(i)?);
            if content > 0.0 {
                p.ey_high = content;
                p.ey_low = 0.0;
            } else {
                p.ey_low = -content;
                p.ey_high = 0.0;
            }
        }
        Ok(())
    }

    // --- extrema ---------------------------------------------------------

    fn fold_points(&self, what: &str, f: impl Fn(&Point) -> f64, max: bool) -> Result<f64> {
        if self.points.is_empty() {
            return Err(Error::EmptyGraph(format!("{what} of a graph with no points")));
        }
        let init = if max { f64::NEG_INFINITY } else { f64::INFINITY };
        Ok(self.points.iter().map(f).fold(init, |acc, v| {
            if max {
                acc.max(v)
            } else {
                acc.min(v)
            }
        }))
    }

    /// Smallest x coordinate.
    pub fn x_min(&self) -> Result<f64> {
        self.fold_points("xmin", |p| p.x, false)
    }

    /// Largest x coordinate.
    pub fn x_max(&self) -> Result<f64> {
        self.fold_points("xmax", |p| p.x, true)
    }

    /// Smallest y coordinate.
    pub fn y_min(&self) -> Result<f64> {
        self.fold_points("ymin", |p| p.y, false)
    }

    /// Largest y coordinate.
    pub fn y_max(&self) -> Result<f64> {
        self.fold_points("ymax", |p| p.y, true)
    }

    /// Largest y, optionally widened by the high-side error.
    pub fn maximum(&self, include_error: bool) -> Result<f64> {
        if include_error {
            self.fold_points("maximum", |p| p.y + p.ey_high, true)
        } else {
            self.y_max()
        }
    }

    /// Smallest y, optionally narrowed by the low-side error.
    pub fn minimum(&self, include_error: bool) -> Result<f64> {
        if include_error {
            self.fold_points("minimum", |p| p.y - p.ey_low, false)
        } else {
            self.y_min()
        }
    }

    // --- continuous evaluation -------------------------------------------

    /// Evaluate the piecewise-linear curve through the points at `x`.
    ///
    /// Points are taken in their current order and assumed ascending in x;
    /// outside the covered range the nearest end segment is extended
    /// linearly. A single-point graph is constant.
    pub fn eval(&self, x: f64) -> Result<f64> {
        if self.points.is_empty() {
            return Err(Error::EmptyGraph("evaluation of a graph with no points".to_string()));
        }
        Ok(eval_points(&self.points, x))
    }

    // --- transforms ------------------------------------------------------

    /// Clip/extend the point range to `[x1, x2]`, in place.
    ///
    /// If `x1` lies below the current minimum x, a new first point at `x1`
    /// is synthesized from the linear evaluator; same for `x2` above the
    /// maximum at the end. Interior points pass through unchanged.
    pub fn crop(&mut self, x1: f64, x2: f64) -> Result<&mut Self> {
        let x_min = self.x_min()?;
        let x_max = self.x_max()?;
        let mut out = Vec::with_capacity(self.points.len() + 2);
        if x1 < x_min {
            out.push(Point::at(x1, eval_points(&self.points, x1)));
        }
        out.extend_from_slice(&self.points);
        if x2 > x_max {
            out.push(Point::at(x2, eval_points(&self.points, x2)));
        }
        self.points = out;
        Ok(self)
    }

    /// Clip/extend on an independent copy.
    pub fn cropped(&self, x1: f64, x2: f64) -> Result<Self> {
        let mut copy = self.clone();
        copy.crop(x1, x2)?;
        Ok(copy)
    }

    /// Reverse the point order (errors travel with their point), in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.points.reverse();
        self
    }

    /// Reverse on an independent copy.
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    /// Swap the roles of x and y (and their errors) per point, in place.
    pub fn invert(&mut self) -> &mut Self {
        for p in &mut self.points {
            std::mem::swap(&mut p.x, &mut p.y);
            std::mem::swap(&mut p.ex_low, &mut p.ey_low);
            std::mem::swap(&mut p.ex_high, &mut p.ey_high);
        }
        self
    }

    /// Invert on an independent copy.
    pub fn inverted(&self) -> Self {
        let mut copy = self.clone();
        copy.invert();
        copy
    }

    /// Multiply y and the y errors by `value`, in place.
    ///
    /// The x display limits are pinned to their pre-scale values and the
    /// cached integral is scaled by the same factor.
    pub fn scale(&mut self, value: f64) -> &mut Self {
        if self.x_limits.is_none() && !self.points.is_empty() {
            let lo = self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let hi = self.points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            self.x_limits = Some((lo, hi));
        }
        for p in &mut self.points {
            p.y *= value;
            p.ey_low *= value;
            p.ey_high *= value;
        }
        self.integral *= value;
        self
    }

    /// Scale on an independent copy.
    pub fn scaled(&self, value: f64) -> Self {
        let mut copy = self.clone();
        copy.scale(value);
        copy
    }

    /// Multiply x and the x errors by `value`, in place. Y is unchanged.
    pub fn stretch(&mut self, value: f64) -> &mut Self {
        for p in &mut self.points {
            p.x *= value;
            p.ex_low *= value;
            p.ex_high *= value;
        }
        self
    }

    /// Stretch on an independent copy.
    pub fn stretched(&self, value: f64) -> Self {
        let mut copy = self.clone();
        copy.stretch(value);
        copy
    }

    /// Add `value` to each x; all errors unchanged. In place.
    pub fn shift(&mut self, value: f64) -> &mut Self {
        for p in &mut self.points {
            p.x += value;
        }
        self
    }

    /// Shift on an independent copy.
    pub fn shifted(&self, value: f64) -> Self {
        let mut copy = self.clone();
        copy.shift(value);
        copy
    }

    /// Trapezoidal integral over consecutive points in current order.
    ///
    /// No implicit sorting: reverse or reorder first if needed.
    pub fn integrate(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].y + w[1].y) / 2.0)
            .sum()
    }

    /// The integral carried alongside the points.
    pub fn cached_integral(&self) -> f64 {
        self.integral
    }

    /// Preserved x display limits, if pinned.
    pub fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }
}

fn eval_points(points: &[Point], x: f64) -> f64 {
    if points.len() == 1 {
        return points[0].y;
    }
    // Pick the segment containing x, or the nearest end segment.
    let mut seg = 0;
    for i in 0..points.len() - 1 {
        seg = i;
        if x < points[i + 1].x {
            break;
        }
    }
    let (p0, p1) = (points[seg], points[seg + 1]);
    if p1.x == p0.x {
        return p0.y;
    }
    p0.y + (p1.y - p0.y) * (x - p0.x) / (p1.x - p0.x)
}

impl Plottable for Graph {
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
