//! Natural cubic spline interpolation.
//!
//! The spline passes through every knot exactly, with continuous first and
//! second derivatives and zero curvature at both ends (natural boundary
//! conditions). Construction solves the standard tridiagonal moment system
//! for the interior second derivatives; the system is tiny, so we reuse
//! nalgebra's dense LU rather than carrying a dedicated banded solver.

use nalgebra::{DMatrix, DVector};

/// Errors from spline construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineError {
    /// Cubic interpolation needs at least 4 points.
    TooFewPoints,
    /// The x values must be strictly increasing (ordered, no duplicates).
    NotStrictlyIncreasing,
    /// `x` and `y` have different lengths.
    LengthMismatch,
    /// The moment system could not be solved (non-finite input).
    Singular,
}

impl std::fmt::Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::TooFewPoints => write!(f, "cubic interpolation needs at least 4 points"),
            SplineError::NotStrictlyIncreasing => {
                write!(f, "x values must be strictly increasing for cubic interpolation")
            }
            SplineError::LengthMismatch => write!(f, "x and y must have the same length"),
            SplineError::Singular => write!(f, "cubic interpolation system could not be solved"),
        }
    }
}

impl std::error::Error for SplineError {}

/// A constructed natural cubic spline over fixed knots.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at the knots (`m[0] == m[n-1] == 0`).
    m: Vec<f64>,
}

impl CubicSpline {
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, SplineError> {
        if xs.len() != ys.len() {
            return Err(SplineError::LengthMismatch);
        }
        if xs.len() < 4 {
            return Err(SplineError::TooFewPoints);
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(SplineError::NotStrictlyIncreasing);
            }
        }

        let m = solve_moments(xs, ys)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Evaluate the spline at `x` (clamped-segment extrapolation outside the
    /// knot range, though callers only sample within `[xs[0], xs[n-1]]`).
    pub fn eval(&self, x: f64) -> f64 {
        let i = find_interval(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;

        let a = (x1 - x) / h;
        let b = (x - x0) / h;

        a * y0
            + b * y1
            + ((a * a * a - a) * m0 + (b * b * b - b) * m1) * (h * h) / 6.0
    }
}

/// Solve the interior tridiagonal moment system with natural boundaries.
fn solve_moments(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, SplineError> {
    let n = xs.len();
    let interior = n - 2;

    let h: Vec<f64> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

    let mut a = DMatrix::zeros(interior, interior);
    let mut rhs = DVector::zeros(interior);
    for row in 0..interior {
        let i = row + 1;
        a[(row, row)] = 2.0 * (h[i - 1] + h[i]);
        if row > 0 {
            a[(row, row - 1)] = h[i - 1];
        }
        if row + 1 < interior {
            a[(row, row + 1)] = h[i];
        }
        rhs[row] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }

    let solved = a.lu().solve(&rhs).ok_or(SplineError::Singular)?;
    if !solved.iter().all(|v| v.is_finite()) {
        return Err(SplineError::Singular);
    }

    let mut m = vec![0.0; n];
    m[1..=interior].copy_from_slice(solved.as_slice());
    Ok(m)
}

/// Binary search for the segment containing `x`.
///
/// Returns `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, xs.len() - 2]` beyond the boundaries.
fn find_interval(xs: &[f64], x: f64) -> usize {
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x < xs[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_knots_exactly() {
        let xs = [0.0, 1.0, 2.5, 4.0, 5.0];
        let ys = [1.0, -0.5, 2.0, 0.0, 3.0];
        let spline = CubicSpline::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert!((spline.eval(*x) - y).abs() < 1e-9, "knot ({x}, {y})");
        }
    }

    #[test]
    fn reproduces_a_straight_line_between_knots() {
        // A line has zero curvature everywhere, so the natural spline must
        // reproduce it exactly at arbitrary sample positions.
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x - 1.0).collect();
        let spline = CubicSpline::new(&xs, &ys).unwrap();
        for &x in &[0.3, 1.7, 2.5, 3.9] {
            assert!((spline.eval(x) - (2.0 * x - 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_too_few_points() {
        let err = CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, SplineError::TooFewPoints);
    }

    #[test]
    fn rejects_unsorted_or_duplicate_x() {
        let err = CubicSpline::new(&[0.0, 2.0, 1.0, 3.0], &[0.0; 4]).unwrap_err();
        assert_eq!(err, SplineError::NotStrictlyIncreasing);
        let err = CubicSpline::new(&[0.0, 1.0, 1.0, 3.0], &[0.0; 4]).unwrap_err();
        assert_eq!(err, SplineError::NotStrictlyIncreasing);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = CubicSpline::new(&[0.0, 1.0, 2.0, 3.0], &[0.0; 3]).unwrap_err();
        assert_eq!(err, SplineError::LengthMismatch);
    }
}
