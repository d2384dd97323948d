//! Polynomial least squares.
//!
//! Fitting a degree-`d` polynomial to `(x, y)` is a linear regression on the
//! Vandermonde design matrix `[1, x, x^2, ..., x^d]`.
//!
//! Implementation choices:
//! - SVD solves the least-squares problem robustly even when the design
//!   matrix is tall (more rows than columns). Nalgebra's `QR::solve` is
//!   intended for square systems and will panic for non-square matrices.
//! - High-degree fits on clustered x values produce near-collinear columns,
//!   so we try progressively looser tolerances before giving up.

use nalgebra::{DMatrix, DVector};

/// Fit a least-squares polynomial of `degree` to `(x, y)`.
///
/// Returns coefficients **highest degree first** (`degree + 1` values), or
/// `None` if the system is too ill-conditioned to solve robustly.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Option<Vec<f64>> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let cols = degree + 1;
    let design = DMatrix::from_fn(x.len(), cols, |r, c| x[r].powi(c as i32));
    let rhs = DVector::from_row_slice(y);

    let svd = design.svd(true, true);
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(&rhs, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                // The solver returns ascending powers; report descending.
                let mut coefs: Vec<f64> = beta.iter().copied().collect();
                coefs.reverse();
                return Some(coefs);
            }
        }
    }

    None
}

/// Evaluate a polynomial given coefficients highest degree first (Horner).
pub fn polyval(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().fold(0.0, |acc, &c| acc * x + c)
}
