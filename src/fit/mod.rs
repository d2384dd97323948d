//! Per-series curve production.
//!
//! Responsibilities:
//!
//! - sample the curve's x positions across `[min(x), max(x)]` inclusive
//! - polynomial mode: delegate to `math::poly` and keep the coefficients
//!   (reported on stdout by the caller, highest degree first)
//! - cubic mode: delegate to `math::spline`
//!
//! Numerical failures map to exit code 3; this is a batch tool and nothing
//! mid-pipeline is recovered.

use crate::domain::{FitCurve, FitMode, Series};
use crate::error::AppError;
use crate::math::poly::{polyfit, polyval};
use crate::math::spline::CubicSpline;

/// Compute the curve for one series, if a fit mode is active.
pub fn fit_series(series: &Series, mode: FitMode, steps: usize) -> Result<Option<FitCurve>, AppError> {
    match mode {
        FitMode::None => Ok(None),
        FitMode::Poly(degree) => {
            let coefs = polyfit(&series.x, &series.y, degree).ok_or_else(|| {
                AppError::new(
                    3,
                    format!("polynomial fit of degree {degree} failed (degenerate system)"),
                )
            })?;
            let xs = sample_positions(&series.x, steps)?;
            let ys = xs.iter().map(|&x| polyval(&coefs, x)).collect();
            Ok(Some(FitCurve {
                x: xs,
                y: ys,
                coefficients: Some(coefs),
            }))
        }
        FitMode::Cubic => {
            let spline = CubicSpline::new(&series.x, &series.y)
                .map_err(|e| AppError::new(3, format!("cubic interpolation failed: {e}")))?;
            let xs = sample_positions(&series.x, steps)?;
            let ys = xs.iter().map(|&x| spline.eval(x)).collect();
            Ok(Some(FitCurve {
                x: xs,
                y: ys,
                coefficients: None,
            }))
        }
    }
}

/// Evenly spaced sample positions spanning `[min(x), max(x)]` inclusive,
/// `steps + 1` points.
fn sample_positions(x: &[f64], steps: usize) -> Result<Vec<f64>, AppError> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in x {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(AppError::new(3, "cannot sample fit curve over empty x range"));
    }

    let steps = steps.max(1);
    let n = steps + 1;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / steps as f64;
        out.push(lo + u * (hi - lo));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorAmount;

    fn series(x: Vec<f64>, y: Vec<f64>) -> Series {
        Series {
            x,
            y,
            xerr: ErrorAmount::Scalar(0.0),
            yerr: ErrorAmount::Scalar(0.0),
        }
    }

    #[test]
    fn no_mode_produces_no_curve() {
        let s = series(vec![1.0, 2.0], vec![3.0, 4.0]);
        assert!(fit_series(&s, FitMode::None, 10).unwrap().is_none());
    }

    #[test]
    fn linear_fit_has_two_coefficients_and_spans_x_range() {
        let s = series(vec![0.0, 2.0, 4.0], vec![1.0, 5.0, 9.0]); // y = 2x + 1
        let curve = fit_series(&s, FitMode::Poly(1), 10).unwrap().unwrap();

        let coefs = curve.coefficients.as_ref().unwrap();
        assert_eq!(coefs.len(), 2);
        assert!((coefs[0] - 2.0).abs() < 1e-9);
        assert!((coefs[1] - 1.0).abs() < 1e-9);

        assert_eq!(curve.x.len(), 11);
        assert!((curve.x[0] - 0.0).abs() < 1e-12);
        assert!((curve.x[10] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn poly_fit_reports_degree_plus_one_coefficients() {
        let x = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
        let y: Vec<f64> = x.iter().map(|&v| v * v).collect();
        let curve = fit_series(&series(x, y), FitMode::Poly(3), 100)
            .unwrap()
            .unwrap();
        assert_eq!(curve.coefficients.unwrap().len(), 4);
        assert_eq!(curve.x.len(), 101);
    }

    #[test]
    fn cubic_curve_passes_through_knots_and_has_no_coefficients() {
        let s = series(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]);
        let curve = fit_series(&s, FitMode::Cubic, 3).unwrap().unwrap();
        assert!(curve.coefficients.is_none());
        // steps = 3 over [0, 3] samples exactly the knots.
        for (cx, cy) in curve.x.iter().zip(curve.y.iter()) {
            let expected = s.x.iter().position(|x| (x - cx).abs() < 1e-12).unwrap();
            assert!((cy - s.y[expected]).abs() < 1e-9);
        }
    }

    #[test]
    fn cubic_with_three_points_is_a_numerical_error() {
        let s = series(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]);
        let err = fit_series(&s, FitMode::Cubic, 100).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("at least 4 points"));
    }

    #[test]
    fn cubic_with_unsorted_x_is_a_numerical_error() {
        let s = series(vec![0.0, 2.0, 1.0, 3.0], vec![0.0; 4]);
        let err = fit_series(&s, FitMode::Cubic, 100).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn empty_series_cannot_be_sampled() {
        let s = series(vec![], vec![]);
        let err = fit_series(&s, FitMode::Cubic, 100).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
