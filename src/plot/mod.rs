//! Rendering: PNG figure output and terminal preview.
//!
//! Exactly one of the two paths runs per invocation: `png` when an output
//! path is configured, `ascii` otherwise.

use std::path::{Path, PathBuf};

use crate::domain::Series;

pub mod ascii;
pub mod png;

/// Resolve the save path: append `.png` unless the path already ends in it.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(".png") {
        path.to_path_buf()
    } else {
        let mut s = path.as_os_str().to_owned();
        s.push(".png");
        PathBuf::from(s)
    }
}

/// Error-bar extents for point `i` of a series, as
/// `((x_lo, x_hi), (y_lo, y_hi))`.
///
/// Both axes deliberately take their magnitude from the series' third
/// element (`xerr`); `yerr` is structurally required but never drawn.
pub fn error_bar_extents(series: &Series, i: usize) -> ((f64, f64), (f64, f64)) {
    let e = series.xerr.at(i);
    let (x, y) = (series.x[i], series.y[i]);
    ((x - e, x + e), (y - e, y + e))
}

/// Data bounds over all series points (error bars included) and curve
/// points, padded by 5% per side. Falls back to a unit box for degenerate
/// input so the renderers always have a valid range.
pub fn plot_bounds(
    series_list: &[Series],
    curves: &[Option<crate::domain::FitCurve>],
) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for series in series_list {
        for i in 0..series.len().min(series.y.len()) {
            let ((x0, x1), (y0, y1)) = error_bar_extents(series, i);
            x_min = x_min.min(x0);
            x_max = x_max.max(x1);
            y_min = y_min.min(y0);
            y_max = y_max.max(y1);
        }
    }
    for curve in curves.iter().flatten() {
        for (&x, &y) in curve.x.iter().zip(curve.y.iter()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    let (x_min, x_max) = pad_range(x_min, x_max);
    let (y_min, y_max) = pad_range(y_min, y_max);
    ((x_min, x_max), (y_min, y_max))
}

fn pad_range(min: f64, max: f64) -> (f64, f64) {
    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    let span = (max - min).abs();
    let pad = if span < 1e-12 { 0.5 } else { span * 0.05 };
    (min - pad, max + pad)
}
