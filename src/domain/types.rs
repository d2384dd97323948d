//! Shared domain types.
//!
//! These types are intentionally lightweight:
//!
//! - `RunConfig` is resolved once from the CLI and never mutated afterwards
//! - `Series`/`ErrorAmount` mirror the collaborator wire shape so they can be
//!   deserialized from its JSON output directly
//! - `FitCurve` is a plain sampled polyline plus optional coefficients

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;

/// Raw input table: one row of floats per input line, in file order.
///
/// Rows may be ragged; only the default (no collaborator) plotting path
/// requires rows 0 and 1 to exist and to have equal length.
pub type DataTable = Vec<Vec<f64>>;

/// An error magnitude: either one scalar for the whole series or one value
/// per point. Deserializes from a JSON number or a JSON array of numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorAmount {
    Scalar(f64),
    PerPoint(Vec<f64>),
}

impl ErrorAmount {
    /// Magnitude for point `i`. A per-point list shorter than the series
    /// yields 0 for the missing tail.
    pub fn at(&self, i: usize) -> f64 {
        match self {
            ErrorAmount::Scalar(v) => *v,
            ErrorAmount::PerPoint(vs) => vs.get(i).copied().unwrap_or(0.0),
        }
    }

}

/// One plottable series: the 4-tuple `(x, y, xerr, yerr)`.
///
/// `yerr` is carried for shape compatibility with the collaborator contract
/// but is never used for error-bar extents; both axes draw `xerr`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub xerr: ErrorAmount,
    pub yerr: ErrorAmount,
}

impl Series {
    /// Build the default series from table rows 0 and 1 with zero errors.
    ///
    /// Fails (exit code 2) when the table has fewer than 2 rows or when the
    /// two rows differ in length.
    pub fn from_table_rows(table: &DataTable) -> Result<Self, AppError> {
        if table.len() < 2 {
            return Err(AppError::new(
                2,
                format!(
                    "data file must contain at least 2 rows to plot (found {})",
                    table.len()
                ),
            ));
        }
        let x = table[0].clone();
        let y = table[1].clone();
        if x.len() != y.len() {
            return Err(AppError::new(
                2,
                format!(
                    "rows 0 and 1 must have equal length (found {} and {})",
                    x.len(),
                    y.len()
                ),
            ));
        }
        Ok(Series {
            x,
            y,
            xerr: ErrorAmount::Scalar(0.0),
            yerr: ErrorAmount::Scalar(0.0),
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Curve mode resolved from the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// No curve overlay.
    None,
    /// Least-squares polynomial of the given degree.
    Poly(usize),
    /// Natural cubic interpolation through the points.
    Cubic,
}

impl FitMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, FitMode::None)
    }
}

/// A sampled fit/interpolation curve for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct FitCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Polynomial coefficients, highest degree first. `None` for cubic
    /// interpolation (no closed-form coefficient list is reported).
    pub coefficients: Option<Vec<f64>>,
}

/// Immutable run options resolved once from the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub calc_path: Option<PathBuf>,
    pub title: Option<String>,
    pub xlabel: String,
    pub ylabel: String,
    pub output: Option<PathBuf>,
    pub fit: FitMode,
    /// Number of sampling intervals across `[min(x), max(x)]` for curve
    /// evaluation; a curve is drawn with `steps + 1` points.
    pub steps: usize,
    /// Terminal preview grid size (columns, rows). PNG output ignores these.
    pub preview_width: usize,
    pub preview_height: usize,
}
