//! External series provider ("calculate" collaborator).
//!
//! The `-f` flag points at an executable program that turns the raw data
//! table into plottable series. The exchange is a fixed pipe protocol:
//!
//! - stdin: the full table as a JSON array of arrays of numbers
//! - stdout: a JSON array of series, each series an array of **exactly 4**
//!   elements `[x, y, xerr, yerr]` — `x`/`y` arrays of numbers, `xerr`/`yerr`
//!   a number or an array of numbers
//!
//! The 4-element shape is the input contract of everything downstream; a
//! series of any other length aborts the run with exit code 1 before further
//! series are decoded.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use serde_json::Value;

use crate::domain::{DataTable, Series};
use crate::error::AppError;

/// Run the collaborator and decode its series list.
pub fn calculate(program: &Path, table: &DataTable) -> Result<Vec<Series>, AppError> {
    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| {
            AppError::new(
                1,
                format!("Failed to run calculate program '{}': {e}", program.display()),
            )
        })?;

    let input = serde_json::to_vec(table)
        .map_err(|e| AppError::new(1, format!("Failed to encode data table: {e}")))?;

    // Close stdin after the write so the provider sees EOF and can produce
    // its output.
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| AppError::new(1, "Failed to open stdin of calculate program"))?;
    stdin.write_all(&input).map_err(|e| {
        AppError::new(1, format!("Failed to send data table to calculate program: {e}"))
    })?;
    drop(stdin);

    let output = child.wait_with_output().map_err(|e| {
        AppError::new(1, format!("Failed to read calculate program output: {e}"))
    })?;

    if !output.status.success() {
        return Err(AppError::new(
            1,
            format!(
                "calculate program '{}' exited with {}",
                program.display(),
                output.status
            ),
        ));
    }

    decode_series_list(&output.stdout)
}

/// Decode the provider's stdout into validated series.
pub fn decode_series_list(raw: &[u8]) -> Result<Vec<Series>, AppError> {
    let values: Vec<Value> = serde_json::from_slice(raw).map_err(|e| {
        AppError::new(1, format!("Failed to parse calculate program output as JSON: {e}"))
    })?;

    let mut series_list = Vec::with_capacity(values.len());
    for value in values {
        series_list.push(decode_series(value)?);
    }
    Ok(series_list)
}

fn decode_series(value: Value) -> Result<Series, AppError> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(AppError::at_caller(
                1,
                "decode_series",
                format!("inappropriate result from calculate (expected an array, got {other})"),
            ));
        }
    };

    let arity = elements.len();
    let Ok([x, y, xerr, yerr]) = <[Value; 4]>::try_from(elements) else {
        return Err(AppError::at_caller(
            1,
            "decode_series",
            format!("inappropriate result from calculate (series has {arity} elements, expected 4)"),
        ));
    };
    let series = Series {
        x: number_list(x, "x")?,
        y: number_list(y, "y")?,
        xerr: serde_json::from_value(xerr).map_err(|e| {
            AppError::new(1, format!("series xerr must be a number or number array: {e}"))
        })?,
        yerr: serde_json::from_value(yerr).map_err(|e| {
            AppError::new(1, format!("series yerr must be a number or number array: {e}"))
        })?,
    };
    Ok(series)
}

fn number_list(value: Value, which: &str) -> Result<Vec<f64>, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::new(1, format!("series {which} must be a number array: {e}")))
}
