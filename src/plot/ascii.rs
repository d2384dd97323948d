//! Fixed-grid character plotting for terminal display.
//!
//! This is the "show" path when no output file is configured. It is
//! intentionally dumb (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: per-series markers cycling `o x + *`
//! - error whiskers: `|` (vertical) and `-` (horizontal), both spanning the
//!   series' `xerr` magnitude
//! - fit/interpolation curves: `-` line segments

use crate::domain::{FitCurve, RunConfig, Series};
use crate::plot::{error_bar_extents, plot_bounds};

const MARKERS: [char; 4] = ['o', 'x', '+', '*'];

/// Render all series (and their curves, if any) into one character grid.
pub fn render_preview(
    config: &RunConfig,
    series_list: &[Series],
    curves: &[Option<FitCurve>],
) -> String {
    let width = config.preview_width.max(10);
    let height = config.preview_height.max(5);

    let ((x_min, x_max), (y_min, y_max)) = plot_bounds(series_list, curves);

    let mut grid = vec![vec![' '; width]; height];

    // Curves first, then whiskers, then markers, so points overlay lines.
    for curve in curves.iter().flatten() {
        let pts: Vec<(f64, f64)> = curve.x.iter().copied().zip(curve.y.iter().copied()).collect();
        draw_polyline(&mut grid, &pts, x_min, x_max, y_min, y_max);
    }

    for series in series_list {
        for i in 0..series.len().min(series.y.len()) {
            if series.xerr.at(i) == 0.0 {
                continue;
            }
            let ((ex0, ex1), (ey0, ey1)) = error_bar_extents(series, i);
            let cx = map_x(series.x[i], x_min, x_max, width);
            let cy = map_y(series.y[i], y_min, y_max, height);
            let row0 = map_y(ey1, y_min, y_max, height);
            let row1 = map_y(ey0, y_min, y_max, height);
            for row in row0..=row1 {
                put(&mut grid, cx, row, '|');
            }
            let col0 = map_x(ex0, x_min, x_max, width);
            let col1 = map_x(ex1, x_min, x_max, width);
            for col in col0..=col1 {
                put(&mut grid, col, cy, '-');
            }
        }
    }

    for (s, series) in series_list.iter().enumerate() {
        let marker = MARKERS[s % MARKERS.len()];
        for i in 0..series.len().min(series.y.len()) {
            let col = map_x(series.x[i], x_min, x_max, width);
            let row = map_y(series.y[i], y_min, y_max, height);
            grid[row][col] = marker;
        }
    }

    let mut out = String::new();
    if let Some(title) = &config.title {
        out.push_str(title);
        out.push('\n');
    }
    out.push_str(&format!(
        "x=[{x_min:.3}, {x_max:.3}]{} | y=[{y_min:.3}, {y_max:.3}]{}\n",
        label_suffix(&config.xlabel),
        label_suffix(&config.ylabel),
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn label_suffix(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" {label}")
    }
}

fn put(grid: &mut [Vec<char>], col: usize, row: usize, ch: char) {
    if row < grid.len() && col < grid[0].len() && grid[row][col] == ' ' {
        grid[row][col] = ch;
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y = max maps to the top row.
    (height as f64 - 1.0 - u * (height as f64 - 1.0)).round() as usize
}

fn draw_polyline(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if points.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            put(grid, col, row, '-');
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && x0 >= 0 {
            put(grid, x0 as usize, y0 as usize, ch);
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
