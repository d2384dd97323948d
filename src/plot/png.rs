//! PNG figure rendering via Plotters.
//!
//! One figure holds every series: error-bar scatter plus optional fit-curve
//! overlays, with a mesh grid, axis descriptions, and an optional caption.
//! Font styling is scoped to this one figure build; nothing leaks into other
//! renders in the same process.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::{FitCurve, RunConfig, Series};
use crate::error::AppError;
use crate::plot::{error_bar_extents, plot_bounds};

const FIGURE_SIZE: (u32, u32) = (1024, 768);
const FONT_FAMILY: &str = "serif";
const FONT_SIZE_TITLE: u32 = 30;
const FONT_SIZE_AXIS_DESC: u32 = 20;
const FONT_SIZE_TICK: u32 = 16;
const MARKER_RADIUS: u32 = 3;
const WHISKER_WIDTH: u32 = 6;

/// Render all series into a single PNG figure at `path`.
pub fn render_png(
    path: &Path,
    config: &RunConfig,
    series_list: &[Series],
    curves: &[Option<FitCurve>],
) -> Result<(), AppError> {
    let ((x_min, x_max), (y_min, y_max)) = plot_bounds(series_list, curves);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70);
    if let Some(title) = &config.title {
        builder.caption(title.as_str(), (FONT_FAMILY, FONT_SIZE_TITLE).into_font());
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .label_style((FONT_FAMILY, FONT_SIZE_TICK).into_font())
        .axis_desc_style((FONT_FAMILY, FONT_SIZE_AXIS_DESC).into_font())
        .draw()
        .map_err(render_error)?;

    for (idx, series) in series_list.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let n = series.len().min(series.y.len());

        // Error bars: both axes sized from `xerr` (the fourth series element
        // is carried but never drawn).
        for i in 0..n {
            if series.xerr.at(i) == 0.0 {
                continue;
            }
            let ((ex0, ex1), (ey0, ey1)) = error_bar_extents(series, i);
            chart
                .draw_series(std::iter::once(ErrorBar::new_vertical(
                    series.x[i],
                    ey0,
                    series.y[i],
                    ey1,
                    color.filled(),
                    WHISKER_WIDTH,
                )))
                .map_err(render_error)?;
            chart
                .draw_series(std::iter::once(ErrorBar::new_horizontal(
                    series.y[i],
                    ex0,
                    series.x[i],
                    ex1,
                    color.filled(),
                    WHISKER_WIDTH,
                )))
                .map_err(render_error)?;
        }

        chart
            .draw_series(
                series.x[..n]
                    .iter()
                    .zip(series.y[..n].iter())
                    .map(|(&x, &y)| Circle::new((x, y), MARKER_RADIUS, color.filled())),
            )
            .map_err(render_error)?;

        if let Some(curve) = curves.get(idx).and_then(|c| c.as_ref()) {
            chart
                .draw_series(LineSeries::new(
                    curve.x.iter().copied().zip(curve.y.iter().copied()),
                    &color,
                ))
                .map_err(render_error)?;
        }
    }

    root.present().map_err(render_error)?;
    Ok(())
}

fn render_error(e: impl std::fmt::Display) -> AppError {
    AppError::new(2, format!("Failed to render figure: {e}"))
}
