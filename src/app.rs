//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments into a `RunConfig`
//! - runs the load → series → fit pipeline
//! - prints polynomial coefficients
//! - saves the figure or renders the terminal preview

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{FitMode, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Minimum curve sampling resolution whenever a fit mode is active; the
/// default of 10 intervals is too coarse to draw a smooth overlay.
const MIN_FIT_STEPS: usize = 100;

/// Entry point for the `plotfit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = run_config_from_cli(&cli);
    let run = pipeline::run_plot(&config)?;

    for curve in run.curves.iter().flatten() {
        if let Some(coefs) = &curve.coefficients {
            println!("{}", crate::report::format_coefficients(coefs));
        }
    }

    match &config.output {
        Some(path) => {
            let path = crate::plot::resolve_output_path(path);
            crate::plot::png::render_png(&path, &config, &run.series, &run.curves)?;
        }
        None => {
            print!(
                "{}",
                crate::plot::ascii::render_preview(&config, &run.series, &run.curves)
            );
        }
    }

    Ok(())
}

/// Resolve parsed flags into the immutable run configuration.
///
/// Curve-mode precedence: polynomial (or its `--linear-fit` shorthand) wins
/// over `--cubic-approx` when both are requested.
pub fn run_config_from_cli(cli: &Cli) -> RunConfig {
    let fit = if cli.linear_fit {
        FitMode::Poly(1)
    } else if let Some(degree) = cli.poly_fit {
        FitMode::Poly(degree)
    } else if cli.cubic_approx {
        FitMode::Cubic
    } else {
        FitMode::None
    };

    let steps = if fit.is_active() {
        cli.steps.max(MIN_FIT_STEPS)
    } else {
        cli.steps
    };

    RunConfig {
        data_path: cli.data_file.clone(),
        calc_path: cli.function.clone(),
        title: cli.title.clone(),
        xlabel: cli.xlabel.clone(),
        ylabel: cli.ylabel.clone(),
        output: cli.output.clone(),
        fit,
        steps,
        preview_width: cli.width,
        preview_height: cli.height,
    }
}
