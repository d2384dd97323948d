//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading/fitting/rendering code: flags are declared here, and `app` turns
//! a parsed `Cli` into an immutable `RunConfig`.

use std::path::PathBuf;

use clap::Parser;

/// Plot delimited numeric data with error bars, optionally through an
/// external transformation and with a fitted curve overlay.
#[derive(Debug, Parser)]
#[command(name = "plotfit", version, about = "Error-bar plotter for delimited numeric data")]
pub struct Cli {
    /// Input data file: one row per line, comma-separated values, no header.
    pub data_file: PathBuf,

    /// External "calculate" program producing plottable series from the raw
    /// table (JSON over stdin/stdout).
    #[arg(short = 'f', long = "function", value_name = "FUNC_FILE")]
    pub function: Option<PathBuf>,

    /// Figure title.
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// X axis label.
    #[arg(short = 'x', long = "xlabel", default_value = "")]
    pub xlabel: String,

    /// Y axis label.
    #[arg(short = 'y', long = "ylabel", default_value = "")]
    pub ylabel: String,

    /// Save the figure as PNG to this path (".png" appended when missing)
    /// instead of displaying it in the terminal.
    #[arg(short = 'o', long = "output", value_name = "OUT_PATH")]
    pub output: Option<PathBuf>,

    /// Overlay a least-squares line (same as --poly-fit 1).
    #[arg(long, conflicts_with = "poly_fit")]
    pub linear_fit: bool,

    /// Overlay a least-squares polynomial of degree N.
    #[arg(long, value_name = "N")]
    pub poly_fit: Option<usize>,

    /// Overlay a natural cubic interpolation through the points
    /// (ignored when a polynomial fit is also requested).
    #[arg(long)]
    pub cubic_approx: bool,

    /// Number of sampling intervals for the fitted curve
    /// (raised to 100 when a fit is requested).
    #[arg(short = 's', long = "steps", default_value_t = 10)]
    pub steps: usize,

    /// Terminal preview width in columns (display mode only).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Terminal preview height in rows (display mode only).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation_parses_with_defaults() {
        let cli = Cli::try_parse_from(["plotfit", "data.csv"]).unwrap();
        assert_eq!(cli.data_file, PathBuf::from("data.csv"));
        assert_eq!(cli.xlabel, "");
        assert_eq!(cli.ylabel, "");
        assert_eq!(cli.steps, 10);
        assert!(cli.title.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.linear_fit && !cli.cubic_approx);
        assert!(cli.poly_fit.is_none());
    }

    #[test]
    fn missing_data_file_is_a_parse_error() {
        assert!(Cli::try_parse_from(["plotfit"]).is_err());
    }

    #[test]
    fn linear_and_poly_fit_conflict() {
        let res = Cli::try_parse_from(["plotfit", "d.csv", "--linear-fit", "--poly-fit", "2"]);
        assert!(res.is_err());
    }

    #[test]
    fn non_integer_degree_is_a_parse_error() {
        assert!(Cli::try_parse_from(["plotfit", "d.csv", "--poly-fit", "2.5"]).is_err());
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::try_parse_from([
            "plotfit",
            "d.csv",
            "-f",
            "calc.sh",
            "-t",
            "Title",
            "-x",
            "t [s]",
            "-y",
            "U [V]",
            "-o",
            "out",
            "--poly-fit",
            "3",
            "--cubic-approx",
            "-s",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.function, Some(PathBuf::from("calc.sh")));
        assert_eq!(cli.title.as_deref(), Some("Title"));
        assert_eq!(cli.poly_fit, Some(3));
        assert!(cli.cubic_approx);
        assert_eq!(cli.steps, 50);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
    }
}
