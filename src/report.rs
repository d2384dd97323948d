//! Terminal report formatting.

/// Format polynomial coefficients for stdout, highest degree first.
///
/// One line per fitted series, e.g. `fit coefficients: [2.000000, -1.000000, 0.500000]`.
pub fn format_coefficients(coefs: &[f64]) -> String {
    let joined = coefs
        .iter()
        .map(|c| format!("{c:.6}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("fit coefficients: [{joined}]")
}
