//! Value parsers for numeric CLI flags.

/// Parse a `usize` that must be at least 1.
///
/// # Errors
/// Returns an error if the input is not a number or is zero.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let n: usize = s.trim().parse().map_err(|_| format!("Invalid number: {s}"))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

/// Parse a fraction in `(0, 1]`.
///
/// # Errors
/// Returns an error if the input is not a number or lies outside the range.
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("Invalid fraction: {s}"))?;
    if v > 0.0 && v <= 1.0 { Ok(v) } else { Err(format!("{v} is not in (0, 1]")) }
}
