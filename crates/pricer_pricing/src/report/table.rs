//! Fixed-width error-analysis table.

use std::fmt;

/// Width of every column of the report.
pub const COLUMN_WIDTH: usize = 20;

/// Significant digits used for real-valued columns.
pub const SIGNIFICANT_DIGITS: usize = 6;

const HEADERS: [&str; 6] = [
    "Simulations",
    "Subintervals",
    "BSM Price",
    "MC Price",
    "SD",
    "SE",
];

/// One row of the Monte Carlo error analysis.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::report::ErrorReport;
///
/// let report = ErrorReport {
///     simulations: 1000,
///     subintervals: 100,
///     bsm_price: 2.133371,
///     mc_price: 2.101,
///     standard_deviation: 3.9,
///     standard_error: 0.1233,
/// };
/// assert!(report.header().ends_with("SE"));
/// assert!(report.row().ends_with("0.1233"));
/// assert_eq!(report.row().len(), 6 * 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorReport {
    /// Number of simulated paths
    pub simulations: usize,
    /// Euler subintervals per path
    pub subintervals: usize,
    /// Closed-form price of the same option
    pub bsm_price: f64,
    /// Simulated price
    pub mc_price: f64,
    /// Scaled sample standard deviation of the payoffs
    pub standard_deviation: f64,
    /// Standard error of the simulated price
    pub standard_error: f64,
}

impl ErrorReport {
    /// Column titles, each right-aligned in [`COLUMN_WIDTH`] characters.
    pub fn header(&self) -> String {
        HEADERS
            .iter()
            .map(|title| format!("{:>width$}", title, width = COLUMN_WIDTH))
            .collect()
    }

    /// Values, aligned under [`header`](Self::header).
    ///
    /// Counts are printed plainly, reals with [`SIGNIFICANT_DIGITS`]
    /// significant digits.
    pub fn row(&self) -> String {
        let cells = [
            self.simulations.to_string(),
            self.subintervals.to_string(),
            format_significant(self.bsm_price, SIGNIFICANT_DIGITS),
            format_significant(self.mc_price, SIGNIFICANT_DIGITS),
            format_significant(self.standard_deviation, SIGNIFICANT_DIGITS),
            format_significant(self.standard_error, SIGNIFICANT_DIGITS),
        ];
        cells
            .iter()
            .map(|cell| format!("{:>width$}", cell, width = COLUMN_WIDTH))
            .collect()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        write!(f, "{}", self.row())
    }
}

/// Renders `value` with `digits` significant digits in the shortest of
/// fixed or scientific notation, dropping trailing zeros (`%g` style).
///
/// ```rust
/// use pricer_pricing::report::format_significant;
///
/// assert_eq!(format_significant(10.45058357, 6), "10.4506");
/// assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
/// assert_eq!(format_significant(1.234e-5, 6), "1.234e-05");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    // Rounds first, so 999999.7 at six digits reports exponent 6
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ErrorReport {
        ErrorReport {
            simulations: 10,
            subintervals: 100,
            bsm_price: 2.133371,
            mc_price: 1.5,
            standard_deviation: 4.0,
            standard_error: 1.2649110640673518,
        }
    }

    #[test]
    fn test_header_layout() {
        let header = report().header();
        assert_eq!(header.len(), 120);
        assert!(header.starts_with("         Simulations        Subintervals"));
        assert!(header.ends_with("                  SD                  SE"));
    }

    #[test]
    fn test_row_layout() {
        let row = report().row();
        assert_eq!(row.len(), 120);
        assert_eq!(&row[0..20], "                  10");
        assert_eq!(&row[20..40], "                 100");
        assert_eq!(row[40..60].trim_start(), "2.13337");
        assert_eq!(row[60..80].trim_start(), "1.5");
        assert_eq!(row[80..100].trim_start(), "4");
        assert_eq!(row[100..120].trim_start(), "1.26491");
    }

    #[test]
    fn test_display_is_header_then_row() {
        let r = report();
        assert_eq!(r.to_string(), format!("{}\n{}", r.header(), r.row()));
    }

    #[test]
    fn test_format_significant_fixed() {
        assert_eq!(format_significant(2.133371, 6), "2.13337");
        assert_eq!(format_significant(100.0, 6), "100");
        assert_eq!(format_significant(0.5, 6), "0.5");
        assert_eq!(format_significant(-0.03125, 6), "-0.03125");
        assert_eq!(format_significant(0.0001234, 6), "0.0001234");
        assert_eq!(format_significant(123456.4, 6), "123456");
    }

    #[test]
    fn test_format_significant_scientific() {
        assert_eq!(format_significant(1e-5, 6), "1e-05");
        assert_eq!(format_significant(999999.7, 6), "1e+06");
        assert_eq!(format_significant(-2.5e10, 6), "-2.5e+10");
    }

    #[test]
    fn test_format_significant_special_values() {
        assert_eq!(format_significant(0.0, 6), "0");
        assert_eq!(format_significant(f64::NAN, 6), "nan");
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
        assert_eq!(format_significant(f64::NEG_INFINITY, 6), "-inf");
    }
}
