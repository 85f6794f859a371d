//! Fixed-point price and volume helpers.
//!
//! ## Overview
//!
//! The book stores prices and volumes as plain integers (ticks). Feeds
//! usually quote decimal strings, so this module converts between the two
//! with `rust_decimal`, never going through floating point.
//!
//! A tick scale is expressed as a number of decimal places: with
//! `decimals = 2`, `"50000.25"` becomes `5_000_025`.
//!
//! ## Examples
//!
//! ```
//! use aggregated_lob::types::price::{parse_scaled, format_scaled};
//!
//! let ticks = parse_scaled("50000.25", 2).unwrap();
//! assert_eq!(ticks, 5_000_025);
//! assert_eq!(format_scaled(ticks, 2), "50000.25");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Largest supported number of decimal places.
///
/// 10^18 is the largest power of ten that fits in an `i64`.
pub const MAX_DECIMALS: u32 = 18;

/// Scale factor for `decimals` places, or `None` if out of range
pub fn scale_factor(decimals: u32) -> Option<i64> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    10i64.checked_pow(decimals)
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to integer ticks
///
/// Values with more precision than `decimals` are rounded half-to-even
/// (banker's rounding, the `rust_decimal` default).
///
/// # Returns
///
/// * `Some(i64)` - The tick representation
/// * `None` - If parsing fails, `decimals` is too large, or the value overflows
///
/// # Example
///
/// ```
/// use aggregated_lob::types::price::parse_scaled;
///
/// assert_eq!(parse_scaled("1.5", 8), Some(150_000_000));
/// assert_eq!(parse_scaled("-0.01", 2), Some(-1));
/// assert_eq!(parse_scaled("abc", 2), None);
/// ```
pub fn parse_scaled(s: &str, decimals: u32) -> Option<i64> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    decimal_to_ticks(decimal, decimals)
}

/// Convert a `Decimal` to integer ticks
pub fn decimal_to_ticks(d: Decimal, decimals: u32) -> Option<i64> {
    let factor = scale_factor(decimals)?;
    let scaled = d.checked_mul(Decimal::from(factor))?;
    scaled.round_dp(0).to_i64()
}

/// Convert integer ticks to a `Decimal`
pub fn ticks_to_decimal(ticks: i64, decimals: u32) -> Decimal {
    Decimal::new(ticks, decimals.min(MAX_DECIMALS))
}

/// Render ticks with exactly `decimals` decimal places
///
/// # Example
///
/// ```
/// use aggregated_lob::types::price::format_scaled;
///
/// assert_eq!(format_scaled(100, 2), "1.00");
/// assert_eq!(format_scaled(-150, 2), "-1.50");
/// ```
pub fn format_scaled(ticks: i64, decimals: u32) -> String {
    ticks_to_decimal(ticks, decimals).to_string()
}

/// Render ticks with trailing zeros removed
pub fn format_scaled_trimmed(ticks: i64, decimals: u32) -> String {
    ticks_to_decimal(ticks, decimals).normalize().to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================
