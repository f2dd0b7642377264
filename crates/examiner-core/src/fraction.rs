//! Answer weights encoded as outline tags.
//!
//! Outline tags cannot contain `-` or `.`, so weights are written with
//! underscores: a leading underscore stands for the minus sign and the next
//! underscore for the decimal point.
//!
//! | tag         | weight    |
//! |-------------|-----------|
//! | `100`       | 100       |
//! | `33_33333`  | 33.33333  |
//! | `_33_33333` | -33.33333 |

use crate::error::FractionError;

/// Decode a weight tag into a signed percentage.
pub fn decode_fraction(marker: &str) -> Result<f64, FractionError> {
    let invalid = || FractionError {
        marker: marker.to_string(),
    };

    let (negative, magnitude) = match marker.strip_prefix('_') {
        Some(rest) => (true, rest),
        None => (false, marker),
    };

    let value: f64 = magnitude
        .replacen('_', ".", 1)
        .parse()
        .map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    // Avoid printing "-0" for `_0`
    if value == 0.0 {
        return Ok(0.0);
    }

    Ok(if negative { -value } else { value })
}

/// Render a weight for the `fraction` attribute (`100`, `-33.33333`).
pub fn format_fraction(fraction: f64) -> String {
    fraction.to_string()
}

/// Sum of weights outside `[-bound, bound]`.
pub fn sum_out_of_range(sum: f64, bound: f64) -> bool {
    sum > bound || sum < -bound
}
