//! TLE encoding
//!
//! Produces the canonical fixed-column layout. Fraction-only fields saturate at all
//! nines; other values wider than their slot are written at their natural width.

use crate::checksum::append_checksum;
use crate::{EXPONENT_ZERO, LINE_DELIMITER, TITLE_MAX_LEN};
use tle_types::prelude::*;

/// Encode a record as two or three newline separated lines, without a trailing newline
pub fn encode(tle: &TleRecord) -> String {
    let mut out = String::with_capacity(TITLE_MAX_LEN + 2 * 70);
    if tle.has_title() {
        out.extend(tle.title.chars().take(TITLE_MAX_LEN));
        out.push_str(LINE_DELIMITER);
    }
    out.push_str(&line1(tle));
    out.push_str(LINE_DELIMITER);
    out.push_str(&line2(tle));
    out
}

fn line1(tle: &TleRecord) -> String {
    let mut line = format!(
        "1 {:05}{} {:02}{:03}{:<3} {:02}{:012.8} {} {} {} {} {:4}",
        tle.catalog_number,
        tle.classification,
        two_digit_year(tle.launch_year),
        tle.launch_number,
        tle.launch_piece,
        two_digit_year(tle.epoch_year),
        tle.epoch_day,
        first_derivative(tle.mean_motion_d1),
        implied_decimal(tle.mean_motion_d2),
        implied_decimal(tle.b_star),
        tle.ephemeris_type,
        tle.element_number,
    );
    append_checksum(&mut line);
    line
}

fn line2(tle: &TleRecord) -> String {
    let mut line = format!(
        "2 {:05} {:8.4} {:8.4} {} {:8.4} {:8.4} {:11.8}{:05}",
        tle.catalog_number,
        tle.inclination,
        tle.right_ascension,
        fraction_digits(tle.eccentricity, 7),
        tle.argument_perigee,
        tle.mean_anomaly,
        tle.mean_motion,
        tle.revolutions_epoch,
    );
    append_checksum(&mut line);
    line
}

fn two_digit_year(year: u16) -> u16 {
    year % 100
}

/// The digits after the decimal point of `value` rounded to `precision` places.
///
/// Magnitudes that round up to 1 or more saturate at all nines.
fn fraction_digits(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, value.abs());
    match fixed.split_once('.') {
        Some(("0", fraction)) => fraction.to_owned(),
        _ => "9".repeat(precision),
    }
}

/// Sign character, then the fraction with no integer part, e.g. `-.00002182`
pub fn first_derivative(value: f64) -> String {
    let sign = if value < 0.0 { '-' } else { ' ' };
    format!("{sign}.{}", fraction_digits(value, 8))
}

/// Decimal-point-assumed exponential notation, e.g. `-0.11606e-4` is `-11606-4`
pub fn implied_decimal(value: f64) -> String {
    if value == 0.0 {
        return EXPONENT_ZERO.to_owned();
    }

    let sign = if value < 0.0 { '-' } else { ' ' };
    let scientific = format!("{:.4e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    // The leading "0." is implied, so the exponent shifts by one
    let exponent = exponent.parse::<i32>().unwrap_or(0) + 1;
    let exponent_sign = if exponent > 0 { '+' } else { '-' };
    format!(
        "{sign}{}{exponent_sign}{}",
        mantissa.replace('.', ""),
        exponent.abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_decimal_zero() {
        assert_eq!(implied_decimal(0.0), " 00000-0");
        assert_eq!(implied_decimal(-0.0), " 00000-0");
    }

    #[test]
    fn implied_decimal_values() {
        assert_eq!(implied_decimal(-0.11606e-4), "-11606-4");
        assert_eq!(implied_decimal(0.16538e-3), " 16538-3");
        assert_eq!(implied_decimal(0.12345e-3), " 12345-3");
        assert_eq!(implied_decimal(0.12345), " 12345-0");
        assert_eq!(implied_decimal(-0.5), "-50000-0");
        assert_eq!(implied_decimal(5.0), " 50000+1");
        assert!(implied_decimal(-1.0e-9).starts_with('-'));
    }

    #[test]
    fn first_derivative_sign_and_fraction() {
        assert_eq!(first_derivative(-0.00002182), "-.00002182");
        assert_eq!(first_derivative(0.00020137), " .00020137");
        assert_eq!(first_derivative(0.0), " .00000000");
        assert_eq!(first_derivative(0.999999996), " .99999999");
        assert_eq!(first_derivative(-1.5), "-.99999999");
    }

    #[test]
    fn eccentricity_digits() {
        assert_eq!(fraction_digits(0.0006703, 7), "0006703");
        assert_eq!(fraction_digits(0.0001640, 7), "0001640");
        assert_eq!(fraction_digits(0.99999996, 7), "9999999");
        assert_eq!(fraction_digits(1.0, 7), "9999999");
    }

    #[test]
    fn years() {
        assert_eq!(two_digit_year(1998), 98);
        assert_eq!(two_digit_year(2008), 8);
        assert_eq!(two_digit_year(1900), two_digit_year(2000));
    }
}
