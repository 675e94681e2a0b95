//! Tick label formatting policy.
//!
//! The buckets below are a rendering policy, not a contract: hosts that need
//! different precision can relabel the returned positions.

/// Values this close to zero render as "0".
const ZERO_EPSILON: f32 = 1e-10;

/// Format a major tick position.
///
/// - `|v| < 1e-10` renders as `"0"`
/// - `|v| >= 10^6` renders in exponent notation: `10^k` for exact powers,
///   `m.mm×10^k` otherwise
/// - `|v|` in `[10^3, 10^6)` renders scaled by 1000 with a `K` suffix
/// - `|v|` in `[10^2, 10^3)` renders as a plain integer
/// - smaller values render with one fixed decimal
pub fn format_tick(value: f32) -> String {
    if value.abs() < ZERO_EPSILON {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_tick(-value));
    }

    if value >= 1.0e6 {
        let exponent = value.log10();
        let nearest = exponent.round();
        if (exponent - nearest).abs() < 1e-6 {
            return format!("10^{}", nearest as i32);
        }
        let floor = exponent.floor();
        let mantissa = value / 10f32.powi(floor as i32);
        return format!("{mantissa:.2}×10^{}", floor as i32);
    }

    if value >= 1.0e3 {
        let scaled = value / 1000.0;
        if (scaled - scaled.round()).abs() < 1e-6 {
            return format!("{scaled:.0}K");
        }
        return format!("{scaled:.1}K");
    }

    if value >= 1.0e2 {
        return format!("{value:.0}");
    }

    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bucket() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(5.0e-11), "0");
        assert_eq!(format_tick(-5.0e-11), "0");
    }

    #[test]
    fn exponent_bucket() {
        assert_eq!(format_tick(1.0e6), "10^6");
        assert_eq!(format_tick(1.0e8), "10^8");
        assert_eq!(format_tick(2.5e6), "2.50×10^6");
    }

    #[test]
    fn kilo_bucket() {
        assert_eq!(format_tick(1000.0), "1K");
        assert_eq!(format_tick(2500.0), "2.5K");
        assert_eq!(format_tick(999_000.0), "999K");
    }

    #[test]
    fn integer_and_decimal_buckets() {
        assert_eq!(format_tick(100.0), "100");
        assert_eq!(format_tick(150.0), "150");
        assert_eq!(format_tick(999.0), "999");
        assert_eq!(format_tick(99.0), "99.0");
        assert_eq!(format_tick(20.0), "20.0");
        assert_eq!(format_tick(0.5), "0.5");
    }

    #[test]
    fn negative_values_mirror_positive_formatting() {
        assert_eq!(format_tick(-1000.0), "-1K");
        assert_eq!(format_tick(-1.0e6), "-10^6");
        assert_eq!(format_tick(-150.0), "-150");
    }

    #[test]
    fn bucket_boundaries_are_monotone_handoffs() {
        // Either side of each boundary picks the intended bucket.
        assert_eq!(format_tick(999.9e3), "999.9K");
        assert_eq!(format_tick(1.0e6), "10^6");
        assert_eq!(format_tick(999.0), "999");
        assert_eq!(format_tick(1000.0), "1K");
        assert_eq!(format_tick(99.9), "99.9");
        assert_eq!(format_tick(100.0), "100");
    }
}
