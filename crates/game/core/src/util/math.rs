//! Small numeric helpers used by map and economy displays.

/// Clamps `value` into `[low, high]`. `low` wins if the range is inverted.
pub fn bounds<T: PartialOrd>(low: T, value: T, high: T) -> T {
    let value = if value > high { high } else { value };
    if value < low { low } else { value }
}

/// Sum of `1..=n` for the integer part of `n`; zero when `n < 1`.
pub fn summate(n: f32) -> i32 {
    let n = n as i32;
    if n < 1 { 0 } else { n * (n + 1) / 2 }
}

/// Rounds to the nearest multiple of `precision` (halves round up).
pub fn round_to(value: f32, precision: f32) -> f32 {
    ((value + precision / 2.0) / precision) as i32 as f32 * precision
}

pub fn equal_within(a: f32, b: f32, precision: f32) -> bool {
    (a - b).abs() < precision
}

/// Integer power by repeated multiplication; negative exponents divide.
pub fn pow_i(base: f32, exponent: i32) -> f32 {
    let mut result = 1.0;
    if exponent > 0 {
        for _ in 0..exponent {
            result *= base;
        }
    } else {
        for _ in exponent..0 {
            result /= base;
        }
    }
    result
}

/// Arithmetic mean; zero for an empty slice.
pub fn avg(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

pub fn distance(x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_clamps_both_sides() {
        assert_eq!(bounds(0, 5, 10), 5);
        assert_eq!(bounds(0, -3, 10), 0);
        assert_eq!(bounds(0.0, 12.5, 10.0), 10.0);
    }

    #[test]
    fn summate_truncates_and_floors_at_zero() {
        assert_eq!(summate(0.9), 0);
        assert_eq!(summate(1.0), 1);
        assert_eq!(summate(4.7), 10);
        assert_eq!(summate(-2.0), 0);
    }

    #[test]
    fn round_to_precision() {
        assert_eq!(round_to(7.3, 5.0), 5.0);
        assert_eq!(round_to(7.5, 5.0), 10.0);
        assert!(equal_within(round_to(0.26, 0.5), 0.5, 1e-6));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(pow_i(2.0, 10), 1024.0);
        assert_eq!(pow_i(3.0, 0), 1.0);
        assert!(equal_within(pow_i(10.0, -2), 0.01, 1e-7));
    }

    #[test]
    fn mean_and_distance() {
        assert_eq!(avg(&[]), 0.0);
        assert_eq!(avg(&[1.0, 2.0, 6.0]), 3.0);
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }
}
