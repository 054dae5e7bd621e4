/// Numeric helpers shared by the aggregation, color and synthesis code.

/// Assert that the deviation between two values is less than a threshold
///
/// Calculates the percentage deviation between `actual` and `expected`, then
/// asserts that this deviation is less than the specified `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Linear interpolation between two values
///
/// # Examples
/// ```
/// use turbine_hexmap::math_utils::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(100.0, 200.0, 0.25), 125.0);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Inverse linear interpolation - the ratio that produces `value` between a and b
///
/// ```
/// use turbine_hexmap::math_utils::inverse_lerp;
///
/// assert_eq!(inverse_lerp(100.0, 200.0, 150.0), 0.5);
/// ```
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamp a value between minimum and maximum bounds
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round half away from zero to a fixed number of decimal places
///
/// ```
/// use turbine_hexmap::math_utils::round_to;
///
/// assert_eq!(round_to(5.04, 1), 5.0);
/// assert_eq!(round_to(2.25, 1), 2.3);
/// assert_eq!(round_to(4.004, 0), 4.0);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Sum that is independent of the order `values` arrive in
///
/// Sorts in place (ascending) before adding, so any permutation of the same
/// values gives a bit-identical result.
///
/// ```
/// use turbine_hexmap::math_utils::sorted_sum;
///
/// let mut forward = [4.2, 4.2, 5.0, 3.45, 1.5];
/// let mut reversed = [1.5, 3.45, 5.0, 4.2, 4.2];
/// assert_eq!(sorted_sum(&mut forward), sorted_sum(&mut reversed));
/// ```
pub fn sorted_sum(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

/// Percentage deviation of `actual` from `expected`
///
/// Uses the expected value as the reference for the percentage.
///
/// ```
/// use turbine_hexmap::math_utils::deviation;
///
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}
