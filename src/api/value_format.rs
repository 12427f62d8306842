use std::sync::Arc;

/// Formats a bar value for the value column.
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Shortest decimal form that round-trips: `10` for 10.0, `2.5` for 2.5.
///
/// Negative zero prints as `0`; infinities print as `Infinity` and
/// `-Infinity`.
#[must_use]
pub fn default_value_formatter(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::default_value_formatter;

    #[test]
    fn integral_values_drop_the_fraction() {
        assert_eq!(default_value_formatter(10.0), "10");
        assert_eq!(default_value_formatter(-3.0), "-3");
    }

    #[test]
    fn fractional_values_keep_their_digits() {
        assert_eq!(default_value_formatter(2.5), "2.5");
        assert_eq!(default_value_formatter(0.125), "0.125");
    }

    #[test]
    fn signed_zero_and_infinities_use_display_names() {
        assert_eq!(default_value_formatter(-0.0), "0");
        assert_eq!(default_value_formatter(f64::INFINITY), "Infinity");
        assert_eq!(default_value_formatter(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(default_value_formatter(f64::NAN), "NaN");
    }
}
