use anyview_types::{Error, Props, Result, Value};

/// Round `n` to the given number of significant leading digits.
///
/// With `upper`, rounds away from zero to the next multiple of the step,
/// so chart axes never under-scale their largest bar. Magnitudes below 1
/// are not supported and surface as a numeric error.
pub fn smart_round(n: f64, significant_digits: u32, upper: bool) -> Result<f64> {
    let magnitude = n.abs();
    if magnitude < 1.0 {
        return Err(Error::Numeric(format!(
            "smart_round for |n| < 1 (got {})",
            n
        )));
    }
    let digit_count = magnitude.log10().floor() as i32 + 1;
    let step = 10f64.powi(digit_count - significant_digits as i32);
    if step <= 1.0 {
        return Ok(n);
    }
    let scaled = magnitude / step;
    let rounded = if upper { scaled.ceil() } else { scaled.round() };
    Ok(n.signum() * rounded * step)
}

/// Largest plotted value of a chart mapping.
///
/// Rows are either numeric or a nested sub-category mapping; with
/// `sum_secondary` a nested row counts as the sum of its values,
/// otherwise as its own maximum.
pub fn max_chart_value(data: &Props, sum_secondary: bool) -> Result<f64> {
    let mut max = f64::MIN;
    for (key, value) in data {
        let row_value = match value {
            Value::Map(secondary) => fold_numeric(secondary, sum_secondary)?,
            other => other
                .as_f64()
                .ok_or_else(|| Error::type_mismatch("numeric or mapping row", format!("{}: {}", key, other)))?,
        };
        if row_value > max {
            max = row_value;
        }
    }
    if max == f64::MIN {
        return Err(Error::type_mismatch("non-empty mapping", "empty mapping"));
    }
    Ok(max)
}

fn fold_numeric(secondary: &Props, sum: bool) -> Result<f64> {
    let mut acc = if sum { 0.0 } else { f64::MIN };
    for (key, value) in secondary {
        let x = value
            .as_f64()
            .ok_or_else(|| Error::type_mismatch("numeric sub-value", format!("{}: {}", key, value)))?;
        if sum {
            acc += x;
        } else if x > acc {
            acc = x;
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyview_types::props;

    #[test]
    fn test_smart_round_nearest() {
        assert_eq!(smart_round(12345.0, 2, false).unwrap(), 12000.0);
        assert_eq!(smart_round(-12345.0, 3, false).unwrap(), -12300.0);
        assert_eq!(smart_round(8.0, 2, false).unwrap(), 8.0);
    }

    #[test]
    fn test_smart_round_upper() {
        assert_eq!(smart_round(12345.0, 2, true).unwrap(), 13000.0);
        assert_eq!(smart_round(110.0, 2, true).unwrap(), 110.0);
    }

    #[test]
    fn test_smart_round_below_unit_fails() {
        assert!(matches!(
            smart_round(0.5, 2, false),
            Err(Error::Numeric(_))
        ));
    }

    #[test]
    fn test_max_value_simple_funnel() {
        let funnel = props!(
            "input" => 110, "registration" => 80, "cart" => 40,
            "checkout" => 20, "retention" => 12,
        );
        assert_eq!(max_chart_value(&funnel, false).unwrap(), 110.0);
    }

    #[test]
    fn test_max_value_rich_funnel() {
        let rich = props!(
            "input" => Value::Map(props!("src1" => 50, "src2" => 40, "src3" => 20)),
            "registration" => 80,
            "cart" => 40,
            "checkout" => 20,
            "retention" => 12,
        );
        assert_eq!(max_chart_value(&rich, false).unwrap(), 80.0);
        assert_eq!(max_chart_value(&rich, true).unwrap(), 110.0);
    }
}
