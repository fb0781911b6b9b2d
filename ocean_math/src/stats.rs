//! Summary statistics over generated segments

use crate::{MathError, Result};

/// Minimum and maximum of a non-empty series
pub fn min_max(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take min/max of an empty series".to_string(),
        ));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok((min, max))
}

/// Average change per sample: `(last - first) / len`
///
/// The divisor is the number of samples, not the number of steps between
/// them, so a single-sample series has a change of zero.
pub fn average_change(values: &[f64]) -> Result<f64> {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) => Ok((last - first) / values.len() as f64),
        _ => Err(MathError::InsufficientData(
            "Cannot compute change over an empty series".to_string(),
        )),
    }
}

/// Arithmetic mean of a non-empty series
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot average an empty series".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 2.0]).unwrap(), (-1.0, 7.5));
        assert_eq!(min_max(&[4.0]).unwrap(), (4.0, 4.0));
        assert!(min_max(&[]).is_err());
    }

    #[test]
    fn test_average_change() {
        // (10 - 2) / 4
        assert_relative_eq!(average_change(&[2.0, 5.0, 1.0, 10.0]).unwrap(), 2.0);
        assert_relative_eq!(average_change(&[3.0]).unwrap(), 0.0);
        assert!(matches!(
            average_change(&[]),
            Err(MathError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[28.0, 44.0, 68.0]).unwrap(), 140.0 / 3.0);
        assert!(mean(&[]).is_err());
    }
}
