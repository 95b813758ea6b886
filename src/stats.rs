//! Arithmetic mean over trial measurements.

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    #[error("no inputs given")]
    NoInputs,
    #[error("input value {0} is not finite")]
    NonFinite(f64),
}

/// `sum(vals) / vals.len()`, without trimming or outlier rejection;
/// any number of values (>= 1) is accepted.
pub fn mean(vals: &[f64]) -> Result<f64, StatsError> {
    if vals.is_empty() {
        return Err(StatsError::NoInputs);
    }
    if let Some(v) = vals.iter().find(|v| !v.is_finite()) {
        return Err(StatsError::NonFinite(*v));
    }
    let sum: f64 = vals.iter().sum();
    Ok(sum / vals.len() as f64)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn t_mean_three() {
        let m = mean(&[77.9711, 82.4579, 74.6788]).unwrap();
        assert_relative_eq!(m, (77.9711 + 82.4579 + 74.6788) / 3., epsilon = 1e-12);
        assert_relative_eq!(m, 78.3693, epsilon = 1e-4);
    }

    #[test]
    fn t_mean_two() {
        // The configuration with a missing third trial
        let m = mean(&[7.9138, 8.39428]).unwrap();
        assert_relative_eq!(m, (7.9138 + 8.39428) / 2., epsilon = 1e-12);
    }

    #[test]
    fn t_mean_single() {
        assert_eq!(mean(&[8.20441]), Ok(8.20441));
    }

    #[test]
    fn t_mean_errors() {
        assert_eq!(mean(&[]), Err(StatsError::NoInputs));
        assert_eq!(mean(&[1., f64::INFINITY]), Err(StatsError::NonFinite(f64::INFINITY)));
        assert!(matches!(mean(&[f64::NAN]), Err(StatsError::NonFinite(_))));
    }
}
