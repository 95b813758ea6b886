//! Literal measurements: per configuration (thread count) a list of
//! trial timings, of varying length, reduced to their mean.

use serde::{Deserialize, Serialize};

use crate::{debug, error::ChartError, series::Series, stats::mean};

/// One value of the independent variable with its raw trials.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationPoint<'t> {
    pub x: f64,
    pub trials: &'t [f64],
}

impl ConfigurationPoint<'_> {
    pub fn mean(&self) -> Result<f64, ChartError> {
        mean(self.trials).map_err(|reason| ChartError::NoTrials { x: self.x, reason })
    }
}

/// The x values and the trial lists are paired positionally, as they
/// are written down in job files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrialsData {
    pub x: Vec<f64>,
    pub trials: Vec<Vec<f64>>,
}

impl TrialsData {
    pub fn configuration_points(&self) -> Result<Vec<ConfigurationPoint<'_>>, ChartError> {
        let TrialsData { x, trials } = self;
        if x.len() != trials.len() {
            return Err(ChartError::ConfigurationMismatch {
                x_len: x.len(),
                y_len: trials.len(),
            });
        }
        Ok(x
            .iter()
            .zip(trials)
            .map(|(x, trials)| ConfigurationPoint {
                x: *x,
                trials: trials.as_slice(),
            })
            .collect())
    }

    /// Series of (x, mean of trials).
    pub fn aggregate(&self) -> Result<Series, ChartError> {
        let points = self.configuration_points()?;
        let mut xs = Vec::with_capacity(points.len());
        let mut ys = Vec::with_capacity(points.len());
        for point in &points {
            let y = point.mean()?;
            debug!("x = {}: mean of {:?} = {y}", point.x, point.trials);
            xs.push(point.x);
            ys.push(y);
        }
        Series::new(xs, ys)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::stats::StatsError;

    use super::*;

    #[test]
    fn t_two_configurations() {
        let data = TrialsData {
            x: vec![1., 2.],
            trials: vec![vec![77.97, 82.46, 74.68], vec![36.25, 44.12, 36.65]],
        };
        let s = data.aggregate().unwrap();
        assert_eq!(s.xs(), [1., 2.]);
        assert_relative_eq!(s.ys()[0], (77.97 + 82.46 + 74.68) / 3., epsilon = 1e-9);
        assert_relative_eq!(s.ys()[1], 39.0067, epsilon = 1e-4);
    }

    #[test]
    fn t_varying_trial_counts() {
        let data = TrialsData {
            x: vec![11., 12., 26.],
            trials: vec![
                vec![8.40758, 8.75149, 8.63837],
                vec![7.9138, 8.39428],
                vec![8.20441],
            ],
        };
        let s = data.aggregate().unwrap();
        assert_relative_eq!(s.ys()[1], (7.9138 + 8.39428) / 2., epsilon = 1e-12);
        assert_eq!(s.ys()[2], 8.20441);
    }

    #[test]
    fn t_mismatch() {
        let data = TrialsData {
            x: vec![1., 2., 3.],
            trials: vec![vec![1.], vec![2.]],
        };
        assert!(matches!(
            data.aggregate(),
            Err(ChartError::ConfigurationMismatch { x_len: 3, y_len: 2 })
        ));
    }

    #[test]
    fn t_empty_trials() {
        let data = TrialsData {
            x: vec![1., 2.],
            trials: vec![vec![1.], vec![]],
        };
        match data.aggregate() {
            Err(ChartError::NoTrials { x, reason }) => {
                assert_eq!(x, 2.);
                assert_eq!(reason, StatsError::NoInputs);
            }
            r => panic!("expected NoTrials, got {r:?}"),
        }
    }
}
