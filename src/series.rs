use crate::error::ChartError;

/// Two ordered, equal-length sequences: the independent variable
/// (thread or link count) and the dependent one (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ChartError> {
        if xs.len() != ys.len() {
            return Err(ChartError::ConfigurationMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(Series { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

#[test]
fn t_length_mismatch() {
    match Series::new(vec![1., 2., 3.], vec![5.]) {
        Err(ChartError::ConfigurationMismatch { x_len, y_len }) => {
            assert_eq!((x_len, y_len), (3, 1))
        }
        r => panic!("expected mismatch, got {r:?}"),
    }
}

#[test]
fn t_points() {
    let s = Series::new(vec![1., 2.], vec![10., 20.]).unwrap();
    assert_eq!(s.points().collect::<Vec<_>>(), [(1., 10.), (2., 20.)]);
}
