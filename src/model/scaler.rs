use crate::model::TrainerError;
use ndarray::{Array1, Array2, Axis};

/// Per-feature standardization to zero mean and unit variance.
///
/// Statistics come from the matrix passed to `fit` and are never updated by
/// `transform`. A feature that is constant in the fitted data keeps a scale
/// of 1 so it maps to zero instead of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn fit(x: &Array2<f64>) -> Result<Self, TrainerError> {
        let mean = x.mean_axis(Axis(0)).ok_or_else(|| {
            TrainerError::InsufficientData("cannot fit a scaler on zero rows".into())
        })?;
        // population standard deviation
        let scale = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s < 10.0 * f64::EPSILON { 1.0 } else { s });

        Ok(Self { mean, scale })
    }

    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, TrainerError> {
        self.check_width(x.ncols())?;
        Ok((x - &self.mean) / &self.scale)
    }

    pub fn transform_row(&self, row: &[f64]) -> Result<Array1<f64>, TrainerError> {
        self.check_width(row.len())?;
        Ok((Array1::from(row.to_vec()) - &self.mean) / &self.scale)
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    fn check_width(&self, found: usize) -> Result<(), TrainerError> {
        if found != self.mean.len() {
            return Err(TrainerError::DimensionMismatch {
                expected: self.mean.len(),
                found,
            });
        }
        Ok(())
    }
}
