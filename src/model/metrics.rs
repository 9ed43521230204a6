use ndarray::Array1;
use std::fmt;

/// Fit quality of a set of predictions against known prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionMetrics {
    pub r2: f64,
    pub mae: f64,
    pub rmse: f64,
}

impl RegressionMetrics {
    pub fn compute(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Self {
        let residuals = y_true - y_pred;
        let n = y_true.len() as f64;

        let ss_res = residuals.mapv(|r| r * r).sum();
        let mean = y_true.mean().unwrap_or(0.0);
        let ss_tot = y_true.mapv(|v| (v - mean) * (v - mean)).sum();

        // constant target: perfect or nothing
        let r2 = if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        Self {
            r2,
            mae: residuals.mapv(f64::abs).sum() / n,
            rmse: (ss_res / n).sqrt(),
        }
    }
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    R²: {:.4}", self.r2)?;
        writeln!(f, "    MAE: {:.2} TND", self.mae)?;
        write!(f, "    RMSE: {:.2} TND", self.rmse)
    }
}
