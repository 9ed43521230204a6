// model/regression.rs
use crate::model::{
    FeatureVector, RegressionMetrics, Split, StandardScaler, TrainerError, FEATURE_NAMES,
};
use linfa::traits::{Fit, Predict, PredictInplace};
use linfa::DatasetBase;
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, Axis};

/// Ordinary least squares with an intercept, solved through an SVD.
///
/// Singular values below the rank tolerance are treated as zero, so constant
/// or collinear columns still fit and get the minimum-norm weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

#[derive(Debug, Clone, PartialEq)]
pub struct FittedLeastSquares {
    params: Array1<f64>,
    intercept: f64,
}

impl FittedLeastSquares {
    pub fn params(&self) -> &Array1<f64> {
        &self.params
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Fit<Array2<f64>, Array1<f64>, TrainerError> for LeastSquares {
    type Object = FittedLeastSquares;

    fn fit(
        &self,
        dataset: &DatasetBase<Array2<f64>, Array1<f64>>,
    ) -> Result<FittedLeastSquares, TrainerError> {
        let x = &dataset.records;
        let y = &dataset.targets;
        let (n, p) = x.dim();

        if y.len() != n {
            return Err(TrainerError::DimensionMismatch {
                expected: n,
                found: y.len(),
            });
        }
        let (Some(x_mean), Some(y_mean)) = (x.mean_axis(Axis(0)), y.mean()) else {
            return Err(TrainerError::InsufficientData(
                "cannot fit a regression on zero rows".into(),
            ));
        };

        // centering both sides leaves the intercept out of the solve
        let centered = x - &x_mean;
        let design = DMatrix::from_row_slice(n, p, &centered.iter().copied().collect::<Vec<_>>());
        let target = DVector::from_iterator(n, y.iter().map(|v| v - y_mean));

        let svd = design.svd(true, true);
        let largest = svd.singular_values.iter().copied().fold(0.0, f64::max);
        let tolerance = (largest * n.max(p) as f64 * f64::EPSILON).max(f64::MIN_POSITIVE);
        let solution = svd
            .solve(&target, tolerance)
            .map_err(|e| TrainerError::Fit(e.to_string()))?;

        let params = Array1::from_iter(solution.iter().copied());
        let intercept = y_mean - params.dot(&x_mean);
        Ok(FittedLeastSquares { params, intercept })
    }
}

impl PredictInplace<Array2<f64>, Array1<f64>> for FittedLeastSquares {
    fn predict_inplace(&self, x: &Array2<f64>, y: &mut Array1<f64>) {
        *y = x.dot(&self.params) + self.intercept;
    }

    fn default_target(&self, x: &Array2<f64>) -> Array1<f64> {
        Array1::zeros(x.nrows())
    }
}

/// Least squares on standardized features, with intercept.
///
/// The scaler is fitted on the training split only and travels with the
/// model, so every later `evaluate` or `predict` goes through the exact same
/// transform.
pub struct PricePredictor {
    scaler: StandardScaler,
    model: FittedLeastSquares,
}

impl PricePredictor {
    pub fn fit(split: &Split) -> Result<Self, TrainerError> {
        let scaler = StandardScaler::fit(&split.x_train)?;
        let x_train = scaler.transform(&split.x_train)?;

        let dataset = DatasetBase::new(x_train, split.y_train.clone());
        let model = LeastSquares.fit(&dataset)?;

        Ok(Self { scaler, model })
    }

    /// Predictions for a raw (unscaled) feature matrix.
    pub fn predict_matrix(&self, x: &Array2<f64>) -> Result<Array1<f64>, TrainerError> {
        let scaled = self.scaler.transform(x)?;
        Ok(self.model.predict(&scaled))
    }

    pub fn evaluate(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
    ) -> Result<RegressionMetrics, TrainerError> {
        let predictions = self.predict_matrix(x)?;
        Ok(RegressionMetrics::compute(y, &predictions))
    }

    /// Price estimate for one raw feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, TrainerError> {
        let scaled = self.scaler.transform_row(features)?;
        Ok(self.model.params().dot(&scaled) + self.model.intercept())
    }

    /// Fitted weight per feature, on the standardized scale.
    pub fn coefficients(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES
            .iter()
            .copied()
            .zip(self.model.params().iter().copied())
            .collect()
    }

    pub fn intercept(&self) -> f64 {
        self.model.intercept()
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }
}
