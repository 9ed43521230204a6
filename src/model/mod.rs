mod features;
mod metrics;
mod regression;
mod scaler;
mod split;
mod trainer_error;

pub use features::{feature_matrix, feature_vector, FeatureVector, FEATURE_NAMES, N_FEATURES};
pub use metrics::RegressionMetrics;
pub use regression::{FittedLeastSquares, LeastSquares, PricePredictor};
pub use scaler::StandardScaler;
pub use split::{train_test_split, Split};
pub use trainer_error::TrainerError;
