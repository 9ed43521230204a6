use crate::model::{TrainerError, N_FEATURES};
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Train and test partitions of the feature matrix and target.
#[derive(Debug, Clone)]
pub struct Split {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

/// Shuffles row indices with a seeded RNG and holds out `ceil(n * test_ratio)` rows.
///
/// The same seed and row count always give the same partition. Fails when
/// either side would be too small to fit and score a five-feature model with
/// an intercept.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_ratio: f64,
    seed: u64,
) -> Result<Split, TrainerError> {
    if x.nrows() != y.len() {
        return Err(TrainerError::DimensionMismatch {
            expected: x.nrows(),
            found: y.len(),
        });
    }
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(TrainerError::InsufficientData(format!(
            "test ratio {test_ratio} must lie strictly between 0 and 1"
        )));
    }

    let n = x.nrows();
    let n_test = (n as f64 * test_ratio).ceil() as usize;
    let n_train = n.saturating_sub(n_test);

    if n_test == 0 || n_train <= N_FEATURES {
        return Err(TrainerError::InsufficientData(format!(
            "{n} rows give {n_train} train / {n_test} test, need more than {N_FEATURES} train and at least 1 test"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok(Split {
        x_train: x.select(Axis(0), train_idx),
        x_test: x.select(Axis(0), test_idx),
        y_train: y.select(Axis(0), train_idx),
        y_test: y.select(Axis(0), test_idx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> (Array2<f64>, Array1<f64>) {
        let x = Array2::from_shape_fn((n, N_FEATURES), |(i, j)| (i * 10 + j) as f64);
        let y = Array1::from_shape_fn(n, |i| i as f64);
        (x, y)
    }

    #[test]
    fn eighty_twenty_sizes() {
        let (x, y) = numbered(50);
        let split = train_test_split(&x, &y, 0.2, 42).unwrap();
        assert_eq!(split.x_train.nrows(), 40);
        assert_eq!(split.x_test.nrows(), 10);
        assert_eq!(split.y_train.len(), 40);
        assert_eq!(split.y_test.len(), 10);
    }

    #[test]
    fn test_size_rounds_up() {
        let (x, y) = numbered(11);
        let split = train_test_split(&x, &y, 0.2, 42).unwrap();
        assert_eq!(split.x_test.nrows(), 3);
        assert_eq!(split.x_train.nrows(), 8);
    }

    #[test]
    fn same_seed_same_partition() {
        let (x, y) = numbered(30);
        let a = train_test_split(&x, &y, 0.2, 42).unwrap();
        let b = train_test_split(&x, &y, 0.2, 42).unwrap();
        assert_eq!(a.y_test, b.y_test);
        assert_eq!(a.x_train, b.x_train);
    }

    #[test]
    fn partitions_cover_every_row_once_and_keep_pairs() {
        let (x, y) = numbered(30);
        let split = train_test_split(&x, &y, 0.2, 42).unwrap();

        let mut seen: Vec<usize> = split
            .y_train
            .iter()
            .chain(split.y_test.iter())
            .map(|v| *v as usize)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..30).collect::<Vec<_>>());

        // features stay attached to their target
        for (row, target) in split.x_test.rows().into_iter().zip(split.y_test.iter()) {
            assert_eq!(row[0], target * 10.0);
        }
    }

    #[test]
    fn too_few_rows_fail_loudly() {
        let (x, y) = numbered(0);
        assert!(matches!(
            train_test_split(&x, &y, 0.2, 42),
            Err(TrainerError::InsufficientData(_))
        ));

        let (x, y) = numbered(7);
        assert!(train_test_split(&x, &y, 0.2, 42).is_err());
    }

    #[test]
    fn bad_ratio_is_rejected() {
        let (x, y) = numbered(20);
        assert!(train_test_split(&x, &y, 0.0, 42).is_err());
        assert!(train_test_split(&x, &y, 1.0, 42).is_err());
    }
}
