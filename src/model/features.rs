use crate::dataset::CleanRow;
use crate::model::TrainerError;
use ndarray::{Array1, Array2};

/// Regression inputs, in column order.
pub const FEATURE_NAMES: [&str; 5] = [
    "rooms",
    "bathrooms",
    "surface",
    "region_code",
    "area_per_room",
];

pub const N_FEATURES: usize = FEATURE_NAMES.len();

/// Raw (unscaled) feature vector in `FEATURE_NAMES` order.
pub type FeatureVector = [f64; N_FEATURES];

/// Assembles a feature vector from listing attributes, deriving area per room.
pub fn feature_vector(
    rooms: f64,
    bathrooms: f64,
    surface: f64,
    region_code: usize,
) -> FeatureVector {
    [
        rooms,
        bathrooms,
        surface,
        region_code as f64,
        surface / rooms,
    ]
}

/// Feature matrix and price target for a set of cleaned rows.
pub fn feature_matrix(rows: &[CleanRow]) -> Result<(Array2<f64>, Array1<f64>), TrainerError> {
    let mut x = Array2::<f64>::zeros((rows.len(), N_FEATURES));
    let mut y = Array1::<f64>::zeros(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let bathrooms = row.bathrooms.ok_or_else(|| {
            TrainerError::MissingFeature(format!(
                "row {i} ({}, {} Dt) has no bathroom count",
                row.region, row.price
            ))
        })?;

        x[(i, 0)] = row.rooms;
        x[(i, 1)] = bathrooms;
        x[(i, 2)] = row.surface;
        x[(i, 3)] = row.region_code as f64;
        x[(i, 4)] = row.area_per_room;
        y[i] = row.price;
    }

    Ok((x, y))
}
