// training.rs
use crate::config::TrainerConfig;
use crate::dataset::{clean, load_dataset, RawRow, RegionEncoder};
use crate::model::{
    feature_matrix, feature_vector, train_test_split, FeatureVector, PricePredictor,
    RegressionMetrics, TrainerError,
};
use std::fmt;

/// A listing described the way a user would, region given by name.
#[derive(Debug, Clone, Copy)]
pub struct ExampleListing {
    pub rooms: f64,
    pub bathrooms: f64,
    pub surface: f64,
    pub region: &'static str,
}

pub const EXAMPLE_LISTINGS: [ExampleListing; 2] = [
    ExampleListing {
        rooms: 3.0,
        bathrooms: 1.0,
        surface: 100.0,
        region: "Tunis",
    },
    ExampleListing {
        rooms: 4.0,
        bathrooms: 2.0,
        surface: 150.0,
        region: "Nabeul",
    },
];

impl ExampleListing {
    /// Feature vector using the encoder fitted during cleaning, if the region was seen.
    pub fn to_features(&self, encoder: &RegionEncoder) -> Option<FeatureVector> {
        let code = encoder.encode(self.region)?;
        Some(feature_vector(self.rooms, self.bathrooms, self.surface, code))
    }
}

#[derive(Debug, Clone)]
pub struct ExamplePrediction {
    pub listing: ExampleListing,
    pub features: FeatureVector,
    pub price: f64,
}

/// Everything the `train` binary prints.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub loaded_rows: usize,
    pub loaded_columns: usize,
    pub cleaned_rows: usize,
    pub regions: Vec<String>,
    pub train_rows: usize,
    pub test_rows: usize,
    pub train_metrics: RegressionMetrics,
    pub test_metrics: RegressionMetrics,
    pub coefficients: Vec<(&'static str, f64)>,
    pub intercept: f64,
    pub examples: Vec<ExamplePrediction>,
}

pub struct TrainingOutcome {
    pub predictor: PricePredictor,
    pub encoder: RegionEncoder,
    pub report: TrainingReport,
}

/// Loads the collected CSV and runs the whole pipeline on it.
pub fn run_training(config: &TrainerConfig) -> Result<TrainingOutcome, TrainerError> {
    let loaded = load_dataset(&config.input_path)?;
    train_on_rows(&loaded.rows, loaded.columns, config)
}

/// Clean, split, scale, fit and score.
pub fn train_on_rows(
    rows: &[RawRow],
    columns: usize,
    config: &TrainerConfig,
) -> Result<TrainingOutcome, TrainerError> {
    let cleaned = clean(rows);
    if cleaned.is_empty() {
        return Err(TrainerError::InsufficientData(
            "no rows survived cleaning".into(),
        ));
    }

    let (x, y) = feature_matrix(&cleaned.rows)?;
    let split = train_test_split(&x, &y, config.test_ratio, config.seed)?;
    log::info!(
        "✂️ Split {} rows: {} train, {} test",
        cleaned.len(),
        split.y_train.len(),
        split.y_test.len()
    );

    let predictor = PricePredictor::fit(&split)?;
    let train_metrics = predictor.evaluate(&split.x_train, &split.y_train)?;
    let test_metrics = predictor.evaluate(&split.x_test, &split.y_test)?;

    let mut examples = Vec::new();
    for listing in EXAMPLE_LISTINGS {
        let Some(features) = listing.to_features(&cleaned.encoder) else {
            log::warn!("⚠️ No data for {}, skipping example", listing.region);
            continue;
        };
        examples.push(ExamplePrediction {
            listing,
            features,
            price: predictor.predict(&features)?,
        });
    }

    let report = TrainingReport {
        loaded_rows: rows.len(),
        loaded_columns: columns,
        cleaned_rows: cleaned.len(),
        regions: cleaned.encoder.classes().to_vec(),
        train_rows: split.y_train.len(),
        test_rows: split.y_test.len(),
        train_metrics,
        test_metrics,
        coefficients: predictor.coefficients(),
        intercept: predictor.intercept(),
        examples,
    };

    Ok(TrainingOutcome {
        predictor,
        encoder: cleaned.encoder,
        report,
    })
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Data loaded: {} rows, {} columns",
            self.loaded_rows, self.loaded_columns
        )?;
        writeln!(f, "Data after cleaning: {} rows", self.cleaned_rows)?;
        for (code, region) in self.regions.iter().enumerate() {
            writeln!(f, "  {code}: {region}")?;
        }
        writeln!(
            f,
            "\nData split: {} train, {} test",
            self.train_rows, self.test_rows
        )?;

        writeln!(f, "\n=== Linear regression ===")?;
        writeln!(f, "  Training performance:\n{}", self.train_metrics)?;
        writeln!(f, "\n  Test performance:\n{}", self.test_metrics)?;

        writeln!(f, "\n=== Model coefficients ===")?;
        for (name, coef) in &self.coefficients {
            writeln!(f, "{name}: {coef:.4}")?;
        }
        writeln!(f, "Intercept: {:.4}", self.intercept)?;

        writeln!(f, "\n=== Example predictions ===")?;
        for (i, example) in self.examples.iter().enumerate() {
            let l = &example.listing;
            writeln!(
                f,
                "\nApartment {}: {} rooms, {} bath, {}m², {}",
                i + 1,
                l.rooms,
                l.bathrooms,
                l.surface,
                l.region
            )?;
            writeln!(f, "Predicted price: {:.2} TND", example.price)?;
        }
        Ok(())
    }
}
