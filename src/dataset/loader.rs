// dataset/loader.rs
use crate::model::TrainerError;
use crate::scraper::CSV_HEADER;
use serde::Deserialize;
use std::path::Path;

/// One CSV row as the collector wrote it.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Pièces")]
    rooms: String,
    #[serde(rename = "Bains")]
    bathrooms: String,
    #[serde(rename = "Surface")]
    surface: String,
    #[serde(rename = "Gouvernorat")]
    region: String,
}

/// A loaded row with numeric columns parsed. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub price: Option<f64>,
    pub rooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub surface: Option<f64>,
    pub region: Option<String>,
}

impl RawRow {
    pub fn new(price: f64, rooms: f64, bathrooms: f64, surface: f64, region: &str) -> Self {
        Self {
            price: Some(price),
            rooms: Some(rooms),
            bathrooms: Some(bathrooms),
            surface: Some(surface),
            region: Some(region.to_string()),
        }
    }
}

impl From<CsvRow> for RawRow {
    fn from(row: CsvRow) -> Self {
        let region = row.region.trim();
        Self {
            price: parse_number(&row.price),
            rooms: parse_number(&row.rooms),
            bathrooms: parse_number(&row.bathrooms),
            surface: parse_number(&row.surface),
            region: (!region.is_empty()).then(|| region.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct LoadedDataset {
    pub rows: Vec<RawRow>,
    pub columns: usize,
}

/// Parses a scraped numeric field.
///
/// Whitespace inside the number is a thousands separator on the source site
/// ("1 200"), so it is dropped before parsing. Anything still unparsable or
/// non-finite counts as missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads the collector's CSV.
///
/// Fails on a missing file, a header lacking one of the expected columns, or
/// a row with the wrong number of fields.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<LoadedDataset, TrainerError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| TrainerError::Io(format!("{}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| TrainerError::Csv(e.to_string()))?
        .clone();

    for expected in CSV_HEADER {
        if !headers.iter().any(|h| h == expected) {
            return Err(TrainerError::MissingColumn(expected.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.map_err(|e| TrainerError::Csv(e.to_string()))?;
        rows.push(RawRow::from(row));
    }

    log::info!(
        "📥 Loaded {}: {} rows, {} columns",
        path.display(),
        rows.len(),
        headers.len()
    );

    Ok(LoadedDataset {
        rows,
        columns: headers.len(),
    })
}
