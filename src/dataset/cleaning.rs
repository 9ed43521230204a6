// dataset/cleaning.rs
use crate::dataset::{RawRow, RegionEncoder};
use std::collections::HashSet;

/// Exclusive upper bound on a plausible monthly rent.
pub const MAX_PRICE: f64 = 10_000.0;
/// Exclusive upper bound on a plausible surface, in m².
pub const MAX_SURFACE: f64 = 500.0;

/// A row that passed cleaning, with its derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRow {
    pub price: f64,
    pub rooms: f64,
    /// Not required by cleaning; the feature matrix rejects rows without it.
    pub bathrooms: Option<f64>,
    pub surface: f64,
    pub region: String,
    pub price_per_area: f64,
    pub area_per_room: f64,
    pub region_code: usize,
}

impl CleanRow {
    pub fn to_raw(&self) -> RawRow {
        RawRow {
            price: Some(self.price),
            rooms: Some(self.rooms),
            bathrooms: self.bathrooms,
            surface: Some(self.surface),
            region: Some(self.region.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub rows: Vec<CleanRow>,
    pub encoder: RegionEncoder,
}

impl CleanedDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

type RowKey = (
    Option<u64>,
    Option<u64>,
    Option<u64>,
    Option<u64>,
    Option<String>,
);

// 0.0 and -0.0 compare equal, so they must share a key
fn float_key(v: Option<f64>) -> Option<u64> {
    v.map(|x| if x == 0.0 { 0 } else { x.to_bits() })
}

fn row_key(row: &RawRow) -> RowKey {
    (
        float_key(row.price),
        float_key(row.rooms),
        float_key(row.bathrooms),
        float_key(row.surface),
        row.region.clone(),
    )
}

/// Drops exact duplicates, keeping the first occurrence in order.
fn drop_duplicates(rows: &[RawRow]) -> Vec<&RawRow> {
    let mut seen = HashSet::new();
    rows.iter().filter(|row| seen.insert(row_key(row))).collect()
}

/// Required fields present and inside the plausibility bounds.
fn within_bounds(price: f64, rooms: f64, surface: f64) -> bool {
    price > 0.0 && price < MAX_PRICE && surface > 0.0 && surface < MAX_SURFACE && rooms > 0.0
}

/// Deduplicates, filters and derives features.
///
/// The returned encoder was fitted on the regions of the surviving rows and
/// is the one to reuse whenever a region label has to be turned into a code
/// later on.
pub fn clean(rows: &[RawRow]) -> CleanedDataset {
    let unique = drop_duplicates(rows);
    log::info!("🧹 Removed {} duplicate rows", rows.len() - unique.len());

    let kept: Vec<(f64, f64, Option<f64>, f64, &str)> = unique
        .into_iter()
        .filter_map(|row| {
            let price = row.price?;
            let rooms = row.rooms?;
            let surface = row.surface?;
            let region = row.region.as_deref()?;
            within_bounds(price, rooms, surface).then_some((
                price,
                rooms,
                row.bathrooms,
                surface,
                region,
            ))
        })
        .collect();

    let encoder = RegionEncoder::fit(kept.iter().map(|(.., region)| *region));

    let rows: Vec<CleanRow> = kept
        .iter()
        .filter_map(|&(price, rooms, bathrooms, surface, region)| {
            Some(CleanRow {
                price,
                rooms,
                bathrooms,
                surface,
                region: region.to_string(),
                price_per_area: price / surface,
                area_per_room: surface / rooms,
                region_code: encoder.encode(region)?,
            })
        })
        .collect();

    log::info!(
        "🧹 {} rows after cleaning ({} regions)",
        rows.len(),
        encoder.len()
    );

    CleanedDataset { rows, encoder }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<RawRow> {
        vec![
            RawRow::new(500.0, 3.0, 1.0, 100.0, "Tunis"),
            RawRow::new(500.0, 3.0, 1.0, 100.0, "Tunis"),
            RawRow::new(0.0, 2.0, 1.0, 50.0, "Sfax"),
            RawRow::new(300.0, 2.0, 1.0, 9999.0, "Sfax"),
        ]
    }

    #[test]
    fn duplicate_zero_price_and_oversized_rows_are_removed() {
        let cleaned = clean(&sample_rows());

        assert_eq!(cleaned.len(), 1);
        let row = &cleaned.rows[0];
        assert_eq!(row.price, 500.0);
        assert_eq!(row.rooms, 3.0);
        assert_eq!(row.bathrooms, Some(1.0));
        assert_eq!(row.surface, 100.0);
        assert_eq!(row.region, "Tunis");
        assert_eq!(cleaned.encoder.len(), 1);
    }

    #[test]
    fn rows_missing_required_fields_are_dropped() {
        let mut no_price = RawRow::new(400.0, 2.0, 1.0, 70.0, "Sousse");
        no_price.price = None;
        let mut no_region = RawRow::new(400.0, 2.0, 1.0, 70.0, "Sousse");
        no_region.region = None;
        let mut no_rooms = RawRow::new(400.0, 2.0, 1.0, 70.0, "Sousse");
        no_rooms.rooms = None;
        let mut no_surface = RawRow::new(400.0, 2.0, 1.0, 70.0, "Sousse");
        no_surface.surface = None;
        let mut no_bath = RawRow::new(450.0, 2.0, 1.0, 70.0, "Sousse");
        no_bath.bathrooms = None;

        let cleaned = clean(&[no_price, no_region, no_rooms, no_surface, no_bath]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.rows[0].price, 450.0);
        assert_eq!(cleaned.rows[0].bathrooms, None);
    }

    #[test]
    fn bounds_are_exclusive() {
        let rows = vec![
            RawRow::new(10_000.0, 2.0, 1.0, 80.0, "Nabeul"),
            RawRow::new(9_999.0, 2.0, 1.0, 80.0, "Nabeul"),
            RawRow::new(800.0, 2.0, 1.0, 500.0, "Nabeul"),
            RawRow::new(800.0, 2.0, 1.0, 499.0, "Nabeul"),
            RawRow::new(800.0, 0.0, 1.0, 80.0, "Nabeul"),
            RawRow::new(-5.0, 2.0, 1.0, 80.0, "Nabeul"),
            RawRow::new(800.0, 2.0, 1.0, 0.0, "Nabeul"),
        ];

        let cleaned = clean(&rows);
        let prices: Vec<f64> = cleaned.rows.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![9_999.0, 800.0]);
    }

    #[test]
    fn derived_columns_and_bounds_hold_after_cleaning() {
        let rows = vec![
            RawRow::new(750.0, 3.0, 1.0, 120.0, "Ariana"),
            RawRow::new(1_100.0, 4.0, 2.0, 160.0, "Tunis"),
            RawRow::new(420.0, 1.0, 1.0, 45.0, "Sfax"),
            RawRow::new(12_000.0, 5.0, 3.0, 300.0, "Tunis"),
        ];

        let cleaned = clean(&rows);
        assert_eq!(cleaned.len(), 3);
        for row in &cleaned.rows {
            assert!(row.price > 0.0 && row.price < MAX_PRICE);
            assert!(row.surface > 0.0 && row.surface < MAX_SURFACE);
            assert!(row.rooms > 0.0);
            assert!((row.price_per_area - row.price / row.surface).abs() < 1e-12);
            assert!((row.area_per_room - row.surface / row.rooms).abs() < 1e-12);
        }
    }

    #[test]
    fn cleaning_is_idempotent() {
        let mut rows = sample_rows();
        rows.push(RawRow::new(650.0, 2.0, 1.0, 75.0, "Sfax"));
        rows.push(RawRow::new(650.0, 2.0, 1.0, 75.0, "Sfax"));
        rows.push(RawRow::new(900.0, 3.0, 2.0, 130.0, "Sousse"));

        let once = clean(&rows);
        let raw_again: Vec<RawRow> = once.rows.iter().map(CleanRow::to_raw).collect();
        let twice = clean(&raw_again);

        assert_eq!(once.rows, twice.rows);
        assert_eq!(once.encoder, twice.encoder);
    }

    #[test]
    fn region_codes_are_shared_per_label() {
        let rows = vec![
            RawRow::new(500.0, 3.0, 1.0, 100.0, "Tunis"),
            RawRow::new(450.0, 2.0, 1.0, 80.0, "Sfax"),
            RawRow::new(700.0, 4.0, 2.0, 140.0, "Tunis"),
        ];

        let cleaned = clean(&rows);
        let codes: Vec<usize> = cleaned.rows.iter().map(|r| r.region_code).collect();
        assert_eq!(cleaned.encoder.len(), 2);
        assert_eq!(codes[0], codes[2]);
        assert_ne!(codes[0], codes[1]);
    }

    #[test]
    fn everything_filtered_gives_empty_dataset() {
        let cleaned = clean(&[RawRow::new(0.0, 0.0, 0.0, 0.0, "Tunis")]);
        assert!(cleaned.is_empty());
        assert!(cleaned.encoder.is_empty());
    }
}
