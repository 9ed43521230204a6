use crate::scraper::{ListingRecord, CSV_HEADER};
use crate::spreadsheets::ExportError;
use std::path::Path;

/// Writes the header row followed by one row per record.
///
/// The header is written even when `records` is empty so the trainer can
/// still open the file.
pub fn write_listings_csv(
    records: &[ListingRecord],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExportError::Csv(e.to_string()))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExportError::Csv(format!("Failed to write header: {e}")))?;

    for record in records {
        writer
            .write_record(record.to_row())
            .map_err(|e| ExportError::Csv(format!("Failed to write row: {e}")))?;
    }

    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;

    log::info!("💾 Saved {} listings to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: &str, region: &str) -> ListingRecord {
        ListingRecord {
            price: price.to_string(),
            rooms: "3".to_string(),
            bathrooms: "".to_string(),
            surface: "100".to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");

        write_listings_csv(&[record("500", "Tunis"), record("1 200", "Ben Arous")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Price,Pièces,Bains,Surface,Gouvernorat");
        assert_eq!(lines[1], "500,3,,100,Tunis");
        assert_eq!(lines[2], "1 200,3,,100,Ben Arous");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn embedded_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");

        write_listings_csv(&[record("1,200", "Tunis")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"1,200\",3,,100,Tunis"));
    }

    #[test]
    fn empty_run_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");

        write_listings_csv(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Price,Pièces,Bains,Surface,Gouvernorat");
    }
}
