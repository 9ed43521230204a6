use crate::scraper::{ListingRecord, CSV_HEADER};
use crate::spreadsheets::ExportError;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Same layout as the CSV export, as a single-sheet workbook.
pub fn write_listings_xlsx(
    records: &[ListingRecord],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in CSV_HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ExportError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, value) in record.to_row().iter().enumerate() {
            worksheet
                .write_string(r, col as u16, *value)
                .map_err(|e| {
                    ExportError::Xlsx(format!("Failed to write {}: {}", CSV_HEADER[col], e))
                })?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ExportError::Xlsx(format!("Failed to save workbook: {}", e)))?;

    log::info!("💾 Saved {} listings to {}", records.len(), path.display());
    Ok(())
}
