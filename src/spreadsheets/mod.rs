pub mod export_csv;
pub mod export_error;
pub mod export_xlsx;

pub use export_csv::write_listings_csv;
pub use export_error::ExportError;
pub use export_xlsx::write_listings_xlsx;
