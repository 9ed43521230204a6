pub mod config;
pub mod dataset;
pub mod errors;
pub mod model;
pub mod scraper;
pub mod spreadsheets;
pub mod training;

#[cfg(test)]
mod tests;
