mod fetcher;
mod models;
mod scraper;
mod scraper_error;

pub use fetcher::PageFetcher;
pub use models::{ListingField, ListingRecord, CSV_HEADER};
pub use self::scraper::{
    classify_item, extract_listing, extract_listings, parse_price_text, scrape_all,
    CardSelectors, ListingScraper, ScrapeRun, SourceFailure,
};
pub use scraper_error::ScraperError;
