use crate::scraper::ScraperError;

/// Anything that can turn a page URL into its HTML body.
///
/// `ListingScraper` fetches over HTTP; tests hand `scrape_all` canned pages instead.
pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, ScraperError>;
}
