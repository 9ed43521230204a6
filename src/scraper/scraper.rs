// scraper.rs
use crate::config::{CollectorConfig, RegionSource};
use crate::scraper::{ListingField, ListingRecord, PageFetcher, ScraperError};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const CARD_SELECTOR: &str = "div.card.border-0.hover-change-image";
const CARD_BODY_SELECTOR: &str = "div.card-body.pt-3.px-0.pb-1";
const PRICE_SELECTOR: &str = "p.fs-17";
const FEATURE_LIST_SELECTOR: &str = "ul.list-inline.mb-0";
const FEATURE_ITEM_SELECTOR: &str = "li";

const CURRENCY_MARKER: &str = "Dt";
const ROOM_MARKERS: [&str; 2] = ["Piéce", "Pièce"];
const BATHROOM_MARKER: &str = "Bain";
const SURFACE_MARKER: &str = "m²";

pub struct ListingScraper {
    client: Client,
}

impl ListingScraper {
    pub fn new(config: &CollectorConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for ListingScraper {
    fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let html = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        #[cfg(debug_assertions)]
        {
            if let Err(e) = std::fs::write("listing_debug.html", &html) {
                log::warn!("Could not write listing_debug.html: {e}");
            }
        }

        Ok(html)
    }
}

/// A source entry that was skipped, with the reason.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub region: String,
    pub url: String,
    pub error: String,
}

/// Outcome of one pass over all configured sources.
#[derive(Debug)]
pub struct ScrapeRun {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<SourceFailure>,
    pub records: Vec<ListingRecord>,
}

impl ScrapeRun {
    pub fn log_summary(&self) {
        let elapsed = self.finished_at - self.started_at;
        log::info!(
            "🏁 Scrape finished in {}s: {}/{} sources ok, {} listings",
            elapsed.num_seconds(),
            self.succeeded,
            self.attempted,
            self.records.len()
        );
        for failure in &self.failures {
            log::warn!("   skipped {} ({}): {}", failure.region, failure.url, failure.error);
        }
    }
}

/// Visits every configured source in order and accumulates the extracted records.
///
/// A failing source is logged and skipped; it never aborts the run. The
/// configured delay is slept between consecutive sources.
pub fn scrape_all(fetcher: &dyn PageFetcher, config: &CollectorConfig) -> ScrapeRun {
    let started_at = Utc::now();
    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut succeeded = 0;

    log::info!("🧵 Scraping {} sources", config.sources.len());

    for (i, source) in config.sources.iter().enumerate() {
        if i > 0 && config.delay_secs > 0 {
            std::thread::sleep(Duration::from_secs(config.delay_secs));
        }

        log::info!("📄 Scraping {}...", source.region);

        match scrape_source(fetcher, source) {
            Ok(mut found) => {
                log::info!("✅ {} done ({} listings)", source.region, found.len());
                records.append(&mut found);
                succeeded += 1;
            }
            Err(e) => {
                log::warn!("⚠️ Failed for {}: {e}", source.region);
                failures.push(SourceFailure {
                    region: source.region.clone(),
                    url: source.url.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    ScrapeRun {
        started_at,
        finished_at: Utc::now(),
        attempted: config.sources.len(),
        succeeded,
        failures,
        records,
    }
}

fn scrape_source(
    fetcher: &dyn PageFetcher,
    source: &RegionSource,
) -> Result<Vec<ListingRecord>, ScraperError> {
    let html = fetcher.fetch_page(&source.url)?;
    extract_listings(&html, &source.region)
}

fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(e.to_string()))
}

/// Parsed selectors for the inside of a listing card.
pub struct CardSelectors {
    body: Selector,
    price: Selector,
    feature_list: Selector,
    feature_item: Selector,
}

impl CardSelectors {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            body: parse_selector(CARD_BODY_SELECTOR)?,
            price: parse_selector(PRICE_SELECTOR)?,
            feature_list: parse_selector(FEATURE_LIST_SELECTOR)?,
            feature_item: parse_selector(FEATURE_ITEM_SELECTOR)?,
        })
    }
}

/// Extracts one record per listing card found in `html`.
pub fn extract_listings(html: &str, region: &str) -> Result<Vec<ListingRecord>, ScraperError> {
    let document = Html::parse_document(html);
    let card_selector = parse_selector(CARD_SELECTOR)?;
    let selectors = CardSelectors::new()?;

    Ok(document
        .select(&card_selector)
        .filter_map(|card| extract_listing(card, region, &selectors))
        .collect())
}

/// Builds a record from a single card.
///
/// Returns `None` when the card has no body. Missing price or feature items
/// only leave the matching fields empty. Only the first feature list of the
/// body is read.
pub fn extract_listing(
    card: ElementRef<'_>,
    region: &str,
    selectors: &CardSelectors,
) -> Option<ListingRecord> {
    let body = card.select(&selectors.body).next()?;

    let price = body
        .select(&selectors.price)
        .next()
        .map(|p| parse_price_text(&p.text().collect::<String>()))
        .unwrap_or_default();

    let mut record = ListingRecord {
        price,
        region: region.to_string(),
        ..Default::default()
    };

    let Some(list) = body.select(&selectors.feature_list).next() else {
        return Some(record);
    };

    for item in list.select(&selectors.feature_item) {
        let text = item
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match classify_item(&text) {
            Some((ListingField::Rooms, value)) => record.rooms = value,
            Some((ListingField::Bathrooms, value)) => record.bathrooms = value,
            Some((ListingField::Surface, value)) => record.surface = value,
            None => {}
        }
    }

    Some(record)
}

/// Price text up to the first currency marker, trimmed.
pub fn parse_price_text(text: &str) -> String {
    match text.find(CURRENCY_MARKER) {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Tells which field a card list item describes and returns its leading token.
///
/// Markers are checked rooms first, then bathrooms, then surface.
pub fn classify_item(text: &str) -> Option<(ListingField, String)> {
    let field = if ROOM_MARKERS.iter().any(|m| text.contains(m)) {
        ListingField::Rooms
    } else if text.contains(BATHROOM_MARKER) {
        ListingField::Bathrooms
    } else if text.contains(SURFACE_MARKER) {
        ListingField::Surface
    } else {
        return None;
    };

    let value = text.split_whitespace().next().unwrap_or_default().to_string();
    Some((field, value))
}
