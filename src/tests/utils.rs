use crate::config::{CollectorConfig, RegionSource};
use crate::dataset::RawRow;
use crate::scraper::{PageFetcher, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

/// Serves canned pages by URL; unknown URLs fail like a dead host.
pub struct StubFetcher {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
    pub fetched_at: RefCell<Vec<Instant>>,
}

impl StubFetcher {
    pub fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.clone()))
                .collect(),
            requested: RefCell::new(Vec::new()),
            fetched_at: RefCell::new(Vec::new()),
        }
    }
}

impl PageFetcher for StubFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        self.requested.borrow_mut().push(url.to_string());
        self.fetched_at.borrow_mut().push(Instant::now());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("connection refused: {url}")))
    }
}

/// Collector config over the given sources, no delay between them.
pub fn test_collector_config(sources: &[(&str, &str)]) -> CollectorConfig {
    CollectorConfig {
        sources: sources
            .iter()
            .map(|(url, region)| RegionSource::new(*url, *region))
            .collect(),
        delay_secs: 0,
        ..CollectorConfig::default()
    }
}

/// A listing page with one card per `(price, rooms, baths, surface)` tuple.
pub fn listing_page(cards: &[(&str, &str, &str, &str)]) -> String {
    let body: String = cards
        .iter()
        .map(|(price, rooms, baths, surface)| {
            format!(
                r#"<div class="card border-0 hover-change-image">
                     <div class="card-body pt-3 px-0 pb-1">
                       <p class="fs-17">{price} Dt</p>
                       <ul class="list-inline mb-0">
                         <li>{rooms} Pièces</li>
                         <li>{baths} Bain</li>
                         <li>{surface} m²</li>
                       </ul>
                     </div>
                   </div>"#
            )
        })
        .collect();
    format!("<html><body><main>{body}</main></body></html>")
}

/// Deterministic rows across several regions with a noisy but linear price.
pub fn synthetic_rows(n: usize) -> Vec<RawRow> {
    let regions = ["Ariana", "Nabeul", "Sfax", "Sousse", "Tunis"];
    (0..n)
        .map(|i| {
            let rooms = (i % 5 + 1) as f64;
            let bathrooms = (i % 3 + 1) as f64;
            let surface = 40.0 + ((i * 37) % 180) as f64;
            let region = regions[(i / 2) % regions.len()];
            let noise = ((i * 13) % 11) as f64 - 5.0;
            let price = 150.0 + 4.0 * surface + 60.0 * bathrooms + 25.0 * rooms + noise;
            RawRow::new(price, rooms, bathrooms, surface, region)
        })
        .collect()
}
