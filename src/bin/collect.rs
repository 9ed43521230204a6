use rental_pricing::config::{AppConfig, CONFIG_FILE};
use rental_pricing::errors::AppError;
use rental_pricing::scraper::{scrape_all, ListingScraper};
use rental_pricing::spreadsheets::{write_listings_csv, write_listings_xlsx};

fn run() -> Result<(), AppError> {
    let config = AppConfig::load_or_default(CONFIG_FILE)?.collector;

    let scraper = ListingScraper::new(&config)?;
    let run = scrape_all(&scraper, &config);
    run.log_summary();

    write_listings_csv(&run.records, &config.output_path)?;
    if let Some(path) = &config.xlsx_output {
        write_listings_xlsx(&run.records, path)?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("❌ Collection failed: {e}");
        std::process::exit(1);
    }

    log::info!("✅ Scraping finished");
}
