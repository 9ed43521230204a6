use rental_pricing::config::{AppConfig, CONFIG_FILE};
use rental_pricing::errors::AppError;
use rental_pricing::training::run_training;

fn run() -> Result<(), AppError> {
    let config = AppConfig::load_or_default(CONFIG_FILE)?.trainer;

    let outcome = run_training(&config)?;
    println!("{}", outcome.report);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("❌ Training failed: {e}");
        std::process::exit(1);
    }
}
