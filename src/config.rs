// config.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// File looked up in the working directory by both binaries.
pub const CONFIG_FILE: &str = "rental.toml";

/// One regional listing page and the region label attached to its cards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegionSource {
    pub url: String,
    pub region: String,
}

impl RegionSource {
    pub fn new(url: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            region: region.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CollectorConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<RegionSource>,
    #[serde(default = "default_dataset_path")]
    pub output_path: String,
    /// Also write the records to a workbook when set.
    #[serde(default)]
    pub xlsx_output: Option<String>,
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// None keeps the HTTP client's own default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrainerConfig {
    #[serde(default = "default_dataset_path")]
    pub input_path: String,
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub trainer: TrainerConfig,
}

fn default_sources() -> Vec<RegionSource> {
    vec![
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-1-Appartement_%C3%A0_louer_Ariana",
            "Ariana",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-3-Appartement_%C3%A0_louer_Ben_Arous#title",
            "Ben Arous",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-4-Appartement_%C3%A0_louer_Bizerte#title",
            "Bizerte",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-13-Appartement_%C3%A0_louer_La_Manouba",
            "La Manouba",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-15-Appartement_%C3%A0_louer_Monastir",
            "Monastir",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-16-Appartement_%C3%A0_louer_Nabeul#title",
            "Nabeul",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-17-Appartement_%C3%A0_louer_Sfax#title",
            "Sfax",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-20-Appartement_%C3%A0_louer_Sousse#title",
            "Sousse",
        ),
        RegionSource::new(
            "https://www.lilkre.tn/cat-1-23-Appartement_%C3%A0_louer_Tunis",
            "Tunis",
        ),
    ]
}

fn default_dataset_path() -> String {
    "annonces_appartements.csv".to_string()
}

fn default_delay_secs() -> u64 {
    2 // keep the site happy
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_test_ratio() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output_path: default_dataset_path(),
            xlsx_output: None,
            delay_secs: default_delay_secs(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            input_path: default_dataset_path(),
            test_ratio: default_test_ratio(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config IO error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Reads `path` if it exists, otherwise falls back to the built-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!(
                "No config at {}, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("⚙️ Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
