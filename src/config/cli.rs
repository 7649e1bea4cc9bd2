use crate::config::CatalogConfig;
use crate::core::filter::{DurationBucket, FilterCriteria, PriceBucket};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "airwings-catalog")]
#[command(about = "Lists travel packages from the Travel Air Wings backend")]
pub struct CliConfig {
    /// Backend API base URL; overrides the config file and AIRWINGS_API_URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Optional TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Query only the featured packages shown on the landing page.
    #[arg(long)]
    pub featured: bool,

    /// Case-insensitive search over title and location.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact destination country.
    #[arg(long, default_value = "")]
    pub country: String,

    #[arg(long, value_enum)]
    pub duration: Option<DurationBucket>,

    #[arg(long, value_enum)]
    pub price: Option<PriceBucket>,

    /// Keep polling the backend at the configured interval.
    #[arg(long)]
    pub watch: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Layers configuration, most specific last: defaults, then the config
    /// file, then the environment, then explicit flags.
    pub fn resolve_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        }
        .apply_env();

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            country: self.country.clone(),
            duration: self.duration,
            price: self.price,
        }
    }
}
