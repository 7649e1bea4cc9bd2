pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{fallback::FallbackCatalog, http::ApiClient};
pub use config::CatalogConfig;
pub use core::catalog::{CatalogSnapshot, CatalogView, QueryKey};
pub use core::filter::{
    distinct_countries, filter_packages, DurationBucket, FilterCriteria, PriceBucket,
};
pub use core::resolve::{QueryState, Resolution};
pub use domain::model::{EnquiryRequest, FetchOutcome, Package};
pub use domain::ports::PackageSource;
pub use utils::error::{CatalogError, Result};
