pub mod catalog;
pub mod filter;
pub mod resolve;

pub use crate::domain::model::{FetchOutcome, Package};
pub use crate::domain::ports::PackageSource;
pub use crate::utils::error::Result;
