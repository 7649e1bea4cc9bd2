use crate::domain::model::Package;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The seam between the resolution pipeline and the transport. The HTTP
/// adapter is the production implementation; tests substitute scripted
/// sources.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Fetch the package list, optionally restricted to featured packages.
    /// An empty list is a valid success, not a failure signal.
    async fn packages(&self, featured: Option<bool>) -> Result<Vec<Package>>;
}
