use crate::utils::error::CatalogError;
use serde::{Deserialize, Serialize};

/// A travel package as served by the backend. Records are owned entirely by
/// the backend (or the bundled fallback catalog); the client only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Grouping key for the destination filter.
    pub country: String,
    /// Free text, e.g. "7 Days / 6 Nights". Never parsed into structured
    /// form; the duration filter inspects it heuristically.
    pub duration: String,
    /// Non-negative, single fixed currency (AED).
    pub price: f64,
    /// Expected range [0, 5].
    pub rating: f64,
    /// Promotional label, no effect on filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Remaining availability, display-only urgency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inclusions: Vec<String>,
    /// Absence means active (inclusive default); explicit `false` hides the
    /// package from every listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Selects the subset shown on the landing page.
    #[serde(default)]
    pub featured: bool,
}

impl Package {
    pub fn is_listed(&self) -> bool {
        self.is_active != Some(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub package_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub content: String,
    pub trip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Contact-form submission body for `POST /enquiries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Outcome of a single fetch attempt. Transient: it exists only for the
/// duration of one resolution decision and is never persisted.
///
/// A failure carries only the human-readable message; error kinds never
/// drive control flow past the client boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Pending,
    Success(Vec<Package>),
    Failure(String),
}

impl Default for FetchOutcome {
    fn default() -> Self {
        FetchOutcome::Pending
    }
}

impl From<Result<Vec<Package>, CatalogError>> for FetchOutcome {
    fn from(result: Result<Vec<Package>, CatalogError>) -> Self {
        match result {
            Ok(packages) => FetchOutcome::Success(packages),
            Err(e) => FetchOutcome::Failure(e.to_string()),
        }
    }
}
