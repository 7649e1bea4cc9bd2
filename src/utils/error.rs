use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// No response was obtained at all (connect/timeout). Distinct from a
    /// server-side error so the consumer can tell "backend down" apart from
    /// "backend rejected the request".
    #[error("cannot reach backend API at {origin}; ensure the backend is running")]
    Unreachable { origin: String },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("malformed response body: {reason}")]
    Malformed { reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    /// Whether the backend never answered, as opposed to answering badly.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, CatalogError::Unreachable { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
