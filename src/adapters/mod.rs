// Adapters layer: concrete implementations for external systems (HTTP
// backend, bundled fallback data).

pub mod fallback;
pub mod http;
