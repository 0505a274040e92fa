// Adapters layer: HTTP server surface and the reqwest client for a running backend.

pub mod client;
pub mod http;
