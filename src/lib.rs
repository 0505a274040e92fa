pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ServerArgs;

pub use adapters::client::TerminalClient;
pub use adapters::http::{build_router, AppState};
pub use config::BackendConfig;
pub use crate::core::dispatcher::{dispatch, dispatch_with_clock};
pub use utils::error::{BackendError, Result};
