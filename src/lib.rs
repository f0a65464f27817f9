pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::NotionConfig;

pub use adapters::{http::router, notion::NotionSink};
pub use core::handler::{ApiResponse, IncomingRequest, TaskHandler, TaskResponse};
pub use utils::error::{IntakeError, Result};
