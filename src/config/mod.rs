#[cfg(feature = "cli")]
pub mod cli;
pub mod notion;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use notion::NotionConfig;
