use crate::core::handler::DATABASE_ID_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.notion.com";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Settings for the Notion-backed task database.
///
/// Token and database id are optional at load time: a missing id is reported
/// per request, a missing token surfaces as an upstream authentication error.
#[derive(Clone, Default)]
pub struct NotionConfig {
    pub token: Option<String>,
    pub database_id: Option<String>,
    pub api_base: String,
    pub notion_version: String,
}

impl NotionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            token: non_empty("NOTION_TOKEN"),
            database_id: non_empty(DATABASE_ID_NAME),
            api_base: non_empty("NOTION_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            notion_version: non_empty("NOTION_VERSION")
                .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string()),
        }
    }

    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = Some(database_id.into());
        self
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("database_id", &self.database_id)
            .field("api_base", &self.api_base)
            .field("notion_version", &self.notion_version)
            .finish()
    }
}

impl ConfigProvider for NotionConfig {
    fn database_id(&self) -> Option<&str> {
        self.database_id.as_deref()
    }
}

impl Validate for NotionConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("notion_version", &self.notion_version)?;

        if self.database_id.is_none() {
            tracing::warn!("{} is not set; every request will fail until it is", DATABASE_ID_NAME);
        }
        if self.token.is_none() {
            tracing::warn!("NOTION_TOKEN is not set; Notion will reject record creation");
        }

        tracing::info!("✅ Notion configuration validation passed");
        Ok(())
    }
}
