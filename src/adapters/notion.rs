//! Notion-backed [`RecordSink`].
//!
//! Creates one page per task in the configured database. The property names
//! below must match the database schema exactly.

use crate::config::NotionConfig;
use crate::core::{RecordId, RecordSink, ValidatedTask};
use crate::utils::error::{IntakeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

pub const TITLE_PROPERTY: &str = "Todo";
pub const CATEGORY_PROPERTY: &str = "カテゴリ";
pub const EXEC_MONTH_PROPERTY: &str = "実行月";
pub const ACHIEVED_PROPERTY: &str = "達成";

#[derive(Debug, Deserialize)]
struct CreatedPage {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    message: Option<String>,
}

pub struct NotionSink {
    client: Client,
    pages_url: String,
    token: Option<String>,
    notion_version: String,
}

impl NotionSink {
    pub fn new(config: &NotionConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &NotionConfig) -> Self {
        Self {
            client,
            pages_url: format!("{}/v1/pages", config.api_base.trim_end_matches('/')),
            token: config.token.clone(),
            notion_version: config.notion_version.clone(),
        }
    }
}

/// Request body for `POST /v1/pages`. New records always start unachieved.
pub fn page_payload(database_id: &str, task: &ValidatedTask) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            TITLE_PROPERTY: {
                "title": [{ "text": { "content": task.title } }]
            },
            CATEGORY_PROPERTY: {
                "select": { "name": task.category.as_str() }
            },
            EXEC_MONTH_PROPERTY: {
                "number": task.exec_month.get()
            },
            ACHIEVED_PROPERTY: {
                "checkbox": false
            }
        }
    })
}

#[async_trait]
impl RecordSink for NotionSink {
    async fn create_record(&self, database_id: &str, task: &ValidatedTask) -> Result<RecordId> {
        tracing::debug!("Making Notion API request to: {}", self.pages_url);

        let mut request = self
            .client
            .post(&self.pages_url)
            .header("Notion-Version", &self.notion_version)
            .json(&page_payload(database_id, task));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Notion API response status: {}", status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<NotionErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Notion API returned status {}", status.as_u16()));
            return Err(IntakeError::Upstream { message });
        }

        let page: CreatedPage = response.json().await?;
        page.id.map(RecordId).ok_or_else(|| IntakeError::Upstream {
            message: "Notion API response did not include a page id".to_string(),
        })
    }
}
