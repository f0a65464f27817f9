use crate::core::validators::{normalize_category, parse_exec_month, validate_title};
use crate::domain::model::{RecordId, ValidatedTask};
use crate::domain::ports::{ConfigProvider, RecordSink};
use crate::utils::error::{IntakeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name reported when the target database identifier is not configured.
pub const DATABASE_ID_NAME: &str = "NOTION_DATABASE_ID";

/// Transport-neutral view of an incoming HTTP request.
#[derive(Debug, Clone, Default)]
pub struct IncomingRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl IncomingRequest {
    pub fn post_json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            method: "POST".to_string(),
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResponse {
    pub status: u16,
    pub body: ApiResponse,
}

impl TaskResponse {
    pub fn created(id: RecordId) -> Self {
        Self {
            status: 200,
            body: ApiResponse {
                ok: true,
                id: Some(id.0),
                error: None,
            },
        }
    }

    pub fn failed(error: &IntakeError) -> Self {
        Self {
            status: error.status_code(),
            body: ApiResponse {
                ok: false,
                id: None,
                error: Some(error.to_string()),
            },
        }
    }
}

/// Validates task-creation requests and forwards accepted ones to a [`RecordSink`].
pub struct TaskHandler<S: RecordSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: RecordSink, C: ConfigProvider> TaskHandler<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    /// Runs the full pipeline and always produces a response.
    pub async fn handle(&self, request: &IncomingRequest) -> TaskResponse {
        match self.process(request).await {
            Ok(id) => {
                tracing::info!(record_id = %id, "task record created");
                TaskResponse::created(id)
            }
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!(status = e.status_code(), "rejected request: {}", e);
                } else {
                    tracing::error!(status = e.status_code(), "task creation failed: {}", e);
                }
                TaskResponse::failed(&e)
            }
        }
    }

    /// Checks method, headers and body, then performs at most one sink call.
    pub async fn process(&self, request: &IncomingRequest) -> Result<RecordId> {
        if request.method != "POST" {
            return Err(IntakeError::MethodNotAllowed);
        }

        let is_json = request
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
        if !is_json {
            return Err(IntakeError::BadContentType);
        }

        let fields = parse_body(&request.body)?;
        let task = validate_fields(&fields)?;

        let database_id = self
            .config
            .database_id()
            .filter(|id| !id.trim().is_empty())
            .ok_or(IntakeError::MissingConfiguration {
                name: DATABASE_ID_NAME,
            })?;

        tracing::debug!(
            title = %task.title,
            category = %task.category,
            exec_month = %task.exec_month,
            "creating task record"
        );
        self.sink.create_record(database_id, &task).await
    }
}

/// Anything other than a JSON object is treated as an empty object.
fn parse_body(body: &[u8]) -> Result<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| IntakeError::MalformedBody {
            reason: e.to_string(),
        })?;
    tracing::debug!(body = %value, "received body");

    match value {
        Value::Object(fields) => Ok(fields),
        _ => Ok(Map::new()),
    }
}

pub fn validate_fields(fields: &Map<String, Value>) -> Result<ValidatedTask> {
    let title = validate_title(field(fields, "title"))?;

    let raw_category = field(fields, "category");
    let category = normalize_category(raw_category);
    tracing::debug!(raw = %raw_category, normalized = ?category.as_ref().ok(), "category");
    let category = category?;

    let raw_month = field(fields, "execMonth");
    let exec_month = parse_exec_month(raw_month);
    tracing::debug!(raw = %raw_month, parsed = ?exec_month.as_ref().ok(), "execMonth");
    let exec_month = exec_month?;

    Ok(ValidatedTask {
        title,
        category,
        exec_month,
    })
}

fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> &'a Value {
    fields.get(key).unwrap_or(&Value::Null)
}
