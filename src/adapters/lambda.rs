//! API Gateway proxy events in, proxy responses out.

use crate::core::handler::{IncomingRequest, TaskHandler, TaskResponse};
use crate::core::{ConfigProvider, RecordSink};
use crate::utils::error::IntakeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
}

// API Gateway sends `null` rather than omitting keys, e.g. `"headers": null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn decoded_body(&self) -> Result<Vec<u8>, IntakeError> {
        let raw = self.body.as_deref().unwrap_or_default();
        if !self.is_base64_encoded {
            return Ok(raw.as_bytes().to_vec());
        }
        STANDARD
            .decode(raw)
            .map_err(|e| IntakeError::MalformedBody {
                reason: e.to_string(),
            })
    }
}

impl From<TaskResponse> for ProxyResponse {
    fn from(response: TaskResponse) -> Self {
        let body = serde_json::to_string(&response.body)
            .unwrap_or_else(|_| r#"{"ok":false,"error":"response serialization failed"}"#.to_string());
        Self {
            status_code: response.status,
            headers: HashMap::from([(
                "content-type".to_string(),
                "application/json".to_string(),
            )]),
            body,
        }
    }
}

pub async fn handle_proxy_event<S, C>(
    handler: &TaskHandler<S, C>,
    event: &ProxyRequest,
) -> ProxyResponse
where
    S: RecordSink,
    C: ConfigProvider,
{
    // An undecodable body only matters once the method has been accepted.
    let body = match event.decoded_body() {
        Ok(body) => body,
        Err(e) if event.http_method == "POST" => {
            tracing::warn!("rejected request: {}", e);
            return TaskResponse::failed(&e).into();
        }
        Err(_) => Vec::new(),
    };

    let request = IncomingRequest {
        method: event.http_method.clone(),
        content_type: event.header("content-type").map(str::to_string),
        body,
    };

    handler.handle(&request).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotionConfig;
    use crate::core::{RecordId, ValidatedTask};
    use crate::utils::error::Result;
    use async_trait::async_trait;

    struct FixedSink;

    #[async_trait]
    impl RecordSink for FixedSink {
        async fn create_record(&self, _database_id: &str, _task: &ValidatedTask) -> Result<RecordId> {
            Ok(RecordId("page-lambda".to_string()))
        }
    }

    fn handler() -> TaskHandler<FixedSink, NotionConfig> {
        TaskHandler::new(FixedSink, NotionConfig::default().with_database_id("db-1"))
    }

    fn post(body: &str, base64: bool) -> ProxyRequest {
        ProxyRequest {
            http_method: "POST".to_string(),
            headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body: Some(if base64 { STANDARD.encode(body) } else { body.to_string() }),
            is_base64_encoded: base64,
        }
    }

    #[tokio::test]
    async fn test_plain_and_base64_bodies() {
        let body = r#"{"title":"t","category":"Works","execMonth":2}"#;
        for encoded in [false, true] {
            let response = handle_proxy_event(&handler(), &post(body, encoded)).await;
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, r#"{"ok":true,"id":"page-lambda"}"#);
            assert_eq!(response.headers["content-type"], "application/json");
        }
    }

    #[tokio::test]
    async fn test_bad_base64_is_malformed_body() {
        let mut event = post("", true);
        event.body = Some("%%%".to_string());

        let response = handle_proxy_event(&handler(), &event).await;
        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("Request body must be valid JSON"));

        event.http_method = "GET".to_string();
        let response = handle_proxy_event(&handler(), &event).await;
        assert_eq!(response.status_code, 405);
    }

    #[tokio::test]
    async fn test_null_fields_still_get_a_json_response() {
        let event: ProxyRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "GET",
            "headers": null,
            "body": null,
            "isBase64Encoded": null
        }))
        .unwrap();
        assert!(event.headers.is_empty());

        let response = handle_proxy_event(&handler(), &event).await;
        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, r#"{"ok":false,"error":"Method Not Allowed"}"#);

        let event: ProxyRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "POST",
            "headers": null,
            "body": "{}"
        }))
        .unwrap();
        let response = handle_proxy_event(&handler(), &event).await;
        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("Content-Type must be application/json"));
    }

    #[tokio::test]
    async fn test_lowercase_method_is_not_allowed() {
        let mut event = post(r#"{"title":"t","category":"Works","execMonth":2}"#, false);
        event.http_method = "post".to_string();

        let response = handle_proxy_event(&handler(), &event).await;
        assert_eq!(response.status_code, 405);
    }

    #[test]
    fn test_event_deserializes_from_api_gateway_shape() {
        let event: ProxyRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "POST",
            "headers": {"content-type": "application/json"},
            "body": "{}",
            "isBase64Encoded": false,
            "requestContext": {"stage": "prod"}
        }))
        .unwrap();
        assert_eq!(event.http_method, "POST");
        assert_eq!(event.header("Content-Type"), Some("application/json"));
    }
}
