use crate::core::handler::{IncomingRequest, TaskHandler, TaskResponse};
use crate::core::{ConfigProvider, RecordSink};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

impl IntoResponse for TaskResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

/// Mounts the task handler at `route` for every HTTP method, so that wrong
/// verbs still get the JSON 405 body.
pub fn router<S, C>(route: &str, handler: Arc<TaskHandler<S, C>>) -> Router
where
    S: RecordSink + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .route(route, any(add_task::<S, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

async fn add_task<S, C>(
    State(handler): State<Arc<TaskHandler<S, C>>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> TaskResponse
where
    S: RecordSink + 'static,
    C: ConfigProvider + 'static,
{
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let request = IncomingRequest {
        method: method.as_str().to_string(),
        content_type,
        body: body.to_vec(),
    };

    handler.handle(&request).await
}
