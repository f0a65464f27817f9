use crate::domain::model::{RecordId, ValidatedTask};
use crate::utils::error::Result;
use async_trait::async_trait;

/// External datastore that persists validated tasks.
///
/// Implementations perform exactly one create attempt per call and report
/// failures as [`IntakeError::Upstream`](crate::utils::error::IntakeError::Upstream)
/// or [`IntakeError::Transport`](crate::utils::error::IntakeError::Transport).
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn create_record(&self, database_id: &str, task: &ValidatedTask) -> Result<RecordId>;
}

#[async_trait]
impl<S: RecordSink + ?Sized> RecordSink for std::sync::Arc<S> {
    async fn create_record(&self, database_id: &str, task: &ValidatedTask) -> Result<RecordId> {
        (**self).create_record(database_id, task).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn database_id(&self) -> Option<&str>;
}
