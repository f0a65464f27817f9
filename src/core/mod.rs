pub mod handler;
pub mod validators;

pub use crate::domain::model::{Category, ExecMonth, RecordId, ValidatedTask};
pub use crate::domain::ports::{ConfigProvider, RecordSink};
pub use crate::utils::error::Result;
