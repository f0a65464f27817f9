use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical task categories accepted by the task database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "買い物")]
    Shopping,
    #[serde(rename = "Private")]
    Private,
    #[serde(rename = "Works")]
    Works,
    #[serde(rename = "処理済(待ち)")]
    Waiting,
}

impl Category {
    /// Every canonical category, in the order they are presented to callers.
    pub const ALL: [Category; 4] = [
        Category::Shopping,
        Category::Private,
        Category::Works,
        Category::Waiting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shopping => "買い物",
            Category::Private => "Private",
            Category::Works => "Works",
            Category::Waiting => "処理済(待ち)",
        }
    }

    /// Exact match against a canonical label. No trimming or alias lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    pub fn allowed_labels() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month in which a task is planned to run. Always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExecMonth(u8);

impl ExecMonth {
    pub fn new(value: i64) -> Option<Self> {
        if (1..=12).contains(&value) {
            u8::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ExecMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request that passed every field check, ready to hand to a [`RecordSink`].
///
/// [`RecordSink`]: crate::domain::ports::RecordSink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedTask {
    pub title: String,
    pub category: Category,
    pub exec_month: ExecMonth,
}

/// Opaque identifier of a record created by the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
