use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// Self documenting alias
pub type TimeStamp = OffsetDateTime;

// --- Task Status ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Wire/display form, e.g. `in-progress`.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Task Object ---
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /** Primary key, assigned sequentially (never reassigned) */
    pub id: u64,

    /** Required short summary of the work */
    pub description: String,

    /** Workflow state machine */
    pub status: Status,

    /** Created at UTC time (immutable once set) */
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: TimeStamp,

    /** Last time user updated task */
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: TimeStamp,
}

impl Task {
    /// Fresh task: status starts at `Todo`, both stamps set to now.
    pub fn new(id: u64, description: &str) -> Self {
        let now = TimeStamp::now_utc();
        Self {
            id,
            description: description.to_owned(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the description & update timestamp.
    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
        self.updated_at = TimeStamp::now_utc();
    }

    /// Change workflow state & update timestamp.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = TimeStamp::now_utc();
    }
}
