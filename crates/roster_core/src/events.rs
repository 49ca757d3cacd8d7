use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterOperation {
    List,
    Fetch,
    Create,
    Remove,
    UpdateSalary,
}

impl RosterOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            RosterOperation::List => "list",
            RosterOperation::Fetch => "fetch",
            RosterOperation::Create => "create",
            RosterOperation::Remove => "remove",
            RosterOperation::UpdateSalary => "update_salary",
        }
    }

    fn failure_summary(self) -> &'static str {
        match self {
            RosterOperation::List => "Could not load the roster; showing the last known data",
            RosterOperation::Fetch => "Could not look up the cat",
            RosterOperation::Create => "Could not add the cat",
            RosterOperation::Remove => "Could not delete the cat",
            RosterOperation::UpdateSalary => "Could not update the salary",
        }
    }
}

impl fmt::Display for RosterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub operation: RosterOperation,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn failure(operation: RosterOperation, cause: impl fmt::Display) -> Self {
        Self {
            operation,
            message: format!("{}: {cause}", operation.failure_summary()),
            raised_at: Utc::now(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.raised_at.format("%H:%M:%S"), self.message)
    }
}

#[derive(Debug, Clone)]
pub enum RosterEvent {
    SnapshotReplaced { revision: u64, count: usize },
    Notice(Notification),
}
