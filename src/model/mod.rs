//! Display-facing data models shared between the service layer and the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{category, task};

/// Read-only join of a task with its (possibly absent) category, as produced
/// by the repository layer for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithCategory {
    pub task: task::Model,
    pub category: Option<category::Model>,
}

impl TaskWithCategory {
    pub fn new(task: task::Model, category: Option<category::Model>) -> Self {
        Self { task, category }
    }
}

/// Repeat cadence for a task alarm. `Never` is the sentinel that clears the
/// repeating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmInterval {
    Never,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl AlarmInterval {
    /// All selectable intervals, in the order dialogs present them.
    pub const ALL: [AlarmInterval; 6] = [
        AlarmInterval::Never,
        AlarmInterval::Hourly,
        AlarmInterval::Daily,
        AlarmInterval::Weekly,
        AlarmInterval::Monthly,
        AlarmInterval::Yearly,
    ];

    /// Human-readable label for dialogs.
    pub fn label(&self) -> &'static str {
        match self {
            AlarmInterval::Never => "Never",
            AlarmInterval::Hourly => "Every hour",
            AlarmInterval::Daily => "Every day",
            AlarmInterval::Weekly => "Every week",
            AlarmInterval::Monthly => "Every month",
            AlarmInterval::Yearly => "Every year",
        }
    }
}

impl fmt::Display for AlarmInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlarmInterval::Never => "never",
            AlarmInterval::Hourly => "hourly",
            AlarmInterval::Daily => "daily",
            AlarmInterval::Weekly => "weekly",
            AlarmInterval::Monthly => "monthly",
            AlarmInterval::Yearly => "yearly",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown alarm interval: {0}")]
pub struct ParseAlarmIntervalError(String);

impl FromStr for AlarmInterval {
    type Err = ParseAlarmIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(AlarmInterval::Never),
            "hourly" => Ok(AlarmInterval::Hourly),
            "daily" => Ok(AlarmInterval::Daily),
            "weekly" => Ok(AlarmInterval::Weekly),
            "monthly" => Ok(AlarmInterval::Monthly),
            "yearly" => Ok(AlarmInterval::Yearly),
            other => Err(ParseAlarmIntervalError(other.to_string())),
        }
    }
}
