//! Error and warning types for the scheduling core.
//!
//! Fatal errors abort an entire recompute with no partial result; float
//! values computed from a broken graph would be globally wrong, so callers
//! never see them. Warnings accumulate and are returned alongside an
//! otherwise complete result.

use serde::Serialize;
use thiserror::Error;

/// Fatal errors. Any of these aborts the operation that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Two input tasks share an id. The caller must fix the input before
    /// retrying.
    #[error("duplicate task id: {0}")]
    DuplicateTask(String),
    /// The dependency graph has a cycle. Names the task at which the cycle
    /// was detected so an editing surface can highlight the offending edge.
    #[error("cyclic dependency detected at task: {0}")]
    CyclicDependency(String),
    /// An operation referenced a task id not present in the input set.
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

/// Non-fatal input problems. The offending reference or task is degraded
/// and scheduling proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScheduleWarning {
    /// A predecessor id had no corresponding task in the input set; the
    /// reference was dropped.
    DanglingReference { task_id: String, missing_id: String },
    /// A task's end date precedes its start date, or its planned duration is
    /// less than one day. The task is excluded from positional calculations
    /// but still present in the output, flagged.
    InvalidDateRange { task_id: String },
}

impl std::fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingReference {
                task_id,
                missing_id,
            } => write!(
                f,
                "task {task_id} references unknown predecessor {missing_id}; reference dropped"
            ),
            Self::InvalidDateRange { task_id } => {
                write!(f, "task {task_id} has an invalid date range; excluded from scheduling")
            }
        }
    }
}
