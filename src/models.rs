//! Core data types for the scheduling system.
//!
//! [`TaskRecord`] is the caller-owned input shape; everything the core
//! computes comes back as new values ([`AnnotatedTask`], [`DateUpdate`],
//! [`ScheduleResult`]). The core never mutates or retains caller data, so
//! the caller's copy stays valid for rollback if an update is rejected
//! upstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleWarning;

/// A raw task record as supplied by the UI/storage layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique identifier, stable across edits.
    pub id: String,
    /// First day of the task (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the task (inclusive); expected `>= start_date`.
    pub end_date: NaiveDate,
    /// Whole-day duration used to recompute `end_date` after a start shift:
    /// `end = start + duration - 1`.
    pub planned_duration_days: i64,
    /// Offset in days applied when this task is scheduled relative to a
    /// predecessor's finish. May be negative (lead time).
    pub lag_days: i64,
    /// Ids of the tasks this task depends on. Order is irrelevant and
    /// duplicates are collapsed by the graph builder.
    pub predecessors: Vec<String>,
    /// Resource identifiers consumed by this task.
    pub resource_names: Vec<String>,
}

impl TaskRecord {
    /// Whether the record's positional fields are usable for scheduling.
    pub fn dates_valid(&self) -> bool {
        self.end_date >= self.start_date && self.planned_duration_days >= 1
    }
}

/// A task with all derived scheduling fields filled in.
///
/// Derived fields are owned exclusively by the core: recomputed on every
/// full pass, never hand-edited. Timing fields are `None` exactly when
/// `dates_valid` is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedTask {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub planned_duration_days: i64,
    pub lag_days: i64,
    /// Predecessors after deduplication and dangling-reference removal.
    pub predecessors: Vec<String>,
    /// Derived: the exact transpose of the predecessor relation over the
    /// task set.
    pub successors: Vec<String>,
    pub resource_names: Vec<String>,
    /// Earliest feasible start (forward pass).
    pub early_start: Option<NaiveDate>,
    /// Earliest feasible finish (forward pass).
    pub early_finish: Option<NaiveDate>,
    /// Latest allowable start (backward pass).
    pub late_start: Option<NaiveDate>,
    /// Latest allowable finish (backward pass).
    pub late_finish: Option<NaiveDate>,
    /// Days this task can slip without delaying the project finish.
    pub total_float_days: Option<i64>,
    /// Days this task can slip without delaying its earliest-constrained
    /// successor.
    pub free_float_days: Option<i64>,
    /// True iff `total_float_days == Some(0)`.
    pub is_critical: bool,
    /// False when the record was excluded from positional calculations for
    /// an invalid date range; the rendering layer should skip such tasks.
    pub dates_valid: bool,
    /// Ids of tasks overlapping this one on a shared resource, sorted.
    pub resource_conflicts: Vec<String>,
}

/// A single date change produced by the cascader.
///
/// Consumed by the editing surface (apply in emitted order) and by the
/// delivery-notification collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateUpdate {
    pub task_id: String,
    pub new_start: NaiveDate,
    pub new_end: NaiveDate,
}

/// Result of a full recompute: the annotated task set plus accumulated
/// warnings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    /// Annotated tasks in input order.
    pub tasks: Vec<AnnotatedTask>,
    /// The shared project-end anchor: the maximum early finish over tasks
    /// with no successors. `None` for an empty or fully-invalid set.
    pub project_end: Option<NaiveDate>,
    /// Non-fatal input problems encountered during the recompute.
    pub warnings: Vec<ScheduleWarning>,
}
