//! Task graph builder: validates and indexes raw task records.
//!
//! Strings are interned to dense `usize` indices at build time; the passes
//! and the cascader work entirely on index arrays and only resolve back to
//! ids at the crate boundary.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{ScheduleError, ScheduleWarning};
use crate::models::TaskRecord;

/// An indexed dependency graph over a snapshot of task records.
///
/// Indices are assigned in input order, so every derived ordering is
/// deterministic for a given input. The predecessor and successor lists are
/// exact transposes of each other.
#[derive(Clone, Debug)]
pub struct TaskGraph {
    index: FxHashMap<String, usize>,
    records: Vec<TaskRecord>,
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
    valid: Vec<bool>,
    warnings: Vec<ScheduleWarning>,
}

impl TaskGraph {
    /// Build an indexed graph from raw records.
    ///
    /// Duplicate ids are a fatal input error. Predecessor references to
    /// unknown ids are dropped with a recorded warning, and records with an
    /// invalid date range are kept but flagged so the passes can skip them.
    /// Empty input produces a valid empty graph.
    pub fn build(tasks: &[TaskRecord]) -> Result<Self, ScheduleError> {
        let mut index: FxHashMap<String, usize> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.id.clone(), i).is_some() {
                return Err(ScheduleError::DuplicateTask(task.id.clone()));
            }
        }

        let n = tasks.len();
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut succs: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut valid = vec![true; n];
        let mut warnings = Vec::new();

        for (i, task) in tasks.iter().enumerate() {
            if !task.dates_valid() {
                valid[i] = false;
                warnings.push(ScheduleWarning::InvalidDateRange {
                    task_id: task.id.clone(),
                });
            }

            let mut seen: FxHashSet<usize> = FxHashSet::default();
            for pred_id in &task.predecessors {
                match index.get(pred_id) {
                    Some(&p) => {
                        if seen.insert(p) {
                            preds[i].push(p);
                            succs[p].push(i);
                        }
                    }
                    None => warnings.push(ScheduleWarning::DanglingReference {
                        task_id: task.id.clone(),
                        missing_id: pred_id.clone(),
                    }),
                }
            }
        }

        Ok(Self {
            index,
            records: tasks.to_vec(),
            preds,
            succs,
            valid,
            warnings,
        })
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a task id to its index.
    pub fn get_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The id of the task at `idx`.
    pub fn id(&self, idx: usize) -> &str {
        &self.records[idx].id
    }

    /// The record stored at `idx`.
    pub fn record(&self, idx: usize) -> &TaskRecord {
        &self.records[idx]
    }

    /// Resolved predecessor indices of the task at `idx`, deduplicated.
    pub fn preds(&self, idx: usize) -> &[usize] {
        &self.preds[idx]
    }

    /// Successor indices of the task at `idx` (transpose of `preds`).
    pub fn succs(&self, idx: usize) -> &[usize] {
        &self.succs[idx]
    }

    /// Whether the task at `idx` has a usable date range.
    pub fn is_valid(&self, idx: usize) -> bool {
        self.valid[idx]
    }

    /// Whether the task at `idx` has any valid successor.
    ///
    /// Tasks for which this is false anchor the backward pass.
    pub fn has_valid_successor(&self, idx: usize) -> bool {
        self.succs[idx].iter().any(|&s| self.valid[s])
    }

    /// Warnings accumulated during the build.
    pub fn warnings(&self) -> &[ScheduleWarning] {
        &self.warnings
    }

    /// Consume the graph, returning its warnings.
    pub fn into_warnings(self) -> Vec<ScheduleWarning> {
        self.warnings
    }
}
