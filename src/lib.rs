//! Scheduling core for interdependent project tasks.
//!
//! Implements the Critical Path Method over a task dependency graph:
//! forward and backward passes compute earliest/latest feasible dates,
//! float, and critical-path membership; a cascader propagates single-task
//! edits through transitive dependents; a conflict detector finds tasks
//! overlapping on a shared resource.
//!
//! The core is a pure, single-threaded computation. Every entry point
//! receives an immutable snapshot of task records and returns new values;
//! nothing is retained between calls and the caller's data is never
//! mutated, so concurrent callers may invoke the core in parallel on
//! independent task sets and a rejected update can always roll back.

pub mod calendar;
mod cascade;
mod config;
mod conflicts;
pub mod cpm;
mod error;
mod graph;
pub mod logging;
mod models;
mod sorting;

pub use calendar::Calendar;
pub use cascade::cascade_from_edit;
pub use config::{CascadePolicy, ScheduleConfig};
pub use conflicts::detect_conflicts;
pub use cpm::{backward_pass, classify_floats, forward_pass, FloatInfo, TaskTiming};
pub use error::{ScheduleError, ScheduleWarning};
pub use graph::TaskGraph;
pub use models::{AnnotatedTask, DateUpdate, ScheduleResult, TaskRecord};
pub use sorting::topological_order_indices;

/// Run the full scheduling pipeline over a snapshot of task records.
///
/// Build graph → topological sort → forward pass → backward pass → float
/// classification → conflict scan. Fatal errors ([`ScheduleError`]) abort
/// the whole recompute with no partial result, since float values from a
/// broken graph would be globally wrong. Non-fatal input problems degrade
/// gracefully and come back as warnings on an otherwise complete result.
pub fn recompute_schedule(
    tasks: &[TaskRecord],
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let graph = TaskGraph::build(tasks)?;
    let order = topological_order_indices(&graph)?;

    let calendar = config.calendar;
    let mut timings = forward_pass(&graph, &order, calendar);
    let project_end = backward_pass(&graph, &order, &mut timings, calendar);
    let floats = classify_floats(&graph, &timings, calendar);

    let mut annotated: Vec<AnnotatedTask> = (0..graph.len())
        .map(|idx| {
            let record = graph.record(idx);
            let timing = timings[idx];
            let float = floats[idx];
            AnnotatedTask {
                id: record.id.clone(),
                start_date: record.start_date,
                end_date: record.end_date,
                planned_duration_days: record.planned_duration_days,
                lag_days: record.lag_days,
                predecessors: graph
                    .preds(idx)
                    .iter()
                    .map(|&p| graph.id(p).to_string())
                    .collect(),
                successors: graph
                    .succs(idx)
                    .iter()
                    .map(|&s| graph.id(s).to_string())
                    .collect(),
                resource_names: record.resource_names.clone(),
                early_start: timing.map(|t| t.early_start),
                early_finish: timing.map(|t| t.early_finish),
                late_start: timing.map(|t| t.late_start),
                late_finish: timing.map(|t| t.late_finish),
                total_float_days: float.map(|f| f.total_float_days),
                free_float_days: float.map(|f| f.free_float_days),
                is_critical: float.is_some_and(|f| f.is_critical),
                dates_valid: graph.is_valid(idx),
                resource_conflicts: Vec::new(),
            }
        })
        .collect();

    let conflict_map = detect_conflicts(&annotated);
    for task in &mut annotated {
        if let Some(ids) = conflict_map.get(&task.id) {
            let mut ids: Vec<String> = ids.iter().cloned().collect();
            ids.sort();
            task.resource_conflicts = ids;
        }
    }

    log_changes!(
        config.verbosity,
        "recompute: {} tasks, project end {:?}, {} warnings",
        annotated.len(),
        project_end,
        graph.warnings().len()
    );

    Ok(ScheduleResult {
        tasks: annotated,
        project_end,
        warnings: graph.into_warnings(),
    })
}

/// Produce a dependency-respecting ordering of all task ids.
///
/// Exposed standalone so an editing surface can validate a prospective
/// dependency edge before accepting it: build the candidate task set and
/// check for [`ScheduleError::CyclicDependency`].
pub fn topological_order(tasks: &[TaskRecord]) -> Result<Vec<String>, ScheduleError> {
    let graph = TaskGraph::build(tasks)?;
    let order = topological_order_indices(&graph)?;
    Ok(order.into_iter().map(|i| graph.id(i).to_string()).collect())
}
