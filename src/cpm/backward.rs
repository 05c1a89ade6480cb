//! Backward pass: latest start/finish per task.

use chrono::NaiveDate;

use crate::calendar::Calendar;
use crate::graph::TaskGraph;

use super::TaskTiming;

/// Compute latest start and finish dates, mutating the forward-pass
/// timings in place. Returns the project-end anchor.
///
/// Every task with no successors anchors its latest finish at a single
/// shared project end: the maximum early finish among end tasks. When the
/// task set contains multiple disconnected sub-projects this collapses
/// their finish dates to one shared date; critical-path classification
/// downstream depends on that collapse, so it is not varied per branch.
///
/// For everything else the earliest constraint wins: a task must finish
/// before all of its successors can legally start, each accounting for its
/// own lag, so `late_finish = min over successors of
/// (succ.late_start - succ.lag - 1 day)`.
pub fn backward_pass(
    graph: &TaskGraph,
    topo_order: &[usize],
    timings: &mut [Option<TaskTiming>],
    calendar: Calendar,
) -> Option<NaiveDate> {
    let project_end = (0..graph.len())
        .filter(|&idx| !graph.has_valid_successor(idx))
        .filter_map(|idx| timings[idx].map(|t| t.early_finish))
        .max()?;

    for &idx in topo_order.iter().rev() {
        let Some(timing) = timings[idx] else {
            continue;
        };

        let mut late_finish: Option<NaiveDate> = None;
        for &succ in graph.succs(idx) {
            let Some(succ_timing) = timings[succ] else {
                continue;
            };
            let succ_lag = graph.record(succ).lag_days;
            let required = calendar.shift(succ_timing.late_start, -(succ_lag + 1));
            late_finish = Some(match late_finish {
                Some(current) => current.min(required),
                None => required,
            });
        }

        let late_finish = late_finish.unwrap_or(project_end);
        let duration = graph.record(idx).planned_duration_days;
        timings[idx] = Some(TaskTiming {
            late_finish,
            late_start: calendar.shift(late_finish, -(duration - 1)),
            ..timing
        });
    }

    Some(project_end)
}
