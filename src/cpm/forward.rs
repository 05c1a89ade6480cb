//! Forward pass: earliest start/finish per task.

use crate::calendar::Calendar;
use crate::graph::TaskGraph;

use super::TaskTiming;

/// Compute earliest start and finish dates for every valid task.
///
/// Tasks with no predecessors anchor at their own start date. Otherwise the
/// latest constraint wins: a task cannot start before all of its
/// predecessors finish plus the task's own lag, so
/// `early_start = max(own start, max over predecessors of
/// (pred.early_finish + lag + 1 day))`. The topological order guarantees
/// each predecessor is resolved before its dependents, and each node is
/// visited exactly once.
///
/// Returns timings indexed by task; `None` for tasks excluded for an
/// invalid date range. The late fields are placeholders until the backward
/// pass fills them in.
pub fn forward_pass(
    graph: &TaskGraph,
    topo_order: &[usize],
    calendar: Calendar,
) -> Vec<Option<TaskTiming>> {
    let mut timings: Vec<Option<TaskTiming>> = vec![None; graph.len()];

    for &idx in topo_order {
        if !graph.is_valid(idx) {
            continue;
        }
        let record = graph.record(idx);

        let mut early_start = record.start_date;
        for &pred in graph.preds(idx) {
            // Edges touching excluded tasks carry no constraint
            let Some(pred_timing) = timings[pred] else {
                continue;
            };
            let candidate = calendar.shift(pred_timing.early_finish, record.lag_days + 1);
            if candidate > early_start {
                early_start = candidate;
            }
        }
        let early_start = calendar.roll_forward(early_start);
        let early_finish = calendar.shift(early_start, record.planned_duration_days - 1);

        timings[idx] = Some(TaskTiming {
            early_start,
            early_finish,
            late_start: early_start,
            late_finish: early_finish,
        });
    }

    timings
}
