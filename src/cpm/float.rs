//! Float computation and critical-path classification.

use crate::calendar::Calendar;
use crate::graph::TaskGraph;

use super::TaskTiming;

/// Derived float fields for one task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatInfo {
    /// Days the task can slip without delaying the project finish.
    pub total_float_days: i64,
    /// Days the task can slip without delaying its earliest-constrained
    /// successor.
    pub free_float_days: i64,
    /// True iff total float is zero.
    pub is_critical: bool,
}

/// Derive total float, free float, and critical-path membership from the
/// forward and backward pass results.
///
/// `total_float = late_finish - early_finish` in calendar days; a task is
/// critical exactly when that is zero, which flags every task on a chain
/// connecting a zero-float start to a zero-float end. Free float is the
/// minimum gap to any successor's early start (clamped at zero); a task
/// with no successors has free float equal to its total float.
pub fn classify_floats(
    graph: &TaskGraph,
    timings: &[Option<TaskTiming>],
    calendar: Calendar,
) -> Vec<Option<FloatInfo>> {
    let mut floats: Vec<Option<FloatInfo>> = vec![None; graph.len()];

    for idx in 0..graph.len() {
        let Some(timing) = timings[idx] else {
            continue;
        };

        let total_float_days = calendar.days_between(timing.early_finish, timing.late_finish);

        let mut free_gap: Option<i64> = None;
        for &succ in graph.succs(idx) {
            let Some(succ_timing) = timings[succ] else {
                continue;
            };
            let succ_lag = graph.record(succ).lag_days;
            // Latest this task could finish without moving the successor
            let required_finish = calendar.shift(succ_timing.early_start, -(succ_lag + 1));
            let gap = calendar.days_between(timing.early_finish, required_finish);
            free_gap = Some(match free_gap {
                Some(current) => current.min(gap),
                None => gap,
            });
        }

        let free_float_days = match free_gap {
            Some(gap) => gap.max(0),
            None => total_float_days,
        };

        floats[idx] = Some(FloatInfo {
            total_float_days,
            free_float_days,
            is_critical: total_float_days == 0,
        });
    }

    floats
}
