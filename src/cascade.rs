//! Dependency cascader: propagates an edited task's new dates to its
//! transitive successors.
//!
//! Breadth-first walk over the successor relation starting at the edited
//! task. A successor that moves becomes the cascade root for its own
//! successors, using its just-computed end date. An updated task is never
//! revisited, so diamond-shaped graphs terminate with at most one update
//! per task. Updates are emitted in first-reached order, so applying them
//! in sequence never applies a stale predecessor date.
//!
//! The cascader does not topologically sort first: the visited-once
//! discipline already guarantees termination on any graph, cyclic ones
//! included, so an editing surface can probe a cascade mid-edit.

use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::config::{CascadePolicy, ScheduleConfig};
use crate::error::ScheduleError;
use crate::graph::TaskGraph;
use crate::models::{DateUpdate, TaskRecord};
use crate::{log_changes, log_checks};

/// Propagate a single task's edited dates through its dependents.
///
/// Returns the list of `(task_id, new_start, new_end)` updates, without
/// mutating the caller's records. Under the default
/// [`CascadePolicy::ForwardOnly`] a successor only moves when its
/// dependency-driven start lands strictly later than its current start;
/// moving a task earlier never auto-cascades. Each moved successor keeps
/// its planned duration: `new_end = new_start + duration - 1`.
pub fn cascade_from_edit(
    tasks: &[TaskRecord],
    edited_task_id: &str,
    new_start: NaiveDate,
    new_end: NaiveDate,
    config: &ScheduleConfig,
) -> Result<Vec<DateUpdate>, ScheduleError> {
    let graph = TaskGraph::build(tasks)?;
    let edited = graph
        .get_index(edited_task_id)
        .ok_or_else(|| ScheduleError::TaskNotFound(edited_task_id.to_string()))?;

    let calendar = config.calendar;
    let verbosity = config.verbosity;

    // Working copy of every task's dates, updated as the cascade advances
    let mut dates: Vec<(NaiveDate, NaiveDate)> = (0..graph.len())
        .map(|idx| {
            let r = graph.record(idx);
            (r.start_date, r.end_date)
        })
        .collect();
    dates[edited] = (new_start, new_end);

    let mut updated = vec![false; graph.len()];
    updated[edited] = true;

    let mut updates = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(edited);

    while let Some(root) = queue.pop_front() {
        let root_end = dates[root].1;

        for &succ in graph.succs(root) {
            if updated[succ] {
                continue;
            }
            if !graph.is_valid(succ) {
                log_checks!(
                    verbosity,
                    "cascade: skipping {} (invalid date range)",
                    graph.id(succ)
                );
                continue;
            }

            let record = graph.record(succ);
            let candidate = match config.cascade_policy {
                CascadePolicy::ForwardOnly => {
                    calendar.roll_forward(calendar.shift(root_end, record.lag_days + 1))
                }
                CascadePolicy::Bidirectional => {
                    // Snap to the tightest constraint over all predecessors,
                    // using cascade-updated dates where available
                    let mut tightest = calendar.shift(root_end, record.lag_days + 1);
                    for &pred in graph.preds(succ) {
                        if pred != edited && !graph.is_valid(pred) {
                            continue;
                        }
                        let constraint = calendar.shift(dates[pred].1, record.lag_days + 1);
                        if constraint > tightest {
                            tightest = constraint;
                        }
                    }
                    calendar.roll_forward(tightest)
                }
            };

            let moves = match config.cascade_policy {
                CascadePolicy::ForwardOnly => candidate > dates[succ].0,
                CascadePolicy::Bidirectional => candidate != dates[succ].0,
            };
            if !moves {
                log_checks!(
                    verbosity,
                    "cascade: {} unchanged (candidate {} not past current start {})",
                    graph.id(succ),
                    candidate,
                    dates[succ].0
                );
                continue;
            }

            let succ_end = calendar.shift(candidate, record.planned_duration_days - 1);
            dates[succ] = (candidate, succ_end);
            updated[succ] = true;
            log_changes!(
                verbosity,
                "cascade: {} -> {}..{}",
                graph.id(succ),
                candidate,
                succ_end
            );
            updates.push(DateUpdate {
                task_id: graph.id(succ).to_string(),
                new_start: candidate,
                new_end: succ_end,
            });
            queue.push_back(succ);
        }
    }

    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_task(id: &str, start: NaiveDate, duration: i64, lag: i64, preds: Vec<&str>) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            start_date: start,
            end_date: start + chrono::Duration::days(duration - 1),
            planned_duration_days: duration,
            lag_days: lag,
            predecessors: preds.into_iter().map(String::from).collect(),
            resource_names: vec![],
        }
    }

    #[test]
    fn test_push_forward_single_successor() {
        // A: Jan 1-3, B: Jan 2-3 depends on A. Move A's end to Jan 6.
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 3, 0, vec![]),
            make_task("b", d(2025, 1, 2), 2, 0, vec!["a"]),
        ];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 6),
            &ScheduleConfig::default(),
        )
        .unwrap();

        assert_eq!(
            updates,
            vec![DateUpdate {
                task_id: "b".to_string(),
                new_start: d(2025, 1, 7),
                new_end: d(2025, 1, 8),
            }]
        );
    }

    #[test]
    fn test_moving_earlier_never_cascades() {
        let tasks = vec![
            make_task("a", d(2025, 1, 10), 3, 0, vec![]),
            make_task("b", d(2025, 1, 20), 2, 0, vec!["a"]),
        ];
        // Pull a back a week; b stays put under ForwardOnly
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 3),
            d(2025, 1, 5),
            &ScheduleConfig::default(),
        )
        .unwrap();
        assert!(updates.is_empty());
    }

    #[test]
    fn test_bidirectional_pulls_earlier() {
        let tasks = vec![
            make_task("a", d(2025, 1, 10), 3, 0, vec![]),
            make_task("b", d(2025, 1, 20), 2, 0, vec!["a"]),
        ];
        let config = ScheduleConfig {
            cascade_policy: CascadePolicy::Bidirectional,
            ..Default::default()
        };
        let updates =
            cascade_from_edit(&tasks, "a", d(2025, 1, 3), d(2025, 1, 5), &config).unwrap();
        assert_eq!(
            updates,
            vec![DateUpdate {
                task_id: "b".to_string(),
                new_start: d(2025, 1, 6),
                new_end: d(2025, 1, 7),
            }]
        );
    }

    #[test]
    fn test_diamond_single_update_per_task() {
        // a -> b, a -> c, b -> d, c -> d
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 2, 0, vec![]),
            make_task("b", d(2025, 1, 3), 2, 0, vec!["a"]),
            make_task("c", d(2025, 1, 3), 2, 0, vec!["a"]),
            make_task("d", d(2025, 1, 5), 2, 0, vec!["b", "c"]),
        ];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 10),
            &ScheduleConfig::default(),
        )
        .unwrap();

        let d_updates: Vec<_> = updates.iter().filter(|u| u.task_id == "d").collect();
        assert_eq!(d_updates.len(), 1);
        assert_eq!(updates.len(), 3);
    }

    #[test]
    fn test_updates_in_first_reached_order() {
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 2, 0, vec![]),
            make_task("b", d(2025, 1, 3), 2, 0, vec!["a"]),
            make_task("c", d(2025, 1, 5), 2, 0, vec!["b"]),
        ];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 10),
            &ScheduleConfig::default(),
        )
        .unwrap();

        let ids: Vec<_> = updates.iter().map(|u| u.task_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        // b moves to Jan 11, so c's constraint comes from b's new end Jan 12
        assert_eq!(updates[1].new_start, d(2025, 1, 13));
    }

    #[test]
    fn test_lag_applied_in_cascade() {
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 2, 0, vec![]),
            make_task("b", d(2025, 1, 10), 2, 4, vec!["a"]),
        ];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 8),
            &ScheduleConfig::default(),
        )
        .unwrap();
        // b: Jan 8 + 4 lag + 1 = Jan 13
        assert_eq!(updates[0].new_start, d(2025, 1, 13));
    }

    #[test]
    fn test_unmoved_successor_stops_cascade() {
        // b has enough headroom to absorb a's move; c must not move either
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 2, 0, vec![]),
            make_task("b", d(2025, 1, 20), 2, 0, vec!["a"]),
            make_task("c", d(2025, 1, 25), 2, 0, vec!["b"]),
        ];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 5),
            &ScheduleConfig::default(),
        )
        .unwrap();
        assert!(updates.is_empty());
    }

    #[test]
    fn test_unknown_task_id() {
        let tasks = vec![make_task("a", d(2025, 1, 1), 2, 0, vec![])];
        let err = cascade_from_edit(
            &tasks,
            "ghost",
            d(2025, 1, 1),
            d(2025, 1, 2),
            &ScheduleConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::TaskNotFound("ghost".to_string()));
    }

    #[test]
    fn test_terminates_on_cyclic_graph() {
        // a <-> b is an invalid graph, but a cascade probe must still halt
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 2, 0, vec!["b"]),
            make_task("b", d(2025, 1, 3), 2, 0, vec!["a"]),
        ];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 10),
            &ScheduleConfig::default(),
        )
        .unwrap();
        // b pushed once; the back-edge to a is blocked by the visited set
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].task_id, "b");
    }

    #[test]
    fn test_invalid_successor_skipped() {
        let mut bad = make_task("bad", d(2025, 1, 3), 2, 0, vec!["a"]);
        bad.planned_duration_days = 0;
        let tasks = vec![make_task("a", d(2025, 1, 1), 2, 0, vec![]), bad];
        let updates = cascade_from_edit(
            &tasks,
            "a",
            d(2025, 1, 1),
            d(2025, 1, 10),
            &ScheduleConfig::default(),
        )
        .unwrap();
        assert!(updates.is_empty());
    }

    #[test]
    fn test_weekday_cascade_rolls_off_weekend() {
        // a's new end is Friday 2025-01-03; b would start Saturday without
        // the roll, lands on Monday the 6th instead
        let tasks = vec![
            make_task("a", d(2025, 1, 1), 2, 0, vec![]),
            make_task("b", d(2025, 1, 2), 2, 0, vec!["a"]),
        ];
        let config = ScheduleConfig {
            calendar: Calendar::Weekdays,
            ..Default::default()
        };
        let updates =
            cascade_from_edit(&tasks, "a", d(2025, 1, 2), d(2025, 1, 3), &config).unwrap();
        // shift(Fri Jan 3, +1) = Mon Jan 6; 2 working days end Tue Jan 7
        assert_eq!(updates[0].new_start, d(2025, 1, 6));
        assert_eq!(updates[0].new_end, d(2025, 1, 7));
    }
}
