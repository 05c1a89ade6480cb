//! Resource conflict detection over an annotated task set.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::AnnotatedTask;

/// Positional view of a task, as much as the conflict scan needs.
#[derive(Clone, Copy)]
struct Span<'a> {
    id: &'a str,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
}

impl Span<'_> {
    /// Inclusive date-range overlap.
    fn overlaps(&self, other: &Span<'_>) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Find task pairs that overlap in time while sharing a resource.
///
/// Returns a mapping from task id to the set of conflicting task ids;
/// conflicts are symmetric, so each pair appears under both ids. Tasks
/// flagged with an invalid date range are skipped. Quadratic within each
/// resource group, which is fine at project scale (tens to low hundreds of
/// tasks); no resolution or bumping is performed.
pub fn detect_conflicts(tasks: &[AnnotatedTask]) -> FxHashMap<String, FxHashSet<String>> {
    // Group positional spans by resource name
    let mut by_resource: FxHashMap<&str, Vec<Span<'_>>> = FxHashMap::default();
    for task in tasks {
        if !task.dates_valid {
            continue;
        }
        let span = Span {
            id: &task.id,
            start: task.start_date,
            end: task.end_date,
        };
        for resource in &task.resource_names {
            by_resource.entry(resource.as_str()).or_default().push(span);
        }
    }

    let mut conflicts: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
    for spans in by_resource.values() {
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                // A task may list the same resource twice; never pair a
                // span with itself
                if a.id == b.id {
                    continue;
                }
                if a.overlaps(b) {
                    conflicts
                        .entry(a.id.to_string())
                        .or_default()
                        .insert(b.id.to_string());
                    conflicts
                        .entry(b.id.to_string())
                        .or_default()
                        .insert(a.id.to_string());
                }
            }
        }
    }

    conflicts
}
