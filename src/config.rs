//! Configuration for the scheduling core.

use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;

/// How the cascader treats a successor whose dependency-driven start moved
/// earlier than its current start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadePolicy {
    /// Only push successors later; moving a task earlier never auto-moves
    /// its dependents.
    #[default]
    ForwardOnly,
    /// Successors snap to the tightest constraint over all of their
    /// predecessors' current dates, moving earlier as well as later.
    Bidirectional,
}

/// Configuration for recompute and cascade operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Working-day model used for all date arithmetic.
    pub calendar: Calendar,
    /// Cascade direction policy.
    pub cascade_policy: CascadePolicy,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            calendar: Calendar::Continuous,
            cascade_policy: CascadePolicy::ForwardOnly,
            verbosity: 0,
        }
    }
}
