//! Activity (operation) model.
//!
//! An activity is the smallest schedulable unit of work: one processing
//! step of a job, bound to a specific machine for a fixed duration.
//! Activities are immutable values — completion is tracked by a per-decode
//! cursor on [`JobProgress`](super::JobProgress), never on the activity
//! itself, so many chromosome evaluations can reference the same problem
//! data without aliasing.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

use serde::{Deserialize, Serialize};

/// An activity (operation) to be scheduled.
///
/// The `index` is the activity's position within its job; operation `k`
/// of a job cannot start before operation `k-1` finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Parent job identifier.
    pub job_id: usize,
    /// Position within the job (0-indexed).
    pub index: usize,
    /// Machine this operation must run on.
    pub machine_id: usize,
    /// Processing time in scheduling time units (non-negative).
    pub duration: i64,
}

impl Activity {
    /// Creates a new activity.
    pub fn new(job_id: usize, index: usize, machine_id: usize, duration: i64) -> Self {
        Self {
            job_id,
            index,
            machine_id,
            duration,
        }
    }
}
