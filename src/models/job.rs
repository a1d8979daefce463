//! Job model and decode-time progress cursor.
//!
//! A job is an ordered sequence of activities with strict precedence:
//! operation `k` cannot start before operation `k-1` completes. The job
//! itself is immutable after construction; [`JobProgress`] tracks which
//! operation is current during one schedule decoding and is reset (rebuilt)
//! for every chromosome evaluation.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

use super::Activity;
use crate::error::SchedulerError;

/// A job to be scheduled: an ordered sequence of activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: usize,
    /// Human-readable name.
    pub name: String,
    /// Operations in precedence order.
    pub activities: Vec<Activity>,
}

impl Job {
    /// Creates a new job with the given ID.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            name: String::new(),
            activities: Vec::new(),
        }
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends an operation; its index is its position in the sequence.
    pub fn with_operation(mut self, machine_id: usize, duration: i64) -> Self {
        let index = self.activities.len();
        self.activities
            .push(Activity::new(self.id, index, machine_id, duration));
        self
    }

    /// Returns the operation at position `index`.
    pub fn operation(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    /// Number of operations.
    pub fn operation_count(&self) -> usize {
        self.activities.len()
    }

    /// Total processing duration across all operations.
    pub fn total_duration(&self) -> i64 {
        self.activities.iter().map(|a| a.duration).sum()
    }
}

/// Lifecycle state of a job within one decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    /// No operation scheduled yet.
    Pending,
    /// Some, but not all, operations scheduled.
    InProgress,
    /// Every operation scheduled.
    Done,
}

/// Cursor over a job's operation sequence during schedule decoding.
///
/// Enforces the job-side precedence contract: only the current (head)
/// operation may be completed, and a done job has no current operation.
#[derive(Debug, Clone)]
pub struct JobProgress {
    job_id: usize,
    operation_count: usize,
    next_op: usize,
    state: JobState,
}

impl JobProgress {
    /// Creates a fresh cursor positioned at the job's first operation.
    pub fn new(job: &Job) -> Self {
        let operation_count = job.operation_count();
        Self {
            job_id: job.id,
            operation_count,
            next_op: 0,
            state: if operation_count == 0 {
                JobState::Done
            } else {
                JobState::Pending
            },
        }
    }

    /// The job this cursor tracks.
    pub fn job_id(&self) -> usize {
        self.job_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Whether every operation has been scheduled.
    pub fn is_done(&self) -> bool {
        self.state == JobState::Done
    }

    /// Number of operations already completed.
    pub fn completed(&self) -> usize {
        self.next_op
    }

    /// Index of the current (next unscheduled) operation.
    ///
    /// # Errors
    /// [`SchedulerError::Precedence`] if the job has no remaining operations.
    pub fn current_index(&self) -> Result<usize, SchedulerError> {
        if self.is_done() {
            return Err(SchedulerError::precedence(
                self.job_id,
                "no remaining operations",
            ));
        }
        Ok(self.next_op)
    }

    /// Marks the operation at `op_index` complete and advances the cursor.
    ///
    /// # Errors
    /// [`SchedulerError::State`] if `op_index` is not the current head;
    /// the cursor is left untouched in that case.
    pub fn complete(&mut self, op_index: usize) -> Result<(), SchedulerError> {
        if self.is_done() || op_index != self.next_op {
            return Err(SchedulerError::state(format!(
                "cannot complete operation {op_index} of job {}: current operation is {}",
                self.job_id,
                if self.is_done() {
                    "none (job done)".to_string()
                } else {
                    self.next_op.to_string()
                }
            )));
        }
        self.next_op += 1;
        self.state = if self.next_op == self.operation_count {
            JobState::Done
        } else {
            JobState::InProgress
        };
        Ok(())
    }

    /// Rewinds the cursor to the first operation.
    pub fn reset(&mut self) {
        self.next_op = 0;
        self.state = if self.operation_count == 0 {
            JobState::Done
        } else {
            JobState::Pending
        };
    }
}
