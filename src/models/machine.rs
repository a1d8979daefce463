//! Machine model.
//!
//! A machine processes one activity at a time and keeps its own timeline
//! of committed operations. Bookings are appended in time order; the
//! booking call rejects any start time that would overlap the previous
//! booking, which keeps the mutual-exclusion invariant checkable at the
//! point of violation rather than after the fact.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// A time slot committed on a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Job owning the booked operation.
    pub job_id: usize,
    /// Operation index within the job.
    pub op_index: usize,
    /// Start time.
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

/// A machine: a resource that runs one operation at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// Unique machine identifier.
    pub id: usize,
    /// Human-readable name.
    pub name: String,
    /// Committed operations in time order.
    pub bookings: Vec<Booking>,
}

impl Machine {
    /// Creates a new machine with an empty timeline.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            name: String::new(),
            bookings: Vec::new(),
        }
    }

    /// Sets the machine name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Earliest time at which the machine is free.
    pub fn free_at(&self) -> i64 {
        self.bookings.last().map(|b| b.end).unwrap_or(0)
    }

    /// Total processing time committed on this machine.
    pub fn busy_time(&self) -> i64 {
        self.bookings.iter().map(|b| b.end - b.start).sum()
    }

    /// Commits an operation to this machine's timeline.
    ///
    /// # Errors
    /// [`SchedulerError::State`] if `start` precedes the end of the last
    /// booking (overlap) or `duration` is negative.
    pub fn book(
        &mut self,
        job_id: usize,
        op_index: usize,
        start: i64,
        duration: i64,
    ) -> Result<&Booking, SchedulerError> {
        if duration < 0 {
            return Err(SchedulerError::state(format!(
                "negative duration {duration} for operation {op_index} of job {job_id}"
            )));
        }
        let free = self.free_at();
        if start < free {
            return Err(SchedulerError::state(format!(
                "machine {} busy until t={free}, cannot start at t={start}",
                self.id
            )));
        }
        self.bookings.push(Booking {
            job_id,
            op_index,
            start,
            end: start + duration,
        });
        Ok(self.bookings.last().unwrap())
    }

    /// Drops all bookings.
    pub fn clear(&mut self) {
        self.bookings.clear();
    }
}
