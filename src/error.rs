//! Scheduler error taxonomy.
//!
//! All fallible operations in this crate return [`SchedulerError`].
//! Genome feasibility is guaranteed by construction (initialization,
//! crossover, and mutation all preserve per-job operation order), so a
//! `Precedence` error surfacing from the decoder indicates an operator
//! bug and must not be swallowed.

use thiserror::Error;

/// Errors raised by the scheduler and its domain models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// An operation was requested out of its job's required order.
    ///
    /// Fatal during decoding: the genome that produced it was not
    /// precedence-consistent, which is an invariant violation in the
    /// genetic operators, not an expected runtime condition.
    #[error("precedence violation on job {job_id}: {detail}")]
    Precedence {
        /// Job whose operation order was violated.
        job_id: usize,
        /// What was attempted.
        detail: String,
    },

    /// An entity was driven through an invalid state transition,
    /// e.g. completing a non-head operation or booking a machine
    /// slot that overlaps an earlier booking.
    #[error("invalid state: {0}")]
    State(String),

    /// Invalid genetic-algorithm parameters.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl SchedulerError {
    pub(crate) fn precedence(job_id: usize, detail: impl Into<String>) -> Self {
        Self::Precedence {
            job_id,
            detail: detail.into(),
        }
    }

    pub(crate) fn state(detail: impl Into<String>) -> Self {
        Self::State(detail.into())
    }

    pub(crate) fn configuration(detail: impl Into<String>) -> Self {
        Self::Configuration(detail.into())
    }
}
