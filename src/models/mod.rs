//! Job-shop domain models.
//!
//! Core data types for representing job-shop scheduling problems and
//! solutions:
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Activity`] | One operation: a job/machine/duration tuple |
//! | [`Job`] | Ordered operation sequence with precedence |
//! | [`JobProgress`] | Per-decode cursor enforcing the job contract |
//! | [`Machine`] | One-at-a-time resource with a booking timeline |
//! | [`Instance`] | The jobs + machines a scheduler consumes |
//! | [`Schedule`] | A decoded solution: assignments and makespan |

mod activity;
mod instance;
mod job;
mod machine;
mod schedule;

pub use activity::Activity;
pub use instance::Instance;
pub use job::{Job, JobProgress, JobState};
pub use machine::{Booking, Machine};
pub use schedule::{Assignment, Schedule};
