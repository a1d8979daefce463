//! Genetic-algorithm job-shop scheduler.
//!
//! Solves the Job-Shop Scheduling Problem heuristically: given jobs made
//! of ordered operations bound to specific machines, find an assignment of
//! operations to time slots that minimizes the makespan, respecting
//! intra-job operation order and one-operation-at-a-time machines.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Activity`, `Machine`, `Instance`,
//!   `Schedule`, `Assignment`, plus the decode-time `JobProgress` cursor
//! - **`ga`**: The genetic search — chromosome encoding, schedule decoder,
//!   generic generational engine, and the `GeneticScheduler` entry point
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   machines, empty jobs)
//! - **`error`**: The `SchedulerError` taxonomy
//!
//! # Example
//!
//! ```
//! use jobshop_ga::ga::GeneticScheduler;
//! use jobshop_ga::models::{Job, Machine};
//!
//! let jobs = vec![
//!     Job::new(0).with_operation(0, 3).with_operation(1, 2),
//!     Job::new(1).with_operation(1, 2).with_operation(0, 4),
//! ];
//! let machines = vec![Machine::new(0), Machine::new(1)];
//!
//! let scheduler = GeneticScheduler::new(machines, jobs).with_seed(42);
//! let outcome = scheduler.run_genetic(20, 50, false).unwrap();
//! assert_eq!(outcome.best_makespan, 7);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"
//! - Bierwirth (1995), "A generalized permutation approach to JSSP"

pub mod error;
pub mod ga;
pub mod models;
pub mod validation;

pub use error::SchedulerError;
