//! Schedule (solution) model.
//!
//! A schedule is a complete assignment of operations to machines and time
//! slots, produced by decoding a chromosome. Decoding is deterministic, so
//! a schedule is a pure function of the genome and the problem instance.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An operation-machine-time assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Job owning the operation.
    pub job_id: usize,
    /// Operation index within the job.
    pub op_index: usize,
    /// Machine the operation runs on.
    pub machine_id: usize,
    /// Start time.
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(job_id: usize, op_index: usize, machine_id: usize, start: i64, end: i64) -> Self {
        Self {
            job_id,
            op_index,
            machine_id,
            start,
            end,
        }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A complete schedule: the decoded form of one chromosome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Operation assignments in decode order.
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Makespan: latest end time across all assignments.
    pub fn makespan(&self) -> i64 {
        self.assignments.iter().map(|a| a.end).max().unwrap_or(0)
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds the assignment for one operation.
    pub fn assignment_for(&self, job_id: usize, op_index: usize) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.job_id == job_id && a.op_index == op_index)
    }

    /// All assignments belonging to a job.
    pub fn assignments_for_job(&self, job_id: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    /// All assignments running on a machine.
    pub fn assignments_for_machine(&self, machine_id: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .collect()
    }

    /// Completion time of a job (latest end of its assignments).
    pub fn job_completion_time(&self, job_id: usize) -> Option<i64> {
        self.assignments_for_job(job_id)
            .iter()
            .map(|a| a.end)
            .max()
    }

    /// Busy-time fraction per machine, using the makespan as horizon.
    pub fn machine_utilizations(&self) -> HashMap<usize, f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return HashMap::new();
        }

        let mut busy: HashMap<usize, i64> = HashMap::new();
        for a in &self.assignments {
            *busy.entry(a.machine_id).or_insert(0) += a.duration();
        }

        busy.into_iter()
            .map(|(id, b)| (id, b as f64 / horizon as f64))
            .collect()
    }
}
