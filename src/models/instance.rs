//! Problem instance: the jobs and machines the scheduler consumes.
//!
//! The instance is the already-validated structure produced by an external
//! parser. It owns the job and machine lists and answers the aggregate
//! queries the encoder and tests need: total operation count, widest job,
//! and the classic makespan lower bound.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Job, Machine};

/// A job-shop problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Jobs to schedule.
    pub jobs: Vec<Job>,
    /// Available machines.
    pub machines: Vec<Machine>,
}

impl Instance {
    /// Creates a new instance.
    pub fn new(jobs: Vec<Job>, machines: Vec<Machine>) -> Self {
        Self { jobs, machines }
    }

    /// Looks up a job by ID.
    pub fn job(&self, id: usize) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Looks up a machine by ID.
    pub fn machine(&self, id: usize) -> Option<&Machine> {
        self.machines.iter().find(|m| m.id == id)
    }

    /// Total number of operations across all jobs.
    pub fn total_operations(&self) -> usize {
        self.jobs.iter().map(|j| j.operation_count()).sum()
    }

    /// Maximum number of operations in any single job (encoding width).
    pub fn max_operations(&self) -> usize {
        self.jobs
            .iter()
            .map(|j| j.operation_count())
            .max()
            .unwrap_or(0)
    }

    /// Classic makespan lower bound.
    ///
    /// No schedule can finish before the longest job's total processing
    /// time, nor before the total work assigned to the busiest machine.
    pub fn lower_bound(&self) -> i64 {
        let job_bound = self
            .jobs
            .iter()
            .map(|j| j.total_duration())
            .max()
            .unwrap_or(0);

        let mut machine_load: HashMap<usize, i64> = HashMap::new();
        for job in &self.jobs {
            for act in &job.activities {
                *machine_load.entry(act.machine_id).or_insert(0) += act.duration;
            }
        }
        let machine_bound = machine_load.into_values().max().unwrap_or(0);

        job_bound.max(machine_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// J1 = [(M0,3),(M1,2)], J2 = [(M1,2),(M0,4)]: optimum makespan 7.
    fn toy_instance() -> Instance {
        let jobs = vec![
            Job::new(0).with_operation(0, 3).with_operation(1, 2),
            Job::new(1).with_operation(1, 2).with_operation(0, 4),
        ];
        let machines = vec![Machine::new(0), Machine::new(1)];
        Instance::new(jobs, machines)
    }

    #[test]
    fn test_lookups() {
        let inst = toy_instance();
        assert_eq!(inst.job(1).unwrap().operation_count(), 2);
        assert!(inst.job(9).is_none());
        assert_eq!(inst.machine(0).unwrap().id, 0);
        assert!(inst.machine(9).is_none());
    }

    #[test]
    fn test_operation_counts() {
        let inst = toy_instance();
        assert_eq!(inst.total_operations(), 4);
        assert_eq!(inst.max_operations(), 2);
    }

    #[test]
    fn test_lower_bound() {
        let inst = toy_instance();
        // Job sums: 5 and 6. Machine loads: M0 = 3 + 4 = 7, M1 = 2 + 2 = 4.
        assert_eq!(inst.lower_bound(), 7);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(vec![], vec![]);
        assert_eq!(inst.total_operations(), 0);
        assert_eq!(inst.max_operations(), 0);
        assert_eq!(inst.lower_bound(), 0);
    }
}
