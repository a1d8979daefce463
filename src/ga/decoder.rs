//! Schedule decoder: chromosome → machine timings → makespan.
//!
//! # Algorithm
//!
//! Walks the genome gene by gene. Each gene names a job; the job's current
//! (first unscheduled) operation is scheduled at
//! `max(job ready time, machine free time)`, the machine timeline is
//! booked, and the job cursor advances. The makespan is the latest end
//! time over all machines.
//!
//! Decoding is deterministic — no randomness is consumed — and linear in
//! the total number of operations. Genome feasibility is an encoding
//! invariant, so any precedence error raised here signals an operator bug
//! and is propagated loudly rather than repaired.
//!
//! # Reference
//! Giffler & Thompson (1960), "Algorithms for Solving Production-Scheduling
//! Problems"

use std::collections::HashMap;

use super::chromosome::Chromosome;
use crate::error::SchedulerError;
use crate::models::{Assignment, Instance, JobProgress, Machine, Schedule};

/// Decodes a chromosome into a concrete schedule.
///
/// Each call operates on fresh per-job cursors and fresh machine
/// timelines, so no evaluation observes another's partial state.
///
/// # Errors
/// - [`SchedulerError::Precedence`] if a gene names a job with no
///   remaining operations, or a job is left unfinished at the end.
/// - [`SchedulerError::State`] if a gene names an unknown job or machine.
pub fn decode(instance: &Instance, chromosome: &Chromosome) -> Result<Schedule, SchedulerError> {
    let mut progress: HashMap<usize, JobProgress> = instance
        .jobs
        .iter()
        .map(|j| (j.id, JobProgress::new(j)))
        .collect();
    let mut machines: HashMap<usize, Machine> = instance
        .machines
        .iter()
        .map(|m| (m.id, Machine::new(m.id)))
        .collect();
    let mut job_ready: HashMap<usize, i64> = HashMap::new();

    let mut schedule = Schedule::new();
    for &gene in &chromosome.genes {
        let job = instance
            .job(gene)
            .ok_or_else(|| SchedulerError::state(format!("genome references unknown job {gene}")))?;
        let cursor = progress
            .get_mut(&gene)
            .expect("progress entry exists for every instance job");

        let op_index = cursor.current_index()?;
        let activity = job.operation(op_index).ok_or_else(|| {
            SchedulerError::precedence(gene, format!("job has no operation {op_index}"))
        })?;

        let machine = machines.get_mut(&activity.machine_id).ok_or_else(|| {
            SchedulerError::state(format!(
                "operation {op_index} of job {gene} references unknown machine {}",
                activity.machine_id
            ))
        })?;

        let ready = job_ready.get(&gene).copied().unwrap_or(0);
        let start = ready.max(machine.free_at());
        let booking = machine.book(gene, op_index, start, activity.duration)?;
        let end = booking.end;

        schedule.add_assignment(Assignment::new(gene, op_index, activity.machine_id, start, end));
        job_ready.insert(gene, end);
        cursor.complete(op_index)?;
    }

    // A valid genome schedules every operation; anything less is a bug.
    for cursor in progress.values() {
        if !cursor.is_done() {
            return Err(SchedulerError::precedence(
                cursor.job_id(),
                format!(
                    "genome exhausted with {} operation(s) unscheduled",
                    instance
                        .job(cursor.job_id())
                        .map(|j| j.operation_count() - cursor.completed())
                        .unwrap_or(0)
                ),
            ));
        }
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// J0 = [(M0,3),(M1,2)], J1 = [(M1,2),(M0,4)]: optimum makespan 7.
    fn toy_instance() -> Instance {
        Instance::new(
            vec![
                Job::new(0).with_operation(0, 3).with_operation(1, 2),
                Job::new(1).with_operation(1, 2).with_operation(0, 4),
            ],
            vec![Machine::new(0), Machine::new(1)],
        )
    }

    #[test]
    fn test_decode_known_timings() {
        let instance = toy_instance();
        let ch = Chromosome::from_genes(vec![0, 1, 0, 1]);
        let schedule = decode(&instance, &ch).unwrap();

        // J0/op0 on M0 at [0,3), J1/op0 on M1 at [0,2),
        // J0/op1 on M1 at [3,5), J1/op1 on M0 at [3,7).
        assert_eq!(
            schedule.assignment_for(0, 0).unwrap(),
            &Assignment::new(0, 0, 0, 0, 3)
        );
        assert_eq!(
            schedule.assignment_for(1, 0).unwrap(),
            &Assignment::new(1, 0, 1, 0, 2)
        );
        assert_eq!(
            schedule.assignment_for(0, 1).unwrap(),
            &Assignment::new(0, 1, 1, 3, 5)
        );
        assert_eq!(
            schedule.assignment_for(1, 1).unwrap(),
            &Assignment::new(1, 1, 0, 3, 7)
        );
        assert_eq!(schedule.makespan(), 7);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let instance = toy_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let ch = Chromosome::random(&instance.jobs, &mut rng);
            let first = decode(&instance, &ch).unwrap();
            let second = decode(&instance, &ch).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.makespan(), second.makespan());
        }
    }

    #[test]
    fn test_random_genomes_decode_without_error() {
        let instance = Instance::new(
            vec![
                Job::new(0).with_operation(0, 3).with_operation(1, 2),
                Job::new(1).with_operation(1, 2).with_operation(0, 4),
                Job::new(2)
                    .with_operation(0, 5)
                    .with_operation(1, 1)
                    .with_operation(0, 2),
            ],
            vec![Machine::new(0), Machine::new(1)],
        );
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let ch = Chromosome::random(&instance.jobs, &mut rng);
            let schedule = decode(&instance, &ch).unwrap();
            assert_eq!(schedule.assignment_count(), instance.total_operations());
        }
    }

    #[test]
    fn test_makespan_never_below_lower_bound() {
        let instance = toy_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        let bound = instance.lower_bound();
        for _ in 0..100 {
            let ch = Chromosome::random(&instance.jobs, &mut rng);
            let schedule = decode(&instance, &ch).unwrap();
            assert!(schedule.makespan() >= bound);
        }
    }

    #[test]
    fn test_intra_job_order_respected() {
        let instance = toy_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let ch = Chromosome::random(&instance.jobs, &mut rng);
            let schedule = decode(&instance, &ch).unwrap();
            for job in &instance.jobs {
                let first = schedule.assignment_for(job.id, 0).unwrap();
                let second = schedule.assignment_for(job.id, 1).unwrap();
                assert!(second.start >= first.end);
            }
        }
    }

    #[test]
    fn test_machines_never_overlap() {
        let instance = toy_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let ch = Chromosome::random(&instance.jobs, &mut rng);
            let schedule = decode(&instance, &ch).unwrap();
            for machine in &instance.machines {
                let mut on_machine = schedule.assignments_for_machine(machine.id);
                on_machine.sort_by_key(|a| a.start);
                for pair in on_machine.windows(2) {
                    assert!(pair[1].start >= pair[0].end);
                }
            }
        }
    }

    #[test]
    fn test_overlong_genome_is_precedence_error() {
        let instance = toy_instance();
        // Job 0 appears three times but has only two operations.
        let ch = Chromosome::from_genes(vec![0, 0, 0, 1]);
        let err = decode(&instance, &ch).unwrap_err();
        assert!(matches!(err, SchedulerError::Precedence { job_id: 0, .. }));
    }

    #[test]
    fn test_short_genome_is_precedence_error() {
        let instance = toy_instance();
        let ch = Chromosome::from_genes(vec![0, 1]);
        let err = decode(&instance, &ch).unwrap_err();
        assert!(matches!(err, SchedulerError::Precedence { .. }));
    }

    #[test]
    fn test_unknown_job_is_state_error() {
        let instance = toy_instance();
        let ch = Chromosome::from_genes(vec![0, 1, 9, 1]);
        let err = decode(&instance, &ch).unwrap_err();
        assert!(matches!(err, SchedulerError::State(_)));
    }
}
