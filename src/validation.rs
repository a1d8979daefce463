//! Input validation for job-shop instances.
//!
//! Checks structural integrity of jobs and machines before scheduling.
//! Detects:
//! - Duplicate job or machine IDs
//! - Operations referencing machines that do not exist
//! - Jobs with no operations
//! - Negative operation durations

use std::collections::HashSet;

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An operation references a machine that doesn't exist.
    UnknownMachine,
    /// A job has no operations.
    EmptyJob,
    /// An operation has a negative duration.
    NegativeDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job-shop instance.
///
/// Checks:
/// 1. No duplicate machine IDs
/// 2. No duplicate job IDs
/// 3. All jobs have at least one operation
/// 4. All operations reference existing machines
/// 5. All operation durations are non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    let mut machine_ids = HashSet::new();
    for m in &instance.machines {
        if !machine_ids.insert(m.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate machine ID: {}", m.id),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    for job in &instance.jobs {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate job ID: {}", job.id),
            ));
        }

        if job.activities.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!("job {} has no operations", job.id),
            ));
        }

        for act in &job.activities {
            if !machine_ids.contains(&act.machine_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownMachine,
                    format!(
                        "operation {} of job {} references unknown machine {}",
                        act.index, job.id, act.machine_id
                    ),
                ));
            }
            if act.duration < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!(
                        "operation {} of job {} has negative duration {}",
                        act.index, job.id, act.duration
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Machine};

    fn valid_instance() -> Instance {
        Instance::new(
            vec![
                Job::new(0).with_operation(0, 3).with_operation(1, 2),
                Job::new(1).with_operation(1, 2).with_operation(0, 4),
            ],
            vec![Machine::new(0), Machine::new(1)],
        )
    }

    #[test]
    fn test_valid_instance() {
        assert!(validate_instance(&valid_instance()).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let instance = Instance::new(
            vec![
                Job::new(0).with_operation(0, 1),
                Job::new(0).with_operation(0, 1),
            ],
            vec![Machine::new(0)],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("job")));
    }

    #[test]
    fn test_duplicate_machine_id() {
        let instance = Instance::new(
            vec![Job::new(0).with_operation(0, 1)],
            vec![Machine::new(0), Machine::new(0)],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("machine")));
    }

    #[test]
    fn test_empty_job() {
        let instance = Instance::new(vec![Job::new(0)], vec![Machine::new(0)]);
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyJob));
    }

    #[test]
    fn test_unknown_machine() {
        let instance = Instance::new(
            vec![Job::new(0).with_operation(42, 1)],
            vec![Machine::new(0)],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownMachine));
    }

    #[test]
    fn test_negative_duration() {
        let instance = Instance::new(
            vec![Job::new(0).with_operation(0, -1)],
            vec![Machine::new(0)],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration));
    }

    #[test]
    fn test_multiple_errors() {
        let instance = Instance::new(
            vec![Job::new(0), Job::new(1).with_operation(9, -2)],
            vec![],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
