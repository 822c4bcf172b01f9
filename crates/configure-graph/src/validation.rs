//! Validation utilities for configure reports.

use crate::{ConfigureReport, Error};

/// Result of report validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the report is usable for ranking (no cycles).
    pub is_valid: bool,
    /// List of validation errors, if any.
    pub errors: Vec<Error>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    /// Create an invalid result with errors.
    #[must_use]
    pub fn invalid(errors: Vec<Error>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

impl ConfigureReport {
    /// Validate the report structure.
    ///
    /// A cycle means two configure methods each need the other to run first,
    /// which no ordering inside a tier can satisfy.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        match self.calculate_weights() {
            Ok(_) => ValidationResult::valid(),
            Err(error) => ValidationResult::invalid(vec![error]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgemake_model::{ConfigurePriority, ConfigureStep, ProjectDescriptor, ProjectModel};

    fn model() -> ProjectModel {
        let mut project = ProjectDescriptor::project("P");
        for name in ["A", "B"] {
            project
                .add_step(ConfigureStep::new(name, |_, _| Ok(())))
                .unwrap();
        }
        ProjectModel::new().with(project).unwrap()
    }

    #[test]
    fn test_validate_empty_report() {
        let result = ConfigureReport::new().validate();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_cyclic_report() {
        let model = model();
        let mut report = ConfigureReport::new();
        let a = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "A")
            .unwrap();
        let b = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "B")
            .unwrap();
        report.add_dependent(a, b).unwrap();
        assert!(report.validate().is_valid);

        report.add_dependent(b, a).unwrap();
        let result = report.validate();
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(result.errors[0], Error::CycleDetected { .. }));
    }
}
