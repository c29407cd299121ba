use std::{collections::BTreeMap, fmt};

use crate::model::api::{ValidationErrorsDto, ViolationDto};

/// A single violated constraint on an input field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Name of the field as it appears in the request body.
    pub field: String,
    /// The rejected value rendered as text, empty when the value was missing.
    pub value: String,
    /// Human readable description of the constraint.
    pub reason: String,
}

impl Violation {
    pub fn message(&self) -> String {
        format!(
            "The property \"{}\" with value \"{}\" violated a requirement ({})",
            self.field, self.value, self.reason
        )
    }
}

/// Violations collected while validating a request, at most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding a single violation.
    pub fn single(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let mut errors = Self::new();
        errors.add(field, value, reason);
        errors
    }

    /// Records a violation unless the field already has one.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) {
        let field = field.into();
        if self.has_field(&field) {
            return;
        }
        self.violations.push(Violation {
            field,
            value: value.into(),
            reason: reason.into(),
        });
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn get(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn into_dto(self) -> ValidationErrorsDto {
        ValidationErrorsDto(
            self.violations
                .into_iter()
                .map(|v| {
                    let message = v.message();
                    (v.field, ViolationDto { message })
                })
                .collect::<BTreeMap<_, _>>(),
        )
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(Violation::message).collect();
        write!(f, "Validation failed: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
