//! Field constraint checks for request bodies.
//!
//! A `Validator` collects at most one violation per field; the first failing rule for
//! a field wins. Length and format rules skip missing values so that presence is only
//! reported by `not_null` / `not_blank`.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::validation::ValidationErrors;

pub const NOT_NULL: &str = "This value should not be null.";
pub const NOT_BLANK: &str = "This value should not be blank.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@\S+\.\S+$").expect("email regex is valid"));

#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must be present.
    pub fn not_null<T>(&mut self, field: &str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.errors.add(field, "", NOT_NULL);
        }
        self
    }

    /// Value must be present and contain something other than whitespace.
    pub fn not_blank(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            None => self.errors.add(field, "", NOT_BLANK),
            Some(v) if v.trim().is_empty() => self.errors.add(field, v, NOT_BLANK),
            Some(_) => {}
        }
        self
    }

    /// Value must have at least `min` characters.
    pub fn min_length(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: usize,
        message: &str,
    ) -> &mut Self {
        if let Some(v) = value {
            if v.chars().count() < min {
                self.errors.add(field, v, message);
            }
        }
        self
    }

    /// Value must have at most `max` characters.
    pub fn max_length(
        &mut self,
        field: &str,
        value: Option<&str>,
        max: usize,
        message: &str,
    ) -> &mut Self {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.errors.add(field, v, message);
            }
        }
        self
    }

    /// Value must look like `local@domain.tld`.
    pub fn email(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            if !v.is_empty() && !EMAIL_RE.is_match(v) {
                self.errors
                    .add(field, v, format!("The email '{}' is not a valid email.", v));
            }
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Like `finish`, but hands back values whose presence an earlier rule checked.
    ///
    /// `value` may only be `None` when a `not_null` rule for it has already failed.
    pub fn finish_with<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}
