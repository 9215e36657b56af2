//! Validation pass applied to every configuration record right after it is decoded.
//!
//! Violations are collected rather than returned one at a time, so an operator sees
//! every broken field of a configuration in a single run.

use std::fmt;
use std::ops::RangeInclusive;

/// The rule a configuration field violates.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ViolationKind {
    #[error("missing required field")]
    MissingRequiredField,
    #[error("value {value} is out of range, expected {expected}")]
    OutOfRangeValue {
        value: String,
        expected: &'static str,
    },
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("{value} is not a valid `{enum_name}` value")]
    InvalidEnumValue { enum_name: &'static str, value: i32 },
}

impl ViolationKind {
    /// Position of the rule in the order checks are reported in.
    fn rank(&self) -> u8 {
        match self {
            Self::MissingRequiredField => 0,
            Self::OutOfRangeValue { .. } => 1,
            Self::InvalidLength { .. } => 2,
            Self::InvalidEnumValue { .. } => 3,
        }
    }
}

/// A single broken field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Field name, dotted when the field belongs to a nested section
    /// (e.g. `state_keeper.max_gas_per_batch`).
    pub field: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.field, self.kind)
    }
}

/// Every violation found in a configuration record. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Returns `value` if nothing was found, otherwise the sorted list of violations.
    pub fn check<T>(value: T, mut found: Vec<Violation>) -> Result<T, Self> {
        if found.is_empty() {
            return Ok(value);
        }
        // Stable sort keeps field order within a rule.
        found.sort_by_key(|violation| violation.kind.rank());
        Err(Self { violations: found })
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Looks up the violation reported for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ViolationKind> {
        self.violations
            .iter()
            .find(|violation| violation.field == field)
            .map(|violation| &violation.kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "configuration has {} invalid field(s):",
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Collects violations for one record, scoped under a field-path prefix.
///
/// Only the first violation of each field is kept: once a field is known to be
/// missing, the range check that would run on its placeholder value is dropped.
#[derive(Debug)]
pub struct Checker<'a> {
    prefix: String,
    found: &'a mut Vec<Violation>,
}

impl<'a> Checker<'a> {
    pub fn new(found: &'a mut Vec<Violation>) -> Self {
        Self {
            prefix: String::new(),
            found,
        }
    }

    /// Returns a checker whose fields are reported as `<section>.<field>`.
    pub fn nested(&mut self, section: &str) -> Checker<'_> {
        Checker {
            prefix: self.path(section),
            found: &mut *self.found,
        }
    }

    fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_owned()
        } else {
            format!("{}.{field}", self.prefix)
        }
    }

    pub fn report(&mut self, field: &str, kind: ViolationKind) {
        let field = self.path(field);
        if self.found.iter().any(|violation| violation.field == field) {
            return;
        }
        self.found.push(Violation { field, kind });
    }

    pub fn missing(&mut self, field: &str) {
        self.report(field, ViolationKind::MissingRequiredField);
    }

    /// Requires a strictly positive value.
    pub fn positive<T>(&mut self, field: &str, value: T)
    where
        T: PartialOrd + Default + fmt::Display,
    {
        if value <= T::default() {
            self.report(
                field,
                ViolationKind::OutOfRangeValue {
                    value: value.to_string(),
                    expected: "a value greater than 0",
                },
            );
        }
    }

    /// Requires a value in `[0, 100]`.
    pub fn percentage(&mut self, field: &str, value: f64) {
        self.within(field, value, 0.0..=100.0, "a percentage in [0, 100]");
    }

    /// Requires a value in `[0, 1]`.
    pub fn fraction(&mut self, field: &str, value: f64) {
        self.within(field, value, 0.0..=1.0, "a fraction in [0, 1]");
    }

    // NaN is never contained in a range, so it is rejected as well.
    fn within(
        &mut self,
        field: &str,
        value: f64,
        range: RangeInclusive<f64>,
        expected: &'static str,
    ) {
        if !range.contains(&value) {
            self.report(
                field,
                ViolationKind::OutOfRangeValue {
                    value: value.to_string(),
                    expected,
                },
            );
        }
    }

    pub fn non_empty(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.report(
                field,
                ViolationKind::OutOfRangeValue {
                    value: "\"\"".to_owned(),
                    expected: "a non-empty string",
                },
            );
        }
    }
}

/// Range and consistency rules of a typed configuration record.
pub trait Validate {
    fn validate(&self, checker: &mut Checker<'_>);
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, checker: &mut Checker<'_>) {
        if let Some(inner) = self {
            inner.validate(checker);
        }
    }
}

/// Checks `record` and hands it back if every rule holds.
pub fn validate<T: Validate>(record: T) -> Result<T, ValidationErrors> {
    let mut found = Vec::new();
    record.validate(&mut Checker::new(&mut found));
    ValidationErrors::check(record, found)
}
