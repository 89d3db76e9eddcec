use super::entity::Position;
use super::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use ts_rs::TS;

/// Misuse of the form API or a failed hand-off. User input problems are never
/// reported here; they land in an [`ErrorMap`].
#[derive(Debug, Error, Serialize, Deserialize, TS, PartialEq)]
#[ts(export)]
pub enum DomainError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Unknown position: {0}")]
    UnknownPosition(String),
    #[error("Field {field} is not applicable while applying for {position}")]
    NotApplicable { field: Field, position: Position },
    #[error("Field {0} does not accept text")]
    NotTextField(Field),
    #[error("Invalid skill name: {0:?}")]
    InvalidSkill(String),
    #[error("Submission delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FieldError {
    Required,
    Invalid,
    InvalidFormat,
    MustBePositive,
}

impl FieldError {
    /// Message shown next to the control for `field`.
    pub fn message(self, field: Field) -> String {
        let label = field.label();
        match (self, field) {
            (FieldError::Required, Field::AdditionalSkills) => {
                "At least one skill must be selected".to_string()
            }
            (FieldError::Required, _) => format!("{label} is required"),
            (FieldError::Invalid, _) => format!("{label} is invalid"),
            (FieldError::InvalidFormat, _) => format!("{label} must be a valid number"),
            (FieldError::MustBePositive, _) => format!("{label} must be greater than 0"),
        }
    }
}

/// Per-field validation failures for one pass over the record.
///
/// A field carries at most one error; inserting again replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Rendered messages keyed by field.
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.iter()
            .map(|(field, error)| (field, error.message(field)))
            .collect()
    }
}

impl FromIterator<(Field, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
