//! Role-conditional fields.
//!
//! Two tables: [`CONDITIONAL_FIELDS`] decides what is shown and validated,
//! [`RESET_KEEPERS`] decides which position keeps a value across a role
//! change. They differ only for relevant experience, which Designer shows and
//! requires but does not carry over from another position.

use super::entity::Position;
use super::field::Field;

/// Conditional fields and the positions that use them. Fields not listed here
/// apply to every position.
pub const CONDITIONAL_FIELDS: [(Field, &[Position]); 3] = [
    (
        Field::RelevantExperience,
        &[Position::Developer, Position::Designer],
    ),
    (Field::PortfolioUrl, &[Position::Designer]),
    (Field::ManagementExperience, &[Position::Manager]),
];

/// Positions that keep a conditional field's value when the role changes to
/// them. Every other position empties the field.
pub const RESET_KEEPERS: [(Field, &[Position]); 3] = [
    (Field::RelevantExperience, &[Position::Developer]),
    (Field::PortfolioUrl, &[Position::Designer]),
    (Field::ManagementExperience, &[Position::Manager]),
];

pub fn is_conditional(field: Field) -> bool {
    CONDITIONAL_FIELDS.iter().any(|(f, _)| *f == field)
}

/// Whether `field` is shown and validated while applying for `position`.
pub fn is_applicable(field: Field, position: Position) -> bool {
    CONDITIONAL_FIELDS
        .iter()
        .find(|(f, _)| *f == field)
        .is_none_or(|(_, positions)| positions.contains(&position))
}

/// Conditional fields that `position` does not use.
pub fn inapplicable_fields(position: Position) -> impl Iterator<Item = Field> {
    CONDITIONAL_FIELDS
        .into_iter()
        .filter(move |(_, positions)| !positions.contains(&position))
        .map(|(field, _)| field)
}

/// Whether a change to `position` keeps the current value of `field`.
pub fn keeps_on_change(field: Field, position: Position) -> bool {
    RESET_KEEPERS
        .iter()
        .find(|(f, _)| *f == field)
        .is_none_or(|(_, positions)| positions.contains(&position))
}

/// Conditional fields emptied when the role changes to `position`.
pub fn fields_to_reset(position: Position) -> impl Iterator<Item = Field> {
    RESET_KEEPERS
        .into_iter()
        .filter(move |(_, positions)| !positions.contains(&position))
        .map(|(field, _)| field)
}

/// Fields shown while applying for `position`, in display order.
pub fn visible_fields(position: Position) -> impl Iterator<Item = Field> {
    Field::ALL
        .into_iter()
        .filter(move |field| is_applicable(*field, position))
}
