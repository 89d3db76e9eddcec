use crate::{
    application::edit_application::dto::FormEvent,
    domain::application::{
        entity::{FormRecord, Position},
        errors::{DomainError, ErrorMap},
        field::Field,
    },
    infrastructure::validation::FormValidator,
};
use tracing::{debug, instrument};

/// State of one application form session: the record being edited and the
/// errors from the most recent validation pass.
///
/// Every change runs to completion through `&mut self`; a position change
/// clears inapplicable fields before the method returns, so nothing stale is
/// ever validated or rendered.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    record: FormRecord,
    errors: ErrorMap,
    validator: FormValidator,
}

impl ApplicationForm {
    pub fn new(validator: FormValidator) -> Self {
        Self {
            record: FormRecord::default(),
            errors: ErrorMap::default(),
            validator,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn position(&self) -> Position {
        self.record.applying_for()
    }

    /// Dispatches a control event to the matching operation.
    #[instrument(skip(self))]
    pub fn apply(&mut self, event: FormEvent) -> Result<(), DomainError> {
        match event {
            FormEvent::Changed { name, value } => {
                let field: Field = name.parse()?;
                self.set_field(field, value)
            }
            FormEvent::Toggled { skill } => self.toggle_skill(&skill).map(|_| ()),
        }
    }

    /// Writes a field by name. `applyingFor` goes through
    /// [`select_position`](Self::select_position).
    pub fn set_field(&mut self, field: Field, value: String) -> Result<(), DomainError> {
        match field {
            Field::ApplyingFor => {
                let position: Position = value.parse()?;
                self.select_position(position);
                Ok(())
            }
            _ => self.record.set_text(field, value),
        }
    }

    /// Changes the position and resets the fields it no longer uses.
    /// Returns the fields that were cleared.
    pub fn select_position(&mut self, position: Position) -> Vec<Field> {
        let previous = self.record.applying_for();
        let cleared = self.record.set_applying_for(position);
        if previous != position {
            debug!(from = %previous, to = %position, cleared = ?cleared, "Position changed");
        }
        cleared
    }

    /// Flips a skill checkbox; returns whether it is now checked.
    pub fn toggle_skill(&mut self, skill: &str) -> Result<bool, DomainError> {
        let checked = self.record.toggle_skill(skill)?;
        debug!(skill, checked, "Skill toggled");
        Ok(checked)
    }

    /// Runs the validator and replaces the stored errors with its result.
    pub fn validate(&mut self) -> bool {
        let outcome = self.validator.validate(&self.record);
        self.errors = outcome.errors;
        outcome.is_valid
    }
}
