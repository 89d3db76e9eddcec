use crate::domain::application::{
    entity::FormRecord,
    errors::{ErrorMap, FieldError},
    field::Field,
    rules,
    value_objects::{EmailAddress, PhonePolicy, PortfolioUrl, numeric_value},
};
use tracing::{debug, instrument};

/// Checks a [`FormRecord`] against the field rules for its selected position.
///
/// Every rule runs on every pass; a failing field never hides failures in
/// another one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    phone_policy: PhonePolicy,
}

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: ErrorMap,
}

impl FormValidator {
    pub fn new(phone_policy: PhonePolicy) -> Self {
        Self { phone_policy }
    }

    pub fn phone_policy(&self) -> PhonePolicy {
        self.phone_policy
    }

    #[instrument(skip_all, fields(position = %record.applying_for()))]
    pub fn validate(&self, record: &FormRecord) -> ValidationOutcome {
        let position = record.applying_for();
        let mut errors = ErrorMap::new();

        let checks = [
            (Field::FullName, check_required(record.full_name())),
            (Field::Email, check_email(record.email())),
            (Field::PhoneNumber, self.check_phone(record.phone_number())),
            (
                Field::RelevantExperience,
                check_experience(record.relevant_experience()),
            ),
            (Field::PortfolioUrl, check_portfolio(record.portfolio_url())),
            (
                Field::ManagementExperience,
                check_required(record.management_experience()),
            ),
            (
                Field::AdditionalSkills,
                record
                    .additional_skills()
                    .is_empty()
                    .then_some(FieldError::Required),
            ),
            (
                Field::PreferredInterviewTime,
                check_required(record.preferred_interview_time()),
            ),
        ];

        for (field, failure) in checks {
            if !rules::is_applicable(field, position) {
                continue;
            }
            if let Some(error) = failure {
                errors.insert(field, error);
            }
        }

        let is_valid = errors.is_empty();
        if is_valid {
            debug!("Application form passed validation");
        } else {
            debug!(failed = ?errors.fields().collect::<Vec<_>>(), "Application form failed validation");
        }

        ValidationOutcome { is_valid, errors }
    }

    fn check_phone(&self, value: &str) -> Option<FieldError> {
        if value.trim().is_empty() {
            Some(FieldError::Required)
        } else if !self.phone_policy.accepts(value) {
            Some(FieldError::InvalidFormat)
        } else {
            None
        }
    }
}

fn check_required(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if EmailAddress::new(value.to_string()).is_err() {
        Some(FieldError::Invalid)
    } else {
        None
    }
}

// Only an empty string counts as missing; whitespace coerces to 0. Text that
// is not a number at all compares false with zero and passes.
fn check_experience(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    match numeric_value(value) {
        Some(years) if years <= 0.0 => Some(FieldError::MustBePositive),
        _ => None,
    }
}

fn check_portfolio(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if PortfolioUrl::new(value.to_string()).is_err() {
        Some(FieldError::Invalid)
    } else {
        None
    }
}
