use super::errors::DomainError;
use super::field::Field;
use super::rules;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Role selected in the "Applying for Position" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Position {
    #[default]
    #[serde(rename = "")]
    Unselected,
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const SELECTABLE: [Position; 3] =
        [Position::Developer, Position::Designer, Position::Manager];

    /// Select option value; `""` when nothing is selected.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Unselected => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unselected => f.write_str("no position"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Position::Unselected),
            "Developer" => Ok(Position::Developer),
            "Designer" => Ok(Position::Designer),
            "Manager" => Ok(Position::Manager),
            other => Err(DomainError::UnknownPosition(other.to_string())),
        }
    }
}

/// Field values of one application, exactly as entered.
///
/// # Invariants
/// - A conditional field (see [`rules::CONDITIONAL_FIELDS`]) holds a value only
///   while `applying_for` is one of the positions it applies to.
/// - Changing `applying_for` empties every field [`rules::fields_to_reset`]
///   names for the new position.
/// - `additional_skills` never contains a blank name.
///
/// Fields are private so every write goes through the checked setters; a
/// deserialized record is checked the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    full_name: String,
    email: String,
    phone_number: String,
    applying_for: Position,
    relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    portfolio_url: String,
    management_experience: String,
    additional_skills: BTreeSet<String>,
    preferred_interview_time: String,
}

/// Unchecked wire shape of [`FormRecord`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFormRecord {
    full_name: String,
    email: String,
    phone_number: String,
    applying_for: Position,
    relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    portfolio_url: String,
    management_experience: String,
    additional_skills: BTreeSet<String>,
    preferred_interview_time: String,
}

impl TryFrom<RawFormRecord> for FormRecord {
    type Error = DomainError;

    fn try_from(raw: RawFormRecord) -> Result<Self, Self::Error> {
        if let Some(blank) = raw.additional_skills.iter().find(|s| s.trim().is_empty()) {
            return Err(DomainError::InvalidSkill(blank.clone()));
        }
        let record = Self {
            full_name: raw.full_name,
            email: raw.email,
            phone_number: raw.phone_number,
            applying_for: raw.applying_for,
            relevant_experience: raw.relevant_experience,
            portfolio_url: raw.portfolio_url,
            management_experience: raw.management_experience,
            additional_skills: raw.additional_skills,
            preferred_interview_time: raw.preferred_interview_time,
        };
        for field in rules::inapplicable_fields(record.applying_for) {
            if !record.text(field)?.is_empty() {
                return Err(DomainError::NotApplicable {
                    field,
                    position: record.applying_for,
                });
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for FormRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFormRecord::deserialize(deserializer)?;
        FormRecord::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn applying_for(&self) -> Position {
        self.applying_for
    }

    pub fn relevant_experience(&self) -> &str {
        &self.relevant_experience
    }

    pub fn portfolio_url(&self) -> &str {
        &self.portfolio_url
    }

    pub fn management_experience(&self) -> &str {
        &self.management_experience
    }

    pub fn additional_skills(&self) -> &BTreeSet<String> {
        &self.additional_skills
    }

    pub fn preferred_interview_time(&self) -> &str {
        &self.preferred_interview_time
    }

    /// Current text of a text field. `applyingFor` yields the option value.
    pub fn text(&self, field: Field) -> Result<&str, DomainError> {
        let text: &str = match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::ApplyingFor => self.applying_for.as_str(),
            Field::RelevantExperience => &self.relevant_experience,
            Field::PortfolioUrl => &self.portfolio_url,
            Field::ManagementExperience => &self.management_experience,
            Field::PreferredInterviewTime => &self.preferred_interview_time,
            Field::AdditionalSkills => return Err(DomainError::NotTextField(field)),
        };
        Ok(text)
    }

    fn text_mut(&mut self, field: Field) -> Result<&mut String, DomainError> {
        Ok(match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::RelevantExperience => &mut self.relevant_experience,
            Field::PortfolioUrl => &mut self.portfolio_url,
            Field::ManagementExperience => &mut self.management_experience,
            Field::PreferredInterviewTime => &mut self.preferred_interview_time,
            Field::ApplyingFor | Field::AdditionalSkills => {
                return Err(DomainError::NotTextField(field));
            }
        })
    }

    /// Writes a plain text field. Fields hidden for the current position
    /// cannot be written.
    pub fn set_text(&mut self, field: Field, value: String) -> Result<(), DomainError> {
        if !rules::is_applicable(field, self.applying_for) {
            return Err(DomainError::NotApplicable {
                field,
                position: self.applying_for,
            });
        }
        *self.text_mut(field)? = value;
        Ok(())
    }

    /// Role-change transition: records the new position and empties every
    /// conditional field the new position does not keep. Relevant experience
    /// survives only a change to Developer. Returns the fields that were
    /// cleared.
    pub fn set_applying_for(&mut self, position: Position) -> Vec<Field> {
        if self.applying_for == position {
            return Vec::new();
        }
        self.applying_for = position;

        let mut cleared = Vec::new();
        for field in rules::fields_to_reset(position) {
            if let Ok(value) = self.text_mut(field) {
                if !value.is_empty() {
                    value.clear();
                    cleared.push(field);
                }
            }
        }
        cleared
    }

    /// Adds the skill if absent, removes it if present. Returns whether the
    /// skill is selected afterwards.
    pub fn toggle_skill(&mut self, skill: &str) -> Result<bool, DomainError> {
        if skill.trim().is_empty() {
            return Err(DomainError::InvalidSkill(skill.to_string()));
        }
        if self.additional_skills.remove(skill) {
            Ok(false)
        } else {
            self.additional_skills.insert(skill.to_string());
            Ok(true)
        }
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.additional_skills.contains(skill)
    }
}
