use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Every input of the application form, addressed by the name the form
/// controls carry (`fullName`, `portfolioURL`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    ApplyingFor,
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl Field {
    /// Fields in display order.
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::ApplyingFor,
        Field::RelevantExperience,
        Field::PortfolioUrl,
        Field::ManagementExperience,
        Field::AdditionalSkills,
        Field::PreferredInterviewTime,
    ];

    /// Control name, as used in events and serialized records.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::ApplyingFor => "applyingFor",
            Field::RelevantExperience => "relevantExperience",
            Field::PortfolioUrl => "portfolioURL",
            Field::ManagementExperience => "managementExperience",
            Field::AdditionalSkills => "additionalSkills",
            Field::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    /// Human label used in messages and rendered controls.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::ApplyingFor => "Applying for Position",
            Field::RelevantExperience => "Relevant Experience",
            Field::PortfolioUrl => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::AdditionalSkills => "Additional Skills",
            Field::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    /// Whether the field holds free text (everything except the skill set).
    pub fn is_text(self) -> bool {
        !matches!(self, Field::AdditionalSkills)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}
