//! Form configuration loading from environment variables.
//!
//! Nothing is required; every variable has a default.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging filter, takes precedence over `FORM_LOG_FILTER`
//! - `FORM_LOG_FILTER`: Fallback logging filter (default: "info,application_form=debug")
//! - `FORM_SKILL_OPTIONS`: Comma-separated skill checkboxes (default: "JavaScript,CSS,Python")
//! - `FORM_PHONE_POLICY`: `numeric` or `digits` (default: `numeric`)

use crate::{
    domain::application::value_objects::PhonePolicy,
    infrastructure::validation::FormValidator,
};
use std::str::FromStr;

/// Skills offered as checkboxes, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog(Vec<String>);

impl SkillCatalog {
    pub fn options(&self) -> &[String] {
        &self.0
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self(
            ["JavaScript", "CSS", "Python"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

impl FromStr for SkillCatalog {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options: Vec<String> = Vec::new();
        for skill in s.split(',').map(str::trim).filter(|skill| !skill.is_empty()) {
            if !options.iter().any(|existing| existing == skill) {
                options.push(skill.to_string());
            }
        }
        if options.is_empty() {
            return Err("skill list is empty".to_string());
        }
        Ok(Self(options))
    }
}

/// Complete form configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Checkbox options for the additional skills group
    pub skill_catalog: SkillCatalog,

    /// Phone number strictness
    pub phone_policy: PhonePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info,application_form=debug".to_string(),
            skill_catalog: SkillCatalog::default(),
            phone_policy: PhonePolicy::default(),
        }
    }
}

impl Config {
    /// Loads a `.env` file if one exists, then reads the environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            log_filter: env_or("FORM_LOG_FILTER", defaults.log_filter)?,
            skill_catalog: env_or("FORM_SKILL_OPTIONS", defaults.skill_catalog)?,
            phone_policy: env_or("FORM_PHONE_POLICY", defaults.phone_policy)?,
        })
    }

    pub fn validator(&self) -> FormValidator {
        FormValidator::new(self.phone_policy)
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
