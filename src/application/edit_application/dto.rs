use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Input coming from the form controls.
///
/// `Changed` covers text inputs and the position select, addressed by control
/// name; `Toggled` is a skill checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    Changed { name: String, value: String },
    Toggled { skill: String },
}

impl FormEvent {
    pub fn changed(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormEvent::Changed {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn toggled(skill: impl Into<String>) -> Self {
        FormEvent::Toggled {
            skill: skill.into(),
        }
    }
}
