use crate::domain::application::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Everything a front end needs to draw the form in its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: Field,
    pub label: String,
    pub control: Control,
    /// Current text; empty for checkbox groups, whose state lives in the options.
    pub value: String,
    pub placeholder: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    Text,
    Email,
    Number,
    Select { options: Vec<ChoiceView> },
    TextArea,
    Checkboxes { options: Vec<ChoiceView> },
    DateTimeLocal,
}

/// One select option or checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl FormView {
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    pub fn shows(&self, field: Field) -> bool {
        self.field(field).is_some()
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for view in &self.fields {
            write!(f, "{}: ", view.label)?;
            match &view.control {
                Control::Select { options } => {
                    let current = options
                        .iter()
                        .find(|option| option.selected)
                        .map_or("", |option| option.label.as_str());
                    write!(f, "<{current}>")?;
                }
                Control::Checkboxes { options } => {
                    let boxes: Vec<String> = options
                        .iter()
                        .map(|option| {
                            let mark = if option.selected { 'x' } else { ' ' };
                            format!("[{mark}] {}", option.label)
                        })
                        .collect();
                    f.write_str(&boxes.join(" "))?;
                }
                _ => match (&view.placeholder, view.value.is_empty()) {
                    (Some(placeholder), true) => write!(f, "[{placeholder}]")?,
                    _ => write!(f, "[{}]", view.value)?,
                },
            }
            writeln!(f)?;
            if let Some(error) = &view.error {
                writeln!(f, "  ! {error}")?;
            }
        }
        write!(f, "({})", self.submit_label)
    }
}
