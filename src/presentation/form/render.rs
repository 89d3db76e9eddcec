use super::view::{ChoiceView, Control, FieldView, FormView};
use crate::{
    application::edit_application::use_case::ApplicationForm,
    domain::application::{
        entity::{FormRecord, Position},
        field::Field,
        rules,
    },
};

/// Builds the view for the form's current record and errors.
///
/// Conditional fields appear only while the selected position uses them.
/// `skill_options` are offered as checkboxes; a selected skill missing from
/// the list is still shown so the selection stays visible.
pub fn render_form(form: &ApplicationForm, skill_options: &[String]) -> FormView {
    let record = form.record();
    let errors = form.errors();

    let fields = rules::visible_fields(record.applying_for())
        .map(|field| FieldView {
            field,
            label: label_for(field),
            control: control_for(field, record, skill_options),
            value: match field {
                Field::AdditionalSkills => String::new(),
                _ => record.text(field).unwrap_or_default().to_string(),
            },
            placeholder: placeholder_for(field).map(str::to_string),
            error: errors.message(field),
        })
        .collect();

    FormView {
        fields,
        submit_label: "Submit".to_string(),
    }
}

fn label_for(field: Field) -> String {
    match field {
        Field::RelevantExperience => format!("{} (years)", field.label()),
        _ => field.label().to_string(),
    }
}

fn placeholder_for(field: Field) -> Option<&'static str> {
    match field {
        Field::FullName => Some("Enter Name"),
        Field::Email => Some("Enter Email"),
        Field::PhoneNumber => Some("Enter Phone No."),
        Field::RelevantExperience => Some("Experience"),
        _ => None,
    }
}

fn control_for(field: Field, record: &FormRecord, skill_options: &[String]) -> Control {
    match field {
        Field::Email => Control::Email,
        Field::RelevantExperience => Control::Number,
        Field::ManagementExperience => Control::TextArea,
        Field::PreferredInterviewTime => Control::DateTimeLocal,
        Field::ApplyingFor => Control::Select {
            options: position_options(record.applying_for()),
        },
        Field::AdditionalSkills => Control::Checkboxes {
            options: skill_choices(record, skill_options),
        },
        Field::FullName | Field::PhoneNumber | Field::PortfolioUrl => Control::Text,
    }
}

fn position_options(current: Position) -> Vec<ChoiceView> {
    std::iter::once(Position::Unselected)
        .chain(Position::SELECTABLE)
        .map(|position| ChoiceView {
            value: position.as_str().to_string(),
            label: match position {
                Position::Unselected => "Select...".to_string(),
                other => other.as_str().to_string(),
            },
            selected: position == current,
        })
        .collect()
}

fn skill_choices(record: &FormRecord, skill_options: &[String]) -> Vec<ChoiceView> {
    let extra = record
        .additional_skills()
        .iter()
        .filter(|skill| !skill_options.contains(*skill));

    skill_options
        .iter()
        .chain(extra)
        .map(|skill| ChoiceView {
            value: skill.clone(),
            label: skill.clone(),
            selected: record.has_skill(skill),
        })
        .collect()
}
