use super::helpers::{apply_all, developer_events, new_form};
use application_form::{
    application::edit_application::dto::FormEvent,
    domain::application::{
        entity::Position,
        errors::{DomainError, FieldError},
        field::Field,
    },
    presentation::form::render::render_form,
};

#[test]
fn missing_full_name_is_the_only_error() {
    let mut form = new_form();
    let events = developer_events()
        .into_iter()
        .filter(|event| !matches!(event, FormEvent::Changed { name, .. } if name == "fullName"))
        .collect();
    apply_all(&mut form, events);

    assert!(!form.validate());
    assert_eq!(
        form.errors().iter().collect::<Vec<_>>(),
        vec![(Field::FullName, FieldError::Required)]
    );
}

#[test]
fn designer_to_manager_clears_portfolio_and_requires_management() {
    let mut form = new_form();
    apply_all(&mut form, developer_events());
    apply_all(
        &mut form,
        vec![
            FormEvent::changed("applyingFor", "Designer"),
            FormEvent::changed("relevantExperience", "6"),
            FormEvent::changed("portfolioURL", "https://portfolio.example.com"),
        ],
    );
    assert!(form.validate());

    form.apply(FormEvent::changed("applyingFor", "Manager")).unwrap();

    assert_eq!(form.position(), Position::Manager);
    assert!(form.record().portfolio_url().is_empty());
    assert!(form.record().relevant_experience().is_empty());
    assert!(!form.validate());
    assert_eq!(
        form.errors().fields().collect::<Vec<_>>(),
        vec![Field::ManagementExperience]
    );
}

#[test]
fn developer_to_designer_asks_for_experience_again() {
    let mut form = new_form();
    apply_all(&mut form, developer_events());

    form.apply(FormEvent::changed("applyingFor", "Designer")).unwrap();

    assert!(form.record().relevant_experience().is_empty());
    assert!(!form.validate());
    assert_eq!(
        form.errors().iter().collect::<Vec<_>>(),
        vec![
            (Field::RelevantExperience, FieldError::Required),
            (Field::PortfolioUrl, FieldError::Required),
        ]
    );
    assert!(render_form(&form, &[]).shows(Field::RelevantExperience));
}

#[test]
fn clearing_position_hides_and_skips_conditional_fields() {
    let mut form = new_form();
    apply_all(&mut form, developer_events());
    form.apply(FormEvent::changed("applyingFor", "")).unwrap();

    assert!(form.record().relevant_experience().is_empty());
    assert!(form.validate());

    let view = render_form(&form, &["JavaScript".to_string()]);
    assert!(!view.shows(Field::RelevantExperience));
    assert!(
        form.apply(FormEvent::changed("relevantExperience", "5"))
            .is_err_and(|e| matches!(e, DomainError::NotApplicable { .. }))
    );
}

#[test]
fn toggling_a_skill_twice_is_idempotent() {
    let mut form = new_form();
    apply_all(&mut form, vec![FormEvent::toggled("CSS")]);
    let before = form.record().additional_skills().clone();

    apply_all(
        &mut form,
        vec![FormEvent::toggled("Python"), FormEvent::toggled("Python")],
    );

    assert_eq!(form.record().additional_skills(), &before);
}

#[test]
fn fixing_input_clears_errors_on_next_pass() {
    let mut form = new_form();
    apply_all(&mut form, developer_events());
    form.apply(FormEvent::changed("email", "not-an-email")).unwrap();

    assert!(!form.validate());
    assert_eq!(form.errors().get(Field::Email), Some(FieldError::Invalid));

    form.apply(FormEvent::changed("email", "")).unwrap();
    form.validate();
    assert_eq!(form.errors().get(Field::Email), Some(FieldError::Required));

    form.apply(FormEvent::changed("email", "a@b.com")).unwrap();
    assert!(form.validate());
    assert!(form.errors().is_empty());
}

#[test]
fn events_deserialize_from_tagged_json() {
    let events: Vec<FormEvent> = serde_json::from_str(
        r#"[
            {"type": "changed", "name": "applyingFor", "value": "Designer"},
            {"type": "toggled", "skill": "CSS"}
        ]"#,
    )
    .unwrap();

    let mut form = new_form();
    apply_all(&mut form, events);
    assert_eq!(form.position(), Position::Designer);
    assert!(form.record().has_skill("CSS"));
}
