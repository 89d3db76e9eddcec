use application_form::{
    application::edit_application::{dto::FormEvent, use_case::ApplicationForm},
    domain::application::entity::FormRecord,
    infrastructure::validation::FormValidator,
};

/// Fresh form with the default validator.
pub fn new_form() -> ApplicationForm {
    ApplicationForm::new(FormValidator::default())
}

/// Applies control events in order, failing the test on the first rejection.
pub fn apply_all(form: &mut ApplicationForm, events: Vec<FormEvent>) {
    for event in events {
        let description = format!("{event:?}");
        form.apply(event)
            .unwrap_or_else(|e| panic!("event {description} rejected: {e}"));
    }
}

/// Events for a complete, valid developer application.
pub fn developer_events() -> Vec<FormEvent> {
    vec![
        FormEvent::changed("fullName", "Linus Torvalds"),
        FormEvent::changed("email", "linus@example.org"),
        FormEvent::changed("phoneNumber", "123"),
        FormEvent::changed("applyingFor", "Developer"),
        FormEvent::changed("relevantExperience", "2"),
        FormEvent::toggled("JavaScript"),
        FormEvent::changed("preferredInterviewTime", "2024-01-01T10:00"),
    ]
}

/// The record `developer_events` should produce.
pub fn developer_record() -> FormRecord {
    let mut form = new_form();
    apply_all(&mut form, developer_events());
    form.record().clone()
}
