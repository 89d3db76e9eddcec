use application_form::domain::application::{
    entity::{FormRecord, Position},
    field::Field,
    rules,
    value_objects::{EmailAddress, PortfolioUrl},
};

#[test]
fn email_accepts_simple_local_at_domain_tld() {
    assert!(EmailAddress::new("a@b.com".to_string()).is_ok());
    assert!(EmailAddress::new("first.last+jobs@mail.example.org".to_string()).is_ok());
}

#[test]
fn email_rejects_missing_at_or_dot() {
    assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    assert!(EmailAddress::new("a@bcom".to_string()).is_err());
    assert!(EmailAddress::new("@b.com".to_string()).is_err());
}

#[test]
fn portfolio_url_requires_http_scheme_and_dot() {
    assert!(PortfolioUrl::new("http://me.dev".to_string()).is_ok());
    assert!(PortfolioUrl::new("https://behance.net/me".to_string()).is_ok());
    assert!(PortfolioUrl::new("behance.net/me".to_string()).is_err());
    assert!(PortfolioUrl::new("https://localhost".to_string()).is_err());
    assert!(PortfolioUrl::new("https://my site.com".to_string()).is_err());
}

const POSITIONS: [Position; 4] = [
    Position::Unselected,
    Position::Developer,
    Position::Designer,
    Position::Manager,
];

fn filled_for(position: Position) -> FormRecord {
    let mut record = FormRecord::new();
    record.set_applying_for(position);
    for field in rules::visible_fields(position).filter(|f| rules::is_conditional(*f)) {
        record.set_text(field, "2".to_string()).unwrap();
    }
    record
}

#[test]
fn every_role_change_clears_exactly_what_the_new_role_does_not_keep() {
    for from in POSITIONS {
        for to in POSITIONS.into_iter().filter(|to| *to != from) {
            let mut record = filled_for(from);
            record.set_applying_for(to);

            for (field, _) in rules::CONDITIONAL_FIELDS {
                let value = record.text(field).unwrap();
                let expected_kept =
                    rules::is_applicable(field, from) && rules::keeps_on_change(field, to);
                assert_eq!(
                    !value.is_empty(),
                    expected_kept,
                    "{field} after {from} -> {to}"
                );
            }
        }
    }
}

#[test]
fn relevant_experience_survives_only_a_change_to_developer() {
    let mut record = filled_for(Position::Designer);
    record.set_applying_for(Position::Developer);
    assert_eq!(record.relevant_experience(), "2");

    let mut record = filled_for(Position::Developer);
    assert_eq!(
        record.set_applying_for(Position::Designer),
        vec![Field::RelevantExperience]
    );
    assert!(record.relevant_experience().is_empty());
}

#[test]
fn field_labels_are_human_readable() {
    assert_eq!(Field::PortfolioUrl.label(), "Portfolio URL");
    assert_eq!(Field::ApplyingFor.label(), "Applying for Position");
    assert!(Field::ALL.iter().filter(|f| !f.is_text()).eq([&Field::AdditionalSkills]));
}
