use socios_core::{
    FieldErrorKind, FieldInputError, FormSurface, Member, MemberDraft, MemberField, MemberForm,
    Sex,
};

fn filled_form() -> MemberForm {
    let mut form = MemberForm::new();
    form.set_name("Ana");
    form.set_surname("Ruiz");
    form.set_member_number(Some(1));
    form.set_national_id("123456789");
    form.set_phone("555");
    form.set_sex(Some(Sex::Female));
    form
}

#[test]
fn filled_form_is_valid() {
    let form = filled_form();
    assert!(form.is_valid());
    assert_eq!(form.values().member_number, Some(1));
}

#[test]
fn reset_returns_default_draft() {
    let mut form = filled_form();
    form.reset();
    assert_eq!(form.values(), MemberDraft::default());
    assert!(form.values().is_empty());
    assert!(!form.is_valid());
}

#[test]
fn populate_overwrites_all_fields() {
    let mut form = filled_form();
    let member = Member::new("Luis", "Gómez", 9, "987654321", "600", Sex::Male);
    form.populate(&member);

    assert_eq!(form.values(), MemberDraft::from_member(&member));
}

#[test]
fn short_names_and_blank_phone_are_reported_together() {
    let mut form = filled_form();
    form.set_name("Al");
    form.set_surname("Li");
    form.set_phone("");

    let errors = form.values().validate().expect_err("form should be invalid");
    let fields: Vec<MemberField> = errors.iter().map(|err| err.field).collect();
    assert_eq!(
        fields,
        vec![MemberField::Name, MemberField::Surname, MemberField::Phone]
    );
    assert_eq!(
        errors.for_field(MemberField::Phone).map(|err| err.kind),
        Some(FieldErrorKind::Required)
    );
}

#[test]
fn whitespace_only_text_counts_as_present() {
    let mut form = filled_form();
    form.set_phone(" ");
    assert!(form.is_valid());
}

#[test]
fn set_text_parses_typed_fields() {
    let mut form = MemberForm::new();
    form.set_text(MemberField::MemberNumber, " 17 ").unwrap();
    form.set_text(MemberField::Sex, "m").unwrap();
    form.set_text(MemberField::Name, "Eva").unwrap();

    assert_eq!(form.draft().member_number, Some(17));
    assert_eq!(form.draft().sex, Some(Sex::Male));
    assert_eq!(form.draft().name, "Eva");

    form.set_text(MemberField::MemberNumber, "").unwrap();
    assert_eq!(form.draft().member_number, None);
}

#[test]
fn set_text_keeps_previous_value_on_bad_input() {
    let mut form = filled_form();

    let err = form
        .set_text(MemberField::MemberNumber, "abc")
        .unwrap_err();
    assert_eq!(err, FieldInputError::InvalidMemberNumber("abc".to_string()));
    assert_eq!(form.draft().member_number, Some(1));

    let err = form.set_text(MemberField::Sex, "x").unwrap_err();
    assert_eq!(err, FieldInputError::InvalidSex("x".to_string()));
    assert_eq!(form.draft().sex, Some(Sex::Female));
}

#[test]
fn to_member_rejects_invalid_draft() {
    let errors = MemberDraft::default()
        .to_member()
        .expect_err("empty draft cannot build a member");
    assert_eq!(errors.len(), 6);
}

#[test]
fn apply_to_keeps_member_id() {
    let mut member = Member::new("Ana", "Ruiz", 1, "123456789", "555", Sex::Female);
    let id = member.id;
    let mut draft = MemberDraft::from_member(&member);
    draft.name = "Anabel".to_string();
    draft.member_number = Some(5);

    draft.apply_to(&mut member).unwrap();
    assert_eq!(member.id, id);
    assert_eq!(member.name, "Anabel");
    assert_eq!(member.member_number, 5);
}
