use serde_json::{json, Value};
use va_form_filler::forms::va21_0966::{
    field_schema, schema, FieldRule, FieldValue, FillError, FilledFieldMap, FormFiller,
    CHECKED_SENTINEL,
};

const COMPENSATION: &str = "F[0].#subform[1].COMPENSATION[0]";
const PENSION: &str = "F[0].#subform[1].PENSION[0]";
const SURVIVORS: &str =
    "F[0].#subform[1].SURVIVORS_PENSION_AND_OR_DEPENDENCY_AND_INDEMNITY_COMPENSATION_DIC[0]";
const EMAIL_PRIMARY: &str = "F[0].Page_1[0].EMAIL_ADDRESS[0]";
const EMAIL_LEADING: &str = "F[0].Page_1[0].EMAIL_ADDRESS[1]";

fn applicant() -> Value {
    serde_json::from_str(include_str!("fixtures/applicant.json")).expect("fixture parses")
}

fn fill(raw: &Value) -> FilledFieldMap {
    FormFiller::default().fill(raw).expect("record fills")
}

fn text<'a>(fields: &'a FilledFieldMap, identifier: &str) -> &'a str {
    fields
        .get(identifier)
        .map(FieldValue::as_str)
        .unwrap_or_else(|| panic!("{identifier} missing from output"))
}

#[test]
fn every_non_checkbox_target_is_written_once() {
    let fields = fill(&applicant());

    for entry in field_schema() {
        match entry.rule {
            FieldRule::Checkbox(_) => {}
            rule => {
                for target in rule.targets() {
                    assert!(fields.contains(target), "{target} should be written");
                }
            }
        }
    }

    let declared = schema::target_identifiers().count();
    assert_eq!(declared, 30);
    // two of the three elections are false in the fixture
    assert_eq!(fields.len(), declared - 2);
    assert!(fields.iter().all(|(identifier, _)| schema::target_identifiers()
        .any(|target| target == identifier)));
}

#[test]
fn refilling_produces_identical_output() {
    let raw = applicant();
    let first = serde_json::to_string(&fill(&raw)).expect("serializes");
    let second = serde_json::to_string(&fill(&raw)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn composite_values_are_split_into_their_groups() {
    let fields = fill(&applicant());

    let ssn = [
        "F[0].Page_1[0].Veterans_Social_SecurityNumber_FirstThreeNumbers[0]",
        "F[0].Page_1[0].Veterans_Social_SecurityNumber_SecondTwoNumbers[0]",
        "F[0].Page_1[0].VeteransSocialSecurityNumber_LastFourNumbers[0]",
    ]
    .map(|id| text(&fields, id));
    assert_eq!(ssn.join("-"), "123-45-6789");

    let phone = [
        "F[0].Page_1[0].Telephone_Number_FirstThreeNumbers[0]",
        "F[0].Page_1[0].Telephone_Number_SecondThreeNumbers[0]",
        "F[0].Page_1[0].Telephone_Number_LastFourNumbers[0]",
    ]
    .map(|id| text(&fields, id));
    assert_eq!(phone, ["515", "555", "0142"]);

    let dob = [
        "F[0].Page_1[0].DOB_Month[0]",
        "F[0].Page_1[0].DOB_Day[0]",
        "F[0].Page_1[0].DOB_Year[0]",
    ]
    .map(|id| text(&fields, id));
    assert_eq!(dob.join("/"), "03/15/1972");
}

#[test]
fn five_digit_zip_writes_explicit_empty_suffix() {
    let fields = fill(&applicant());
    assert_eq!(
        text(&fields, "F[0].Page_1[0].MailingAddress_ZIPOrPostalCode_FirstFiveNumbers[0]"),
        "50309"
    );
    assert_eq!(
        fields.get("F[0].Page_1[0].MailingAddress_ZIPOrPostalCode_LastFourNumbers[0]"),
        Some(&FieldValue::text(""))
    );
}

#[test]
fn short_email_fills_primary_field() {
    let mut raw = applicant();
    raw["veteran_info"]["email"] = json!("a@b.com");
    let fields = fill(&raw);
    assert_eq!(text(&fields, EMAIL_PRIMARY), "a@b.com");
    assert_eq!(text(&fields, EMAIL_LEADING), "");
}

#[test]
fn long_email_fills_leading_field_first() {
    let mut raw = applicant();
    let email = "firstname.last@mail.co";
    let email = format!("{email}xyz");
    assert_eq!(email.chars().count(), 25);
    raw["veteran_info"]["email"] = json!(email);

    let fields = fill(&raw);
    let leading = text(&fields, EMAIL_LEADING);
    let primary = text(&fields, EMAIL_PRIMARY);
    assert_eq!(leading, &email[..20]);
    assert_eq!(primary, &email[20..]);
    assert_eq!(primary.len(), 5);
    assert_eq!(format!("{leading}{primary}"), email);
}

#[test]
fn fixture_email_overflows() {
    let fields = fill(&applicant());
    assert_eq!(text(&fields, EMAIL_LEADING), "john.doe.veteran@exa");
    assert_eq!(text(&fields, EMAIL_PRIMARY), "mple.com");
}

#[test]
fn unchecked_elections_are_left_out() {
    let fields = fill(&applicant());
    assert_eq!(text(&fields, COMPENSATION), CHECKED_SENTINEL);
    assert!(!fields.contains(PENSION));
    assert!(!fields.contains(SURVIVORS));
    assert_eq!(fields.checked_count(), 1);
    assert!(fields.iter().all(|(_, value)| value.as_str() != "/Off"));
}

#[test]
fn all_elections_true_checks_each_box() {
    let mut raw = applicant();
    raw["benefit_election"] = json!({
        "compensation": true,
        "pension": true,
        "survivors_pension_dic": true
    });
    let fields = fill(&raw);
    for target in [COMPENSATION, PENSION, SURVIVORS] {
        assert_eq!(fields.get(target), Some(&FieldValue::Checked));
    }
    assert_eq!(fields.checked_count(), 3);
}

#[test]
fn missing_last_name_is_rejected_without_output() {
    let mut raw = applicant();
    raw["veteran_info"]
        .as_object_mut()
        .expect("veteran_info object")
        .remove("last_name");

    match FormFiller::default().fill(&raw) {
        Err(FillError::MalformedInput { path, .. }) => assert_eq!(path, "veteran_info.last_name"),
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn direct_copies_are_verbatim_including_empty_values() {
    let fields = fill(&applicant());
    assert_eq!(
        text(&fields, "F[0].Page_1[0].Mailing_Address_ApartmentOrUnitNumber[0]"),
        "Apt 4B"
    );
    assert_eq!(text(&fields, "F[0].Page_1[0].VA_File_Number[0]"), "");
    assert_eq!(
        text(
            &fields,
            "F[0].#subform[1].Name_Of_Attorney_Agent_Or_Veterans_Service_Organization_VS[0]"
        ),
        "Iowa Veterans Council"
    );
}
