use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::fields::FilledFieldMap;
use super::record::{ApplicantRecord, Attribute, AttributeValue};
use super::{schema, transform, validator, FillError};
use crate::forms::writer::FormWriter;

/// Where the signature date comes from when the record leaves it empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SigningDate {
    /// An empty date is malformed input.
    #[default]
    Required,
    On(NaiveDate),
    /// The local date at the moment of filling.
    Today,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOptions {
    pub signing_date: SigningDate,
}

/// Field assignments for one record plus the file name the filled PDF should take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilledForm {
    pub output_file_name: String,
    pub fields: FilledFieldMap,
}

/// Expands applicant records into [`FilledFieldMap`]s.
///
/// Holds no mutable state; share one instance across threads freely.
#[derive(Debug, Clone, Default)]
pub struct FormFiller {
    options: FillOptions,
}

impl FormFiller {
    pub fn new(options: FillOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FillOptions {
        self.options
    }

    /// Validates an untyped record and expands it.
    pub fn fill(&self, raw: &Value) -> Result<FilledFieldMap, FillError> {
        self.prepare(raw).map(|form| form.fields)
    }

    pub fn fill_record(&self, record: &ApplicantRecord) -> Result<FilledFieldMap, FillError> {
        validator::validate_record(record)?;
        self.expand(record)
    }

    pub fn prepare(&self, raw: &Value) -> Result<FilledForm, FillError> {
        let record = validator::validate(raw)?;
        let fields = self.expand(&record)?;
        Ok(FilledForm {
            output_file_name: record.output_file_name(),
            fields,
        })
    }

    /// Fills `raw` and hands the map to `writer`, targeting `output_dir`.
    /// Returns the form and the location the writer reported.
    pub fn fill_into<W: FormWriter + ?Sized>(
        &self,
        raw: &Value,
        writer: &W,
        output_dir: &Path,
    ) -> Result<(FilledForm, PathBuf), FillError> {
        let form = self.prepare(raw)?;
        let destination = output_dir.join(&form.output_file_name);
        let location = writer.write(&form.fields, &destination)?;
        debug!(location = %location.display(), fields = form.fields.len(), "filled fields handed to writer");
        Ok((form, location))
    }

    fn expand(&self, record: &ApplicantRecord) -> Result<FilledFieldMap, FillError> {
        let mut fields = FilledFieldMap::default();

        for entry in schema::field_schema() {
            let path = entry.attribute.path();
            let fallback: String;
            let mut value = record.attribute(entry.attribute);
            if let (Attribute::DateSigned, AttributeValue::Text(text)) = (entry.attribute, value) {
                if text.trim().is_empty() {
                    fallback = self.signing_date()?.format("%m/%d/%Y").to_string();
                    value = AttributeValue::Text(&fallback);
                }
            }

            let assignments = transform::apply(&entry.rule, value).map_err(|err| {
                FillError::SchemaConsistencyFault {
                    attribute: path,
                    detail: err.to_string(),
                }
            })?;

            for (identifier, field_value) in assignments {
                fields.insert(identifier, field_value).map_err(|identifier| {
                    FillError::SchemaConsistencyFault {
                        attribute: path,
                        detail: format!("field {identifier} written twice"),
                    }
                })?;
            }
        }

        debug!(
            fields = fields.len(),
            checked = fields.checked_count(),
            "expanded applicant record"
        );
        Ok(fields)
    }

    fn signing_date(&self) -> Result<NaiveDate, FillError> {
        match self.options.signing_date {
            SigningDate::Required => Err(FillError::malformed(
                Attribute::DateSigned.path(),
                "is empty and no signing date fallback is configured",
            )),
            SigningDate::On(date) => Ok(date),
            SigningDate::Today => Ok(Local::now().date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::va21_0966::{FieldValue, CHECKED_SENTINEL};
    use crate::forms::writer::RecordingWriter;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "veteran_info": {
                "first_name": "Ada",
                "middle_initial": "B",
                "last_name": "Lovelace",
                "ssn": "987654321",
                "date_of_birth": "12/10/1955",
                "va_file_number": "C12345678",
                "service_number": "",
                "email": "a@b.com",
                "phone": "(319) 555-0199",
                "address": {
                    "street": "10 Analytical Way",
                    "apt_unit": "2B",
                    "city": "Iowa City",
                    "state": "IA",
                    "country": "US",
                    "zip_code": "52240"
                }
            },
            "benefit_election": {
                "compensation": false,
                "pension": true,
                "survivors_pension_dic": false
            },
            "signature_info": {
                "date_signed": "2024-05-01",
                "attorney_agent_vso_name": ""
            }
        })
    }

    fn text<'a>(fields: &'a FilledFieldMap, identifier: &str) -> &'a str {
        fields
            .get(identifier)
            .map(FieldValue::as_str)
            .unwrap_or_else(|| panic!("{identifier} missing"))
    }

    #[test]
    fn expands_every_rule_kind() {
        let fields = FormFiller::default().fill(&sample()).expect("fills");

        assert_eq!(text(&fields, "F[0].Page_1[0].Veterans_Last_Name[0]"), "Lovelace");
        assert_eq!(
            text(&fields, "F[0].Page_1[0].Telephone_Number_SecondThreeNumbers[0]"),
            "555"
        );
        assert_eq!(text(&fields, "F[0].#subform[1].Date_Signed_Month[0]"), "05");
        assert_eq!(text(&fields, "F[0].Page_1[0].EMAIL_ADDRESS[0]"), "a@b.com");
        assert_eq!(text(&fields, "F[0].Page_1[0].EMAIL_ADDRESS[1]"), "");
        assert_eq!(
            text(&fields, "F[0].Page_1[0].MailingAddress_ZIPOrPostalCode_LastFourNumbers[0]"),
            ""
        );
        assert_eq!(text(&fields, "F[0].#subform[1].PENSION[0]"), CHECKED_SENTINEL);
        assert!(!fields.contains("F[0].#subform[1].COMPENSATION[0]"));
        assert_eq!(fields.len(), 28);
    }

    #[test]
    fn empty_signing_date_uses_configured_fallback() {
        let mut raw = sample();
        raw["signature_info"]["date_signed"] = json!("");
        let signed_on = NaiveDate::from_ymd_opt(2025, 1, 9).expect("date");
        let filler = FormFiller::new(FillOptions {
            signing_date: SigningDate::On(signed_on),
        });
        let fields = filler.fill(&raw).expect("fills");
        assert_eq!(text(&fields, "F[0].#subform[1].Date_Signed_Month[0]"), "01");
        assert_eq!(text(&fields, "F[0].#subform[1].Date_Signed_Day[0]"), "09");
        assert_eq!(text(&fields, "F[0].#subform[1].Date_Signed_Year[0]"), "2025");
    }

    #[test]
    fn empty_signing_date_without_fallback_is_malformed() {
        let mut raw = sample();
        raw["signature_info"]["date_signed"] = json!(" ");
        let error = FormFiller::default().fill(&raw).expect_err("no fallback");
        assert_eq!(error.path(), Some("signature_info.date_signed"));
    }

    #[test]
    fn prepare_names_the_output_file() {
        let form = FormFiller::default().prepare(&sample()).expect("fills");
        assert_eq!(form.output_file_name, "VA_Form_21-0966_AdaLovelace.pdf");
    }

    #[test]
    fn fill_record_matches_fill() {
        let filler = FormFiller::default();
        let record = validator::validate(&sample()).expect("valid");
        assert_eq!(
            filler.fill_record(&record).expect("typed fill"),
            filler.fill(&sample()).expect("untyped fill")
        );
    }

    #[test]
    fn fill_into_hands_map_to_writer() {
        let writer = RecordingWriter::default();
        let (form, location) = FormFiller::default()
            .fill_into(&sample(), &writer, Path::new("out"))
            .expect("fills and writes");
        assert_eq!(location, Path::new("out").join("VA_Form_21-0966_AdaLovelace.pdf"));

        let writes = writer.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].1, form.fields);
    }

    #[test]
    fn malformed_input_never_reaches_writer() {
        let mut raw = sample();
        raw["veteran_info"]["ssn"] = json!("987-65");
        let writer = RecordingWriter::default();
        let error = FormFiller::default()
            .fill_into(&raw, &writer, Path::new("out"))
            .expect_err("rejected");
        assert_eq!(error.path(), Some("veteran_info.ssn"));
        assert!(writer.writes().is_empty());
    }
}
