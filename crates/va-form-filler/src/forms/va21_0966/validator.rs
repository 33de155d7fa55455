//! Shape checks run before any transformation. The first offending path wins.

use serde::Deserialize;
use serde_json::Value;

use super::record::{ApplicantRecord, Attribute, AttributeKind, AttributeValue};
use super::schema::SplitKind;
use super::transform::{composite_digits, parse_form_date, ShapeError};
use super::FillError;

const ROOT_PATH: &str = "<root>";

/// Checks an untyped record and returns it typed.
pub fn validate(raw: &Value) -> Result<ApplicantRecord, FillError> {
    if !raw.is_object() {
        return Err(FillError::malformed(ROOT_PATH, "expected a JSON object"));
    }

    for attribute in Attribute::ALL {
        let leaf = lookup(raw, attribute.path())?;
        let value = match (attribute.kind(), leaf) {
            (AttributeKind::Flag, Value::Bool(flag)) => AttributeValue::Flag(*flag),
            (AttributeKind::Flag, _) => {
                return Err(FillError::malformed(attribute.path(), "expected a boolean"))
            }
            (_, Value::String(text)) => AttributeValue::Text(text),
            _ => return Err(FillError::malformed(attribute.path(), "expected a string")),
        };
        check_attribute(attribute, value)?;
    }

    ApplicantRecord::deserialize(raw).map_err(|err| FillError::SchemaConsistencyFault {
        attribute: ROOT_PATH,
        detail: format!("validated record failed to deserialize: {err}"),
    })
}

/// Checks an already-typed record. Types guarantee presence, so only content is checked.
pub fn validate_record(record: &ApplicantRecord) -> Result<(), FillError> {
    Attribute::ALL
        .into_iter()
        .try_for_each(|attribute| check_attribute(attribute, record.attribute(attribute)))
}

fn lookup<'a>(raw: &'a Value, path: &'static str) -> Result<&'a Value, FillError> {
    let mut current = raw;
    let mut parent = ROOT_PATH;
    let mut start = 0;

    for segment in path.split('.') {
        let here = &path[..start + segment.len()];
        let object = current
            .as_object()
            .ok_or_else(|| FillError::malformed(parent, "expected an object"))?;
        current = object
            .get(segment)
            .ok_or_else(|| FillError::malformed(here, "is missing"))?;
        parent = here;
        start += segment.len() + 1;
    }

    Ok(current)
}

fn check_attribute(attribute: Attribute, value: AttributeValue<'_>) -> Result<(), FillError> {
    let path = attribute.path();
    let kind = attribute.kind();
    let text = match (kind, value) {
        (AttributeKind::Flag, AttributeValue::Flag(_)) => return Ok(()),
        (AttributeKind::Flag, AttributeValue::Text(_)) => {
            return Err(FillError::malformed(path, "expected a boolean"))
        }
        (_, AttributeValue::Flag(_)) => return Err(FillError::malformed(path, "expected a string")),
        (_, AttributeValue::Text(text)) => text,
    };
    let blank = text.trim().is_empty();
    let shape = |err: ShapeError| FillError::malformed(path, err.to_string());

    match kind {
        AttributeKind::RequiredText if blank => Err(FillError::malformed(path, "must not be blank")),
        AttributeKind::RequiredText | AttributeKind::OptionalText | AttributeKind::Flag => Ok(()),
        AttributeKind::Ssn => composite_digits(SplitKind::Ssn, text).map(drop).map_err(shape),
        AttributeKind::Zip => composite_digits(SplitKind::Zip, text).map(drop).map_err(shape),
        AttributeKind::Phone if blank => Ok(()),
        AttributeKind::Phone => composite_digits(SplitKind::Phone, text).map(drop).map_err(shape),
        AttributeKind::SigningDate if blank => Ok(()),
        AttributeKind::Date | AttributeKind::SigningDate => {
            parse_form_date(text).map(drop).map_err(shape)
        }
        AttributeKind::Email if blank => Ok(()),
        AttributeKind::Email => check_email(text).map_err(|reason| FillError::malformed(path, reason)),
    }
}

fn check_email(text: &str) -> Result<(), &'static str> {
    if text.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    match text.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err("expected an address of the form local@domain"),
    }
}
