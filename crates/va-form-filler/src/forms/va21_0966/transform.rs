//! Turns attribute values into the literal strings each form field expects.

use chrono::{Datelike, NaiveDate};

use super::checkbox;
use super::fields::FieldValue;
use super::record::AttributeValue;
use super::schema::{FieldRule, SplitKind};

pub type FieldAssignment = (&'static str, FieldValue);

/// Why a composite value cannot be split. Messages never echo the value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("contains characters other than digits and separators")]
    NonDigit,
    #[error("expected {expected} digits, found {found}")]
    DigitCount { expected: &'static str, found: usize },
    #[error("expected a date such as MM/DD/YYYY or YYYY-MM-DD")]
    DateFormat,
    #[error("is not a calendar date")]
    NotACalendarDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("rule expects text but the attribute is a boolean")]
    ExpectedText,
    #[error("checkbox rule applied to a text attribute")]
    ExpectedFlag,
    #[error("value rejected by split: {0}")]
    Shape(#[from] ShapeError),
    #[error("split produced {parts} parts for {targets} target fields")]
    PartCount { parts: usize, targets: usize },
}

/// Expands one attribute value through its schema rule.
pub fn apply(
    rule: &FieldRule,
    value: AttributeValue<'_>,
) -> Result<Vec<FieldAssignment>, TransformError> {
    match (*rule, value) {
        (FieldRule::Checkbox(target), AttributeValue::Flag(elected)) => Ok(checkbox::encode(
            elected,
        )
        .map(|checked| vec![(target, checked)])
        .unwrap_or_default()),
        (FieldRule::Checkbox(_), AttributeValue::Text(_)) => Err(TransformError::ExpectedFlag),
        (_, AttributeValue::Flag(_)) => Err(TransformError::ExpectedText),
        (FieldRule::Direct(target), AttributeValue::Text(text)) => {
            Ok(vec![(target, FieldValue::text(text))])
        }
        (FieldRule::Split { kind, targets }, AttributeValue::Text(text)) => {
            let parts = split_composite(kind, text)?;
            if parts.len() != targets.len() {
                return Err(TransformError::PartCount {
                    parts: parts.len(),
                    targets: targets.len(),
                });
            }
            Ok(targets
                .iter()
                .copied()
                .zip(parts.into_iter().map(FieldValue::Text))
                .collect())
        }
        (
            FieldRule::Overflow {
                primary,
                leading,
                threshold,
            },
            AttributeValue::Text(text),
        ) => {
            let (primary_text, leading_text) = split_overflow(text, threshold);
            Ok(vec![
                (primary, FieldValue::text(primary_text)),
                (leading, FieldValue::text(leading_text)),
            ])
        }
    }
}

/// Splits a composite into one string per part. Empty input yields empty parts,
/// and a 5-digit ZIP yields an empty `+4` part.
pub fn split_composite(kind: SplitKind, value: &str) -> Result<Vec<String>, ShapeError> {
    let widths = kind.widths();
    if value.trim().is_empty() {
        return Ok(vec![String::new(); widths.len()]);
    }

    if kind == SplitKind::Date {
        let date = parse_form_date(value)?;
        return Ok(vec![
            format!("{:02}", date.month()),
            format!("{:02}", date.day()),
            format!("{:04}", date.year()),
        ]);
    }

    let digits = composite_digits(kind, value)?;
    let mut parts = Vec::with_capacity(widths.len());
    let mut offset = 0;
    for width in widths {
        let end = (offset + width).min(digits.len());
        parts.push(digits[offset..end].to_string());
        offset = end;
    }
    Ok(parts)
}

/// Strips the separators allowed for `kind` and checks the digit count.
pub fn composite_digits(kind: SplitKind, value: &str) -> Result<String, ShapeError> {
    let is_separator = |c: char| match kind {
        SplitKind::Phone => c == '-' || c == '.' || c == '(' || c == ')' || c.is_whitespace(),
        SplitKind::Ssn | SplitKind::Zip | SplitKind::Date => c == '-' || c.is_whitespace(),
    };

    let digits: String = value.chars().filter(|c| !is_separator(*c)).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ShapeError::NonDigit);
    }

    let found = digits.len();
    let (expected, valid) = match kind {
        SplitKind::Ssn => ("9", found == 9),
        SplitKind::Phone => ("10", found == 10),
        SplitKind::Zip => ("5 or 9", found == 5 || found == 9),
        SplitKind::Date => ("8", found == 8),
    };
    if !valid {
        return Err(ShapeError::DigitCount { expected, found });
    }
    Ok(digits)
}

/// Parses `M/D/YYYY`, `M-D-YYYY`, two-digit years, or ISO `YYYY-MM-DD`.
///
/// Two-digit years above 50 land in the 1900s, the rest in the 2000s.
pub fn parse_form_date(value: &str) -> Result<NaiveDate, ShapeError> {
    let trimmed = value.trim();
    let separator = if trimmed.contains('/') {
        '/'
    } else if trimmed.contains('-') {
        '-'
    } else {
        return Err(ShapeError::DateFormat);
    };

    let parts: Vec<&str> = trimmed.split(separator).collect();
    let [first, second, third] = parts.as_slice() else {
        return Err(ShapeError::DateFormat);
    };
    if parts
        .iter()
        .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(ShapeError::DateFormat);
    }

    let (year, month, day) = if first.len() == 4 {
        (*first, *second, *third)
    } else {
        (*third, *first, *second)
    };
    if month.len() > 2 || day.len() > 2 {
        return Err(ShapeError::DateFormat);
    }

    let year: i32 = match year.len() {
        4 => year.parse().map_err(|_| ShapeError::DateFormat)?,
        2 => {
            let short: i32 = year.parse().map_err(|_| ShapeError::DateFormat)?;
            if short > 50 {
                1900 + short
            } else {
                2000 + short
            }
        }
        _ => return Err(ShapeError::DateFormat),
    };
    let month: u32 = month.parse().map_err(|_| ShapeError::DateFormat)?;
    let day: u32 = day.parse().map_err(|_| ShapeError::DateFormat)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ShapeError::NotACalendarDate)
}

/// Returns `(primary, leading)` for the overflow email pair.
///
/// Up to `threshold` characters stay whole in `primary`. Past that, the first
/// `threshold` characters move to `leading` and `primary` keeps the rest.
pub fn split_overflow(value: &str, threshold: usize) -> (&str, &str) {
    match value.char_indices().nth(threshold) {
        None => (value, ""),
        Some((cut, _)) => (&value[cut..], &value[..cut]),
    }
}
