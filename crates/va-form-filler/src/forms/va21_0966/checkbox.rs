use super::fields::FieldValue;

/// Encodes a benefit election.
///
/// `false` yields `None`: unchecked boxes are left untouched so the blank form's
/// own off state survives, rather than being overwritten with an explicit off value.
pub fn encode(elected: bool) -> Option<FieldValue> {
    elected.then_some(FieldValue::Checked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_is_checked_and_false_is_skipped() {
        assert_eq!(encode(true), Some(FieldValue::Checked));
        assert_eq!(encode(true).map(|value| value.as_str().to_string()), Some("/1".to_string()));
        assert_eq!(encode(false), None);
    }
}
