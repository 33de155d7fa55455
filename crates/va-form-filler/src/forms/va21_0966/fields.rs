use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::schema::CHECKED_SENTINEL;

/// Literal written into one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Checked => CHECKED_SENTINEL,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sparse identifier → value map handed to a [`FormWriter`](crate::forms::writer::FormWriter).
///
/// Fields missing from the map stay at the blank form's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilledFieldMap {
    fields: BTreeMap<&'static str, FieldValue>,
}

impl FilledFieldMap {
    /// Records a value, refusing to overwrite. Returns the identifier on conflict.
    pub(crate) fn insert(
        &mut self,
        identifier: &'static str,
        value: FieldValue,
    ) -> Result<(), &'static str> {
        if self.fields.contains_key(identifier) {
            return Err(identifier);
        }
        self.fields.insert(identifier, value);
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&FieldValue> {
        self.fields.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.fields.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.fields.values().filter(|value| value.is_checked()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(identifier, value)| (*identifier, value))
    }
}
