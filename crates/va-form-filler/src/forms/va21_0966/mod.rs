//! VA Form 21-0966 (Intent to File a Claim) field mapping.

pub mod checkbox;
mod fields;
mod filler;
mod record;
pub mod router;
pub mod schema;
pub mod transform;
pub mod validator;

use crate::forms::writer::FormWriteError;

pub use fields::{FieldValue, FilledFieldMap};
pub use filler::{FillOptions, FilledForm, FormFiller, SigningDate};
pub use record::{
    ApplicantRecord, Attribute, AttributeKind, AttributeValue, BenefitElection, MailingAddress,
    SignatureInfo, VeteranInfo,
};
pub use router::form_router;
pub use schema::{field_schema, FieldRule, SchemaEntry, SplitKind, CHECKED_SENTINEL};

#[derive(Debug, thiserror::Error)]
pub enum FillError {
    /// The caller's record is missing or mistyping `path`. Fixable by the caller.
    #[error("malformed input at '{path}': {reason}")]
    MalformedInput { path: String, reason: String },
    /// The schema and the transformer disagree. Never expected in production.
    #[error("field schema out of sync at '{attribute}': {detail}")]
    SchemaConsistencyFault {
        attribute: &'static str,
        detail: String,
    },
    #[error(transparent)]
    Write(#[from] FormWriteError),
}

impl FillError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Offending path for caller errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            FillError::MalformedInput { path, .. } => Some(path),
            FillError::SchemaConsistencyFault { .. } | FillError::Write(_) => None,
        }
    }
}
