//! Expands applicant records into the flat field assignments of VA Form 21-0966.
//!
//! The [`forms::va21_0966`] module holds the mapping engine; [`forms::writer`] is the
//! seam to whatever tool finally stamps the values into the PDF.

pub mod config;
pub mod error;
pub mod forms;
pub mod telemetry;
