//! Static field table for VA Form 21-0966.
//!
//! Identifiers are the fully qualified AcroForm names found in the blank form.
//! Each one belongs to exactly one entry.

use super::record::Attribute;

/// Value written into a checkbox to mark it checked.
pub const CHECKED_SENTINEL: &str = "/1";

/// Email characters that fit in a single email box.
pub const EMAIL_OVERFLOW_THRESHOLD: usize = 20;

/// Fixed-width composites and the part widths they split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    /// 3-2-4
    Ssn,
    /// 3-3-4
    Phone,
    /// 5-4, trailing part optional
    Zip,
    /// MM-DD-YYYY
    Date,
}

impl SplitKind {
    pub const fn widths(self) -> &'static [usize] {
        match self {
            SplitKind::Ssn => &[3, 2, 4],
            SplitKind::Phone => &[3, 3, 4],
            SplitKind::Zip => &[5, 4],
            SplitKind::Date => &[2, 2, 4],
        }
    }

    /// Separator used when joining the parts back into one value.
    pub const fn separator(self) -> char {
        match self {
            SplitKind::Date => '/',
            SplitKind::Ssn | SplitKind::Phone | SplitKind::Zip => '-',
        }
    }
}

/// How one attribute lands on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Copied verbatim into one field.
    Direct(&'static str),
    /// Split into ordered fixed-width parts.
    Split {
        kind: SplitKind,
        targets: &'static [&'static str],
    },
    /// Short values go wholly into `primary`. Longer values put their first
    /// `threshold` characters into `leading` and the remainder into `primary`.
    Overflow {
        primary: &'static str,
        leading: &'static str,
        threshold: usize,
    },
    /// Written with [`CHECKED_SENTINEL`] only when the election is true.
    Checkbox(&'static str),
}

impl FieldRule {
    pub fn targets(&self) -> Vec<&'static str> {
        match *self {
            FieldRule::Direct(target) | FieldRule::Checkbox(target) => vec![target],
            FieldRule::Split { targets, .. } => targets.to_vec(),
            FieldRule::Overflow {
                primary, leading, ..
            } => vec![primary, leading],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub attribute: Attribute,
    pub rule: FieldRule,
}

const fn entry(attribute: Attribute, rule: FieldRule) -> SchemaEntry {
    SchemaEntry { attribute, rule }
}

static FIELD_SCHEMA: [SchemaEntry; 20] = [
    // Section I: identification
    entry(
        Attribute::FirstName,
        FieldRule::Direct("F[0].Page_1[0].Veterans_First_Name[0]"),
    ),
    entry(
        Attribute::MiddleInitial,
        FieldRule::Direct("F[0].Page_1[0].Veterans_Middle_Initial1[0]"),
    ),
    entry(
        Attribute::LastName,
        FieldRule::Direct("F[0].Page_1[0].Veterans_Last_Name[0]"),
    ),
    entry(
        Attribute::Ssn,
        FieldRule::Split {
            kind: SplitKind::Ssn,
            targets: &[
                "F[0].Page_1[0].Veterans_Social_SecurityNumber_FirstThreeNumbers[0]",
                "F[0].Page_1[0].Veterans_Social_SecurityNumber_SecondTwoNumbers[0]",
                "F[0].Page_1[0].VeteransSocialSecurityNumber_LastFourNumbers[0]",
            ],
        },
    ),
    entry(
        Attribute::DateOfBirth,
        FieldRule::Split {
            kind: SplitKind::Date,
            targets: &[
                "F[0].Page_1[0].DOB_Month[0]",
                "F[0].Page_1[0].DOB_Day[0]",
                "F[0].Page_1[0].DOB_Year[0]",
            ],
        },
    ),
    entry(
        Attribute::VaFileNumber,
        FieldRule::Direct("F[0].Page_1[0].VA_File_Number[0]"),
    ),
    entry(
        Attribute::ServiceNumber,
        FieldRule::Direct("F[0].Page_1[0].Veterans_Service_Number[0]"),
    ),
    // Contact
    entry(
        Attribute::Email,
        FieldRule::Overflow {
            primary: "F[0].Page_1[0].EMAIL_ADDRESS[0]",
            leading: "F[0].Page_1[0].EMAIL_ADDRESS[1]",
            threshold: EMAIL_OVERFLOW_THRESHOLD,
        },
    ),
    entry(
        Attribute::Phone,
        FieldRule::Split {
            kind: SplitKind::Phone,
            targets: &[
                "F[0].Page_1[0].Telephone_Number_FirstThreeNumbers[0]",
                "F[0].Page_1[0].Telephone_Number_SecondThreeNumbers[0]",
                "F[0].Page_1[0].Telephone_Number_LastFourNumbers[0]",
            ],
        },
    ),
    // Mailing address
    entry(
        Attribute::Street,
        FieldRule::Direct("F[0].Page_1[0].Mailing_Address_NumberAndStreet[0]"),
    ),
    entry(
        Attribute::AptUnit,
        FieldRule::Direct("F[0].Page_1[0].Mailing_Address_ApartmentOrUnitNumber[0]"),
    ),
    entry(
        Attribute::City,
        FieldRule::Direct("F[0].Page_1[0].MailingAddress_City[0]"),
    ),
    entry(
        Attribute::State,
        FieldRule::Direct("F[0].Page_1[0].MailingAddress_StateOrProvince[0]"),
    ),
    entry(
        Attribute::Country,
        FieldRule::Direct("F[0].Page_1[0].MailingAddress_Country[0]"),
    ),
    entry(
        Attribute::ZipCode,
        FieldRule::Split {
            kind: SplitKind::Zip,
            targets: &[
                "F[0].Page_1[0].MailingAddress_ZIPOrPostalCode_FirstFiveNumbers[0]",
                "F[0].Page_1[0].MailingAddress_ZIPOrPostalCode_LastFourNumbers[0]",
            ],
        },
    ),
    // Section II: benefit elections
    entry(
        Attribute::Compensation,
        FieldRule::Checkbox("F[0].#subform[1].COMPENSATION[0]"),
    ),
    entry(
        Attribute::Pension,
        FieldRule::Checkbox("F[0].#subform[1].PENSION[0]"),
    ),
    entry(
        Attribute::SurvivorsPensionDic,
        FieldRule::Checkbox(
            "F[0].#subform[1].SURVIVORS_PENSION_AND_OR_DEPENDENCY_AND_INDEMNITY_COMPENSATION_DIC[0]",
        ),
    ),
    // Section III: signature
    entry(
        Attribute::DateSigned,
        FieldRule::Split {
            kind: SplitKind::Date,
            targets: &[
                "F[0].#subform[1].Date_Signed_Month[0]",
                "F[0].#subform[1].Date_Signed_Day[0]",
                "F[0].#subform[1].Date_Signed_Year[0]",
            ],
        },
    ),
    entry(
        Attribute::AttorneyAgentVsoName,
        FieldRule::Direct(
            "F[0].#subform[1].Name_Of_Attorney_Agent_Or_Veterans_Service_Organization_VS[0]",
        ),
    ),
];

/// The schema in fill order.
pub fn field_schema() -> &'static [SchemaEntry] {
    &FIELD_SCHEMA
}

pub fn entry_for(attribute: Attribute) -> Option<&'static SchemaEntry> {
    FIELD_SCHEMA.iter().find(|entry| entry.attribute == attribute)
}

/// Every identifier the schema can write, in fill order.
pub fn target_identifiers() -> impl Iterator<Item = &'static str> {
    FIELD_SCHEMA.iter().flat_map(|entry| entry.rule.targets())
}
