use serde::{Deserialize, Serialize};

/// Applicant data for one Intent to File submission.
///
/// Members not listed here are ignored on deserialization so callers can send
/// richer records than the form consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub veteran_info: VeteranInfo,
    pub benefit_election: BenefitElection,
    pub signature_info: SignatureInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeteranInfo {
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub ssn: String,
    pub date_of_birth: String,
    pub va_file_number: String,
    pub service_number: String,
    pub email: String,
    pub phone: String,
    pub address: MailingAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingAddress {
    pub street: String,
    pub apt_unit: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// The three benefit boxes on the form. More than one may be elected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitElection {
    pub compensation: bool,
    pub pension: bool,
    pub survivors_pension_dic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Empty means "use the filler's signing date fallback".
    pub date_signed: String,
    pub attorney_agent_vso_name: String,
}

/// Every logical attribute the form consumes, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    FirstName,
    MiddleInitial,
    LastName,
    Ssn,
    DateOfBirth,
    VaFileNumber,
    ServiceNumber,
    Email,
    Phone,
    Street,
    AptUnit,
    City,
    State,
    Country,
    ZipCode,
    Compensation,
    Pension,
    SurvivorsPensionDic,
    DateSigned,
    AttorneyAgentVsoName,
}

/// What shape an attribute's value must have before it can be transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free text that must not be blank.
    RequiredText,
    /// Free text that may be empty.
    OptionalText,
    /// Nine digits with optional `-` or space separators.
    Ssn,
    /// Ten digits with optional punctuation, or empty.
    Phone,
    /// Five or nine digits with optional `-` or space separators.
    Zip,
    Date,
    /// A date, or empty to defer to the signing date fallback.
    SigningDate,
    /// `local@domain`, or empty.
    Email,
    Flag,
}

impl Attribute {
    pub const ALL: [Attribute; 20] = [
        Attribute::FirstName,
        Attribute::MiddleInitial,
        Attribute::LastName,
        Attribute::Ssn,
        Attribute::DateOfBirth,
        Attribute::VaFileNumber,
        Attribute::ServiceNumber,
        Attribute::Email,
        Attribute::Phone,
        Attribute::Street,
        Attribute::AptUnit,
        Attribute::City,
        Attribute::State,
        Attribute::Country,
        Attribute::ZipCode,
        Attribute::Compensation,
        Attribute::Pension,
        Attribute::SurvivorsPensionDic,
        Attribute::DateSigned,
        Attribute::AttorneyAgentVsoName,
    ];

    /// Dotted location of the attribute inside the JSON record.
    pub const fn path(self) -> &'static str {
        match self {
            Attribute::FirstName => "veteran_info.first_name",
            Attribute::MiddleInitial => "veteran_info.middle_initial",
            Attribute::LastName => "veteran_info.last_name",
            Attribute::Ssn => "veteran_info.ssn",
            Attribute::DateOfBirth => "veteran_info.date_of_birth",
            Attribute::VaFileNumber => "veteran_info.va_file_number",
            Attribute::ServiceNumber => "veteran_info.service_number",
            Attribute::Email => "veteran_info.email",
            Attribute::Phone => "veteran_info.phone",
            Attribute::Street => "veteran_info.address.street",
            Attribute::AptUnit => "veteran_info.address.apt_unit",
            Attribute::City => "veteran_info.address.city",
            Attribute::State => "veteran_info.address.state",
            Attribute::Country => "veteran_info.address.country",
            Attribute::ZipCode => "veteran_info.address.zip_code",
            Attribute::Compensation => "benefit_election.compensation",
            Attribute::Pension => "benefit_election.pension",
            Attribute::SurvivorsPensionDic => "benefit_election.survivors_pension_dic",
            Attribute::DateSigned => "signature_info.date_signed",
            Attribute::AttorneyAgentVsoName => "signature_info.attorney_agent_vso_name",
        }
    }

    pub const fn kind(self) -> AttributeKind {
        match self {
            Attribute::FirstName | Attribute::LastName => AttributeKind::RequiredText,
            Attribute::MiddleInitial
            | Attribute::VaFileNumber
            | Attribute::ServiceNumber
            | Attribute::Street
            | Attribute::AptUnit
            | Attribute::City
            | Attribute::State
            | Attribute::Country
            | Attribute::AttorneyAgentVsoName => AttributeKind::OptionalText,
            Attribute::Ssn => AttributeKind::Ssn,
            Attribute::Phone => AttributeKind::Phone,
            Attribute::ZipCode => AttributeKind::Zip,
            Attribute::DateOfBirth => AttributeKind::Date,
            Attribute::DateSigned => AttributeKind::SigningDate,
            Attribute::Email => AttributeKind::Email,
            Attribute::Compensation | Attribute::Pension | Attribute::SurvivorsPensionDic => {
                AttributeKind::Flag
            }
        }
    }
}

/// Borrowed view of a single attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl ApplicantRecord {
    pub fn attribute(&self, attribute: Attribute) -> AttributeValue<'_> {
        let veteran = &self.veteran_info;
        let address = &veteran.address;
        match attribute {
            Attribute::FirstName => AttributeValue::Text(&veteran.first_name),
            Attribute::MiddleInitial => AttributeValue::Text(&veteran.middle_initial),
            Attribute::LastName => AttributeValue::Text(&veteran.last_name),
            Attribute::Ssn => AttributeValue::Text(&veteran.ssn),
            Attribute::DateOfBirth => AttributeValue::Text(&veteran.date_of_birth),
            Attribute::VaFileNumber => AttributeValue::Text(&veteran.va_file_number),
            Attribute::ServiceNumber => AttributeValue::Text(&veteran.service_number),
            Attribute::Email => AttributeValue::Text(&veteran.email),
            Attribute::Phone => AttributeValue::Text(&veteran.phone),
            Attribute::Street => AttributeValue::Text(&address.street),
            Attribute::AptUnit => AttributeValue::Text(&address.apt_unit),
            Attribute::City => AttributeValue::Text(&address.city),
            Attribute::State => AttributeValue::Text(&address.state),
            Attribute::Country => AttributeValue::Text(&address.country),
            Attribute::ZipCode => AttributeValue::Text(&address.zip_code),
            Attribute::Compensation => AttributeValue::Flag(self.benefit_election.compensation),
            Attribute::Pension => AttributeValue::Flag(self.benefit_election.pension),
            Attribute::SurvivorsPensionDic => {
                AttributeValue::Flag(self.benefit_election.survivors_pension_dic)
            }
            Attribute::DateSigned => AttributeValue::Text(&self.signature_info.date_signed),
            Attribute::AttorneyAgentVsoName => {
                AttributeValue::Text(&self.signature_info.attorney_agent_vso_name)
            }
        }
    }

    /// File name for the filled PDF, e.g. `VA_Form_21-0966_JohnDoe.pdf`.
    pub fn output_file_name(&self) -> String {
        let first = alphanumeric_or(&self.veteran_info.first_name, "Unknown");
        let last = alphanumeric_or(&self.veteran_info.last_name, "Veteran");
        format!("VA_Form_21-0966_{first}{last}.pdf")
    }
}

fn alphanumeric_or(value: &str, fallback: &str) -> String {
    let cleaned: String = value.chars().filter(|c| c.is_alphanumeric()).collect();
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}
