//! Record types, one per supported MRZ layout.
//!
//! Records are plain value objects: freely copyable, no shared state, all
//! fields public. `Default` produces an empty record pre-seeded with the
//! format's document-code characters, which is what
//! [`MrzFormat::new_record`](crate::model::format::MrzFormat::new_record)
//! hands out.
//!
//! Validity flags (`valid_*`) are computed from the check digits during
//! decoding and are advisory: a record decodes successfully even when a
//! printed check digit is wrong, because a single OCR-corrupted digit does
//! not make the surrounding document useless.

use crate::model::code::DocumentCode;
use crate::model::date::MrzDate;
use crate::model::format::MrzFormat;
use crate::model::sex::Sex;

/// A decoded MRZ record of any supported format.
#[derive(Debug, Clone, PartialEq)]
pub enum MrzRecord {
    MrtdTd1(MrtdTd1),
    FrenchId(FrenchId),
    MrvVisaB(MrvB),
    MrtdTd2(MrtdTd2),
    MrvVisaA(MrvA),
    Passport(Passport),
    SlovakId234(SlovakId234),
}

impl MrzRecord {
    /// Returns the layout this record was decoded from (or will encode to).
    pub fn format(&self) -> MrzFormat {
        match self {
            MrzRecord::MrtdTd1(_) => MrzFormat::MrtdTd1,
            MrzRecord::FrenchId(_) => MrzFormat::FrenchId,
            MrzRecord::MrvVisaB(_) => MrzFormat::MrvVisaB,
            MrzRecord::MrtdTd2(_) => MrzFormat::MrtdTd2,
            MrzRecord::MrvVisaA(_) => MrzFormat::MrvVisaA,
            MrzRecord::Passport(_) => MrzFormat::Passport,
            MrzRecord::SlovakId234(_) => MrzFormat::SlovakId234,
        }
    }
}

/// MRP passport booklet: two rows of 44 columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Passport {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    pub personal_number: String,
    pub valid_personal_number: bool,
    /// Whole-record check digit over document number, birth date and
    /// expiration including their check digits, plus the personal number.
    pub valid_composite: bool,
}

impl Default for Passport {
    fn default() -> Self {
        Passport {
            code: DocumentCode::Passport,
            code1: 'P',
            code2: '<',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            personal_number: String::new(),
            valid_personal_number: false,
            valid_composite: false,
        }
    }
}

/// MRV visa type A: two rows of 44 columns, row 0 starting with `V`.
///
/// ICAO 9303 defines a whole-record composite digit for this layout, but
/// decoding does not validate it; see the crate-level known limitations.
#[derive(Debug, Clone, PartialEq)]
pub struct MrvA {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    pub optional: String,
}

impl Default for MrvA {
    fn default() -> Self {
        MrvA {
            code: DocumentCode::TypeV,
            code1: 'V',
            code2: '<',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            optional: String::new(),
        }
    }
}

/// MRV visa type B: two rows of 36 columns, row 0 starting with `V`.
#[derive(Debug, Clone, PartialEq)]
pub struct MrvB {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    pub optional: String,
}

impl Default for MrvB {
    fn default() -> Self {
        MrvB {
            code: DocumentCode::TypeV,
            code1: 'V',
            code2: '<',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            optional: String::new(),
        }
    }
}

/// MRTD TD2: two rows of 36 columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MrtdTd2 {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    pub optional: String,
    pub valid_composite: bool,
}

impl Default for MrtdTd2 {
    fn default() -> Self {
        MrtdTd2 {
            code: DocumentCode::TypeI,
            code1: 'I',
            code2: '<',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            optional: String::new(),
            valid_composite: false,
        }
    }
}

/// MRTD TD1: three rows of 30 columns, with two optional data fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MrtdTd1 {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    /// Optional data on row 0, columns 15..30.
    pub optional: String,
    /// Optional data on row 1, columns 18..29.
    pub optional2: String,
    pub valid_composite: bool,
}

impl Default for MrtdTd1 {
    fn default() -> Self {
        MrtdTd1 {
            code: DocumentCode::TypeI,
            code1: 'I',
            code2: '<',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            optional: String::new(),
            optional2: String::new(),
            valid_composite: false,
        }
    }
}

/// French national ID card: two rows of 36 columns, row 0 starting `IDFRA`.
///
/// The layout carries no expiration date; `expiration_date` stays at its
/// default after decoding and is ignored by the encoder. Nationality is not
/// printed either and mirrors the issuing country.
#[derive(Debug, Clone, PartialEq)]
pub struct FrenchId {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    /// Department/office field on row 0, columns 30..36.
    pub optional: String,
    pub valid_composite: bool,
}

impl Default for FrenchId {
    fn default() -> Self {
        FrenchId {
            code: DocumentCode::TypeI,
            code1: 'I',
            code2: 'D',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            optional: String::new(),
            valid_composite: false,
        }
    }
}

/// Old Slovak ID card: two rows of 34 columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SlovakId234 {
    pub code: DocumentCode,
    pub code1: char,
    pub code2: char,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub valid_document_number: bool,
    pub nationality: String,
    pub date_of_birth: MrzDate,
    pub valid_date_of_birth: bool,
    pub sex: Sex,
    pub expiration_date: MrzDate,
    pub valid_expiration_date: bool,
    pub optional: String,
}

impl Default for SlovakId234 {
    fn default() -> Self {
        SlovakId234 {
            code: DocumentCode::TypeI,
            code1: 'I',
            code2: '<',
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            valid_document_number: false,
            nationality: String::new(),
            date_of_birth: MrzDate::default(),
            valid_date_of_birth: false,
            sex: Sex::Unspecified,
            expiration_date: MrzDate::default(),
            valid_expiration_date: false,
            optional: String::new(),
        }
    }
}
