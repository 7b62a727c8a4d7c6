//! Parser and builder for the machine-readable zone (MRZ) printed on
//! travel documents, as specified by ICAO Doc 9303.
//!
//! # Overview
//!
//! The crate covers three concerns:
//!
//! - **Decoding.** [`decode_record`] auto-detects the document format
//!   from the shape of the text (plus a prefix where shapes collide) and
//!   returns a typed [`MrzRecord`]. Check-digit mismatches and
//!   impossible calendar dates never fail the decode; they surface as
//!   `valid_*` flags on the record.
//! - **Encoding.** [`encode_record`] renders a record back to canonical
//!   fixed-width text. Values that do not fit their field are rejected
//!   with [`EncodeError::FieldTooLong`], never silently truncated.
//! - **Locating.** [`find_mrz`] extracts the MRZ from a larger text
//!   blob, such as the raw output of an OCR pass over a document photo.
//!
//! # Quick start
//!
//! ```
//! use mrz::{decode_record, encode_record, MrzRecord};
//!
//! let text = "I<SVKNOVAK<<JAN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<\n\
//!             123456<AA5SVK8110251M1801020749313<<<<<<<<70\n";
//!
//! let record = decode_record(text)?;
//! let MrzRecord::Passport(passport) = &record else {
//!     unreachable!()
//! };
//! assert_eq!(passport.surname, "NOVAK");
//! assert_eq!(passport.given_names, vec!["JAN".to_string()]);
//! assert_eq!(passport.document_number, "123456 AA");
//! assert!(passport.valid_composite);
//!
//! // Encoding a decoded record reproduces the original text.
//! assert_eq!(encode_record(&record)?, text);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported formats
//!
//! [`MrzFormat`] lists the recognized layouts: TD1 (3x30), TD2 (2x36),
//! passports and other 2x44 MRTDs, MRV-A and MRV-B visas, French
//! identity cards and the pre-2008 Slovak 2x34 identity card.
//!
//! # Known limitations
//!
//! - Two-digit years are returned as printed; no century resolution is
//!   attempted.
//! - National characters are not transliterated; values must already be
//!   in the MRZ repertoire (`A`-`Z`, `0`-`9`, space).
//! - The whole-record composite check digit of the MRV-A layout is not
//!   validated.

pub mod codec;
pub mod error;
pub mod finder;
pub mod model;

pub use codec::checksum::{check_digit_char, compute_check_digit, validate_check_digit};
pub use codec::record::{decode_record, encode_record};
pub use error::{EncodeError, FindError, ParseError};
pub use finder::find_mrz;
pub use model::code::DocumentCode;
pub use model::date::MrzDate;
pub use model::format::{FORMAT_CATALOGUE, FormatDescriptor, MrzFormat};
pub use model::record::{
    FrenchId, MrtdTd1, MrtdTd2, MrvA, MrvB, MrzRecord, Passport, SlovakId234,
};
pub use model::sex::Sex;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
