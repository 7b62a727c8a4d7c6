//! Encoding and decoding of MRZ text.
//!
//! The codec is split into three layers:
//!
//! - [`checksum`] implements the 7-3-1 weighted check digit.
//! - [`fields`] reads and writes individual fixed-width fields.
//! - [`record`] binds fields to positions for each document format.

pub mod checksum;
pub mod fields;
pub mod record;

pub use checksum::{check_digit_char, compute_check_digit, validate_check_digit};
pub use fields::FILLER;
pub use record::{decode_record, encode_record};
