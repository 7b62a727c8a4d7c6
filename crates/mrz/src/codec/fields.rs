//! Field-level codec: extraction from fixed character ranges and the
//! mirror-image fixed-width serialization helpers.
//!
//! Nothing in this module knows about document formats; formats differ only
//! in which ranges map to which semantic field.

use crate::codec::checksum::validate_check_digit;
use crate::error::{EncodeError, ParseError};
use crate::model::date::MrzDate;
use crate::model::format::split_rows;
use crate::model::sex::Sex;

/// The padding glyph filling unused character positions.
pub const FILLER: char = '<';

/// A fixed character range within one row of an MRZ block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub const fn new(row: usize, start: usize, end: usize) -> Range {
        Range { row, start, end }
    }
}

/// Reader for extracting fields from an MRZ text block.
///
/// Splits the text into rows once; every extraction is bounds-checked and
/// reports [`ParseError::RangeOutOfBounds`] with the offending position.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    rows: Vec<&'a str>,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader over an MRZ text block.
    ///
    /// Row widths must already have been checked (format detection does
    /// this); the reader itself only bounds-checks individual ranges.
    pub fn new(mrz: &'a str) -> Result<FieldReader<'a>, ParseError> {
        Ok(FieldReader {
            rows: split_rows(mrz)?,
        })
    }

    /// Returns the exact substring covered by a range.
    pub fn raw(&self, range: Range) -> Result<&'a str, ParseError> {
        debug_assert!(range.start < range.end);
        let row = self
            .rows
            .get(range.row)
            .ok_or(ParseError::RangeOutOfBounds {
                row: range.row,
                start: range.start,
                end: range.end,
                row_len: 0,
            })?;
        row.get(range.start..range.end)
            .ok_or(ParseError::RangeOutOfBounds {
                row: range.row,
                start: range.start,
                end: range.end,
                row_len: row.len(),
            })
    }

    /// Returns the raw substrings of several ranges concatenated, used for
    /// whole-record composite check digits.
    pub fn concat(&self, ranges: &[Range]) -> Result<String, ParseError> {
        let mut fragment = String::new();
        for range in ranges {
            fragment.push_str(self.raw(*range)?);
        }
        Ok(fragment)
    }

    /// Decodes a string field: filler becomes space, surrounding whitespace
    /// is trimmed.
    pub fn string(&self, range: Range) -> Result<String, ParseError> {
        let raw = self.raw(range)?;
        Ok(raw.replace(FILLER, " ").trim().to_string())
    }

    /// Decodes a name field into a surname and ordered given-name parts.
    ///
    /// Trailing filler is stripped, the field splits on the first `<<` into
    /// surname and given names, and the given names split on single filler;
    /// empty segments are dropped.
    pub fn name(&self, range: Range) -> Result<(String, Vec<String>), ParseError> {
        let raw = self.raw(range)?.trim_end_matches(FILLER);
        match raw.split_once("<<") {
            Some((surname, given)) => Ok((clean_name_segment(surname), split_parts(given))),
            None => Ok((clean_name_segment(raw), Vec::new())),
        }
    }

    /// Decodes a given-names-only field (no surname segment) into ordered
    /// parts split on filler runs.
    pub fn name_parts(&self, range: Range) -> Result<Vec<String>, ParseError> {
        Ok(split_parts(self.raw(range)?))
    }

    /// Decodes a 6-character YYMMDD date field.
    ///
    /// Never fails on content: a non-digit contributes 0 to its position and
    /// marks the date so that it is never calendar-valid.
    pub fn date(&self, range: Range) -> Result<MrzDate, ParseError> {
        debug_assert_eq!(range.end - range.start, 6);
        let raw = self.raw(range)?;
        let mut digits = [0u8; 6];
        let mut malformed = false;
        for (i, c) in raw.chars().take(6).enumerate() {
            match c.to_digit(10) {
                Some(d) => digits[i] = d as u8,
                None => malformed = true,
            }
        }
        let mut date = MrzDate::new(
            digits[0] * 10 + digits[1],
            digits[2] * 10 + digits[3],
            digits[4] * 10 + digits[5],
        );
        date.malformed = malformed;
        Ok(date)
    }

    /// Decodes the sex character at a single position.
    pub fn sex(&self, row: usize, col: usize) -> Result<Sex, ParseError> {
        Ok(Sex::from_mrz(self.char_at(row, col)?))
    }

    /// Returns the character at a single position.
    pub fn char_at(&self, row: usize, col: usize) -> Result<char, ParseError> {
        let raw = self.raw(Range::new(row, col, col + 1))?;
        Ok(raw.chars().next().unwrap_or(FILLER))
    }

    /// Validates the check digit at `(row, col)` against the raw content of
    /// `over`. A filler or non-digit in the check-digit position reports
    /// `false` without an error.
    pub fn check_digit(&self, row: usize, col: usize, over: Range) -> Result<bool, ParseError> {
        let fragment = self.raw(over)?;
        Ok(validate_check_digit(fragment, self.char_at(row, col)?))
    }

    /// Validates the check digit at `(row, col)` against an already
    /// assembled fragment (composite check digits).
    pub fn check_digit_over(
        &self,
        row: usize,
        col: usize,
        fragment: &str,
    ) -> Result<bool, ParseError> {
        Ok(validate_check_digit(fragment, self.char_at(row, col)?))
    }
}

fn clean_name_segment(segment: &str) -> String {
    segment.replace(FILLER, " ").trim().to_string()
}

fn split_parts(segment: &str) -> Vec<String> {
    segment
        .split(FILLER)
        .filter(|part| !part.is_empty())
        .map(|part| part.trim().to_string())
        .collect()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Maps a character to its MRZ equivalent: letters uppercased, digits and
/// filler kept, space and comma become filler, anything else becomes filler.
///
/// This is filler substitution only; no transliteration of accented or
/// non-Latin characters is attempted.
pub fn mrz_char(c: char) -> char {
    match c {
        'A'..='Z' | '0'..='9' | FILLER => c,
        'a'..='z' => c.to_ascii_uppercase(),
        _ => FILLER,
    }
}

/// Encodes a string value into a fixed-width field, padding with filler.
///
/// Fails with [`EncodeError::FieldTooLong`] when the value exceeds the
/// width; the encoder never truncates.
pub fn encode_string(
    value: &str,
    width: usize,
    field: &'static str,
) -> Result<String, EncodeError> {
    let mut out: String = value.chars().map(mrz_char).collect();
    pad(&mut out, width, field)?;
    Ok(out)
}

/// Encodes a surname and given-name parts into a fixed-width name field:
/// surname, `<<`, parts joined by single filler, padded with filler.
pub fn encode_name(
    surname: &str,
    given_names: &[String],
    width: usize,
    field: &'static str,
) -> Result<String, EncodeError> {
    let mut out: String = surname.chars().map(mrz_char).collect();
    out.push(FILLER);
    out.push(FILLER);
    out.push_str(&join_parts(given_names));
    pad(&mut out, width, field)?;
    Ok(out)
}

/// Encodes a given-names-only field: parts joined by single filler, padded.
pub fn encode_name_parts(
    given_names: &[String],
    width: usize,
    field: &'static str,
) -> Result<String, EncodeError> {
    let mut out = join_parts(given_names);
    pad(&mut out, width, field)?;
    Ok(out)
}

/// Encodes a date as YYMMDD, zero-padding each component.
pub fn encode_date(date: &MrzDate) -> String {
    format!("{:02}{:02}{:02}", date.year, date.month, date.day)
}

fn join_parts(parts: &[String]) -> String {
    parts
        .iter()
        .map(|part| part.chars().map(mrz_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("<")
}

fn pad(out: &mut String, width: usize, field: &'static str) -> Result<(), EncodeError> {
    // Trailing filler from the joins above never overflows the field.
    while out.ends_with(FILLER) {
        out.pop();
    }
    if out.len() > width {
        return Err(EncodeError::FieldTooLong {
            field,
            len: out.len(),
            width,
        });
    }
    while out.len() < width {
        out.push(FILLER);
    }
    Ok(())
}
