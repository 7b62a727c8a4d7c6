//! Format registry: the ordered catalogue of supported layouts and the
//! detection algorithm that picks exactly one of them for a row set.

use lazy_static::lazy_static;

use crate::error::ParseError;
use crate::model::record::{
    FrenchId, MrtdTd1, MrtdTd2, MrvA, MrvB, MrzRecord, Passport, SlovakId234,
};

/// The supported MRZ layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MrzFormat {
    /// MRTD TD1: three rows of 30 columns.
    MrtdTd1,
    /// French national ID card: 2x36, row 0 prefixed `IDFRA`.
    FrenchId,
    /// MRV visa type B: 2x36, row 0 starting with `V`.
    MrvVisaB,
    /// MRTD TD2: 2x36.
    MrtdTd2,
    /// MRV visa type A: 2x44, row 0 starting with `V`.
    MrvVisaA,
    /// MRP passport booklet: 2x44.
    Passport,
    /// Old Slovak ID card: 2x34.
    SlovakId234,
}

/// One catalogue entry: a row/column shape plus an optional content
/// predicate for shapes shared by several layouts.
pub struct FormatDescriptor {
    pub format: MrzFormat,
    pub rows: usize,
    pub columns: usize,
    discriminator: Option<fn(&[&str]) -> bool>,
}

impl FormatDescriptor {
    const fn shape(format: MrzFormat, rows: usize, columns: usize) -> Self {
        FormatDescriptor {
            format,
            rows,
            columns,
            discriminator: None,
        }
    }

    const fn with_prefix(
        format: MrzFormat,
        rows: usize,
        columns: usize,
        discriminator: fn(&[&str]) -> bool,
    ) -> Self {
        FormatDescriptor {
            format,
            rows,
            columns,
            discriminator: Some(discriminator),
        }
    }

    /// Returns whether the given row set is of this format.
    pub fn matches(&self, rows: &[&str]) -> bool {
        if rows.len() != self.rows || rows[0].len() != self.columns {
            return false;
        }
        match self.discriminator {
            Some(predicate) => predicate(rows),
            None => true,
        }
    }
}

fn starts_with_idfra(rows: &[&str]) -> bool {
    rows[0].starts_with("IDFRA")
}

fn starts_with_visa(rows: &[&str]) -> bool {
    rows[0].starts_with('V')
}

lazy_static! {
    /// The format catalogue in detection priority order.
    ///
    /// The order is load-bearing: several layouts share a row/column shape
    /// and are told apart only by a row 0 prefix, so every entry with a
    /// content predicate must come before its shape-only sibling. First
    /// match wins.
    pub static ref FORMAT_CATALOGUE: Vec<FormatDescriptor> = vec![
        FormatDescriptor::shape(MrzFormat::MrtdTd1, 3, 30),
        FormatDescriptor::with_prefix(MrzFormat::FrenchId, 2, 36, starts_with_idfra),
        FormatDescriptor::with_prefix(MrzFormat::MrvVisaB, 2, 36, starts_with_visa),
        FormatDescriptor::shape(MrzFormat::MrtdTd2, 2, 36),
        FormatDescriptor::with_prefix(MrzFormat::MrvVisaA, 2, 44, starts_with_visa),
        FormatDescriptor::shape(MrzFormat::Passport, 2, 44),
        FormatDescriptor::shape(MrzFormat::SlovakId234, 2, 34),
    ];
}

impl MrzFormat {
    /// Detects the format of an MRZ text block.
    ///
    /// Rows must all have the length of row 0; otherwise
    /// [`ParseError::InconsistentRowWidth`] is reported before any catalogue
    /// entry is consulted. If no entry matches, the observed shape is
    /// reported in [`ParseError::UnknownFormat`].
    pub fn detect(mrz: &str) -> Result<MrzFormat, ParseError> {
        let rows = split_rows(mrz)?;
        let columns = rows.first().map_or(0, |r| r.len());
        FORMAT_CATALOGUE
            .iter()
            .find(|descriptor| descriptor.matches(&rows))
            .map(|descriptor| descriptor.format)
            .ok_or(ParseError::UnknownFormat {
                rows: rows.len(),
                columns,
            })
    }

    /// Row count of this layout.
    pub fn rows(self) -> usize {
        self.descriptor().rows
    }

    /// Column count of this layout.
    pub fn columns(self) -> usize {
        self.descriptor().columns
    }

    /// Creates an empty, default-valued record of this format.
    pub fn new_record(self) -> MrzRecord {
        match self {
            MrzFormat::MrtdTd1 => MrzRecord::MrtdTd1(MrtdTd1::default()),
            MrzFormat::FrenchId => MrzRecord::FrenchId(FrenchId::default()),
            MrzFormat::MrvVisaB => MrzRecord::MrvVisaB(MrvB::default()),
            MrzFormat::MrtdTd2 => MrzRecord::MrtdTd2(MrtdTd2::default()),
            MrzFormat::MrvVisaA => MrzRecord::MrvVisaA(MrvA::default()),
            MrzFormat::Passport => MrzRecord::Passport(Passport::default()),
            MrzFormat::SlovakId234 => MrzRecord::SlovakId234(SlovakId234::default()),
        }
    }

    fn descriptor(self) -> &'static FormatDescriptor {
        FORMAT_CATALOGUE
            .iter()
            .find(|descriptor| descriptor.format == self)
            .expect("every format has a catalogue entry")
    }
}

/// Splits an MRZ text block into rows, enforcing equal row widths.
pub(crate) fn split_rows(mrz: &str) -> Result<Vec<&str>, ParseError> {
    let rows: Vec<&str> = mrz.lines().collect();
    if let Some(first) = rows.first() {
        let expected = first.len();
        for (row, text) in rows.iter().enumerate().skip(1) {
            if text.len() != expected {
                return Err(ParseError::InconsistentRowWidth {
                    row,
                    expected,
                    actual: text.len(),
                });
            }
        }
    }
    Ok(rows)
}
