//! Error types for MRZ parsing, serialization and location.

use thiserror::Error;

/// Error during decoding of an MRZ text block.
///
/// Only structural malformation is fatal: rows of unequal width, an
/// unrecognized shape, a field range falling outside the text, or a
/// disallowed document code. Check-digit mismatches and calendar-invalid
/// dates are never errors; they surface as `false` validity flags on an
/// otherwise successfully decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("inconsistent row widths: row 0 has {expected} columns, row {row} has {actual}")]
    InconsistentRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown MRZ format: no known layout has {rows} rows of {columns} columns")]
    UnknownFormat { rows: usize, columns: usize },

    #[error("range {start}..{end} on row {row} exceeds the row length {row_len}")]
    RangeOutOfBounds {
        row: usize,
        start: usize,
        end: usize,
        row_len: usize,
    },

    #[error("document code {code:?} is not allowed")]
    DocumentCodeNotAllowed { code: String },

    #[error("unsupported document code {code:?}")]
    UnsupportedDocumentCode { code: String },
}

/// Error during serialization of a record back to MRZ text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A field value does not fit its fixed column width. The encoder never
    /// truncates; callers must shorten the value themselves.
    #[error("{field} of length {len} does not fit its {width}-column field")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        width: usize,
    },
}

/// Error reported by the MRZ locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FindError {
    #[error("no MRZ block found in the input text")]
    NotFound,
}
