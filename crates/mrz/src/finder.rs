//! Locating an MRZ inside surrounding text.
//!
//! OCR output rarely hands over the machine-readable zone alone; the
//! finder scans a larger blob for the first run of consecutive
//! equal-length lines that decodes as a known format.

use crate::error::FindError;
use crate::model::format::MrzFormat;

/// Returns the first substring of `text` that detects as a known MRZ
/// format: consecutive lines of equal trimmed length, joined with `\n`
/// and no trailing newline.
///
/// Lines are trimmed and whitespace-only lines are dropped before
/// grouping, so indented rows and blank lines between rows are tolerated.
pub fn find_mrz(text: &str) -> Result<String, FindError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut start = 0;
    while start < lines.len() {
        let first = lines[start];
        let mut end = start + 1;
        while end < lines.len() && lines[end].len() == first.len() {
            end += 1;
        }
        // Try every prefix of the run; a group can be followed by
        // unrelated lines that happen to share its width.
        for len in (2..=end - start).rev() {
            let candidate = lines[start..start + len].join("\n");
            if MrzFormat::detect(&candidate).is_ok() {
                return Ok(candidate);
            }
        }
        start += 1;
    }
    Err(FindError::NotFound)
}
