//! Data model for machine-readable zones.
//!
//! A decoded MRZ is an [`record::MrzRecord`]: one immutable value per
//! document format, tagged by [`format::MrzFormat`]. Supporting types
//! cover the pieces the formats share: [`date::MrzDate`], [`sex::Sex`]
//! and [`code::DocumentCode`].

pub mod code;
pub mod date;
pub mod format;
pub mod record;
pub mod sex;

pub use code::DocumentCode;
pub use date::MrzDate;
pub use format::{FORMAT_CATALOGUE, FormatDescriptor, MrzFormat};
pub use record::{FrenchId, MrtdTd1, MrtdTd2, MrvA, MrvB, MrzRecord, Passport, SlovakId234};
pub use sex::Sex;
