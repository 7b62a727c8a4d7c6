//! Sex codes as printed in an MRZ.

use crate::codec::fields::FILLER;

/// Sex as recorded on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sex {
    Male,
    Female,
    /// `X`, filler, or any other character.
    #[default]
    Unspecified,
}

impl Sex {
    /// Maps an MRZ character to a sex code. Anything other than `M` or `F`
    /// decodes as [`Sex::Unspecified`].
    pub fn from_mrz(c: char) -> Sex {
        match c {
            'M' => Sex::Male,
            'F' => Sex::Female,
            _ => Sex::Unspecified,
        }
    }

    /// Returns the MRZ character for this sex code.
    pub fn to_mrz(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
            Sex::Unspecified => FILLER,
        }
    }
}
