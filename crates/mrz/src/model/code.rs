//! Document codes: the one- or two-letter type prefix on row 0.

use crate::error::ParseError;

/// Document type derived from the first two characters of row 0.
///
/// A closed enumeration; every supported layout starts with a prefix that
/// maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentCode {
    /// `P`, `T`, or `IP`: a passport or a travel document very close to one.
    Passport,
    /// General `I` type other than `IP`: identity card or residence permit.
    TypeI,
    /// General `A` type other than `AC`.
    TypeA,
    /// `AC`: crew member certificate.
    CrewMember,
    /// General `C` type.
    TypeC,
    /// `V`: visa.
    TypeV,
    /// `ME`, `TD`, `PT`, or `R`: migrant or convention travel document.
    Migrant,
}

impl DocumentCode {
    /// Derives the document code from the first two characters of row 0.
    ///
    /// Two-character prefixes are checked before the single-character
    /// fallbacks. `IV` is rejected outright per ICAO 9303.
    pub fn parse(code: &str) -> Result<DocumentCode, ParseError> {
        match code {
            "IV" => {
                return Err(ParseError::DocumentCodeNotAllowed {
                    code: code.to_string(),
                });
            }
            "AC" => return Ok(DocumentCode::CrewMember),
            "ME" | "TD" | "PT" => return Ok(DocumentCode::Migrant),
            "IP" => return Ok(DocumentCode::Passport),
            _ => {}
        }
        match code.chars().next() {
            Some('T') | Some('P') => Ok(DocumentCode::Passport),
            Some('A') => Ok(DocumentCode::TypeA),
            Some('C') => Ok(DocumentCode::TypeC),
            Some('V') => Ok(DocumentCode::TypeV),
            Some('I') => Ok(DocumentCode::TypeI),
            Some('R') => Ok(DocumentCode::Migrant),
            _ => Err(ParseError::UnsupportedDocumentCode {
                code: code.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_character_prefixes() {
        assert_eq!(DocumentCode::parse("AC").unwrap(), DocumentCode::CrewMember);
        assert_eq!(DocumentCode::parse("ME").unwrap(), DocumentCode::Migrant);
        assert_eq!(DocumentCode::parse("TD").unwrap(), DocumentCode::Migrant);
        assert_eq!(DocumentCode::parse("PT").unwrap(), DocumentCode::Migrant);
        assert_eq!(DocumentCode::parse("IP").unwrap(), DocumentCode::Passport);
    }

    #[test]
    fn test_single_character_fallbacks() {
        assert_eq!(DocumentCode::parse("P<").unwrap(), DocumentCode::Passport);
        assert_eq!(DocumentCode::parse("TR").unwrap(), DocumentCode::Passport);
        assert_eq!(DocumentCode::parse("ID").unwrap(), DocumentCode::TypeI);
        assert_eq!(DocumentCode::parse("I<").unwrap(), DocumentCode::TypeI);
        assert_eq!(DocumentCode::parse("CI").unwrap(), DocumentCode::TypeC);
        assert_eq!(DocumentCode::parse("V<").unwrap(), DocumentCode::TypeV);
        assert_eq!(DocumentCode::parse("A<").unwrap(), DocumentCode::TypeA);
        assert_eq!(DocumentCode::parse("R<").unwrap(), DocumentCode::Migrant);
    }

    #[test]
    fn test_iv_rejected() {
        assert_eq!(
            DocumentCode::parse("IV"),
            Err(ParseError::DocumentCodeNotAllowed {
                code: "IV".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            DocumentCode::parse("X<"),
            Err(ParseError::UnsupportedDocumentCode {
                code: "X<".to_string()
            })
        );
    }
}
