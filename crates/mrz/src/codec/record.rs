//! Per-format record decoding and encoding.
//!
//! Every variant's `decode` has the same shape: extract each bound field
//! through the field codec, compute each validity flag against its bound
//! check-digit position, assemble the record. `encode` is the literal
//! mirror: format each field to its fixed width, compute and insert the
//! check digits, join rows with `\n` (every row is terminated).

use crate::codec::checksum::check_digit_char;
use crate::codec::fields::{
    FieldReader, Range, encode_date, encode_name, encode_name_parts, encode_string, mrz_char,
};
use crate::error::{EncodeError, ParseError};
use crate::model::code::DocumentCode;
use crate::model::format::MrzFormat;
use crate::model::record::{
    FrenchId, MrtdTd1, MrtdTd2, MrvA, MrvB, MrzRecord, Passport, SlovakId234,
};

/// Decodes an MRZ text block, auto-detecting its format.
pub fn decode_record(mrz: &str) -> Result<MrzRecord, ParseError> {
    let format = MrzFormat::detect(mrz)?;
    let reader = FieldReader::new(mrz)?;
    match format {
        MrzFormat::MrtdTd1 => Ok(MrzRecord::MrtdTd1(decode_td1(&reader)?)),
        MrzFormat::FrenchId => Ok(MrzRecord::FrenchId(decode_french_id(&reader)?)),
        MrzFormat::MrvVisaB => Ok(MrzRecord::MrvVisaB(decode_mrv_b(&reader)?)),
        MrzFormat::MrtdTd2 => Ok(MrzRecord::MrtdTd2(decode_td2(&reader)?)),
        MrzFormat::MrvVisaA => Ok(MrzRecord::MrvVisaA(decode_mrv_a(&reader)?)),
        MrzFormat::Passport => Ok(MrzRecord::Passport(decode_passport(&reader)?)),
        MrzFormat::SlovakId234 => Ok(MrzRecord::SlovakId234(decode_slovak_id(&reader)?)),
    }
}

/// Encodes a record to its canonical fixed-width MRZ text.
pub fn encode_record(record: &MrzRecord) -> Result<String, EncodeError> {
    match record {
        MrzRecord::MrtdTd1(r) => encode_td1(r),
        MrzRecord::FrenchId(r) => encode_french_id(r),
        MrzRecord::MrvVisaB(r) => encode_mrv_b(r),
        MrzRecord::MrtdTd2(r) => encode_td2(r),
        MrzRecord::MrvVisaA(r) => encode_mrv_a(r),
        MrzRecord::Passport(r) => encode_passport(r),
        MrzRecord::SlovakId234(r) => encode_slovak_id(r),
    }
}

/// The fields every layout binds at the start of row 0.
struct Header {
    code: DocumentCode,
    code1: char,
    code2: char,
    issuing_country: String,
}

fn decode_header(r: &FieldReader<'_>) -> Result<Header, ParseError> {
    Ok(Header {
        code: DocumentCode::parse(r.raw(Range::new(0, 0, 2))?)?,
        code1: r.char_at(0, 0)?,
        code2: r.char_at(0, 1)?,
        issuing_country: r.string(Range::new(0, 2, 5))?,
    })
}

fn push_header(
    row: &mut String,
    code1: char,
    code2: char,
    issuing_country: &str,
) -> Result<(), EncodeError> {
    row.push(mrz_char(code1));
    row.push(mrz_char(code2));
    row.push_str(&encode_string(issuing_country, 3, "issuing country")?);
    Ok(())
}

// =============================================================================
// PASSPORT (MRP, 2x44)
// =============================================================================

fn decode_passport(r: &FieldReader<'_>) -> Result<Passport, ParseError> {
    let header = decode_header(r)?;
    let (surname, given_names) = r.name(Range::new(0, 5, 44))?;
    let date_of_birth = r.date(Range::new(1, 13, 19))?;
    let expiration_date = r.date(Range::new(1, 21, 27))?;
    let composite = r.concat(&[
        Range::new(1, 0, 10),
        Range::new(1, 13, 20),
        Range::new(1, 21, 43),
    ])?;
    Ok(Passport {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        issuing_country: header.issuing_country,
        surname,
        given_names,
        document_number: r.string(Range::new(1, 0, 9))?,
        valid_document_number: r.check_digit(1, 9, Range::new(1, 0, 9))?,
        nationality: r.string(Range::new(1, 10, 13))?,
        valid_date_of_birth: r.check_digit(1, 19, Range::new(1, 13, 19))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 20)?,
        valid_expiration_date: r.check_digit(1, 27, Range::new(1, 21, 27))?
            && expiration_date.is_calendar_valid(),
        expiration_date,
        personal_number: r.string(Range::new(1, 28, 42))?,
        valid_personal_number: r.check_digit(1, 42, Range::new(1, 28, 42))?,
        valid_composite: r.check_digit_over(1, 43, &composite)?,
    })
}

fn encode_passport(r: &Passport) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(45);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    row0.push_str(&encode_name(&r.surname, &r.given_names, 39, "name")?);

    let mut row1 = String::with_capacity(45);
    let document_number = encode_string(&r.document_number, 9, "document number")?;
    row1.push_str(&document_number);
    row1.push(check_digit_char(&document_number));
    row1.push_str(&encode_string(&r.nationality, 3, "nationality")?);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let expiration_date = encode_date(&r.expiration_date);
    row1.push_str(&expiration_date);
    row1.push(check_digit_char(&expiration_date));
    let personal_number = encode_string(&r.personal_number, 14, "personal number")?;
    row1.push_str(&personal_number);
    row1.push(check_digit_char(&personal_number));
    let composite = format!("{}{}{}", &row1[0..10], &row1[13..20], &row1[21..43]);
    row1.push(check_digit_char(&composite));

    Ok(format!("{row0}\n{row1}\n"))
}

// =============================================================================
// MRV VISA A (2x44)
// =============================================================================

fn decode_mrv_a(r: &FieldReader<'_>) -> Result<MrvA, ParseError> {
    let header = decode_header(r)?;
    let (surname, given_names) = r.name(Range::new(0, 5, 44))?;
    let date_of_birth = r.date(Range::new(1, 13, 19))?;
    let expiration_date = r.date(Range::new(1, 21, 27))?;
    // The whole-record composite digit ICAO defines for this layout is not
    // validated; see the crate-level known limitations.
    Ok(MrvA {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        issuing_country: header.issuing_country,
        surname,
        given_names,
        document_number: r.string(Range::new(1, 0, 9))?,
        valid_document_number: r.check_digit(1, 9, Range::new(1, 0, 9))?,
        nationality: r.string(Range::new(1, 10, 13))?,
        valid_date_of_birth: r.check_digit(1, 19, Range::new(1, 13, 19))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 20)?,
        valid_expiration_date: r.check_digit(1, 27, Range::new(1, 21, 27))?
            && expiration_date.is_calendar_valid(),
        expiration_date,
        optional: r.string(Range::new(1, 28, 44))?,
    })
}

fn encode_mrv_a(r: &MrvA) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(45);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    row0.push_str(&encode_name(&r.surname, &r.given_names, 39, "name")?);

    let mut row1 = String::with_capacity(45);
    let document_number = encode_string(&r.document_number, 9, "document number")?;
    row1.push_str(&document_number);
    row1.push(check_digit_char(&document_number));
    row1.push_str(&encode_string(&r.nationality, 3, "nationality")?);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let expiration_date = encode_date(&r.expiration_date);
    row1.push_str(&expiration_date);
    row1.push(check_digit_char(&expiration_date));
    row1.push_str(&encode_string(&r.optional, 16, "optional data")?);

    Ok(format!("{row0}\n{row1}\n"))
}

// =============================================================================
// MRV VISA B (2x36)
// =============================================================================

fn decode_mrv_b(r: &FieldReader<'_>) -> Result<MrvB, ParseError> {
    let header = decode_header(r)?;
    let (surname, given_names) = r.name(Range::new(0, 5, 36))?;
    let date_of_birth = r.date(Range::new(1, 13, 19))?;
    let expiration_date = r.date(Range::new(1, 21, 27))?;
    Ok(MrvB {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        issuing_country: header.issuing_country,
        surname,
        given_names,
        document_number: r.string(Range::new(1, 0, 9))?,
        valid_document_number: r.check_digit(1, 9, Range::new(1, 0, 9))?,
        nationality: r.string(Range::new(1, 10, 13))?,
        valid_date_of_birth: r.check_digit(1, 19, Range::new(1, 13, 19))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 20)?,
        valid_expiration_date: r.check_digit(1, 27, Range::new(1, 21, 27))?
            && expiration_date.is_calendar_valid(),
        expiration_date,
        optional: r.string(Range::new(1, 28, 36))?,
    })
}

fn encode_mrv_b(r: &MrvB) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(37);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    row0.push_str(&encode_name(&r.surname, &r.given_names, 31, "name")?);

    let mut row1 = String::with_capacity(37);
    let document_number = encode_string(&r.document_number, 9, "document number")?;
    row1.push_str(&document_number);
    row1.push(check_digit_char(&document_number));
    row1.push_str(&encode_string(&r.nationality, 3, "nationality")?);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let expiration_date = encode_date(&r.expiration_date);
    row1.push_str(&expiration_date);
    row1.push(check_digit_char(&expiration_date));
    row1.push_str(&encode_string(&r.optional, 8, "optional data")?);

    Ok(format!("{row0}\n{row1}\n"))
}

// =============================================================================
// MRTD TD2 (2x36)
// =============================================================================

fn decode_td2(r: &FieldReader<'_>) -> Result<MrtdTd2, ParseError> {
    let header = decode_header(r)?;
    let (surname, given_names) = r.name(Range::new(0, 5, 36))?;
    let date_of_birth = r.date(Range::new(1, 13, 19))?;
    let expiration_date = r.date(Range::new(1, 21, 27))?;
    let composite = r.concat(&[
        Range::new(1, 0, 10),
        Range::new(1, 13, 20),
        Range::new(1, 21, 35),
    ])?;
    Ok(MrtdTd2 {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        issuing_country: header.issuing_country,
        surname,
        given_names,
        document_number: r.string(Range::new(1, 0, 9))?,
        valid_document_number: r.check_digit(1, 9, Range::new(1, 0, 9))?,
        nationality: r.string(Range::new(1, 10, 13))?,
        valid_date_of_birth: r.check_digit(1, 19, Range::new(1, 13, 19))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 20)?,
        valid_expiration_date: r.check_digit(1, 27, Range::new(1, 21, 27))?
            && expiration_date.is_calendar_valid(),
        expiration_date,
        optional: r.string(Range::new(1, 28, 35))?,
        valid_composite: r.check_digit_over(1, 35, &composite)?,
    })
}

fn encode_td2(r: &MrtdTd2) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(37);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    row0.push_str(&encode_name(&r.surname, &r.given_names, 31, "name")?);

    let mut row1 = String::with_capacity(37);
    let document_number = encode_string(&r.document_number, 9, "document number")?;
    row1.push_str(&document_number);
    row1.push(check_digit_char(&document_number));
    row1.push_str(&encode_string(&r.nationality, 3, "nationality")?);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let expiration_date = encode_date(&r.expiration_date);
    row1.push_str(&expiration_date);
    row1.push(check_digit_char(&expiration_date));
    row1.push_str(&encode_string(&r.optional, 7, "optional data")?);
    let composite = format!("{}{}{}", &row1[0..10], &row1[13..20], &row1[21..35]);
    row1.push(check_digit_char(&composite));

    Ok(format!("{row0}\n{row1}\n"))
}

// =============================================================================
// MRTD TD1 (3x30)
// =============================================================================

fn decode_td1(r: &FieldReader<'_>) -> Result<MrtdTd1, ParseError> {
    let header = decode_header(r)?;
    let (surname, given_names) = r.name(Range::new(2, 0, 30))?;
    let date_of_birth = r.date(Range::new(1, 0, 6))?;
    let expiration_date = r.date(Range::new(1, 8, 14))?;
    let composite = r.concat(&[
        Range::new(0, 5, 30),
        Range::new(1, 0, 7),
        Range::new(1, 8, 15),
        Range::new(1, 18, 29),
    ])?;
    Ok(MrtdTd1 {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        issuing_country: header.issuing_country,
        surname,
        given_names,
        document_number: r.string(Range::new(0, 5, 14))?,
        valid_document_number: r.check_digit(0, 14, Range::new(0, 5, 14))?,
        nationality: r.string(Range::new(1, 15, 18))?,
        valid_date_of_birth: r.check_digit(1, 6, Range::new(1, 0, 6))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 7)?,
        valid_expiration_date: r.check_digit(1, 14, Range::new(1, 8, 14))?
            && expiration_date.is_calendar_valid(),
        expiration_date,
        optional: r.string(Range::new(0, 15, 30))?,
        optional2: r.string(Range::new(1, 18, 29))?,
        valid_composite: r.check_digit_over(1, 29, &composite)?,
    })
}

fn encode_td1(r: &MrtdTd1) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(31);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    let document_number = encode_string(&r.document_number, 9, "document number")?;
    row0.push_str(&document_number);
    row0.push(check_digit_char(&document_number));
    row0.push_str(&encode_string(&r.optional, 15, "optional data")?);

    let mut row1 = String::with_capacity(31);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let expiration_date = encode_date(&r.expiration_date);
    row1.push_str(&expiration_date);
    row1.push(check_digit_char(&expiration_date));
    row1.push_str(&encode_string(&r.nationality, 3, "nationality")?);
    row1.push_str(&encode_string(&r.optional2, 11, "second optional data")?);
    let composite = format!(
        "{}{}{}{}",
        &row0[5..30],
        &row1[0..7],
        &row1[8..15],
        &row1[18..29]
    );
    row1.push(check_digit_char(&composite));

    let row2 = encode_name(&r.surname, &r.given_names, 30, "name")?;

    Ok(format!("{row0}\n{row1}\n{row2}\n"))
}

// =============================================================================
// FRENCH ID CARD (2x36)
// =============================================================================

fn decode_french_id(r: &FieldReader<'_>) -> Result<FrenchId, ParseError> {
    let header = decode_header(r)?;
    // Surname sits alone on row 0; the given names have their own field on
    // row 1. The layout carries no expiration date and no separate
    // nationality; nationality mirrors the issuing country.
    let (surname, _) = r.name(Range::new(0, 5, 30))?;
    let date_of_birth = r.date(Range::new(1, 27, 33))?;
    let composite = r.concat(&[Range::new(0, 0, 36), Range::new(1, 0, 35)])?;
    Ok(FrenchId {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        nationality: header.issuing_country.clone(),
        issuing_country: header.issuing_country,
        surname,
        given_names: r.name_parts(Range::new(1, 13, 27))?,
        document_number: r.string(Range::new(1, 0, 12))?,
        valid_document_number: r.check_digit(1, 12, Range::new(1, 0, 12))?,
        valid_date_of_birth: r.check_digit(1, 33, Range::new(1, 27, 33))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 34)?,
        expiration_date: Default::default(),
        valid_expiration_date: false,
        optional: r.string(Range::new(0, 30, 36))?,
        valid_composite: r.check_digit_over(1, 35, &composite)?,
    })
}

fn encode_french_id(r: &FrenchId) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(37);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    row0.push_str(&encode_string(&r.surname, 25, "surname")?);
    row0.push_str(&encode_string(&r.optional, 6, "optional data")?);

    let mut row1 = String::with_capacity(37);
    let document_number = encode_string(&r.document_number, 12, "document number")?;
    row1.push_str(&document_number);
    row1.push(check_digit_char(&document_number));
    row1.push_str(&encode_name_parts(&r.given_names, 14, "given names")?);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let composite = format!("{row0}{row1}");
    row1.push(check_digit_char(&composite));

    Ok(format!("{row0}\n{row1}\n"))
}

// =============================================================================
// SLOVAK ID (2x34)
// =============================================================================

fn decode_slovak_id(r: &FieldReader<'_>) -> Result<SlovakId234, ParseError> {
    let header = decode_header(r)?;
    let (surname, given_names) = r.name(Range::new(0, 5, 34))?;
    let date_of_birth = r.date(Range::new(1, 13, 19))?;
    let expiration_date = r.date(Range::new(1, 21, 27))?;
    Ok(SlovakId234 {
        code: header.code,
        code1: header.code1,
        code2: header.code2,
        issuing_country: header.issuing_country,
        surname,
        given_names,
        document_number: r.string(Range::new(1, 0, 9))?,
        valid_document_number: r.check_digit(1, 9, Range::new(1, 0, 9))?,
        nationality: r.string(Range::new(1, 10, 13))?,
        valid_date_of_birth: r.check_digit(1, 19, Range::new(1, 13, 19))?
            && date_of_birth.is_calendar_valid(),
        date_of_birth,
        sex: r.sex(1, 20)?,
        valid_expiration_date: r.check_digit(1, 27, Range::new(1, 21, 27))?
            && expiration_date.is_calendar_valid(),
        expiration_date,
        optional: r.string(Range::new(1, 28, 34))?,
    })
}

fn encode_slovak_id(r: &SlovakId234) -> Result<String, EncodeError> {
    let mut row0 = String::with_capacity(35);
    push_header(&mut row0, r.code1, r.code2, &r.issuing_country)?;
    row0.push_str(&encode_name(&r.surname, &r.given_names, 29, "name")?);

    let mut row1 = String::with_capacity(35);
    let document_number = encode_string(&r.document_number, 9, "document number")?;
    row1.push_str(&document_number);
    row1.push(check_digit_char(&document_number));
    row1.push_str(&encode_string(&r.nationality, 3, "nationality")?);
    let date_of_birth = encode_date(&r.date_of_birth);
    row1.push_str(&date_of_birth);
    row1.push(check_digit_char(&date_of_birth));
    row1.push(r.sex.to_mrz());
    let expiration_date = encode_date(&r.expiration_date);
    row1.push_str(&expiration_date);
    row1.push(check_digit_char(&expiration_date));
    row1.push_str(&encode_string(&r.optional, 6, "optional data")?);

    Ok(format!("{row0}\n{row1}\n"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::date::MrzDate;
    use crate::model::sex::Sex;

    const TD1: &str = "CIUTOD231458907A123X5328434D23\n3407127M9507122UTO<<<<<<<<<<<6\nSTEVENSON<<PETER<<<<<<<<<<<<<<\n";
    const TD2: &str = "I<UTOSTEVENSON<<PETER<<<<<<<<<<<<<<<\nD231458907UTO3407127M9507122<<<<<<<2";
    const MRP: &str = "I<SVKNOVAK<<JAN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<\n123456<AA5SVK8110251M1801020749313<<<<<<<<70\n";
    const MRV_A: &str = "V<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\nL898902C<3UTO6908061F9406236ZE184226B<<<<<<<\n";
    const MRV_B: &str = "V<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<\nL8988901C4XXX4009078F96121096ZE18422\n";
    const FRENCH_ID: &str = "IDFRAPETE<<<<<<<<<<<<<<<<<<<<<952042\n0509952018746NICOLAS<<PAUL<8206152M3\n";
    const SLOVAK_ID: &str = "I<SVKNOVAK<<JAN<<<<<<<<<<<<<<<<<<<\n1234567897SVK8110251M1801020<<<<<<\n";
    const PTD: &str = "PTD<<ALJWEER<<AHMAD<<<<<<<<<<<<<<<<<<<<<<<<<\nZ06RF5CX25SYR0101011M24092162101<<<<<<<<<<44";

    fn decode_passport_record(mrz: &str) -> Passport {
        match decode_record(mrz).unwrap() {
            MrzRecord::Passport(r) => r,
            other => panic!("expected a passport record, got {:?}", other.format()),
        }
    }

    #[test]
    fn test_passport_parsing() {
        let r = decode_passport_record(MRP);
        assert_eq!(r.code, DocumentCode::TypeI);
        assert_eq!((r.code1, r.code2), ('I', '<'));
        assert_eq!(r.issuing_country, "SVK");
        assert_eq!(r.nationality, "SVK");
        assert_eq!(r.surname, "NOVAK");
        assert_eq!(r.given_names, vec!["JAN".to_string()]);
        assert_eq!(r.document_number, "123456 AA");
        assert_eq!(r.personal_number, "749313");
        assert_eq!(r.date_of_birth, MrzDate::new(81, 10, 25));
        assert_eq!(r.expiration_date, MrzDate::new(18, 1, 2));
        assert_eq!(r.sex, Sex::Male);
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
        assert!(r.valid_personal_number);
        assert!(r.valid_composite);
    }

    #[test]
    fn test_passport_encode() {
        let record = Passport {
            code1: 'I',
            code2: '<',
            issuing_country: "SVK".to_string(),
            nationality: "SVK".to_string(),
            surname: "NOVAK".to_string(),
            given_names: vec!["JAN".to_string()],
            document_number: "123456 AA".to_string(),
            personal_number: "749313".to_string(),
            date_of_birth: MrzDate::new(81, 10, 25),
            expiration_date: MrzDate::new(18, 1, 2),
            sex: Sex::Male,
            ..Default::default()
        };
        assert_eq!(encode_record(&MrzRecord::Passport(record)).unwrap(), MRP);
    }

    #[test]
    fn test_passport_text_roundtrip() {
        let record = decode_record(MRP).unwrap();
        assert_eq!(encode_record(&record).unwrap(), MRP);
    }

    #[test]
    fn test_czech_passport_all_valid() {
        let mrz = "P<CZESPECIMEN<<VZOR<<<<<<<<<<<<<<<<<<<<<<<<<\n99003853<1CZE1101018M1207046110101111<<<<<94";
        let r = decode_passport_record(mrz);
        assert_eq!(r.code, DocumentCode::Passport);
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
        assert!(r.valid_personal_number);
        assert!(r.valid_composite);
    }

    #[test]
    fn test_german_passport_composite_mismatch() {
        // This specimen carries an intentionally wrong composite digit and
        // a filler where the personal-number check digit would sit.
        let mrz = "P<D<<MUSTERMANN<<ERIKA<<<<<<<<<<<<<<<<<<<<<<\nC01X01R741D<<6408125F2010315<<<<<<<<<<<<<<<9";
        let r = decode_passport_record(mrz);
        assert_eq!(r.issuing_country, "D");
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
        assert!(!r.valid_personal_number);
        assert!(!r.valid_composite);
    }

    #[test]
    fn test_gbr_passport_invalid_birth_date() {
        let mrz = "P<GBRUK<SPECIMEN<<ANGELA<ZOE<<<<<<<<<<<<<<<<\n9250764733GBR8809417F2007162<<<<<<<<<<<<<<08";
        let r = decode_passport_record(mrz);
        assert_eq!(r.date_of_birth, MrzDate::new(88, 9, 41));
        assert!(!r.date_of_birth.is_calendar_valid());
        assert!(!r.valid_date_of_birth);
        assert!(r.expiration_date.is_calendar_valid());
    }

    #[test]
    fn test_gbr_passport_unparseable_dates() {
        let mrz = "P<GBRUK<SPECIMEN<<ANGELA<ZOE<<<<<<<<<<<<<<<<\n9250764733GBRBB09117F2ZZ7162<<<<<<<<<<<<<<08";
        let r = decode_passport_record(mrz);
        // Non-digits contribute zero; decoding still succeeds.
        let dob = r.date_of_birth;
        assert_eq!((dob.year, dob.month, dob.day), (0, 9, 11));
        assert!(!dob.is_calendar_valid());
        assert!(!r.valid_date_of_birth);
        let exp = r.expiration_date;
        assert_eq!((exp.year, exp.month, exp.day), (20, 7, 16));
        assert!(!exp.is_calendar_valid());
        assert!(!r.valid_expiration_date);
    }

    #[test]
    fn test_ptd_migrant_travel_document() {
        let r = decode_passport_record(PTD);
        assert_eq!(r.code, DocumentCode::Migrant);
        assert_eq!((r.code1, r.code2), ('P', 'T'));
        assert_eq!(r.issuing_country, "D");
        assert_eq!(r.nationality, "SYR");
        assert_eq!(r.surname, "ALJWEER");
        assert_eq!(r.given_names, vec!["AHMAD".to_string()]);
        assert_eq!(r.document_number, "Z06RF5CX2");
        assert_eq!(r.personal_number, "2101");
        assert_eq!(r.date_of_birth, MrzDate::new(1, 1, 1));
        assert_eq!(r.expiration_date, MrzDate::new(24, 9, 21));
        assert_eq!(r.sex, Sex::Male);
        assert!(r.valid_composite);
    }

    #[test]
    fn test_ptd_text_roundtrip() {
        let record = decode_record(PTD).unwrap();
        assert_eq!(encode_record(&record).unwrap().trim_end(), PTD);
    }

    #[test]
    fn test_td1_parsing() {
        let r = match decode_record(TD1).unwrap() {
            MrzRecord::MrtdTd1(r) => r,
            other => panic!("expected TD1, got {:?}", other.format()),
        };
        assert_eq!(r.code, DocumentCode::TypeC);
        assert_eq!((r.code1, r.code2), ('C', 'I'));
        assert_eq!(r.issuing_country, "UTO");
        assert_eq!(r.nationality, "UTO");
        assert_eq!(r.document_number, "D23145890");
        assert_eq!(r.optional, "A123X5328434D23");
        assert_eq!(r.optional2, "");
        assert_eq!(r.date_of_birth, MrzDate::new(34, 7, 12));
        assert_eq!(r.expiration_date, MrzDate::new(95, 7, 12));
        assert_eq!(r.sex, Sex::Male);
        assert_eq!(r.surname, "STEVENSON");
        assert_eq!(r.given_names, vec!["PETER".to_string()]);
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
        assert!(r.valid_composite);
    }

    #[test]
    fn test_td1_encode() {
        let record = MrtdTd1 {
            code1: 'C',
            code2: 'I',
            issuing_country: "UTO".to_string(),
            nationality: "UTO".to_string(),
            document_number: "D23145890".to_string(),
            optional: "A123X5328434D23".to_string(),
            date_of_birth: MrzDate::new(34, 7, 12),
            expiration_date: MrzDate::new(95, 7, 12),
            sex: Sex::Male,
            surname: "Stevenson".to_string(),
            given_names: vec!["Peter".to_string()],
            ..Default::default()
        };
        assert_eq!(encode_record(&MrzRecord::MrtdTd1(record)).unwrap(), TD1);
    }

    #[test]
    fn test_td2_parsing_and_roundtrip() {
        let r = match decode_record(TD2).unwrap() {
            MrzRecord::MrtdTd2(r) => r,
            other => panic!("expected TD2, got {:?}", other.format()),
        };
        assert_eq!(r.code, DocumentCode::TypeI);
        assert_eq!(r.document_number, "D23145890");
        assert_eq!(r.optional, "");
        assert_eq!(r.surname, "STEVENSON");
        assert!(r.valid_composite);
        // Encoding always terminates rows; decode tolerates the absence.
        let encoded = encode_record(&MrzRecord::MrtdTd2(r)).unwrap();
        assert_eq!(encoded, format!("{TD2}\n"));
    }

    #[test]
    fn test_mrv_a_parsing() {
        let r = match decode_record(MRV_A).unwrap() {
            MrzRecord::MrvVisaA(r) => r,
            other => panic!("expected MRV-A, got {:?}", other.format()),
        };
        assert_eq!(r.code, DocumentCode::TypeV);
        assert_eq!((r.code1, r.code2), ('V', '<'));
        assert_eq!(r.issuing_country, "UTO");
        assert_eq!(r.nationality, "UTO");
        assert_eq!(r.document_number, "L898902C");
        assert_eq!(r.optional, "ZE184226B");
        assert_eq!(r.date_of_birth, MrzDate::new(69, 8, 6));
        assert_eq!(r.expiration_date, MrzDate::new(94, 6, 23));
        assert_eq!(r.sex, Sex::Female);
        assert_eq!(r.surname, "ERIKSSON");
        assert_eq!(
            r.given_names,
            vec!["ANNA".to_string(), "MARIA".to_string()]
        );
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
    }

    #[test]
    fn test_mrv_a_text_roundtrip() {
        let record = decode_record(MRV_A).unwrap();
        assert_eq!(encode_record(&record).unwrap(), MRV_A);
    }

    #[test]
    fn test_mrv_b_parsing_and_roundtrip() {
        let r = match decode_record(MRV_B).unwrap() {
            MrzRecord::MrvVisaB(r) => r,
            other => panic!("expected MRV-B, got {:?}", other.format()),
        };
        assert_eq!(r.code, DocumentCode::TypeV);
        assert_eq!(r.document_number, "L8988901C");
        assert_eq!(r.nationality, "XXX");
        assert_eq!(r.date_of_birth, MrzDate::new(40, 9, 7));
        assert_eq!(r.expiration_date, MrzDate::new(96, 12, 10));
        assert_eq!(r.sex, Sex::Female);
        assert_eq!(r.optional, "6ZE18422");
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
        assert_eq!(encode_record(&MrzRecord::MrvVisaB(r)).unwrap(), MRV_B);
    }

    #[test]
    fn test_french_id_parsing() {
        let r = match decode_record(FRENCH_ID).unwrap() {
            MrzRecord::FrenchId(r) => r,
            other => panic!("expected French ID, got {:?}", other.format()),
        };
        assert_eq!(r.code, DocumentCode::TypeI);
        assert_eq!((r.code1, r.code2), ('I', 'D'));
        assert_eq!(r.issuing_country, "FRA");
        assert_eq!(r.nationality, "FRA");
        assert_eq!(r.surname, "PETE");
        assert_eq!(
            r.given_names,
            vec!["NICOLAS".to_string(), "PAUL".to_string()]
        );
        assert_eq!(r.document_number, "050995201874");
        assert_eq!(r.optional, "952042");
        assert_eq!(r.date_of_birth, MrzDate::new(82, 6, 15));
        assert_eq!(r.sex, Sex::Male);
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_composite);
        // Not carried by the layout.
        assert!(!r.valid_expiration_date);
    }

    #[test]
    fn test_french_id_encode() {
        let record = FrenchId {
            issuing_country: "FRA".to_string(),
            nationality: "FRA".to_string(),
            surname: "NOVAK".to_string(),
            given_names: vec!["JAN".to_string()],
            document_number: "ABCDE1234512".to_string(),
            optional: "123456".to_string(),
            date_of_birth: MrzDate::new(81, 10, 25),
            sex: Sex::Male,
            ..Default::default()
        };
        assert_eq!(
            encode_record(&MrzRecord::FrenchId(record)).unwrap(),
            "IDFRANOVAK<<<<<<<<<<<<<<<<<<<<123456\nABCDE12345126JAN<<<<<<<<<<<8110251M8\n"
        );
    }

    #[test]
    fn test_french_id_record_roundtrip() {
        // The specimen separates the given names with a double filler, which
        // re-encodes as a single filler; the round trip is therefore only
        // stable at the record level, not character-for-character.
        let first = decode_record(FRENCH_ID).unwrap();
        let reencoded = encode_record(&first).unwrap();
        let second = decode_record(&reencoded).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_slovak_id_parsing_and_roundtrip() {
        let r = match decode_record(SLOVAK_ID).unwrap() {
            MrzRecord::SlovakId234(r) => r,
            other => panic!("expected Slovak ID, got {:?}", other.format()),
        };
        assert_eq!(r.code, DocumentCode::TypeI);
        assert_eq!(r.issuing_country, "SVK");
        assert_eq!(r.nationality, "SVK");
        assert_eq!(r.surname, "NOVAK");
        assert_eq!(r.given_names, vec!["JAN".to_string()]);
        assert_eq!(r.document_number, "123456789");
        assert_eq!(r.optional, "");
        assert!(r.valid_document_number);
        assert!(r.valid_date_of_birth);
        assert!(r.valid_expiration_date);
        assert_eq!(encode_record(&MrzRecord::SlovakId234(r)).unwrap(), SLOVAK_ID);
    }

    #[test]
    fn test_encode_rejects_too_long_field() {
        let record = Passport {
            document_number: "ABCDE12345".to_string(),
            ..Default::default()
        };
        assert_eq!(
            encode_record(&MrzRecord::Passport(record)),
            Err(EncodeError::FieldTooLong {
                field: "document number",
                len: 10,
                width: 9
            })
        );
    }

    #[test]
    fn test_decode_unsupported_document_code() {
        let mrz = "X<UTOSTEVENSON<<PETER<<<<<<<<<<<<<<<\nD231458907UTO3407127M9507122<<<<<<<2";
        assert_eq!(
            decode_record(mrz),
            Err(ParseError::UnsupportedDocumentCode {
                code: "X<".to_string()
            })
        );
    }

    fn sex_strategy() -> impl Strategy<Value = Sex> {
        prop_oneof![
            Just(Sex::Male),
            Just(Sex::Female),
            Just(Sex::Unspecified)
        ]
    }

    fn date_strategy() -> impl Strategy<Value = MrzDate> {
        (0u8..=99, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| MrzDate::new(y, m, d))
    }

    proptest! {
        #[test]
        fn prop_passport_roundtrip(
            surname in "[A-Z]{1,10}",
            given in proptest::collection::vec("[A-Z]{1,8}", 1..=2),
            country in "[A-Z]{3}",
            nationality in "[A-Z]{3}",
            document_number in "[A-Z0-9]{1,9}",
            personal_number in "[A-Z0-9]{0,14}",
            date_of_birth in date_strategy(),
            expiration_date in date_strategy(),
            sex in sex_strategy(),
        ) {
            let record = Passport {
                issuing_country: country,
                nationality,
                surname,
                given_names: given,
                document_number,
                personal_number,
                date_of_birth,
                expiration_date,
                sex,
                ..Default::default()
            };
            let encoded = encode_record(&MrzRecord::Passport(record.clone())).unwrap();
            let decoded = match decode_record(&encoded).unwrap() {
                MrzRecord::Passport(r) => r,
                other => panic!("expected a passport record, got {:?}", other.format()),
            };
            prop_assert_eq!(&decoded.surname, &record.surname);
            prop_assert_eq!(&decoded.given_names, &record.given_names);
            prop_assert_eq!(&decoded.document_number, &record.document_number);
            prop_assert_eq!(&decoded.personal_number, &record.personal_number);
            prop_assert_eq!(&decoded.issuing_country, &record.issuing_country);
            prop_assert_eq!(&decoded.nationality, &record.nationality);
            prop_assert_eq!(decoded.date_of_birth, record.date_of_birth);
            prop_assert_eq!(decoded.expiration_date, record.expiration_date);
            prop_assert_eq!(decoded.sex, record.sex);
            // Freshly computed check digits always validate.
            prop_assert!(decoded.valid_document_number);
            prop_assert!(decoded.valid_date_of_birth);
            prop_assert!(decoded.valid_expiration_date);
            prop_assert!(decoded.valid_personal_number);
            prop_assert!(decoded.valid_composite);
        }
    }
}
