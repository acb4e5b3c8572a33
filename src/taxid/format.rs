//! CIF shape and NIF/NIE checksum validation.

use serde::Serialize;
use thiserror::Error;

/// Check letters indexed by `number mod 23`.
pub const NIF_CHECK_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

const NIF_MODULUS: u32 = 23;
const TAX_ID_LEN: usize = 9;

/// Error returned when a CIF or NIF fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaxIdError {
    /// The value does not have the expected layout of letters and digits.
    #[error("'{value}' is not a well-formed tax identifier")]
    Shape { value: String },

    /// The layout is right but the trailing check letter is wrong.
    #[error("'{value}' has check letter '{found}', expected '{expected}'")]
    Checksum {
        value: String,
        expected: char,
        found: char,
    },
}

/// Which NIF form a value was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NifKind {
    /// Documento Nacional de Identidad: 8 digits + check letter.
    Dni,
    /// Número de Identidad de Extranjero: X/Y/Z + 7 digits + check letter.
    Nie,
}

/// Check letter for a numeric NIF prefix.
pub fn nif_check_letter(number: u32) -> char {
    let index = (number % NIF_MODULUS) as usize;
    char::from(NIF_CHECK_LETTERS.as_bytes()[index])
}

/// Validate a NIF in DNI (`12345678Z`) or NIE (`X1234567L`) form.
///
/// For NIE values the leading letter stands for a digit (`X`=0, `Y`=1,
/// `Z`=2) that is prepended to the 7 digits before taking the remainder.
/// `X7225252Y` is therefore rejected: `07225252 mod 23 = 9`, letter `D`.
///
/// ```
/// use factura::taxid::{TaxIdError, validate_nif};
///
/// assert!(validate_nif("X7225252D").is_ok());
/// assert!(matches!(
///     validate_nif("X7225252Y"),
///     Err(TaxIdError::Checksum { expected: 'D', found: 'Y', .. })
/// ));
/// ```
pub fn validate_nif(nif: &str) -> Result<NifKind, TaxIdError> {
    let shape = || TaxIdError::Shape { value: nif.into() };

    let bytes = nif.as_bytes();
    if bytes.len() != TAX_ID_LEN {
        return Err(shape());
    }

    let (kind, leading) = match bytes[0] {
        b'X' => (NifKind::Nie, 0),
        b'Y' => (NifKind::Nie, 1),
        b'Z' => (NifKind::Nie, 2),
        d @ b'0'..=b'9' => (NifKind::Dni, u32::from(d - b'0')),
        _ => return Err(shape()),
    };

    let digits = &bytes[1..8];
    let found = bytes[8];
    if !digits.iter().all(u8::is_ascii_digit) || !found.is_ascii_uppercase() {
        return Err(shape());
    }

    let number = digits
        .iter()
        .fold(leading, |acc, d| acc * 10 + u32::from(d - b'0'));
    let expected = nif_check_letter(number);
    let found = char::from(found);
    if found != expected {
        return Err(TaxIdError::Checksum {
            value: nif.into(),
            expected,
            found,
        });
    }

    Ok(kind)
}

/// Boolean form of [`validate_nif`].
pub fn is_valid_nif(nif: &str) -> bool {
    validate_nif(nif).is_ok()
}

/// Validate the shape of a CIF: one uppercase letter followed by 8 digits.
///
/// The CIF control character is not verified.
pub fn validate_cif(cif: &str) -> Result<(), TaxIdError> {
    let bytes = cif.as_bytes();
    let well_formed = bytes.len() == TAX_ID_LEN
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(u8::is_ascii_digit);
    if well_formed {
        Ok(())
    } else {
        Err(TaxIdError::Shape { value: cif.into() })
    }
}

/// Boolean form of [`validate_cif`].
pub fn is_valid_cif(cif: &str) -> bool {
    validate_cif(cif).is_ok()
}
