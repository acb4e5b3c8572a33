//! Spanish tax identifier validation.
//!
//! Checks the shape of CIF (company) identifiers and the mod-23 check
//! letter of NIF identifiers in both their DNI and NIE forms.
//!
//! # Example
//!
//! ```
//! use factura::taxid::*;
//!
//! assert_eq!(validate_nif("12345678Z"), Ok(NifKind::Dni));
//! assert_eq!(validate_nif("X1234567L"), Ok(NifKind::Nie));
//! assert!(!is_valid_nif("X7225252Y"));
//! assert!(is_valid_cif("B76430134"));
//! ```

mod format;

pub use format::{
    NIF_CHECK_LETTERS, NifKind, TaxIdError, is_valid_cif, is_valid_nif, nif_check_letter,
    validate_cif, validate_nif,
};
