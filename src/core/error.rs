use serde::Serialize;
use thiserror::Error;

use crate::taxid::TaxIdError;

/// Why a data row was left out of the filtered output.
///
/// Only the first failing rule is reported, in the order the rules are
/// evaluated by [`validate_row`](super::validate_row).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum RowRejection {
    /// Another row in the same dataset carries the same invoice identifier.
    #[error("invoice identifier occurs {occurrences} times in the dataset")]
    DuplicateId { occurrences: usize },

    /// The line contains no text at all.
    #[error("row is empty")]
    EmptyRow,

    /// The line has fewer than the nine positional fields.
    #[error("row has {found} fields, expected 9")]
    MissingFields { found: usize },

    /// Gross or net amount is not a plain decimal number.
    #[error("{field} '{value}' is not a decimal amount")]
    InvalidAmount { field: &'static str, value: String },

    /// IVA or IGIC rate is set but not a plain decimal number.
    #[error("{field} rate '{value}' is not a decimal number")]
    InvalidTaxRate { field: &'static str, value: String },

    /// CIF is set but is not one uppercase letter followed by 8 digits.
    #[error("CIF '{value}' has an invalid format")]
    InvalidCif { value: String },

    /// NIF is set but fails the DNI/NIE shape or checksum check.
    #[error("invalid NIF: {source}")]
    InvalidNif { source: TaxIdError },

    /// Both IVA and IGIC are set.
    #[error("IVA and IGIC are both set")]
    TaxSchemeConflict,

    /// Neither IVA nor IGIC is set.
    #[error("neither IVA nor IGIC is set")]
    MissingTaxScheme,

    /// Both CIF and NIF are set.
    #[error("CIF and NIF are both set")]
    PartyIdConflict,

    /// Neither CIF nor NIF is set.
    #[error("neither CIF nor NIF is set")]
    MissingPartyId,

    /// An amount does not fit the decimal range, or the net amount
    /// computation would have to round.
    #[error("net amount computation overflows")]
    AmountOverflow,

    /// `gross - gross * tax / 100` does not equal the declared net amount.
    #[error("net amount {found} does not match computed {expected}")]
    UnbalancedNet { expected: String, found: String },
}
