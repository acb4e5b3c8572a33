use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of positional fields in a data row.
pub const FIELD_COUNT: usize = 9;

/// Positional column indexes of a data row.
pub mod column {
    pub const ID: usize = 0;
    pub const DATE: usize = 1;
    pub const GROSS: usize = 2;
    pub const NET: usize = 3;
    pub const IVA: usize = 4;
    pub const IGIC: usize = 5;
    pub const CONCEPT: usize = 6;
    pub const CIF: usize = 7;
    pub const NIF: usize = 8;
}

/// Typed view of an admissible invoice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice identifier, unique within the dataset.
    pub id: String,
    /// Invoice date as written (not validated).
    pub date: String,
    /// Gross amount.
    pub gross: Decimal,
    /// Net amount, equal to `gross - gross * rate / 100`.
    pub net: Decimal,
    /// The single tax scheme applied.
    pub tax: TaxRate,
    /// Free-text concept.
    pub concept: String,
    /// The single party identifier declared.
    pub party: PartyId,
}

/// Tax scheme and percentage of an invoice. IVA and IGIC are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRate {
    /// Impuesto sobre el Valor Añadido (mainland Spain).
    Iva(Decimal),
    /// Impuesto General Indirecto Canario (Canary Islands).
    Igic(Decimal),
}

impl TaxRate {
    /// Percentage value regardless of scheme.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Iva(rate) | Self::Igic(rate) => *rate,
        }
    }
}

/// Party identifier of an invoice. CIF and NIF are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyId {
    /// Company tax identifier.
    Cif(String),
    /// Individual tax identifier (DNI or NIE).
    Nif(String),
}

impl PartyId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cif(v) | Self::Nif(v) => v,
        }
    }
}
