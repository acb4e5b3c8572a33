use serde::{Deserialize, Serialize};

/// How the net amount equation `gross - gross * tax / 100 == net` is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountComparison {
    /// Exact decimal arithmetic. Amounts that are correct to the cent always balance;
    /// any step that would round is rejected as an overflow.
    #[default]
    Decimal,
    /// Binary floating point with `==`, evaluated as `(gross * tax) * 0.01`.
    ///
    /// Some correct amounts fail this check because of representation error.
    /// Amounts are still parsed as [`Decimal`](rust_decimal::Decimal) to build
    /// the admitted record, so values with more than 28 significant digits are
    /// rejected as [`AmountOverflow`](super::RowRejection::AmountOverflow) even
    /// though `f64` would accept them.
    Float,
}

/// Filter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Arithmetic used for the net amount check.
    pub amount_comparison: AmountComparison,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arithmetic used for the net amount check.
    pub fn with_amount_comparison(mut self, comparison: AmountComparison) -> Self {
        self.amount_comparison = comparison;
        self
    }
}
