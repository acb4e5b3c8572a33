use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::config::{AmountComparison, FilterConfig};
use super::error::RowRejection;
use super::filter::IdFrequencies;
use super::row::{invoice_id, split_fields};
use super::types::*;
use crate::taxid::{validate_cif, validate_nif};

/// `true` if `value` is one or more ASCII digits, optionally followed by
/// `.` and one or more ASCII digits.
pub fn is_decimal(value: &str) -> bool {
    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }
    match value.split_once('.') {
        Some((int, frac)) => digits(int) && digits(frac),
        None => digits(value),
    }
}

/// Decide whether a single data row is admissible.
///
/// Rules are checked in order and the first failure is returned:
/// identifier uniqueness, non-empty text, field count, field formats,
/// IVA/IGIC exclusivity, CIF/NIF exclusivity and finally the net amount
/// equation `gross - gross * tax / 100 == net`.
pub fn validate_row(
    line: &str,
    frequencies: &IdFrequencies<'_>,
    config: &FilterConfig,
) -> Result<InvoiceRecord, RowRejection> {
    let occurrences = frequencies.count(invoice_id(line));
    if occurrences > 1 {
        return Err(RowRejection::DuplicateId { occurrences });
    }
    if line.is_empty() {
        return Err(RowRejection::EmptyRow);
    }

    let fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return Err(RowRejection::MissingFields {
            found: fields.len(),
        });
    }

    let gross = parse_amount("gross amount", fields[column::GROSS])?;
    let net = parse_amount("net amount", fields[column::NET])?;
    let iva = parse_rate("IVA", fields[column::IVA])?;
    let igic = parse_rate("IGIC", fields[column::IGIC])?;

    let cif = fields[column::CIF];
    let nif = fields[column::NIF];
    if !cif.is_empty() && validate_cif(cif).is_err() {
        return Err(RowRejection::InvalidCif { value: cif.into() });
    }
    if !nif.is_empty() {
        validate_nif(nif).map_err(|source| RowRejection::InvalidNif { source })?;
    }

    let (tax, rate_field) = match (iva, igic) {
        (Some(rate), None) => (TaxRate::Iva(rate), fields[column::IVA]),
        (None, Some(rate)) => (TaxRate::Igic(rate), fields[column::IGIC]),
        (Some(_), Some(_)) => return Err(RowRejection::TaxSchemeConflict),
        (None, None) => return Err(RowRejection::MissingTaxScheme),
    };

    let party = match (cif.is_empty(), nif.is_empty()) {
        (false, true) => PartyId::Cif(cif.into()),
        (true, false) => PartyId::Nif(nif.into()),
        (false, false) => return Err(RowRejection::PartyIdConflict),
        (true, true) => return Err(RowRejection::MissingPartyId),
    };

    match config.amount_comparison {
        AmountComparison::Decimal => check_net_decimal(gross, tax.percent(), net)?,
        AmountComparison::Float => check_net_float(
            fields[column::GROSS],
            rate_field,
            fields[column::NET],
        )?,
    }

    Ok(InvoiceRecord {
        id: fields[column::ID].into(),
        date: fields[column::DATE].into(),
        gross,
        net,
        tax,
        concept: fields[column::CONCEPT].into(),
        party,
    })
}

fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, RowRejection> {
    if !is_decimal(value) {
        return Err(RowRejection::InvalidAmount {
            field,
            value: value.into(),
        });
    }
    Decimal::from_str_exact(value).map_err(|_| RowRejection::AmountOverflow)
}

/// Empty rates are absent; anything else must be a decimal.
fn parse_rate(field: &'static str, value: &str) -> Result<Option<Decimal>, RowRejection> {
    if value.is_empty() {
        return Ok(None);
    }
    if !is_decimal(value) {
        return Err(RowRejection::InvalidTaxRate {
            field,
            value: value.into(),
        });
    }
    Decimal::from_str_exact(value)
        .map(Some)
        .map_err(|_| RowRejection::AmountOverflow)
}

fn check_net_decimal(gross: Decimal, rate: Decimal, net: Decimal) -> Result<(), RowRejection> {
    let expected = exact_mul(gross, rate)
        .and_then(|v| exact_mul(v, dec!(0.01)))
        .and_then(|tax| exact_sub(gross, tax))
        .ok_or(RowRejection::AmountOverflow)?;

    if expected != net {
        return Err(RowRejection::UnbalancedNet {
            expected: expected.normalize().to_string(),
            found: net.to_string(),
        });
    }
    Ok(())
}

/// `a * b` keeping every fractional digit, or `None` if the product would
/// be rounded to fit 28 digits of scale.
fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    if a.is_zero() || b.is_zero() {
        return Some(Decimal::ZERO);
    }
    let product = a.checked_mul(b)?;
    (product.scale() == a.scale() + b.scale()).then_some(product)
}

/// `a - b`, or `None` if aligning the scales forced a rounding.
fn exact_sub(a: Decimal, b: Decimal) -> Option<Decimal> {
    let difference = a.checked_sub(b)?;
    (difference.is_zero() || difference.scale() == a.scale().max(b.scale()))
        .then_some(difference)
}

#[allow(clippy::float_cmp)]
fn check_net_float(gross: &str, rate: &str, net: &str) -> Result<(), RowRejection> {
    // Inputs already passed `is_decimal`, which `f64::from_str` always accepts.
    let parse = |field: &'static str, value: &str| {
        value
            .parse::<f64>()
            .map_err(|_| RowRejection::InvalidAmount {
                field,
                value: value.into(),
            })
    };
    let gross_value = parse("gross amount", gross)?;
    let rate_value = parse("tax rate", rate)?;
    let net_value = parse("net amount", net)?;

    let expected = gross_value - gross_value * rate_value * 0.01;
    if expected != net_value {
        return Err(RowRejection::UnbalancedNet {
            expected: expected.to_string(),
            found: net.into(),
        });
    }
    Ok(())
}
