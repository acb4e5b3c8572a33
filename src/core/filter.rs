use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::config::FilterConfig;
use super::error::RowRejection;
use super::row::invoice_id;
use super::validation::validate_row;

/// Occurrence count of every invoice identifier in one dataset.
///
/// Built once per filter call from all data rows, empty lines included.
#[derive(Debug, Clone, Default)]
pub struct IdFrequencies<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> IdFrequencies<'a> {
    /// Count the identifier (first field) of every row.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<&'a str, usize> = HashMap::new();
        for row in rows {
            *counts.entry(invoice_id(row)).or_default() += 1;
        }
        Self { counts }
    }

    /// How many rows carry `id`. Zero for identifiers never seen.
    pub fn count(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// A data row left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the input; the header is line 1.
    pub line: usize,
    /// Invoice identifier (first field) of the row.
    pub id: String,
    /// First rule the row failed.
    pub reason: RowRejection,
}

impl fmt::Display for RejectedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} [{}]: {}", self.line, self.id, self.reason)
    }
}

/// Result of filtering a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Header followed by the admissible rows, or `[""]` when the input
    /// had no data rows.
    pub lines: Vec<String>,
    /// Dropped rows in input order.
    pub rejected: Vec<RejectedRow>,
}

impl FilterReport {
    /// Number of data rows kept.
    pub fn kept(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// `true` if no data row was dropped.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Filter invoice lines with the default configuration.
///
/// The first line is the header and is always kept. Each data row is kept
/// only if it is admissible per [`validate_row`]; order is preserved.
/// Inputs of one line or less yield `[""]`.
///
/// ```
/// use factura::core::filter;
///
/// let lines = [
///     "Num_factura,Fecha,Bruto,Neto,IVA,IGIC,Concepto,CIF_cliente,NIF_cliente",
///     "1,02/05/2019,1000,810,19,,ok,B76430134,",
///     "2,02/05/2019,1000,810,19,8,both taxes,B76430134,",
/// ];
/// assert_eq!(filter(&lines), lines[..2]);
/// assert_eq!(filter(&lines[..1]), [""]);
/// ```
pub fn filter<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    filter_with(lines, &FilterConfig::default()).lines
}

/// Filter invoice lines and report why each dropped row was rejected.
pub fn filter_with<S: AsRef<str>>(lines: &[S], config: &FilterConfig) -> FilterReport {
    let Some((header, rows)) = lines.split_first().filter(|(_, rows)| !rows.is_empty()) else {
        return FilterReport {
            lines: vec![String::new()],
            rejected: Vec::new(),
        };
    };

    let frequencies = IdFrequencies::from_rows(rows.iter().map(AsRef::as_ref));

    let mut report = FilterReport {
        lines: Vec::with_capacity(lines.len()),
        rejected: Vec::new(),
    };
    report.lines.push(header.as_ref().to_owned());

    for (index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        match validate_row(row, &frequencies, config) {
            Ok(_) => report.lines.push(row.to_owned()),
            Err(reason) => {
                let line = index + 2;
                let id = invoice_id(row);
                tracing::debug!(line, id, %reason, "invoice row rejected");
                report.rejected.push(RejectedRow {
                    line,
                    id: id.to_owned(),
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        kept = report.kept(),
        rejected = report.rejected.len(),
        "invoice rows filtered"
    );
    report
}
