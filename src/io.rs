//! Stream adapter: read lines from a reader, filter, write the result.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::core::{FilterConfig, FilterReport, filter_with};

/// Errors surfaced by the stream adapter.
///
/// The filter itself never fails: every row-level defect becomes a
/// [`RowRejection`](crate::core::RowRejection) instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FilterError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read every line from `reader`, filter them and write the kept lines to
/// `writer`, each terminated by `\n`.
///
/// Line terminators (`\n` or `\r\n`) are stripped on input. The whole input
/// is loaded before any row is judged since identifier uniqueness spans
/// the dataset.
pub fn filter_stream<R, W>(
    reader: R,
    mut writer: W,
    config: &FilterConfig,
) -> Result<FilterReport, FilterError>
where
    R: BufRead,
    W: Write,
{
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let report = filter_with(&lines, config);

    for line in &report.lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_kept_rows() {
        let input = "h\r\n1,d,1000,810,19,,c,B76430134,\r\n2,d,1000,810,,,c,B76430134,\n";
        let mut out = Vec::new();
        let report = filter_stream(input.as_bytes(), &mut out, &FilterConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "h\n1,d,1000,810,19,,c,B76430134,\n"
        );
        assert_eq!(report.rejected.len(), 1);
    }

    #[test]
    fn empty_input_writes_single_empty_line() {
        let mut out = Vec::new();
        filter_stream(&b""[..], &mut out, &FilterConfig::default()).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let mut out = Vec::new();
        let err = filter_stream(&b"h\n\xff\xfe\n"[..], &mut out, &FilterConfig::default());
        assert!(matches!(err, Err(FilterError::Io(_))));
    }
}
