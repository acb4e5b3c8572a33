/// Field delimiter. No quoting or escaping is recognised.
pub const DELIMITER: char = ',';

/// Split a line into its comma-separated fields.
///
/// An empty line yields a single empty field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// The invoice identifier (first field) of a line.
pub fn invoice_id(line: &str) -> &str {
    line.split(DELIMITER).next().unwrap_or_default()
}
