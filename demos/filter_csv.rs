use std::fs::File;
use std::io::{self, BufReader};

use factura::core::FilterConfig;
use factura::io::filter_stream;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: filter_csv <invoices.csv>");
        std::process::exit(2);
    };

    let reader = BufReader::new(File::open(&path)?);
    let stdout = io::stdout().lock();
    let report = filter_stream(reader, stdout, &FilterConfig::default())?;

    eprintln!("{} rows kept, {} rejected", report.kept(), report.rejected.len());
    for rejected in &report.rejected {
        eprintln!("  {}", rejected);
    }
    Ok(())
}
