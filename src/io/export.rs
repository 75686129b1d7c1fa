//! CSV export for consumption series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::SecondsFormat;

use crate::generator::ConsumptionPoint;

/// Column header for consumption CSV export.
const HEADER: [&str; 5] = ["timestamp", "date", "time", "consumption_mw", "status"];

/// Exports a consumption series to a CSV file at the given path.
///
/// Writes a header row followed by one row per point, in series order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(points: &[ConsumptionPoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(points, buf)
}

/// Writes a consumption series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(points: &[ConsumptionPoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for p in points {
        wtr.write_record([
            p.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            p.date.clone(),
            p.time.clone(),
            format!("{:.0}", p.consumption),
            p.status().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
