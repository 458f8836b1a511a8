//! Export module: CSV, clipboard text and export file names

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::pipeline::ExportRow;

/// First line of every CSV export
pub const CSV_HEADER: &str = "SHA-256 Hash,File Name,Extension";

/// Prefix of generated export names
pub const EXPORT_PREFIX: &str = "SimpleProofHashList_";

/// Header plus one `hash,name,extension` line per row.
///
/// Names are already stripped of commas, so fields are written unquoted.
#[must_use]
pub fn to_csv(rows: &[ExportRow]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            rows.iter()
                .map(|row| format!("{},{},{}", row.hash, row.name, row.extension)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `hash: name.extension` line per row
#[must_use]
pub fn to_clipboard_text(rows: &[ExportRow]) -> String {
    rows.iter()
        .map(|row| {
            if row.extension.is_empty() {
                format!("{}: {}", row.hash, row.name)
            } else {
                format!("{}: {}.{}", row.hash, row.name, row.extension)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short hex stamp of a local time.
///
/// Year (mod 100), month, day, hour and minute are packed into one value
/// written as at least 6 hex digits, followed by the elapsed fraction of
/// the minute in 1/256 steps as 2 hex digits.
#[must_use]
pub fn time_based_hex<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let year = now.year().rem_euclid(100).unsigned_abs();
    let combined = (year << 20)
        | (now.month() << 16)
        | (now.day() << 11)
        | (now.hour() << 6)
        | now.minute();

    let millis = now.second() * 1000 + now.timestamp_subsec_millis().min(999);
    let fraction = millis * 256 / 60_000;

    format!("{combined:06x}{fraction:02x}")
}

/// Export name (without extension) used when the user does not pick one
#[must_use]
pub fn default_export_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("{EXPORT_PREFIX}{}", time_based_hex(now))
}
