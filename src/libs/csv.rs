//! CSV interchange codec for work records.
//!
//! The export format has six fixed columns with an unquoted header row and
//! every data field wrapped in double quotes, the `Worked` column carrying
//! the literal tokens `Yes`/`No`. Decoding is deliberately forgiving: rows
//! that cannot yield a full record are dropped rather than failing the whole
//! file, and numeric fields that fail to parse come back as 0. The only hard
//! failure is a file too short to contain a header and one data row.
//!
//! Fields containing embedded double quotes or newlines are not supported by
//! the format; nothing escapes them on the way out.

use crate::libs::record::WorkRecord;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use thiserror::Error;

/// Column order shared by the encoder and decoder.
pub const CSV_HEADER: [&str; 6] = ["Date", "Worker ID", "Worker Name", "Worked", "Sheets Tapped", "Salary"];

/// Errors a CSV decode can surface to the caller.
///
/// Malformed rows inside a structurally valid file are skipped silently and
/// never reach this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("CSV must contain a header row and at least one data row")]
    TooShort,
}

/// Serializes records into the six-column interchange format.
pub fn encode(records: &[WorkRecord]) -> Result<String> {
    let mut out = CSV_HEADER.join(",");
    out.push('\n');

    let mut buf = Vec::new();
    {
        let mut wtr = WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(&mut buf);
        for record in records {
            wtr.write_record(&[
                record.date.format("%Y-%m-%d").to_string(),
                record.worker_id.clone(),
                record.worker_name.clone(),
                if record.worked { "Yes".to_string() } else { "No".to_string() },
                record.sheets_tapped.to_string(),
                record.salary.to_string(),
            ])?;
        }
        wtr.flush()?;
    }
    out.push_str(&String::from_utf8(buf)?);

    Ok(out)
}

/// Parses interchange text back into records.
///
/// The first line is treated as the header and skipped. Data lines with
/// fewer than six fields, or whose date is not a valid ISO date, are dropped.
/// Record ids are recomposed from the date and worker id, so an imported
/// record lands on the same storage key as a freshly entered one.
pub fn decode(text: &str) -> Result<Vec<WorkRecord>, FormatError> {
    if text.lines().filter(|line| !line.trim().is_empty()).count() < 2 {
        return Err(FormatError::TooShort);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(_) => continue,
        };
        if row.len() < 6 {
            continue;
        }
        let date = match NaiveDate::parse_from_str(&row[0], "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => continue,
        };
        let worker_id = row[1].to_string();
        records.push(WorkRecord {
            id: WorkRecord::compose_id(date, &worker_id),
            date,
            worker_id,
            worker_name: row[2].to_string(),
            worked: row[3].eq_ignore_ascii_case("yes"),
            sheets_tapped: row[4].parse().unwrap_or(0),
            salary: row[5].parse().unwrap_or(0),
        });
    }

    Ok(records)
}

/// Default export file name, stamped with today's date.
pub fn export_file_name() -> String {
    format!("taplog-{}.csv", Local::now().format("%Y-%m-%d"))
}
