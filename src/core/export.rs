// LogPager - core/export.rs
//
// CSV and JSON output of a listing page.
// Core layer: writes to any Write trait object.

use crate::core::model::{LogFileMetadata, PageResult};
use crate::util::error::ExportError;
use std::io::Write;

/// Write the whole page (items and counts) as pretty-printed JSON.
pub fn write_json<W: Write>(
    page: &PageResult<LogFileMetadata>,
    mut writer: W,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, page).map_err(ExportError::Json)?;
    writeln!(writer).map_err(ExportError::Io)?;
    Ok(())
}

/// Write the page items as CSV, one row per file.
///
/// Writes: filename, byte_size, last_modified. Returns the row count.
pub fn write_csv<W: Write>(items: &[LogFileMetadata], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["filename", "byte_size", "last_modified"])
        .map_err(ExportError::Csv)?;

    for item in items {
        csv_writer
            .write_record([
                item.filename.as_str(),
                &item.byte_size.to_string(),
                &item.last_modified.format("%Y-%m-%dT%H:%M:%S").to_string(),
            ])
            .map_err(ExportError::Csv)?;
    }

    csv_writer.flush().map_err(ExportError::Io)?;

    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_item(filename: &str, byte_size: u64) -> LogFileMetadata {
        LogFileMetadata {
            filename: filename.to_string(),
            byte_size,
            last_modified: NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_opt(5, 6, 7)
                .unwrap(),
        }
    }

    #[test]
    fn test_csv_output() {
        let items = vec![make_item("app.log", 120), make_item("db, main.log", 7)];
        let mut buf = Vec::new();
        let count = write_csv(&items, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "filename,byte_size,last_modified");
        assert_eq!(lines[1], "app.log,120,2025-03-04T05:06:07");
        assert_eq!(lines[2], "\"db, main.log\",7,2025-03-04T05:06:07");
    }

    #[test]
    fn test_json_output() {
        let page = PageResult {
            items: vec![make_item("app.log", 120)],
            total_elements: 11,
            current_page: 1,
            total_pages: 2,
        };
        let mut buf = Vec::new();
        write_json(&page, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["totalElements"], 11);
        assert_eq!(value["currentPage"], 1);
        assert_eq!(value["totalPages"], 2);
        assert_eq!(value["items"][0]["filename"], "app.log");
        assert_eq!(value["items"][0]["byteSize"], 120);
        assert_eq!(value["items"][0]["lastModified"], "2025-03-04T05:06:07");
    }
}
