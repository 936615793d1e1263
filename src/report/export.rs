//! CSV export of projection histories

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::projection::ProjectionResult;

fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the month-by-month history as CSV (header included)
pub fn write_monthly_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    write_rows(writer, &result.history)
}

/// Write the annual breakdown as CSV (header included)
pub fn write_yearly_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    write_rows(writer, &result.yearly_breakdown)
}

pub fn export_monthly_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    write_monthly_csv(std::fs::File::create(path)?, result)
}

pub fn export_yearly_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    write_yearly_csv(std::fs::File::create(path)?, result)
}

/// Write the full result as pretty-printed JSON
pub fn export_json(path: &Path, result: &ProjectionResult) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Horizon, ProjectionInput};
    use crate::projection::compute_projection;

    fn sample() -> ProjectionResult {
        compute_projection(&ProjectionInput::new(1000.0, 500.0, 0.0, Horizon::months(14)))
    }

    #[test]
    fn test_monthly_csv_layout() {
        let mut buffer = Vec::new();
        write_monthly_csv(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "month,total,contributed,interest,cumulative_interest");
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[1], "0,1000.0,1000.0,0.0,0.0");
        assert_eq!(lines[15], "14,8000.0,8000.0,0.0,0.0");
    }

    #[test]
    fn test_yearly_csv_layout() {
        let mut buffer = Vec::new();
        write_yearly_csv(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "year,months,annual_contribution,annual_interest,total_contributed,total_interest,total_accumulated"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("2,2,1000.0,"));
    }

    #[test]
    fn test_export_files() {
        let dir = std::env::temp_dir();
        let monthly = dir.join("wealth_projection_export_monthly.csv");
        let json = dir.join("wealth_projection_export.json");
        let result = sample();

        export_monthly_csv(&monthly, &result).unwrap();
        export_json(&json, &result).unwrap();

        let mut reader = csv::Reader::from_path(&monthly).unwrap();
        assert_eq!(reader.records().count(), 15);

        let parsed: ProjectionResult =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(parsed.final_total, result.final_total);
        assert_eq!(parsed.target_reached_in_months, None);

        std::fs::remove_file(&monthly).ok();
        std::fs::remove_file(&json).ok();
    }
}
