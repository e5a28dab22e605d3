use crate::error::Result;
use crate::results::CompanyRecord;
use csv::Writer;
use std::io::Write;
use std::path::Path;

pub const HEADERS: [&str; 3] = ["Company", "NIP", "CEO"];

/// Writes the records as UTF-8 CSV with a header row
pub fn export_csv<P: AsRef<Path>>(records: &[CompanyRecord], output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    ::log::debug!(
        "Exporting {} records to CSV: {}",
        records.len(),
        output_path.display()
    );

    let file = std::fs::File::create(output_path)?;
    write_csv(records, file)
}

/// Writes the records as CSV to any writer.
///
/// The header row comes from the record's serde field names, and is written
/// even when there are no records.
pub fn write_csv<W: Write>(records: &[CompanyRecord], writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    if records.is_empty() {
        wtr.write_record(HEADERS)?;
    }
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the records as an aligned, indexed text table for the console
pub fn render_table(records: &[CompanyRecord]) -> String {
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| [r.company.as_str(), r.nip.as_str(), r.ceo.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let index_width = records.len().saturating_sub(1).to_string().len();

    let mut out = String::new();
    out.push_str(&format_row(&" ".repeat(index_width), &HEADERS, &widths));
    for (i, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push_str(&format_row(&format!("{:<index_width$}", i), row, &widths));
    }
    out
}

fn format_row(index: &str, cells: &[&str; 3], widths: &[usize; 3]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}  {}", index, cells.join("  ")).trim_end().to_string()
}
