//! Aligned text-table output for command handlers.

use std::fmt::Display;

/// Spacing added to every column beyond its widest content.
const PADDING: usize = 2;

/// Renders headers and rows as an aligned, left-justified text table.
///
/// Each column is as wide as its header or widest cell, plus [`PADDING`].
/// The header row is followed by a separator of dashes spanning every
/// column. Rows are not validated against the header count: a short row
/// renders its cells and stops, a long row gets extra columns sized from
/// the data alone.
pub fn format_table<C: Display>(headers: &[&str], rows: &[Vec<C>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();

    let columns = headers
        .len()
        .max(cells.iter().map(|row| row.len()).max().unwrap_or(0));

    let mut widths = vec![0usize; columns];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }
    for width in &mut widths {
        *width += PADDING;
    }

    let mut out = String::new();

    for (i, header) in headers.iter().enumerate() {
        out.push_str(&format!("{:<width$}", header, width = widths[i]));
    }
    out.push('\n');

    for width in &widths {
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');

    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }

    out
}

/// Prints the table to stdout.
pub fn print_table<C: Display>(headers: &[&str], rows: &[Vec<C>]) {
    print!("{}", format_table(headers, rows));
}
