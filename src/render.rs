//! CSV text rendering for the two output shapes: a filtered table and a
//! comparison result. The rendered strings are handed to whatever writer the
//! caller uses; file handles stay outside the core.

use std::fmt::Write;

use crate::model::{ComparisonResult, MethylationTable};

/// Render a table as row-major CSV: the reconstructed header (location prefix
/// plus sample names), then one line per row with the location fields
/// followed by the beta values to two decimal places. Missing values render
/// as the literal `NaN`.
pub fn render_table(table: &MethylationTable) -> String {
    let mut out = String::new();

    let mut header: Vec<&str> = table.header_prefix().iter().map(String::as_str).collect();
    header.extend(table.samples().iter().map(String::as_str));
    out.push_str(&header.join(","));
    out.push('\n');

    for row in table.rows() {
        out.push_str(&row.location().join(","));
        for &value in row.beta_values() {
            if value.is_nan() {
                out.push_str(",NaN");
            } else {
                let _ = write!(out, ",{value:.2}");
            }
        }
        out.push('\n');
    }

    out
}

/// Render a comparison result as CSV: a `Variable,Variable,<method...>`
/// header, then one line per compared pair with the outcomes in method order.
pub fn render_comparison(result: &ComparisonResult) -> String {
    let mut out = String::from("Variable,Variable");
    for method in result.methods() {
        out.push(',');
        out.push_str(method.name());
    }
    out.push('\n');

    for (label, values) in result.iter_rows() {
        out.push_str(label);
        for value in values {
            let _ = write!(out, ",{value}");
        }
        out.push('\n');
    }

    out
}
