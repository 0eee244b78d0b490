//! # planbook-render
//!
//! Rendering backends for planbook reports.
//!
//! This crate provides:
//! - Excel schedule workbooks with merged group runs
//! - Presentation themes, loadable from TOML
//! - Sheet layout (where each block of the schedule sheet lands)
//! - Text preview for the console
//!
//! ## Example
//!
//! ```rust
//! use planbook_core::{Field, Renderer, Report, ScheduleRow};
//! use planbook_render::{ExcelRenderer, TextRenderer};
//!
//! let report = Report::new("demo", "Demo Plan")
//!     .column(Field::Group, "Phase", 20.0)
//!     .column(Field::Period, "Week", 12.0)
//!     .row(ScheduleRow::new("Week 1").group("Phase 1"))
//!     .row(ScheduleRow::new("Week 2"));
//!
//! let preview = TextRenderer.render(&report).unwrap();
//! assert!(preview.contains("A4:A5  Phase 1"));
//!
//! let xlsx_bytes = ExcelRenderer::new().render(&report).unwrap();
//! assert_eq!(&xlsx_bytes[0..2], b"PK");
//! ```

pub mod excel;
pub mod layout;
pub mod theme;

pub use excel::ExcelRenderer;
pub use layout::{col_to_letter, column_range, SheetLayout};
pub use theme::{Theme, ThemeError};

use planbook_core::{RenderError, Renderer, Report, LINE_BREAK};

/// Plain text renderer for console output
#[derive(Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let layout = SheetLayout::for_report(report)?;
        let table = report.table();
        let mut out = String::new();

        out.push_str(&format!("Report: {} ({})\n", report.title, report.id));
        if let Some(subtitle) = &report.subtitle {
            out.push_str(&format!("  {}\n", subtitle));
        }
        for (label, value) in &report.info {
            out.push_str(&format!("  {}: {}\n", label, value));
        }
        out.push_str(&format!("Sheets: {}\n\n", report.sheet_names().join(", ")));

        let headers: Vec<&str> = report.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&format!("{:>4}  {}\n", layout.header_row + 1, headers.join(" | ")));
        for (index, cells) in table.grid.iter().enumerate() {
            let cells: Vec<String> = cells.iter().map(|c| flatten(c)).collect();
            out.push_str(&format!("{:>4}  {}\n", layout.data_row(index) + 1, cells.join(" | ")));
        }

        if let Some(footnote) = &report.footnote {
            out.push_str(&format!("\n{}\n", footnote));
        }

        out.push_str("\nMerged:");
        match table.group_column() {
            Some(col) if !table.spans.is_empty() => {
                out.push('\n');
                for span in &table.spans {
                    let range = column_range(
                        col as u16,
                        layout.data_row(span.start_row),
                        layout.data_row(span.end_row),
                    );
                    out.push_str(&format!("  {}  {}\n", range, flatten(&span.label)));
                }
            }
            _ => out.push_str(" none\n"),
        }

        Ok(out)
    }
}

/// Collapse a multi-line cell onto one line
fn flatten(text: &str) -> String {
    text.split(LINE_BREAK)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
