//! # planbook-core
//!
//! Core domain model and traits for planbook schedule workbooks.
//!
//! This crate provides:
//! - Domain types: `ScheduleRow`, `Column`, `Report`, `StaticTable`, `NoteSheet`
//! - The report table builder (`table` module): grid cells plus merge spans
//!   for contiguous runs of the group column
//! - Core trait: `Renderer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use planbook_core::{Field, Report, ScheduleRow};
//!
//! let report = Report::new("demo", "Demo Plan")
//!     .column(Field::Group, "Phase", 20.0)
//!     .column(Field::Period, "Week", 12.0)
//!     .column(Field::Tasks, "Tasks", 50.0)
//!     .row(ScheduleRow::new("Week 1").group("Phase 1").task("Kickoff"))
//!     .row(ScheduleRow::new("Week 2").task("Design review"))
//!     .row(ScheduleRow::new("Week 3").group("Phase 2").task("Build"));
//!
//! let table = report.table();
//! assert_eq!(table.grid.len(), 3);
//! assert_eq!(table.spans.len(), 1);
//! assert_eq!((table.spans[0].start_row, table.spans[0].end_row), (0, 1));
//! ```

pub mod table;

pub use table::{build_table, build_table_with, merge_spans, MergeSpan, ReportTable};

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator placed between the lines of a multi-line cell.
///
/// XLSX stores in-cell line breaks as a bare line feed regardless of platform.
pub const LINE_BREAK: &str = "\n";

// ============================================================================
// Fields and Columns
// ============================================================================

/// A renderable field of a [`ScheduleRow`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Group (phase) label; the merged column
    Group,
    /// Period label, e.g. a week number
    Period,
    /// Calendar date range
    DateRange,
    /// Core tasks, one line each
    Tasks,
    /// Deliverables, one line each
    Deliverables,
    /// Responsible owner
    Owner,
    /// Free-form remark
    Note,
}

impl Field {
    /// Every field in canonical column order
    pub const ALL: [Field; 7] = [
        Field::Group,
        Field::Period,
        Field::DateRange,
        Field::Tasks,
        Field::Deliverables,
        Field::Owner,
        Field::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Group => "group",
            Field::Period => "period",
            Field::DateRange => "date_range",
            Field::Tasks => "tasks",
            Field::Deliverables => "deliverables",
            Field::Owner => "owner",
            Field::Note => "note",
        }
    }
}

/// A titled, fixed-width column of the schedule table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub field: Field,
    pub header: String,
    /// Width in Excel character units
    pub width: f64,
}

impl Column {
    pub fn new(field: Field, header: impl Into<String>, width: f64) -> Self {
        Self {
            field,
            header: header.into(),
            width,
        }
    }
}

// ============================================================================
// Schedule Rows
// ============================================================================

/// Visual emphasis of a row's group cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHighlight {
    /// Regular phase fill
    #[default]
    Phase,
    /// Holiday fill (non-working stretch inside the plan)
    Holiday,
}

/// One row of a project schedule.
///
/// `group_label` is set only on the first row of a group; the rows that
/// follow leave it empty to continue the group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub group_label: Option<String>,
    pub period_label: String,
    pub date_range: String,
    /// Second line under the date range, e.g. the covered weekdays
    pub date_note: Option<String>,
    pub tasks: Vec<String>,
    pub deliverables: Vec<String>,
    pub owner: Option<String>,
    pub note: Option<String>,
    pub highlight: RowHighlight,
}

impl ScheduleRow {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period_label: period.into(),
            ..Self::default()
        }
    }

    /// Start a new group at this row
    pub fn group(mut self, label: impl Into<String>) -> Self {
        self.group_label = Some(label.into());
        self
    }

    /// Start a new group whose label spans several lines
    pub fn group_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        self.group(lines.join(LINE_BREAK))
    }

    pub fn dates(mut self, range: impl Into<String>) -> Self {
        self.date_range = range.into();
        self
    }

    pub fn date_note(mut self, note: impl Into<String>) -> Self {
        self.date_note = Some(note.into());
        self
    }

    /// Append one task line
    pub fn task(mut self, line: impl Into<String>) -> Self {
        self.tasks.push(line.into());
        self
    }

    /// Append several task lines; an empty string renders as a blank line
    pub fn tasks<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append one deliverable line
    pub fn deliverable(mut self, line: impl Into<String>) -> Self {
        self.deliverables.push(line.into());
        self
    }

    pub fn deliverables<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deliverables.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Mark the row's group as a holiday
    pub fn holiday(mut self) -> Self {
        self.highlight = RowHighlight::Holiday;
        self
    }

    /// The group label, treating an empty string as absent
    pub fn label(&self) -> Option<&str> {
        self.group_label.as_deref().filter(|l| !l.is_empty())
    }

    /// Cell text for a field, multi-line values joined with [`LINE_BREAK`]
    pub fn cell(&self, field: Field) -> String {
        match field {
            Field::Group => self.label().unwrap_or_default().to_string(),
            Field::Period => self.period_label.clone(),
            Field::DateRange => match &self.date_note {
                Some(note) if self.date_range.is_empty() => note.clone(),
                Some(note) => format!("{}{}{}", self.date_range, LINE_BREAK, note),
                None => self.date_range.clone(),
            },
            Field::Tasks => self.tasks.join(LINE_BREAK),
            Field::Deliverables => self.deliverables.join(LINE_BREAK),
            Field::Owner => self.owner.clone().unwrap_or_default(),
            Field::Note => self.note.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Extra Sheets
// ============================================================================

/// A static header + rows table on its own sheet (risk register, resources)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<f64>,
}

impl StaticTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn widths(mut self, widths: impl IntoIterator<Item = f64>) -> Self {
        self.widths = widths.into_iter().collect();
        self
    }
}

/// A headed group of label/value entries on a notes sheet
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteSection {
    pub heading: String,
    pub entries: Vec<(String, String)>,
}

impl NoteSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((label.into(), value.into()));
        self
    }
}

/// Two-column notes sheet made of headed sections
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteSheet {
    pub name: String,
    pub sections: Vec<NoteSection>,
    pub widths: [f64; 2],
}

impl NoteSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
            widths: [20.0, 60.0],
        }
    }

    pub fn section(mut self, section: NoteSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn widths(mut self, label: f64, value: f64) -> Self {
        self.widths = [label, value];
        self
    }
}

/// A sheet following the main schedule sheet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExtraSheet {
    Table(StaticTable),
    Notes(NoteSheet),
}

impl ExtraSheet {
    pub fn name(&self) -> &str {
        match self {
            ExtraSheet::Table(table) => &table.name,
            ExtraSheet::Notes(notes) => &notes.name,
        }
    }
}

impl From<StaticTable> for ExtraSheet {
    fn from(table: StaticTable) -> Self {
        ExtraSheet::Table(table)
    }
}

impl From<NoteSheet> for ExtraSheet {
    fn from(notes: NoteSheet) -> Self {
        ExtraSheet::Notes(notes)
    }
}

// ============================================================================
// Report
// ============================================================================

/// How the output file name is stamped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStamp {
    /// Calendar date, `YYYYMMDD`
    #[default]
    Date,
    /// Unix epoch seconds
    Epoch,
}

impl FileStamp {
    pub fn format<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self {
            FileStamp::Date => now.format("%Y%m%d").to_string(),
            FileStamp::Epoch => now.timestamp().to_string(),
        }
    }
}

/// Named presentation preset a report asks for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    /// Filled title banner, default workbook font
    #[default]
    Classic,
    /// Microsoft YaHei throughout, plain title
    YaHei,
}

/// A complete schedule workbook description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub sheet_name: String,
    pub subtitle: Option<String>,
    /// Key/value project facts shown above the table, in order
    pub info: Vec<(String, String)>,
    pub columns: Vec<Column>,
    pub rows: Vec<ScheduleRow>,
    pub footnote: Option<String>,
    pub extra_sheets: Vec<ExtraSheet>,
    pub file_stem: String,
    pub stamp: FileStamp,
    pub style: StylePreset,
    /// Lines printed after the workbook is written
    pub closing_notes: Vec<String>,
}

impl Report {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            file_stem: id.clone(),
            id,
            title: title.into(),
            sheet_name: "Schedule".into(),
            subtitle: None,
            info: Vec::new(),
            columns: Vec::new(),
            rows: Vec::new(),
            footnote: None,
            extra_sheets: Vec::new(),
            stamp: FileStamp::default(),
            style: StylePreset::default(),
            closing_notes: Vec::new(),
        }
    }

    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn info(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.push((label.into(), value.into()));
        self
    }

    pub fn column(mut self, field: Field, header: impl Into<String>, width: f64) -> Self {
        self.columns.push(Column::new(field, header, width));
        self
    }

    pub fn row(mut self, row: ScheduleRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = ScheduleRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    pub fn sheet(mut self, sheet: impl Into<ExtraSheet>) -> Self {
        self.extra_sheets.push(sheet.into());
        self
    }

    pub fn file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn stamp(mut self, stamp: FileStamp) -> Self {
        self.stamp = stamp;
        self
    }

    pub fn style(mut self, style: StylePreset) -> Self {
        self.style = style;
        self
    }

    pub fn closing_note(mut self, line: impl Into<String>) -> Self {
        self.closing_notes.push(line.into());
        self
    }

    /// Fields of the configured columns, in column order
    pub fn fields(&self) -> Vec<Field> {
        self.columns.iter().map(|c| c.field).collect()
    }

    /// Build the schedule grid and its merge spans
    pub fn table(&self) -> ReportTable {
        build_table_with(&self.rows, &self.fields())
    }

    /// Names of all sheets, main schedule sheet first
    pub fn sheet_names(&self) -> Vec<&str> {
        std::iter::once(self.sheet_name.as_str())
            .chain(self.extra_sheets.iter().map(|s| s.name()))
            .collect()
    }

    /// Output file name: `<file_stem>_<stamp>.xlsx`
    pub fn file_name<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}_{}.xlsx", self.file_stem, self.stamp.format(now))
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a report to the output format
    fn render(&self, report: &Report) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
