//! Excel schedule workbook renderer
//!
//! Writes a report as an XLSX workbook:
//! - Main schedule sheet: title banner, optional subtitle and project info,
//!   the schedule table with its group column merged per run, optional
//!   footnote
//! - Extra sheets: static tables (risk register, resources) and two-column
//!   notes sheets, in report order
//!
//! ## Example Output Structure
//!
//! ```text
//! Sheet: 项目实施计划
//! |            Word星辉点智能编辑器项目实施计划            |
//! |        项目周期：6周 | 客户：国企培训部门 | ...       |
//!
//! | 阶段       | 周次  | 核心任务          | 交付成果         |
//! |------------|-------|-------------------|------------------|
//! | 第一阶段   | 第1周 | 系统安全加固 ...  | • 安全防护机制生效 |
//! |  (merged)  | 第2周 | AI模型厂商模块 ...| • 支持3+AI模型切换 |
//! | 第二阶段   | 第3周 | ...               | ...              |
//! ```

use std::path::Path;

use planbook_core::{
    ExtraSheet, Field, NoteSheet, RenderError, Renderer, Report, ReportTable, RowHighlight,
    ScheduleRow, StaticTable,
};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::{debug, info};

use crate::layout::SheetLayout;
use crate::theme::Theme;

/// Excel schedule workbook renderer
#[derive(Clone, Debug)]
pub struct ExcelRenderer {
    /// Theme overriding the report's style preset
    pub theme: Option<Theme>,
    /// Whether to write the report's extra sheets
    pub include_extra_sheets: bool,
    /// Whether to merge group runs into single cells
    pub merge_groups: bool,
}

impl Default for ExcelRenderer {
    fn default() -> Self {
        Self {
            theme: None,
            include_extra_sheets: true,
            merge_groups: true,
        }
    }
}

impl ExcelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this theme instead of the report's preset
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Write only the schedule sheet
    pub fn without_extra_sheets(mut self) -> Self {
        self.include_extra_sheets = false;
        self
    }

    /// Write every group label in its own cell instead of merging runs
    pub fn without_merges(mut self) -> Self {
        self.merge_groups = false;
        self
    }

    /// The theme a report renders with
    pub fn resolve_theme(&self, report: &Report) -> Theme {
        self.theme
            .clone()
            .unwrap_or_else(|| Theme::for_preset(report.style))
    }

    /// Generate Excel workbook bytes
    pub fn render_to_bytes(&self, report: &Report) -> Result<Vec<u8>, RenderError> {
        let layout = SheetLayout::for_report(report)?;
        let theme = self.resolve_theme(report);
        let formats = ExcelFormats::new(&theme);
        let table = report.table();

        debug!(
            report = %report.id,
            rows = table.row_count(),
            spans = table.spans.len(),
            "rendering schedule sheet"
        );

        let mut workbook = Workbook::new();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&report.sheet_name)
            .map_err(format_error)?;
        self.add_schedule_sheet(worksheet, report, &table, &layout, &theme, &formats)?;

        if self.include_extra_sheets {
            for sheet in &report.extra_sheets {
                let worksheet = workbook.add_worksheet();
                worksheet.set_name(sheet.name()).map_err(format_error)?;
                match sheet {
                    ExtraSheet::Table(static_table) => {
                        Self::add_table_sheet(worksheet, static_table, &formats)?;
                    }
                    ExtraSheet::Notes(notes) => {
                        Self::add_notes_sheet(worksheet, notes, &formats)?;
                    }
                }
                debug!(sheet = sheet.name(), "added extra sheet");
            }
        }

        workbook.save_to_buffer().map_err(format_error)
    }

    /// Render and write the workbook to `path`
    pub fn save(&self, report: &Report, path: &Path) -> Result<(), RenderError> {
        let bytes = self.render_to_bytes(report)?;
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "workbook saved");
        Ok(())
    }

    fn add_schedule_sheet(
        &self,
        worksheet: &mut Worksheet,
        report: &Report,
        table: &ReportTable,
        layout: &SheetLayout,
        theme: &Theme,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let last_col = layout.last_col;

        // Banner rows
        merge_or_write(
            worksheet,
            layout.title_row,
            0,
            last_col,
            &report.title,
            &formats.title,
        )?;
        if let Some(height) = theme.title_height {
            worksheet.set_row_height(layout.title_row, height).ok();
        }

        if let (Some(row), Some(subtitle)) = (layout.subtitle_row, &report.subtitle) {
            merge_or_write(worksheet, row, 0, last_col, subtitle, &formats.subtitle)?;
            if let Some(height) = theme.subtitle_height {
                worksheet.set_row_height(row, height).ok();
            }
        }

        // Project info
        let ((label_first, label_last), (value_first, value_last)) = layout.info_columns();
        for (index, (label, value)) in report.info.iter().enumerate() {
            let row = layout.info_row(index);
            merge_or_write(
                worksheet,
                row,
                label_first,
                label_last,
                label,
                &formats.info_label,
            )?;
            merge_or_write(
                worksheet,
                row,
                value_first,
                value_last,
                value,
                &formats.info_value,
            )?;
        }

        // Column widths and header
        for (col, column) in report.columns.iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, column.width).ok();
            worksheet
                .write_string_with_format(layout.header_row, col, &column.header, &formats.header)
                .map_err(format_error)?;
        }
        if let Some(height) = theme.header_height {
            worksheet.set_row_height(layout.header_row, height).ok();
        }

        // Schedule rows
        for (index, (cells, source)) in table.grid.iter().zip(&report.rows).enumerate() {
            let row = layout.data_row(index);

            for (col, (field, text)) in table.columns.iter().zip(cells).enumerate() {
                let col = col as u16;
                let format = formats.cell(*field, source);

                if *field == Field::Group && self.merge_groups {
                    if let Some(span) = table.span_at(index) {
                        if span.start_row == index {
                            worksheet
                                .merge_range(
                                    row,
                                    col,
                                    layout.data_row(span.end_row),
                                    col,
                                    text,
                                    format,
                                )
                                .map_err(format_error)?;
                        }
                        continue;
                    }
                }

                worksheet
                    .write_string_with_format(row, col, text, format)
                    .map_err(format_error)?;
            }

            worksheet.set_row_height(row, theme.row_height).ok();
        }

        // Footnote
        if let (Some(row), Some(footnote)) = (layout.footnote_row, &report.footnote) {
            merge_or_write(worksheet, row, 0, last_col, footnote, &formats.footnote)?;
        }

        Ok(())
    }

    fn add_table_sheet(
        worksheet: &mut Worksheet,
        table: &StaticTable,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        for (col, header) in table.headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, header, &formats.header)
                .map_err(format_error)?;
        }

        for (index, cells) in table.rows.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, text) in cells.iter().enumerate() {
                worksheet
                    .write_string_with_format(row, col as u16, text, &formats.body)
                    .map_err(format_error)?;
            }
        }

        for (col, width) in table.widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width).ok();
        }

        Ok(())
    }

    fn add_notes_sheet(
        worksheet: &mut Worksheet,
        notes: &NoteSheet,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let mut row = 0u32;

        for (index, section) in notes.sections.iter().enumerate() {
            if index > 0 {
                row += 1;
            }

            worksheet
                .write_string_with_format(row, 0, &section.heading, &formats.note_heading)
                .map_err(format_error)?;
            row += 1;

            for (label, value) in &section.entries {
                worksheet
                    .write_string_with_format(row, 0, label, &formats.note_label)
                    .map_err(format_error)?;
                worksheet
                    .write_string_with_format(row, 1, value, &formats.note_value)
                    .map_err(format_error)?;
                row += 1;
            }
        }

        let [label_width, value_width] = notes.widths;
        worksheet.set_column_width(0, label_width).ok();
        worksheet.set_column_width(1, value_width).ok();

        Ok(())
    }
}

impl Renderer for ExcelRenderer {
    type Output = Vec<u8>;

    fn render(&self, report: &Report) -> Result<Vec<u8>, RenderError> {
        self.render_to_bytes(report)
    }
}

fn format_error(err: XlsxError) -> RenderError {
    RenderError::Format(err.to_string())
}

/// Merge a horizontal range, or write a plain cell when it is one column wide
fn merge_or_write(
    worksheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    last_col: u16,
    text: &str,
    format: &Format,
) -> Result<(), RenderError> {
    if last_col > first_col {
        worksheet
            .merge_range(row, first_col, row, last_col, text, format)
            .map_err(format_error)?;
    } else {
        worksheet
            .write_string_with_format(row, first_col, text, format)
            .map_err(format_error)?;
    }
    Ok(())
}

/// Cell formats derived from a theme
struct ExcelFormats {
    title: Format,
    subtitle: Format,
    info_label: Format,
    info_value: Format,
    header: Format,
    group: Format,
    holiday: Format,
    group_empty: Format,
    period: Format,
    body: Format,
    footnote: Format,
    note_heading: Format,
    note_label: Format,
    note_value: Format,
}

impl ExcelFormats {
    fn new(theme: &Theme) -> Self {
        let font = || match &theme.font_name {
            Some(name) => Format::new().set_font_name(name),
            None => Format::new(),
        };

        let mut title = font()
            .set_bold()
            .set_font_size(theme.title_size)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        if let Some(color) = theme.title_font_color {
            title = title.set_font_color(color);
        }
        if let Some(fill) = theme.title_fill {
            title = title.set_background_color(fill);
        }

        let mut subtitle = font()
            .set_bold()
            .set_font_size(theme.subtitle_size)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        if let Some(fill) = theme.subtitle_fill {
            subtitle = subtitle.set_background_color(fill);
        }

        let info_label = font().set_bold().set_font_size(theme.body_size);

        let info_value = font()
            .set_font_size(theme.body_size)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap();

        let header = font()
            .set_bold()
            .set_font_size(theme.header_size)
            .set_font_color(theme.header_font_color)
            .set_background_color(theme.header_fill)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        let centered = || {
            font()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin)
        };

        let group = centered()
            .set_bold()
            .set_font_size(theme.group_size)
            .set_background_color(theme.group_fill);

        let holiday = centered()
            .set_bold()
            .set_font_size(theme.group_size)
            .set_background_color(theme.holiday_fill);

        let group_empty = centered().set_font_size(theme.body_size);

        let mut period = centered().set_font_size(theme.body_size);
        if theme.period_bold {
            period = period.set_bold();
        }

        let body = font()
            .set_font_size(theme.body_size)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        let footnote = font()
            .set_italic()
            .set_font_size(theme.footnote_size)
            .set_font_color(theme.footnote_color)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter);

        let note_heading = font().set_bold().set_font_size(theme.note_heading_size);
        let note_label = font().set_font_size(theme.body_size);

        Self {
            title,
            subtitle,
            info_label,
            info_value: info_value.clone(),
            header,
            group,
            holiday,
            group_empty,
            period,
            body,
            footnote,
            note_heading,
            note_label,
            note_value: info_value,
        }
    }

    /// Format of a schedule cell
    fn cell(&self, field: Field, row: &ScheduleRow) -> &Format {
        match field {
            Field::Group => match (row.label(), row.highlight) {
                (None, _) => &self.group_empty,
                (Some(_), RowHighlight::Holiday) => &self.holiday,
                (Some(_), RowHighlight::Phase) => &self.group,
            },
            Field::Period => &self.period,
            _ => &self.body,
        }
    }
}
