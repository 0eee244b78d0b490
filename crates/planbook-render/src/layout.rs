//! Row placement for the main schedule sheet
//!
//! ```text
//! row 0        title (merged across the table width)
//! row 1        subtitle, when present
//!              blank
//! info rows    label (A:B) / value (C:last), when present
//!              two blanks after info
//! header row
//! data rows    one per schedule row
//!              blank
//! footnote     when present
//! ```

use planbook_core::{RenderError, Report};

/// Zero-based sheet coordinates of every block on the schedule sheet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    /// Index of the rightmost table column
    pub last_col: u16,
    pub title_row: u32,
    pub subtitle_row: Option<u32>,
    pub info_start: u32,
    pub info_len: u32,
    pub header_row: u32,
    pub data_len: u32,
    pub footnote_row: Option<u32>,
}

impl SheetLayout {
    pub fn for_report(report: &Report) -> Result<Self, RenderError> {
        if report.columns.is_empty() {
            return Err(RenderError::InvalidData(format!(
                "report '{}' has no columns",
                report.id
            )));
        }
        if !report.info.is_empty() && report.columns.len() < 2 {
            return Err(RenderError::InvalidData(format!(
                "report '{}' needs at least two columns to show project info",
                report.id
            )));
        }

        let last_col = (report.columns.len() - 1) as u16;
        let mut next = 1;

        let subtitle_row = if report.subtitle.is_some() {
            next += 1;
            Some(next - 1)
        } else {
            None
        };

        let info_len = report.info.len() as u32;
        let info_start = next + 1;
        if info_len > 0 {
            next = info_start + info_len + 2;
        } else {
            next += 1;
        }

        let header_row = next;
        let data_len = report.rows.len() as u32;
        let footnote_row = report
            .footnote
            .as_ref()
            .map(|_| header_row + data_len + 2);

        Ok(Self {
            last_col,
            title_row: 0,
            subtitle_row,
            info_start,
            info_len,
            header_row,
            data_len,
            footnote_row,
        })
    }

    /// Sheet row of the `index`-th info entry
    pub fn info_row(&self, index: usize) -> u32 {
        self.info_start + index as u32
    }

    /// Sheet row of the `index`-th schedule row
    pub fn data_row(&self, index: usize) -> u32 {
        self.header_row + 1 + index as u32
    }

    pub fn last_data_row(&self) -> Option<u32> {
        self.data_len.checked_sub(1).map(|last| self.data_row(last as usize))
    }

    /// Column ranges of an info entry: `(label_first, label_last)` and
    /// `(value_first, value_last)`
    pub fn info_columns(&self) -> ((u16, u16), (u16, u16)) {
        if self.last_col >= 2 {
            ((0, 1), (2, self.last_col))
        } else {
            ((0, 0), (1, self.last_col))
        }
    }
}

/// Convert a zero-based column index to its Excel letter (0 = A, 26 = AA)
pub fn col_to_letter(col: u16) -> String {
    let mut letters = String::new();
    let mut n = u32::from(col);
    loop {
        letters.insert(0, char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters
}

/// Excel reference of a single-column vertical range, 1-based rows
pub fn column_range(col: u16, first_row: u32, last_row: u32) -> String {
    let letter = col_to_letter(col);
    format!("{}{}:{}{}", letter, first_row + 1, letter, last_row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planbook_core::{Field, ScheduleRow};
    use pretty_assertions::assert_eq;

    fn four_columns(report: Report) -> Report {
        report
            .column(Field::Group, "阶段", 20.0)
            .column(Field::Period, "周次", 12.0)
            .column(Field::Tasks, "核心任务", 50.0)
            .column(Field::Deliverables, "交付成果", 35.0)
    }

    fn rows(n: usize) -> Vec<ScheduleRow> {
        (1..=n).map(|i| ScheduleRow::new(format!("第{}周", i))).collect()
    }

    #[test]
    fn subtitle_without_info() {
        let report = four_columns(Report::new("clean", "计划"))
            .subtitle("项目周期：6周")
            .rows(rows(6))
            .footnote("备注");
        let layout = SheetLayout::for_report(&report).unwrap();

        assert_eq!(layout.subtitle_row, Some(1));
        assert_eq!(layout.info_len, 0);
        assert_eq!(layout.header_row, 3);
        assert_eq!(layout.data_row(0), 4);
        assert_eq!(layout.last_data_row(), Some(9));
        assert_eq!(layout.footnote_row, Some(11));
        assert_eq!(layout.last_col, 3);
    }

    #[test]
    fn info_block_without_subtitle() {
        let mut report = four_columns(Report::new("dingtalk", "排期表")).rows(rows(11));
        for i in 0..8 {
            report = report.info(format!("键{}", i), "值");
        }
        let layout = SheetLayout::for_report(&report).unwrap();

        assert_eq!(layout.subtitle_row, None);
        assert_eq!(layout.info_row(0), 2);
        assert_eq!(layout.info_row(7), 9);
        assert_eq!(layout.header_row, 12);
        assert_eq!(layout.data_row(10), 23);
        assert_eq!(layout.footnote_row, None);
    }

    #[test]
    fn subtitle_and_info() {
        let report = four_columns(Report::new("x", "t"))
            .subtitle("s")
            .info("a", "b");
        let layout = SheetLayout::for_report(&report).unwrap();
        assert_eq!(layout.info_row(0), 3);
        assert_eq!(layout.header_row, 6);
    }

    #[test]
    fn bare_report_puts_header_after_one_blank() {
        let report = four_columns(Report::new("x", "t"));
        let layout = SheetLayout::for_report(&report).unwrap();
        assert_eq!(layout.header_row, 2);
        assert_eq!(layout.last_data_row(), None);
    }

    #[test]
    fn footnote_without_rows_sits_below_header() {
        let report = four_columns(Report::new("x", "t")).footnote("n");
        let layout = SheetLayout::for_report(&report).unwrap();
        assert_eq!(layout.footnote_row, Some(layout.header_row + 2));
    }

    #[test]
    fn info_columns_by_width() {
        let wide = SheetLayout::for_report(&four_columns(Report::new("x", "t"))).unwrap();
        assert_eq!(wide.info_columns(), ((0, 1), (2, 3)));

        let narrow = Report::new("x", "t")
            .column(Field::Group, "a", 10.0)
            .column(Field::Period, "b", 10.0)
            .info("k", "v");
        let narrow = SheetLayout::for_report(&narrow).unwrap();
        assert_eq!(narrow.info_columns(), ((0, 0), (1, 1)));
    }

    #[test]
    fn no_columns_is_invalid() {
        let err = SheetLayout::for_report(&Report::new("x", "t")).unwrap_err();
        assert!(matches!(err, RenderError::InvalidData(_)));
    }

    #[test]
    fn info_needs_two_columns() {
        let report = Report::new("x", "t")
            .column(Field::Period, "周次", 10.0)
            .info("k", "v");
        let err = SheetLayout::for_report(&report).unwrap_err();
        assert!(matches!(err, RenderError::InvalidData(_)));
    }

    #[test]
    fn col_to_letter_works() {
        assert_eq!(col_to_letter(0), "A");
        assert_eq!(col_to_letter(25), "Z");
        assert_eq!(col_to_letter(26), "AA");
        assert_eq!(col_to_letter(27), "AB");
        assert_eq!(col_to_letter(51), "AZ");
        assert_eq!(col_to_letter(52), "BA");
    }

    #[test]
    fn column_range_is_one_based() {
        assert_eq!(column_range(0, 4, 5), "A5:A6");
        assert_eq!(column_range(2, 13, 15), "C14:C16");
    }
}
