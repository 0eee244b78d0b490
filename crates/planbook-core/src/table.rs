//! Report table builder
//!
//! Turns an ordered list of [`ScheduleRow`]s into a rendering grid plus the
//! vertical merges of the group column.
//!
//! # Group runs
//!
//! Rows arrive pre-flattened: the first row of a group carries the label and
//! the rows after it leave the label empty. A run is a labelled row followed
//! by its unlabelled continuation rows. A label starts a new run unless the
//! row directly above carries the same label, so a label restated after
//! continuation rows opens a separate run even when the text matches.
//! Runs covering a single row produce no merge.
//!
//! ```text
//! idx  label     span
//! 0    Phase1    ┐
//! 1              ┘ {0, 1, "Phase1"}
//! 2    Phase1    ┐
//! 3              ┘ {2, 3, "Phase1"}
//! 4    Phase2      (single row, no span)
//! ```
//!
//! # Example
//!
//! ```rust
//! use planbook_core::{merge_spans, MergeSpan, ScheduleRow};
//!
//! let rows = vec![
//!     ScheduleRow::new("W1").group("A"),
//!     ScheduleRow::new("W2"),
//!     ScheduleRow::new("W3"),
//!     ScheduleRow::new("W4").group("B"),
//! ];
//!
//! assert_eq!(merge_spans(&rows), vec![MergeSpan::new(0, 2, "A")]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Field, ScheduleRow};

/// A contiguous run of rows whose group cells render as one merged cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSpan {
    /// First row of the run (index into the row sequence)
    pub start_row: usize,
    /// Last row of the run, inclusive
    pub end_row: usize,
    pub label: String,
}

impl MergeSpan {
    pub fn new(start_row: usize, end_row: usize, label: impl Into<String>) -> Self {
        Self {
            start_row,
            end_row,
            label: label.into(),
        }
    }

    /// Number of rows covered; always at least two
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn contains(&self, row: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
    }
}

/// Rendering grid for a schedule: one row per input row, one column per field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub columns: Vec<Field>,
    pub grid: Vec<Vec<String>>,
    pub spans: Vec<MergeSpan>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    /// Index of the group column, if the grid has one
    pub fn group_column(&self) -> Option<usize> {
        self.columns.iter().position(|f| *f == Field::Group)
    }

    /// The span covering `row`, if any
    pub fn span_at(&self, row: usize) -> Option<&MergeSpan> {
        self.spans.iter().find(|s| s.contains(row))
    }
}

/// Detect contiguous group runs longer than one row
pub fn merge_spans(rows: &[ScheduleRow]) -> Vec<MergeSpan> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, &str)> = None;
    let mut previous: Option<&str> = None;

    for (index, row) in rows.iter().enumerate() {
        let label = row.label();
        if let Some(label) = label {
            if previous != Some(label) {
                if let Some((start, current)) = open.take() {
                    close_run(&mut spans, start, index - 1, current);
                }
                open = Some((index, label));
            }
        }
        previous = label;
    }

    if let Some((start, current)) = open {
        close_run(&mut spans, start, rows.len() - 1, current);
    }

    spans
}

fn close_run(spans: &mut Vec<MergeSpan>, start: usize, end: usize, label: &str) {
    if end > start {
        spans.push(MergeSpan::new(start, end, label));
    }
}

/// Build the grid over every field in canonical order
pub fn build_table(rows: &[ScheduleRow]) -> ReportTable {
    build_table_with(rows, &Field::ALL)
}

/// Build the grid over a chosen set of fields
pub fn build_table_with(rows: &[ScheduleRow], fields: &[Field]) -> ReportTable {
    let grid = rows
        .iter()
        .map(|row| fields.iter().map(|field| row.cell(*field)).collect())
        .collect();

    ReportTable {
        columns: fields.to_vec(),
        grid,
        spans: merge_spans(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(labels: &[&str]) -> Vec<ScheduleRow> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| ScheduleRow::new(format!("第{}周", i + 1)).group(*label))
            .collect()
    }

    #[test]
    fn unique_labels_produce_no_spans() {
        let spans = merge_spans(&rows(&["A", "B", "C", "D"]));
        assert!(spans.is_empty());
    }

    #[test]
    fn contiguous_run_merges() {
        let spans = merge_spans(&rows(&["A", "", "", "B"]));
        assert_eq!(spans, vec![MergeSpan::new(0, 2, "A")]);
    }

    #[test]
    fn restated_label_after_gap_is_separate_span() {
        let spans = merge_spans(&rows(&["Phase1", "", "Phase1", "", "Phase2"]));
        assert_eq!(
            spans,
            vec![MergeSpan::new(0, 1, "Phase1"), MergeSpan::new(2, 3, "Phase1")]
        );
    }

    #[test]
    fn repeated_label_on_adjacent_rows_continues_run() {
        let spans = merge_spans(&rows(&["A", "A", "", "B"]));
        assert_eq!(spans, vec![MergeSpan::new(0, 2, "A")]);
    }

    #[test]
    fn same_label_after_other_group_is_not_coalesced() {
        let spans = merge_spans(&rows(&["A", "", "B", "", "A", ""]));
        assert_eq!(
            spans,
            vec![
                MergeSpan::new(0, 1, "A"),
                MergeSpan::new(2, 3, "B"),
                MergeSpan::new(4, 5, "A"),
            ]
        );
    }

    #[test]
    fn final_run_closes_at_last_row() {
        let spans = merge_spans(&rows(&["A", "B", "", ""]));
        assert_eq!(spans, vec![MergeSpan::new(1, 3, "B")]);
    }

    #[test]
    fn leading_unlabelled_rows_belong_to_no_group() {
        let spans = merge_spans(&rows(&["", "", "A", ""]));
        assert_eq!(spans, vec![MergeSpan::new(2, 3, "A")]);

        let none = merge_spans(&rows(&["", "", ""]));
        assert!(none.is_empty());
    }

    #[test]
    fn single_row_input() {
        assert!(merge_spans(&rows(&["A"])).is_empty());
        assert!(merge_spans(&rows(&[""])).is_empty());
    }

    #[test]
    fn empty_input_is_empty_table() {
        let table = build_table(&[]);
        assert!(table.is_empty());
        assert!(table.spans.is_empty());
        assert_eq!(table.columns, Field::ALL.to_vec());
    }

    #[test]
    fn grid_preserves_input_order() {
        let input = rows(&["B", "", "A", "C", ""]);
        let table = build_table(&input);

        let periods: Vec<&str> = table.grid.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(periods, vec!["第1周", "第2周", "第3周", "第4周", "第5周"]);
        let groups: Vec<&str> = table.grid.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(groups, vec!["B", "", "A", "C", ""]);
    }

    #[test]
    fn grid_has_one_column_per_field() {
        let input = vec![ScheduleRow::new("第1周")
            .group("第一阶段")
            .dates("9月1日-9月5日")
            .tasks(["调研", "• 访谈"])
            .deliverable("报告")
            .owner("项目团队")
            .note("启动")];

        let table = build_table(&input);
        assert_eq!(
            table.grid,
            vec![vec![
                "第一阶段".to_string(),
                "第1周".to_string(),
                "9月1日-9月5日".to_string(),
                "调研\n• 访谈".to_string(),
                "报告".to_string(),
                "项目团队".to_string(),
                "启动".to_string(),
            ]]
        );
    }

    #[test]
    fn field_subset_keeps_spans() {
        let input = rows(&["A", "", "B"]);
        let table = build_table_with(&input, &[Field::Period, Field::Group]);

        assert_eq!(table.columns, vec![Field::Period, Field::Group]);
        assert_eq!(table.grid[0], vec!["第1周", "A"]);
        assert_eq!(table.group_column(), Some(1));
        assert_eq!(table.spans, vec![MergeSpan::new(0, 1, "A")]);
    }

    #[test]
    fn table_without_group_column() {
        let table = build_table_with(&rows(&["A", ""]), &[Field::Period]);
        assert_eq!(table.group_column(), None);
        assert_eq!(table.spans.len(), 1);
    }

    #[test]
    fn building_twice_is_identical() {
        let input = rows(&["A", "", "B", "", "", "C"]);
        assert_eq!(build_table(&input), build_table(&input));
    }

    #[test]
    fn span_lookup() {
        let table = build_table(&rows(&["A", "", "", "B", ""]));
        assert_eq!(table.span_at(1).map(|s| s.label.as_str()), Some("A"));
        assert_eq!(table.span_at(4).map(|s| (s.start_row, s.end_row)), Some((3, 4)));
        assert_eq!(table.span_at(7), None);
        assert_eq!(table.spans[0].len(), 3);
    }
}
