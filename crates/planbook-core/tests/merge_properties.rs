//! Exhaustive checks of merge span invariants over short label sequences

use planbook_core::{build_table, merge_spans, ScheduleRow};

const ALPHABET: [&str; 3] = ["", "A", "B"];
const MAX_LEN: u32 = 7;

/// Every label sequence over the alphabet up to `MAX_LEN` rows
fn all_sequences() -> Vec<Vec<&'static str>> {
    let mut sequences = Vec::new();
    for len in 0..=MAX_LEN {
        let count = ALPHABET.len().pow(len);
        for mut code in 0..count {
            let mut labels = Vec::with_capacity(len as usize);
            for _ in 0..len {
                labels.push(ALPHABET[code % ALPHABET.len()]);
                code /= ALPHABET.len();
            }
            sequences.push(labels);
        }
    }
    sequences
}

fn to_rows(labels: &[&str]) -> Vec<ScheduleRow> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| ScheduleRow::new(format!("W{}", i + 1)).group(*label))
        .collect()
}

#[test]
fn spans_never_overlap_and_are_ordered() {
    for labels in all_sequences() {
        let spans = merge_spans(&to_rows(&labels));
        for pair in spans.windows(2) {
            assert!(
                pair[0].end_row < pair[1].start_row,
                "overlapping spans {:?} for {:?}",
                pair,
                labels
            );
        }
    }
}

#[test]
fn spans_start_on_labelled_rows_and_cover_more_than_one_row() {
    for labels in all_sequences() {
        for span in merge_spans(&to_rows(&labels)) {
            assert_eq!(labels[span.start_row], span.label, "{:?}", labels);
            assert!(!span.label.is_empty());
            assert!(span.end_row > span.start_row, "{:?}", labels);
            assert!(span.end_row < labels.len());
        }
    }
}

#[test]
fn span_interior_rows_continue_the_run() {
    for labels in all_sequences() {
        for span in merge_spans(&to_rows(&labels)) {
            for row in span.start_row + 1..=span.end_row {
                let label = labels[row];
                assert!(
                    label.is_empty() || label == labels[row - 1],
                    "row {} breaks span {:?} in {:?}",
                    row,
                    span,
                    labels
                );
            }
            if let Some(next) = labels.get(span.end_row + 1) {
                assert!(
                    !next.is_empty() && *next != labels[span.end_row],
                    "span {:?} stops early in {:?}",
                    span,
                    labels
                );
            }
        }
    }
}

#[test]
fn labelled_rows_with_continuations_are_always_merged() {
    for labels in all_sequences() {
        let spans = merge_spans(&to_rows(&labels));
        for (row, pair) in labels.windows(2).enumerate() {
            if !pair[0].is_empty() && pair[1].is_empty() {
                assert!(
                    spans.iter().any(|s| s.contains(row) && s.contains(row + 1)),
                    "rows {}..{} not merged in {:?}",
                    row,
                    row + 1,
                    labels
                );
            }
        }
    }
}

#[test]
fn grid_order_matches_input_and_is_repeatable() {
    for labels in all_sequences() {
        let rows = to_rows(&labels);
        let first = build_table(&rows);
        let second = build_table(&rows);
        assert_eq!(first, second);

        let groups: Vec<&str> = first.grid.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(groups, labels);
    }
}
