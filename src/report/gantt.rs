//! Text Gantt chart.
//!
//! Renders a timeline as two lines: labelled cells and a time axis whose
//! marks sit under each cell boundary.
//!
//! ```text
//! | P1 | P2 | idle | P3 |
//! 0    3    5      7    9
//! ```

use crate::models::ExecutionInterval;

const IDLE_LABEL: &str = "idle";

/// Renders intervals as a two-line chart.
///
/// Intervals are sorted by start first; gaps between them become
/// `idle` cells. An empty timeline renders as an empty string.
pub fn render(intervals: &[ExecutionInterval]) -> String {
    let mut sorted: Vec<&ExecutionInterval> = intervals.iter().collect();
    sorted.sort_by_key(|i| (i.start, i.end));

    let Some(first) = sorted.first() else {
        return String::new();
    };

    let mut cells: Vec<(&str, i64)> = Vec::with_capacity(sorted.len());
    let mut cursor = first.start;
    for interval in &sorted {
        if interval.start > cursor {
            cells.push((IDLE_LABEL, cursor));
        }
        cells.push((interval.process.as_str(), interval.start));
        cursor = cursor.max(interval.end);
    }

    let mut bar = String::new();
    let mut axis = String::new();
    for (label, start) in cells {
        let mark = start.to_string();
        let width = (label.len() + 2).max(mark.len());
        bar.push('|');
        bar.push_str(&format!("{label:^width$}"));
        axis.push_str(&format!("{mark:<pad$}", pad = width + 1));
    }
    bar.push('|');
    axis.push_str(&cursor.to_string());

    format!("{bar}\n{axis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let intervals = vec![
            ExecutionInterval::new("P1", 0, 3),
            ExecutionInterval::new("P2", 3, 5),
        ];
        assert_eq!(render(&intervals), "| P1 | P2 |\n0    3    5");
    }

    #[test]
    fn test_render_idle_gap() {
        let intervals = vec![
            ExecutionInterval::new("P1", 0, 2),
            ExecutionInterval::new("P2", 6, 8),
        ];
        assert_eq!(render(&intervals), "| P1 | idle | P2 |\n0    2      6    8");
    }

    #[test]
    fn test_render_unsorted_and_wide_marks() {
        let intervals = vec![
            ExecutionInterval::new("B", 1000, 10000),
            ExecutionInterval::new("A", 0, 1000),
        ];
        let chart = render(&intervals);
        let lines: Vec<&str> = chart.lines().collect();
        // The "1000" mark is wider than " B ", so the cell widens to fit it
        assert_eq!(lines[0], "| A | B  |");
        assert_eq!(lines[1], "0   1000 10000");
    }

    #[test]
    fn test_render_late_start() {
        let intervals = vec![ExecutionInterval::new("P1", 4, 6)];
        assert_eq!(render(&intervals), "| P1 |\n4    6");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
