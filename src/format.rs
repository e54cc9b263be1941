//! Fixed-width table rendering for departure listings. The layout is plain
//! ASCII so the output pastes cleanly into tickets and terminal logs: a border
//! row, a centered header row, another border, the data rows, and a closing
//! border.

use crate::models::DepartureRecord;

/// Column widths for row number, destination, train number, train type, and
/// departure time. The destination column is the widest because station names
/// run long.
const COLUMN_WIDTHS: [usize; 5] = [4, 28, 14, 14, 19];

/// Header labels, in column order.
const HEADERS: [&str; 5] = [
    "No",
    "Destination",
    "Train number",
    "Train type",
    "Departure time",
];

/// Render departures as a bordered table. Rows are numbered from 1 in the
/// order they arrive. An empty slice still yields the border and header so
/// `list` on a fresh database prints a recognizable, if empty, timetable.
pub fn render_table(records: &[DepartureRecord]) -> String {
    let border = border_row();
    let mut table = String::new();

    table.push_str(&border);
    table.push('\n');
    table.push_str(&header_row());
    table.push('\n');
    table.push_str(&border);
    table.push('\n');

    for (index, record) in records.iter().enumerate() {
        table.push_str(&data_row(index + 1, record));
        table.push('\n');
    }

    table.push_str(&border);
    table
}

/// Build the `+-...-+` separator matching every column width.
fn border_row() -> String {
    let segments: Vec<String> = COLUMN_WIDTHS
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn header_row() -> String {
    format!(
        "| {:^4} | {:^28} | {:^14} | {:^14} | {:^19} |",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4]
    )
}

/// One data row: row number right-aligned, destination and type left-aligned,
/// train number centered, time right-aligned.
fn data_row(index: usize, record: &DepartureRecord) -> String {
    format!(
        "| {:>4} | {:<28} | {:^14} | {:<14} | {:>19} |",
        index,
        record.destination,
        record.number,
        record.train_type,
        record.time.to_string()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;

    fn record(destination: &str, number: i64, train_type: &str, time: &str) -> DepartureRecord {
        DepartureRecord {
            number,
            train_type: train_type.to_string(),
            destination: destination.to_string(),
            time: time.parse::<TimeOfDay>().unwrap(),
        }
    }

    #[test]
    fn empty_input_renders_header_and_borders_only() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[2], lines[3]);
        assert!(lines[1].contains("Destination"));
        assert!(lines[1].contains("Departure time"));
    }

    #[test]
    fn border_matches_column_widths() {
        let border = border_row();
        assert_eq!(
            border,
            format!(
                "+{}+{}+{}+{}+{}+",
                "-".repeat(6),
                "-".repeat(30),
                "-".repeat(16),
                "-".repeat(16),
                "-".repeat(21)
            )
        );
    }

    #[test]
    fn data_rows_are_numbered_and_aligned() {
        let table = render_table(&[
            record("Moscow", 5, "Express", "14:30"),
            record("Riga", 12, "Local", "09:05"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[3],
            "|    1 | Moscow                       |       5        | Express        |               14:30 |"
        );
        assert_eq!(
            lines[4],
            "|    2 | Riga                         |       12       | Local          |               09:05 |"
        );
    }

    #[test]
    fn every_line_has_uniform_width() {
        let table = render_table(&[record("Saint Petersburg", 731, "Intercity", "23:59")]);
        let widths: Vec<usize> = table.lines().map(|line| line.len()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
