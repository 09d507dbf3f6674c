//! Plain-text tables for value-count breakdowns and raw trip rows.
//!
//! Column widths are measured in terminal cells with [`unicode_width`] so
//! station names containing wide characters still line up.

use unicode_width::UnicodeWidthStr;

use bikeshare_core::formatting;
use bikeshare_core::models::TripRecord;
use bikeshare_data::aggregator::ValueCount;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Gap between adjacent columns.
const COLUMN_GAP: &str = "  ";

/// Render `rows` under `headers` as a whitespace-aligned table.
///
/// `align` gives the alignment per column; missing entries default to left.
/// Every line ends with `\n` and carries no trailing spaces.
pub fn render_text_table(headers: &[&str], rows: &[Vec<String>], align: &[Align]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header_cells, &widths, align);
    for row in rows {
        push_line(&mut out, row, &widths, align);
    }
    out
}

/// Two- or three-column breakdown: label, count, share of the total.
pub fn render_value_counts(label: &str, counts: &[ValueCount<String>]) -> String {
    let total: usize = counts.iter().map(|c| c.count).sum();
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|c| {
            vec![
                c.value.clone(),
                formatting::format_number(c.count as f64, 0),
                format!(
                    "{:.1}%",
                    formatting::percentage(c.count as f64, total as f64, 1)
                ),
            ]
        })
        .collect();
    render_text_table(
        &[label, "Count", "Share"],
        &rows,
        &[Align::Left, Align::Right, Align::Right],
    )
}

/// Raw trip rows with their derived columns, labelled by source index.
///
/// `with_demographics` adds the `Gender` and `Birth Year` columns.
pub fn render_trip_rows(trips: &[TripRecord], with_demographics: bool) -> String {
    let mut headers = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if with_demographics {
        headers.extend(["Gender", "Birth Year"]);
    }
    headers.extend(["month", "day", "hour"]);

    let rows: Vec<Vec<String>> = trips
        .iter()
        .map(|t| {
            let mut row = vec![
                t.index.to_string(),
                t.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
                t.end_time.clone().unwrap_or_default(),
                format_duration_cell(t.trip_duration),
                t.start_station.clone(),
                t.end_station.clone(),
                t.user_type.clone().unwrap_or_default(),
            ];
            if with_demographics {
                row.push(t.gender.clone().unwrap_or_default());
                row.push(
                    t.birth_year
                        .map(|y| format!("{:.0}", y))
                        .unwrap_or_default(),
                );
            }
            row.push(t.month().to_string());
            row.push(t.day_name().to_string());
            row.push(t.hour().to_string());
            row
        })
        .collect();

    let mut align = vec![Align::Right, Align::Left, Align::Left, Align::Right];
    align.resize(headers.len() - 3, Align::Left);
    align.extend([Align::Right, Align::Left, Align::Right]);

    render_text_table(&headers, &rows, &align)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whole seconds print without a fractional part; others keep three places.
fn format_duration_cell(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{:.0}", seconds)
    } else {
        format!("{:.3}", seconds)
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], align: &[Align]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.width());
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        match align.get(i).copied().unwrap_or(Align::Left) {
            Align::Left => {
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
            }
            Align::Right => {
                line.push_str(&" ".repeat(pad));
                line.push_str(cell);
            }
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

// ── Tests ─────────────────────────────────────────────────────────────────────
