//! Paged display of the raw filtered rows.

use std::io::{BufRead, Write};
use std::ops::Range;

use bikeshare_core::error::Result;
use bikeshare_data::table::TripTable;
use bikeshare_ui::table_view::render_trip_rows;
use tracing::debug;

use crate::prompt::ask_yes_no;

/// Rows per block unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Whether a trailing block shorter than the page size is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerBoundary {
    /// Every row is reachable; the last block may be short.
    #[default]
    ShowPartial,
    /// A block is shown only while `offset + page_size < len`, so the final
    /// block (full or partial) is never displayed.
    Legacy,
}

/// Shows a [`TripTable`] a block at a time, asking before each further block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPager {
    page_size: usize,
    boundary: PagerBoundary,
}

impl Default for RowPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, PagerBoundary::default())
    }
}

impl RowPager {
    /// A zero `page_size` is treated as 1.
    pub fn new(page_size: usize, boundary: PagerBoundary) -> Self {
        Self {
            page_size: page_size.max(1),
            boundary,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn boundary(&self) -> PagerBoundary {
        self.boundary
    }

    /// Whether a block starting at `offset` is shown for a table of `len` rows.
    pub fn has_block_at(&self, offset: usize, len: usize) -> bool {
        match self.boundary {
            PagerBoundary::ShowPartial => offset < len,
            PagerBoundary::Legacy => offset + self.page_size < len,
        }
    }

    /// Row ranges of every block the pager would show if the user kept
    /// answering `yes`.
    pub fn page_ranges(&self, len: usize) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut offset = 0;
        while self.has_block_at(offset, len) {
            ranges.push(offset..(offset + self.page_size).min(len));
            offset += self.page_size;
        }
        ranges
    }

    /// Offer the rows of `table` to the user. Returns the number of blocks
    /// printed.
    pub fn run<R, W>(&self, table: &TripTable, input: &mut R, output: &mut W) -> Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "More data is available to check")?;
        let question = format!(
            "Do you want to see the {} rows of data? Enter yes or no.",
            self.page_size
        );
        if !ask_yes_no(input, output, &question)? {
            return Ok(0);
        }

        let with_demographics = table.city().has_demographics();
        let ranges = self.page_ranges(table.len());
        let mut shown = 0;
        for (i, range) in ranges.iter().enumerate() {
            let rows = table.slice(range.start, range.len());
            write!(output, "{}", render_trip_rows(rows, with_demographics))?;
            shown += 1;

            let more = i + 1 < ranges.len();
            if !more
                || !ask_yes_no(input, output, "Do you wish to continue? Enter yes or no.")?
            {
                break;
            }
        }

        debug!(
            blocks = shown,
            rows = table.len(),
            boundary = ?self.boundary,
            "row pager finished"
        );
        Ok(shown)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{City, TripRecord};
    use bikeshare_core::time_utils::parse_start_time;
    use std::io::Cursor;

    fn table(len: usize) -> TripTable {
        let rows = (0..len)
            .map(|i| TripRecord {
                index: 100 + i,
                start_time: parse_start_time("2017-04-03 12:00:00").unwrap(),
                end_time: None,
                trip_duration: 60.0,
                start_station: format!("Station {i}"),
                end_station: "Depot".to_string(),
                user_type: Some("Subscriber".to_string()),
                gender: None,
                birth_year: None,
            })
            .collect();
        TripTable::new(City::Washington, rows)
    }

    fn run(pager: RowPager, len: usize, script: &str) -> (usize, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let shown = pager.run(&table(len), &mut input, &mut output).unwrap();
        (shown, String::from_utf8(output).unwrap())
    }

    // ── page_ranges ───────────────────────────────────────────────────────────

    #[test]
    fn test_page_ranges_show_partial_twelve_rows() {
        let pager = RowPager::new(5, PagerBoundary::ShowPartial);
        assert_eq!(pager.page_ranges(12), vec![0..5, 5..10, 10..12]);
    }

    #[test]
    fn test_page_ranges_legacy_twelve_rows() {
        let pager = RowPager::new(5, PagerBoundary::Legacy);
        assert_eq!(pager.page_ranges(12), vec![0..5, 5..10]);
    }

    #[test]
    fn test_page_ranges_exact_multiple() {
        assert_eq!(
            RowPager::new(5, PagerBoundary::ShowPartial).page_ranges(10),
            vec![0..5, 5..10]
        );
        assert_eq!(
            RowPager::new(5, PagerBoundary::Legacy).page_ranges(10),
            vec![0..5]
        );
    }

    #[test]
    fn test_page_ranges_small_tables() {
        assert!(RowPager::default().page_ranges(0).is_empty());
        assert_eq!(RowPager::default().page_ranges(3), vec![0..3]);
        assert!(RowPager::new(5, PagerBoundary::Legacy)
            .page_ranges(5)
            .is_empty());
    }

    #[test]
    fn test_zero_page_size_clamped() {
        assert_eq!(RowPager::new(0, PagerBoundary::ShowPartial).page_size(), 1);
    }

    // ── run ───────────────────────────────────────────────────────────────────

    #[test]
    fn test_run_declined() {
        let (shown, text) = run(RowPager::default(), 12, "no\n");
        assert_eq!(shown, 0);
        assert!(text.contains("Do you want to see the 5 rows of data? Enter yes or no."));
        assert!(!text.contains("Station 0"));
    }

    #[test]
    fn test_run_show_partial_all_blocks() {
        let (shown, text) = run(RowPager::default(), 12, "yes\nyes\nyes\n");
        assert_eq!(shown, 3);
        assert!(text.contains("Station 11"));
        // Asked after the first and second blocks only.
        assert_eq!(
            text.matches("Do you wish to continue? Enter yes or no.").count(),
            2
        );
    }

    #[test]
    fn test_run_legacy_hides_last_block() {
        let (shown, text) = run(
            RowPager::new(5, PagerBoundary::Legacy),
            12,
            "yes\nyes\n",
        );
        assert_eq!(shown, 2);
        assert!(text.contains("Station 9"));
        assert!(!text.contains("Station 10"));
    }

    #[test]
    fn test_run_stops_on_no() {
        let (shown, text) = run(RowPager::default(), 12, "yes\nnope\n");
        assert_eq!(shown, 1);
        assert!(text.contains("Station 4"));
        assert!(!text.contains("Station 5"));
    }

    #[test]
    fn test_run_labels_rows_with_source_index() {
        let (_, text) = run(RowPager::default(), 2, "yes\n");
        assert!(text.lines().any(|l| l.trim_start().starts_with("100 ")));
        assert!(text.lines().any(|l| l.trim_start().starts_with("101 ")));
    }

    #[test]
    fn test_run_custom_page_size_in_prompt() {
        let (shown, text) = run(RowPager::new(3, PagerBoundary::ShowPartial), 4, "yes\nyes\n");
        assert_eq!(shown, 2);
        assert!(text.contains("Do you want to see the 3 rows of data?"));
    }
}
