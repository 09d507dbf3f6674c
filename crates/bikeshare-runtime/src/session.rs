//! The interactive explore-and-restart loop.

use std::io::{BufRead, Write};
use std::time::Instant;

use bikeshare_core::datasets::DataConfig;
use bikeshare_core::error::Result;
use bikeshare_core::settings::Settings;
use bikeshare_data::analysis::analyze_trips;
use bikeshare_data::reader::load_data;
use bikeshare_ui::report_view::render_report;
use tracing::{debug, info};

use crate::pager::{PagerBoundary, RowPager};
use crate::prompt::{ask_yes_no, collect_filters};

pub const NO_DATA_NOTICE: &str = "No data available";
const RESTART_PROMPT: &str = "Would you like to restart? Enter yes or no.";

/// What a finished session did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Completed filter → report → restart rounds.
    pub iterations: usize,
}

/// Pager configured from `--page-size` and `--legacy-pager`.
pub fn pager_for(settings: &Settings) -> RowPager {
    let boundary = if settings.legacy_pager {
        PagerBoundary::Legacy
    } else {
        PagerBoundary::ShowPartial
    };
    RowPager::new(settings.page_size as usize, boundary)
}

/// Run rounds of filter collection, reporting and paging until the user
/// declines to restart.
///
/// Load failures end the session with an error. So does a closed input
/// stream, as [`BikeshareError::InputClosed`](bikeshare_core::error::BikeshareError::InputClosed).
pub fn run_session<R, W>(
    config: &DataConfig,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let pager = pager_for(settings);
    let mut summary = SessionSummary::default();

    loop {
        let criteria = collect_filters(input, output)?;
        let started = Instant::now();
        let table = load_data(config, &criteria)?;
        info!(%criteria, trips = table.len(), "filters applied");

        if table.is_empty() {
            writeln!(output, "{}", NO_DATA_NOTICE)?;
        } else {
            let report = analyze_trips(&table);
            write!(output, "{}", render_report(&report))?;
            debug!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "reports rendered"
            );
            pager.run(&table, input, output)?;
        }

        summary.iterations += 1;

        writeln!(output)?;
        if !ask_yes_no(input, output, RESTART_PROMPT)? {
            break;
        }
    }

    info!(iterations = summary.iterations, "session finished");
    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
