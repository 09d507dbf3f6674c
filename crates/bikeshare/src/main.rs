mod bootstrap;

use std::io::{self, Write};

use anyhow::{Context, Result};
use bikeshare_core::datasets::DataConfig;
use bikeshare_core::error::BikeshareError;
use bikeshare_core::models::City;
use bikeshare_core::settings::Settings;
use bikeshare_runtime::session::run_session;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::discover_data_dir(settings.data_dir.as_deref());
    let config = DataConfig::new(&data_dir);

    let available = config.available_cities();
    for city in City::ALL.iter().filter(|c| !available.contains(c)) {
        tracing::warn!(
            "{} data not found at {}",
            city,
            config.path_for(*city).display()
        );
    }
    tracing::info!(
        "Data directory: {}, page size: {}, legacy pager: {}",
        data_dir.display(),
        settings.page_size,
        settings.legacy_pager
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match run_session(&config, &settings, &mut input, &mut output) {
        Ok(summary) => {
            tracing::info!("Session ended after {} round(s)", summary.iterations);
        }
        Err(BikeshareError::InputClosed) => {
            // Ctrl+D at a prompt: finish the current line and leave quietly.
            writeln!(output)?;
            tracing::info!("Input closed; exiting");
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to explore trip data in {}", data_dir.display())
            });
        }
    }

    Ok(())
}
