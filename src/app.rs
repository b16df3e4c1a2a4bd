use std::io::Write;

use anyhow::{Context, Result};

use crate::config::{OutputFormat, RunConfig};
use crate::data::loader::load_file;
use crate::data::model::NameDataset;
use crate::report::{self, Report};
use crate::stats::NameStatistics;

// ---------------------------------------------------------------------------
// Batch run: load → aggregate → render
// ---------------------------------------------------------------------------

/// Load the configured input, recovering from an unreadable source by
/// logging the failure and continuing with an empty dataset.
pub fn load_or_empty(config: &RunConfig) -> NameDataset {
    match load_file(&config.input) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("{e}");
            NameDataset::default()
        }
    }
}

/// Run one full report over `config.input`, writing it to `out`.
///
/// Only a failure to write the report is returned as an error.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let stats = NameStatistics::new(load_or_empty(config));
    let report = Report::build(&stats, config);

    let written = match config.format {
        OutputFormat::Text => report::render_text(&report, config.locale, out),
        OutputFormat::Json => report::render_json(&report, out),
    };
    written.context("writing report")?;

    out.flush().context("flushing report")
}
