//! Single bank processing pipeline.

use crate::annotate::Annotator;
use crate::bank::read_bank;
use crate::config::SplitConfig;
use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use crate::output::{
    CacheEntry, CacheWriter, RunSummary, SubBankSummary, SummarySettings, progress,
    sub_bank_file_name, write_sub_bank, write_summary,
};
use crate::pipeline::plan_sub_banks;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Run tag written to the `process_id` column of every output template.
pub fn process_tag() -> String {
    format!("{APP_NAME}-{}", env!("CARGO_PKG_VERSION"))
}

/// Split one template bank and write its sub-banks, manifest and summary.
///
/// Sub-bank files and manifest lines are written in index order. Any write
/// failure aborts the run; files already written are left in place.
///
/// # Arguments
///
/// * `input_path` - Template bank CSV
/// * `config` - Resolved split settings
/// * `progress_enabled` - Whether to show a progress bar
pub fn process_bank(
    input_path: &Path,
    config: &SplitConfig,
    progress_enabled: bool,
) -> Result<RunSummary> {
    let start_time = Instant::now();

    info!("Reading template bank: {}", input_path.display());
    let bank = read_bank(input_path)?;
    let input_templates = bank.templates.len();
    info!(
        "Loaded {} templates ({} pass-through column(s))",
        input_templates,
        bank.extra_columns.len()
    );

    let mut sub_banks = plan_sub_banks(bank.templates, config)?;
    info!(
        "Planned {} sub-bank(s) of ~{} templates",
        sub_banks.len(),
        config.templates_per_bank
    );

    std::fs::create_dir_all(&config.output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let annotator = Annotator::new(
        config.instrument.as_str(),
        config.f_low,
        config.max_f_final,
        process_tag(),
    );
    let mut cache = CacheWriter::create(&config.output_cache)?;
    let bar = progress::create_sub_bank_progress(sub_banks.len(), progress_enabled);
    let mut written = Vec::with_capacity(sub_banks.len());

    for sub_bank in &mut sub_banks {
        annotator.annotate_all(&mut sub_bank.templates, sub_bank.approximant);

        let file_name = sub_bank_file_name(
            &config.instrument,
            sub_bank.index,
            &config.bank_label,
            config.format,
        );
        let path = config.output_dir.join(file_name);
        debug!(
            "Writing sub-bank {} ({} templates, {}): {}",
            sub_bank.index,
            sub_bank.templates.len(),
            sub_bank.approximant,
            path.display()
        );

        write_sub_bank(config.format, &path, &bank.extra_columns, &sub_bank.templates)?;
        cache.write_entry(&CacheEntry::new(
            &config.instrument,
            sub_bank.index,
            &config.bank_label,
            &path,
        )?)?;

        written.push(SubBankSummary {
            index: sub_bank.index,
            path,
            templates: sub_bank.templates.len(),
            approximant: sub_bank.approximant,
            representative_mchirp: sub_bank.representative.mchirp,
            representative_sort_value: config.sort_by.key(&sub_bank.representative),
        });
        progress::inc_progress(bar.as_ref());
    }

    cache.finalize()?;
    progress::finish_progress(bar, "Complete");
    info!("Wrote cache manifest: {}", config.output_cache.display());

    let summary = RunSummary {
        version: env!("CARGO_PKG_VERSION").to_string(),
        input: input_path.to_path_buf(),
        input_templates,
        settings: SummarySettings::from(config),
        output_cache: config.output_cache.clone(),
        sub_banks: written,
    };

    if let Some(summary_path) = &config.summary {
        write_summary(&summary, summary_path)?;
        info!("Wrote summary: {}", summary_path.display());
    }

    info!(
        "Complete: {} sub-bank(s), {} templates written in {:.2}s",
        summary.sub_banks.len(),
        summary.templates_written(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(summary)
}
