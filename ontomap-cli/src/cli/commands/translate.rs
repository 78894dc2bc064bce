use super::{save_report, VersionPairArgs};
use crate::report::MappingSummary;
use anyhow::{Context, Result};
use clap::Args;
use ontomap_core::Config;
use ontomap_resolve::{Classifier, ResolutionLog, Translator};
use ontomap_utils::{format_number, info, success, warning, CodeUpdate, RecordFile};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct TranslateArgs {
    /// Tab-delimited record file to translate
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the translated records
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    #[command(flatten)]
    pub versions: VersionPairArgs,

    /// Fill unresolved codes with their closest shared parent
    #[arg(short = 'a', long = "auto-resolve")]
    pub auto_resolve: bool,

    /// Column holding the codes (overrides records.code_column)
    #[arg(long = "code-column", value_name = "NAME")]
    pub code_column: Option<String>,

    /// Report output file path (defaults to <output>_summary.<format>)
    #[arg(long = "report-output", value_name = "FILE")]
    pub report_output: Option<PathBuf>,

    /// Report output format (text, html, json, csv; defaults to report.format)
    #[arg(long = "report-format", value_name = "FORMAT")]
    pub report_format: Option<String>,

    /// Skip writing the mapping summary
    #[arg(long = "no-report")]
    pub no_report: bool,
}

pub fn run(args: TranslateArgs, mut config: Config) -> Result<()> {
    if let Some(column) = &args.code_column {
        config.records.code_column = column.clone();
    }
    if args.auto_resolve {
        config.resolution.auto_resolve = true;
    }

    if !args.input.is_file() {
        return Err(ontomap_core::OntomapError::NotFound(format!(
            "cannot access source file {}",
            args.input.display()
        ))
        .into());
    }
    let records = RecordFile::read(&args.input, &config.records.code_column)?;
    let pair = args.versions.load(&mut config)?;

    let classifier = Classifier::new(&pair.source, &pair.target, pair.direction)
        .with_limits(pair.limits);
    let translator = Translator::new(classifier, &config.resolution);
    let mut log = ResolutionLog::new();
    let translated = translator.translate_records(records.codes(), &mut log)?;

    let needs_review = translated.iter().filter(|t| t.needs_review()).count();
    let updates: Vec<CodeUpdate> = translated
        .into_iter()
        .map(|t| CodeUpdate::new(t.code, t.options))
        .collect();
    records
        .write_with_options(&args.output, &updates, &config.records.options_column())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    success(&format!(
        "Translated {} records from {} to {}, written to {}",
        format_number(records.len()),
        pair.source.version(),
        pair.target.version(),
        args.output.display()
    ));
    if needs_review > 0 {
        warning(&format!(
            "{} records need review (see the {} column)",
            format_number(needs_review),
            config.records.options_column()
        ));
    }

    if !args.no_report {
        let format = args
            .report_format
            .clone()
            .unwrap_or_else(|| config.report.format.clone());
        let report_path = args
            .report_output
            .clone()
            .unwrap_or_else(|| summary_path(&args.output, &format));
        let summary = MappingSummary::new(
            pair.source.version(),
            pair.target.version(),
            pair.direction,
            &log,
            &config.report,
        )
        .with_record_counts(records.len(), needs_review);
        save_report(&summary, &format, &report_path)?;
        info(&format!("Mapping summary written to {}", report_path.display()));
    }

    Ok(())
}

/// `<dir>/<stem>_summary.<ext>` next to the translated file
fn summary_path(output: &Path, format: &str) -> PathBuf {
    let extension = match format.to_lowercase().as_str() {
        "text" | "txt" => "txt".to_string(),
        other => other.to_string(),
    };
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{}_summary.{}", stem, extension))
}
