//! Mapping summary for a translated record file
//!
//! Groups the resolution log by what the reader has to do about each code:
//! codes that need action come first, codes that need nothing come last.

use ontomap_core::config::ReportConfig;
use ontomap_core::{join_codes, Code, MappingDirection};
use ontomap_resolve::{LogEntry, OutcomeClass, ResolutionLog};
use ontomap_utils::report::{
    Cell, CellStyle, Metric, MetricSeverity, Report, Reportable, Section, Table,
};

pub const NOT_RECOGNIZED_TITLE: &str = "Codes not present in the source version";
pub const UNMAPPABLE_TITLE: &str = "Codes that could not be mapped";
pub const AMBIGUOUS_TITLE: &str = "Codes mapped to multiple codes";
pub const REFINED_TITLE: &str = "Codes mapped to one code, more granular codes introduced";
pub const RENAMED_TITLE: &str = "Codes mapped to exactly one code";

pub struct MappingSummary<'a> {
    pub source_version: String,
    pub target_version: String,
    pub direction: MappingDirection,
    pub log: &'a ResolutionLog,
    pub records: usize,
    pub needs_review: usize,
    pub website_url: String,
}

impl<'a> MappingSummary<'a> {
    pub fn new(
        source_version: &str,
        target_version: &str,
        direction: MappingDirection,
        log: &'a ResolutionLog,
        config: &ReportConfig,
    ) -> Self {
        Self {
            source_version: source_version.to_string(),
            target_version: target_version.to_string(),
            direction,
            log,
            records: 0,
            needs_review: 0,
            website_url: config.website_url.clone(),
        }
    }

    pub fn with_record_counts(mut self, records: usize, needs_review: usize) -> Self {
        self.records = records;
        self.needs_review = needs_review;
        self
    }

    /// Browser link for the target version
    pub fn version_url(&self) -> String {
        format!("{}{}", self.website_url, self.target_version)
    }

    /// Browser link that searches the target version for a code
    pub fn search_url(&self, code: &Code) -> String {
        format!("{}&search_term=({})", self.version_url(), code)
    }

    fn ancestor_cell(&self, entry: &LogEntry) -> Cell {
        match &entry.closest_common_ancestor {
            Some(code) => Cell::new(code).with_link(self.search_url(code)),
            None => Cell::new("-").with_style(CellStyle::Muted),
        }
    }

    fn metrics(&self) -> Vec<Metric> {
        let log = self.log;
        let ambiguous = log.with_outcome(|o| matches!(o, OutcomeClass::Ambiguous { .. })).len();
        let flag = |count: usize, severity: MetricSeverity| {
            if count > 0 {
                severity
            } else {
                MetricSeverity::Normal
            }
        };

        vec![
            Metric::new("Records", self.records),
            Metric::new("Distinct codes", log.len()),
            Metric::new("Records needing review", self.needs_review)
                .with_severity(flag(self.needs_review, MetricSeverity::Warning)),
            Metric::new(OutcomeClass::NotRecognized.label(), log.count(OutcomeClass::NotRecognized))
                .with_severity(flag(log.count(OutcomeClass::NotRecognized), MetricSeverity::Error)),
            Metric::new(OutcomeClass::Unmappable.label(), log.count(OutcomeClass::Unmappable))
                .with_severity(flag(log.count(OutcomeClass::Unmappable), MetricSeverity::Error)),
            Metric::new("ambiguous", ambiguous)
                .with_severity(flag(ambiguous, MetricSeverity::Warning)),
            Metric::new(OutcomeClass::SingleRefined.label(), log.count(OutcomeClass::SingleRefined))
                .with_severity(MetricSeverity::Info),
            Metric::new(OutcomeClass::SingleRenamed.label(), log.count(OutcomeClass::SingleRenamed))
                .with_severity(MetricSeverity::Success),
            Metric::new(OutcomeClass::SingleStable.label(), log.count(OutcomeClass::SingleStable))
                .with_severity(MetricSeverity::Success),
        ]
    }

    fn not_recognized_section(&self) -> Option<Section> {
        let entries = self.log.with_outcome(|o| *o == OutcomeClass::NotRecognized);
        if entries.is_empty() {
            return None;
        }
        let mut table = Table::new(vec!["Original Code".to_string(), "New Code".to_string()]);
        for (code, _) in entries {
            let shown = if code.is_blank() { "<blank>".to_string() } else { code.to_string() };
            table.add_row(vec![
                Cell::new(shown).with_style(CellStyle::Error),
                Cell::new("cannot be determined").with_style(CellStyle::Muted),
            ]);
        }
        Some(
            Section::table(NOT_RECOGNIZED_TITLE, table)
                .with_note(format!("Action required: these codes do not exist in {}", self.source_version)),
        )
    }

    fn unmappable_section(&self) -> Option<Section> {
        let entries = self.log.with_outcome(|o| *o == OutcomeClass::Unmappable);
        if entries.is_empty() {
            return None;
        }
        let mut table = Table::new(vec![
            "Original Code".to_string(),
            "Closest Neighbors".to_string(),
            "Closest Shared Parent".to_string(),
        ]);
        for (code, entry) in entries {
            table.add_row(vec![
                Cell::new(code).with_style(CellStyle::Error),
                Cell::new(join_codes(&entry.neighbors)),
                self.ancestor_cell(entry),
            ]);
        }
        Some(Section::table(UNMAPPABLE_TITLE, table).with_note(
            "Action required: pick a code under the closest shared parent in the target version",
        ))
    }

    fn ambiguous_section(&self) -> Option<Section> {
        let mut entries = self
            .log
            .with_outcome(|o| matches!(o, OutcomeClass::Ambiguous { .. }));
        if entries.is_empty() {
            return None;
        }
        // refined first, then alphabetical
        entries.sort_by_key(|(code, entry)| {
            (!matches!(entry.outcome, OutcomeClass::Ambiguous { refined: true }), (*code).clone())
        });

        let mut table = Table::new(vec![
            "Original Code".to_string(),
            "Choices".to_string(),
            "Closest Shared Parent".to_string(),
        ]);
        for (code, entry) in entries {
            table.add_row(vec![
                Cell::new(code).with_style(CellStyle::Warning),
                Cell::new(join_codes(&entry.choices)),
                self.ancestor_cell(entry),
            ]);
        }
        Some(Section::table(AMBIGUOUS_TITLE, table).with_note(
            "Action required: select one of the choices. Where a shared parent is listed the target version introduced more granular codes",
        ))
    }

    fn refined_section(&self) -> Option<Section> {
        let entries = self.log.with_outcome(|o| *o == OutcomeClass::SingleRefined);
        if entries.is_empty() {
            return None;
        }
        let mut table = Table::new(vec![
            "Original Code".to_string(),
            "New Code".to_string(),
            "Closest Shared Parent".to_string(),
        ]);
        for (code, entry) in entries {
            table.add_row(vec![
                Cell::new(code).with_style(CellStyle::Highlight),
                Cell::new(join_codes(&entry.choices)),
                self.ancestor_cell(entry),
            ]);
        }
        Some(
            Section::table(REFINED_TITLE, table)
                .with_note("Please review: a more specific code may now apply"),
        )
    }

    fn renamed_section(&self) -> Option<Section> {
        let entries = self.log.with_outcome(|o| *o == OutcomeClass::SingleRenamed);
        if entries.is_empty() {
            return None;
        }
        let mut table = Table::new(vec!["Original Code".to_string(), "New Code".to_string()]);
        for (code, entry) in entries {
            table.add_row(vec![
                Cell::new(code),
                Cell::new(join_codes(&entry.choices)).with_style(CellStyle::Success),
            ]);
        }
        Some(Section::table(RENAMED_TITLE, table).with_note("No action necessary"))
    }
}

impl Reportable for MappingSummary<'_> {
    fn to_report(&self) -> Report {
        let mut report = Report::builder("Mapping Summary", "translate")
            .metadata("Tool version", ontomap_core::VERSION)
            .metadata("Source version", &self.source_version)
            .metadata("Target version", &self.target_version)
            .metadata("Direction", self.direction.to_string())
            .metadata("Resolve with", self.version_url())
            .section(Section::summary("Summary", self.metrics()));

        let sections = [
            self.not_recognized_section(),
            self.unmappable_section(),
            self.ambiguous_section(),
            self.refined_section(),
            self.renamed_section(),
        ];
        for section in sections.into_iter().flatten() {
            report = report.section(section);
        }

        report.build()
    }
}
