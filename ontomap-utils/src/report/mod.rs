//! Report generation utilities
//!
//! ## Usage
//! 1. Implement `Reportable` for a command's result type
//! 2. Call `result.to_report()` to get a generic `Report`
//! 3. Use a renderer (`render_html`, `render_json`, ...) to write it out
pub mod core;
pub mod renderers;

pub use core::{
    Cell, CellStyle, Metric, MetricSeverity, Report, ReportBuilder, Reportable, Section,
    SectionContent, Table,
};

pub use renderers::{render_csv, render_html, render_json, render_text};
