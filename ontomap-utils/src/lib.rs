//! Shared utilities for ontomap
//!
//! Provides terminal output helpers, the record file reader/writer and the
//! generic report framework with its renderers.

pub mod output;
pub mod progress;
pub mod records;
pub mod report;

// Re-export commonly used types
pub use output::{
    create_standard_table, format_number, header_cell, info, success, tree_section,
    warning, TreeNode,
};
pub use progress::create_spinner;
pub use records::{CodeUpdate, RecordFile};
pub use report::{
    render_csv, render_html, render_json, render_text, Cell, CellStyle, Metric, MetricSeverity,
    Report, Reportable, Section, Table,
};
