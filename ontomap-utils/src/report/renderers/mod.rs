//! Renderers for the generic `Report` type

pub mod csv;
pub mod html;
pub mod json;
pub mod text;

pub use csv::render_csv;
pub use html::render_html;
pub use json::render_json;
pub use text::render_text;
