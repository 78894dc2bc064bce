//! Terminal output helpers

use colored::*;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt::Display;

/// Node for rendering a code hierarchy
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a child node (returns self for chaining)
    pub fn add_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Build a single-branch tree from a root-first path.
    pub fn from_path<S: AsRef<str>>(path: &[S]) -> Option<Self> {
        let mut nodes = path.iter().rev().map(|s| TreeNode::new(s.as_ref()));
        let leaf = nodes.next()?;
        Some(nodes.fold(leaf, |child, parent| parent.add_child(child)))
    }

    pub fn render(&self) -> String {
        self.render_internal("", true, true)
    }

    fn render_internal(&self, prefix: &str, is_last: bool, is_root: bool) -> String {
        let mut result = String::new();

        if !is_root {
            result.push_str(prefix);
            result.push_str(if is_last { "└─ " } else { "├─ " });
        }
        result.push_str(&self.name);
        result.push('\n');

        let child_prefix = if is_root {
            String::new()
        } else {
            format!("{}{}", prefix, if is_last { "   " } else { "│  " })
        };

        for (i, child) in self.children.iter().enumerate() {
            let child_is_last = i == self.children.len() - 1;
            result.push_str(&child.render_internal(&child_prefix, child_is_last, false));
        }

        result
    }
}

/// Format a number with thousands separators
pub fn format_number<T: Display>(n: T) -> String {
    let s = n.to_string();

    let (is_negative, digits) = match s.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, s.as_str()),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if is_negative {
        result.push('-');
    }

    result.chars().rev().collect()
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg.yellow());
}

pub fn info(msg: &str) {
    eprintln!("{} {}", "ℹ".blue(), msg);
}

pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg.green());
}

/// Print a titled group of key/value lines
pub fn tree_section(title: &str, items: &[(&str, String)], last: bool) {
    let prefix = if last { "└─" } else { "├─" };
    println!("{} {}", prefix, title.bold());

    let indent = if last { "   " } else { "│  " };
    for (i, (key, value)) in items.iter().enumerate() {
        let item_prefix = if i == items.len() - 1 { "└─" } else { "├─" };
        println!("{}  {} {}: {}", indent, item_prefix, key, value);
    }
}

/// Create a table with the workspace's standard styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .set_alignment(CellAlignment::Center)
        .add_attribute(comfy_table::Attribute::Bold)
}
