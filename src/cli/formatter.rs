//! Output formatting for the CLI

use serde::Serialize;

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// One resolved charset name
#[derive(Debug, Clone, Serialize)]
pub struct ResolveRow {
    pub name: String,
    pub canonical: String,
    /// Whether an alias applied (as opposed to pass-through)
    pub aliased: bool,
    /// Whether the codec can decode the canonical name
    pub supported: bool,
}

/// One alias table entry
#[derive(Debug, Clone, Serialize)]
pub struct AliasRow {
    pub alias: String,
    pub canonical: String,
}

/// Format rows as pretty JSON
pub fn format_json<T: Serialize>(rows: &[T]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Format resolve results as `name -> canonical [notes]` lines
pub fn format_resolve(rows: &[ResolveRow], use_color: bool) -> String {
    rows.iter()
        .map(|row| {
            let mut notes = Vec::new();
            if !row.aliased {
                notes.push("pass-through");
            }
            if !row.supported {
                notes.push("unsupported");
            }
            let canonical = paint(&row.canonical, use_color, row.supported);
            if notes.is_empty() {
                format!("{} -> {}", row.name, canonical)
            } else {
                format!("{} -> {} [{}]", row.name, canonical, notes.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the alias table with aligned columns
pub fn format_aliases(rows: &[AliasRow], use_color: bool) -> String {
    let width = rows.iter().map(|r| r.alias.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            format!(
                "{:width$}  {}",
                row.alias,
                paint(&row.canonical, use_color, true),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "colored-output")]
fn paint(text: &str, use_color: bool, ok: bool) -> String {
    match (use_color, ok) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}

#[cfg(not(feature = "colored-output"))]
fn paint(text: &str, _use_color: bool, _ok: bool) -> String {
    text.to_string()
}
