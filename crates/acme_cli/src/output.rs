//! Terminal output: styled text on a TTY, one JSON object per line with `--output json`.
//!
//! `console` handles colors (respects NO_COLOR, off when piped); `comfy-table`
//! lays out slot listings.

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    JSON_MODE.store(format == OutputFormat::Json, Ordering::Relaxed);
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Envelope<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl Envelope<'_> {
    fn line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| json!({ "level": self.level }).to_string())
    }
}

/// JSON envelope in JSON mode, otherwise whatever `human` prints.
fn emit(level: &str, message: &str, data: Option<JsonValue>, human: impl FnOnce()) {
    if is_json() {
        println!("{}", Envelope { level, message, data }.line());
    } else {
        human();
    }
}

pub fn header(text: &str) {
    emit("info", text, None, || println!("{}", style(text).bold().cyan()));
}

pub fn success(text: &str) {
    emit("success", text, None, || {
        println!("{} {}", style("✓").green(), style(text).bright())
    });
}

pub fn dim(text: &str) {
    emit("info", text, None, || println!("{}", style(text).dim()));
}

/// Errors go to stderr in both modes.
pub fn error(text: &str) {
    if is_json() {
        let envelope = Envelope {
            level: "error",
            message: text,
            data: None,
        };
        eprintln!("{}", envelope.line());
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn kv(key: &str, value: &str) {
    emit("info", key, Some(json!({ key: value })), || {
        println!("  {} {}", style(key).cyan().bold(), value)
    });
}

/// Unstyled text for piping (`get`, `css`); JSON mode wraps it under `label`.
pub fn plain(label: &str, text: &str) {
    emit("data", label, Some(json!({ label: text })), || {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    });
}

pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|col| Cell::new(col).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
}

/// Row with the first cell highlighted.
pub fn table_row(table: &mut Table, cells: &[&str]) {
    table.add_row(cells.iter().enumerate().map(|(i, text)| match i {
        0 => Cell::new(text).fg(Color::Green),
        _ => Cell::new(text),
    }));
}

/// The rendered table, or `{"items": [...]}` in JSON mode.
pub fn table_print<T: Serialize>(table: &Table, items: &[T]) {
    emit("list", "", Some(json!({ "items": items })), || println!("{table}"));
}
