use std::collections::BTreeSet;
use std::fmt::Write as _;

use recipe_core::core_api::{Session, Summary};
use serde_json::{Map as JsonMap, Value as JsonValue};

const SEPARATOR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub crafted: bool,
    pub uncrafted: bool,
    pub unlearned: bool,
    pub learned: bool,
    pub summary: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.crafted || self.uncrafted || self.unlearned || self.learned || self.summary
    }
}

pub fn render_json_full(session: &Session) -> JsonValue {
    let fields = FieldSelection {
        crafted: true,
        uncrafted: true,
        unlearned: true,
        learned: true,
        summary: true,
    };
    render_json_selected(session, &fields)
}

/// Keys always come out in the canonical order `kind`, `summary`, `crafted`,
/// `uncrafted`, `unlearned`, `learned`, whatever the selection.
pub fn render_json_selected(session: &Session, fields: &FieldSelection) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "kind".to_string(),
        JsonValue::String(session.kind().to_string()),
    );

    if fields.summary {
        out.insert("summary".to_string(), summary_to_json(session.summary()));
    }
    if fields.crafted {
        out.insert("crafted".to_string(), names_to_json(session.crafted()));
    }
    if fields.uncrafted {
        out.insert("uncrafted".to_string(), names_to_json(session.uncrafted()));
    }
    if fields.unlearned {
        out.insert("unlearned".to_string(), names_to_json(session.unlearned()));
    }
    if fields.learned {
        out.insert("learned".to_string(), learned_to_json(session));
    }

    JsonValue::Object(out)
}

/// `key=value` lines for the selected fields, one line per item.
pub fn render_selected_pairs(
    session: &Session,
    fields: &FieldSelection,
) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();

    if fields.summary {
        let summary = session.summary();
        out.push(("kind", summary.kind.to_string()));
        out.push(("total", summary.reference_total.to_string()));
        out.push(("learned_count", summary.learned.to_string()));
        out.push(("crafted_count", summary.crafted.to_string()));
        out.push(("uncrafted_count", summary.uncrafted.to_string()));
        out.push(("unlearned_count", summary.unlearned.to_string()));
        out.push(("remaining", format_percent(summary.fraction_remaining)));
    }
    if fields.crafted {
        for name in session.crafted() {
            out.push(("crafted", name.clone()));
        }
    }
    if fields.uncrafted {
        for name in session.uncrafted() {
            out.push(("uncrafted", name.clone()));
        }
    }
    if fields.unlearned {
        for name in session.unlearned() {
            out.push(("unlearned", name.clone()));
        }
    }
    if fields.learned {
        for entry in session.entries() {
            out.push(("learned", format!("{}={}", entry.name, entry.count)));
        }
    }

    out
}

pub fn render_text_report(session: &Session) -> String {
    render_text_report_with_options(session, TextRenderOptions::default())
}

pub fn render_text_report_with_options(session: &Session, options: TextRenderOptions) -> String {
    let summary = session.summary();
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    if options.verbose {
        let range = session.section_range();
        let recipes = session.recipes();
        let _ = writeln!(
            out,
            "{} section: bytes {}..{} ({} records, {} unique)",
            session.kind(),
            range.start,
            range.end,
            recipes.records_scanned(),
            recipes.len()
        );
    }

    let _ = writeln!(out, "{separator}");
    for name in session.uncrafted() {
        let _ = writeln!(out, "{name}");
    }
    let _ = writeln!(out, "{separator}");
    out.push_str(&summary_line(summary));

    if options.verbose && !summary.is_complete() {
        let _ = writeln!(
            out,
            "{} of them not yet learned, {} learned but never {}.",
            summary.unlearned,
            summary.uncrafted - summary.unlearned,
            summary.kind.done_verb()
        );
    }
    if options.verbose {
        let unlisted = session.unlisted();
        if !unlisted.is_empty() {
            let names: Vec<&str> = unlisted.iter().map(String::as_str).collect();
            let _ = writeln!(out, "Not in the {} table: {}", summary.kind, names.join(", "));
        }
    }

    out
}

pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn summary_line(summary: &Summary) -> String {
    if summary.is_complete() {
        return format!("You have {} everything.\n", summary.kind.done_verb());
    }
    format!(
        "You have {}/{} ({}) items remaining in {}.\n",
        summary.uncrafted,
        summary.reference_total,
        format_percent(summary.fraction_remaining),
        summary.kind
    )
}

fn summary_to_json(summary: &Summary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("total".to_string(), JsonValue::from(summary.reference_total));
    m.insert("learned".to_string(), JsonValue::from(summary.learned));
    m.insert("crafted".to_string(), JsonValue::from(summary.crafted));
    m.insert("uncrafted".to_string(), JsonValue::from(summary.uncrafted));
    m.insert("unlearned".to_string(), JsonValue::from(summary.unlearned));
    m.insert(
        "fraction_remaining".to_string(),
        JsonValue::from(summary.fraction_remaining),
    );
    m.insert("complete".to_string(), JsonValue::Bool(summary.is_complete()));
    JsonValue::Object(m)
}

fn names_to_json(names: &BTreeSet<String>) -> JsonValue {
    JsonValue::Array(names.iter().cloned().map(JsonValue::String).collect())
}

fn learned_to_json(session: &Session) -> JsonValue {
    JsonValue::Array(
        session
            .entries()
            .into_iter()
            .map(|entry| {
                let mut m = JsonMap::new();
                m.insert("name".to_string(), JsonValue::String(entry.name));
                m.insert("count".to_string(), JsonValue::from(entry.count));
                JsonValue::Object(m)
            })
            .collect(),
    )
}
