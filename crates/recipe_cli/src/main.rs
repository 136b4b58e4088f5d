use std::path::PathBuf;
use std::process;

use clap::Parser;
use recipe_core::core_api::{Engine, RecipeKind, Session, load_save_blob};
use recipe_render::{
    FieldSelection, TextRenderOptions, render_json_full, render_json_selected,
    render_selected_pairs, render_text_report_with_options,
};
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Save file, or the save folder that contains it.
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(
        long,
        value_name = "crafting|cooking",
        value_parser = parse_recipe_kind,
        default_value = "crafting",
        conflicts_with = "all"
    )]
    kind: RecipeKind,
    /// Check every recipe kind.
    #[arg(long)]
    all: bool,
    #[arg(long)]
    crafted: bool,
    #[arg(long)]
    uncrafted: bool,
    #[arg(long)]
    unlearned: bool,
    #[arg(long)]
    learned: bool,
    #[arg(long)]
    summary: bool,
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn fields(&self) -> FieldSelection {
        FieldSelection {
            crafted: self.crafted,
            uncrafted: self.uncrafted,
            unlearned: self.unlearned,
            learned: self.learned,
            summary: self.summary,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let fields = cli.fields();

    let blob = load_save_blob(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let engine = Engine::new();
    let opened = if cli.all {
        engine.open_all(&blob)
    } else {
        engine.open_str(&blob, cli.kind).map(|session| vec![session])
    };
    let sessions = opened.unwrap_or_else(|e| {
        eprintln!("Error parsing save file: {}", cli.path.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    if cli.json {
        let json = render_json(&sessions, &fields, cli.all);
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_any_selected() {
        for session in &sessions {
            for (key, value) in render_selected_pairs(session, &fields) {
                println!("{key}={value}");
            }
        }
        return;
    }

    let options = TextRenderOptions {
        verbose: cli.verbose,
    };
    for session in &sessions {
        print!("{}", render_text_report_with_options(session, options));
    }
}

/// A single kind renders as one object; `--all` nests each kind's object
/// under its name.
fn render_json(sessions: &[Session], fields: &FieldSelection, all: bool) -> JsonValue {
    let render_one = |session: &Session| {
        if fields.is_any_selected() {
            render_json_selected(session, fields)
        } else {
            render_json_full(session)
        }
    };

    if !all && let [session] = sessions {
        return render_one(session);
    }

    let mut out = JsonMap::new();
    for session in sessions {
        out.insert(session.kind().to_string(), render_one(session));
    }
    JsonValue::Object(out)
}

fn parse_recipe_kind(value: &str) -> Result<RecipeKind, String> {
    value.parse::<RecipeKind>().map_err(|e| e.message)
}
