use std::path::PathBuf;

use recipe_core::core_api::{Engine, RecipeKind, Session};
use recipe_render::{
    FieldSelection, TextRenderOptions, format_percent, render_json_full, render_json_selected,
    render_selected_pairs, render_text_report, render_text_report_with_options,
};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_session(kind: RecipeKind) -> Session {
    let path = workspace_root().join("tests/fixtures/Saves/Robin_254412345/Robin_254412345");
    Engine::new()
        .open_path(path, kind)
        .expect("fixture should parse")
}

fn record(name: &str, count: u32) -> String {
    format!("<item><key><string>{name}</string></key><value><int>{count}</int></value></item>")
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let session = fixture_session(RecipeKind::Crafting);
    let value = render_json_full(&session);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec!["kind", "summary", "crafted", "uncrafted", "unlearned", "learned"]
    );
    assert_eq!(value["kind"], "crafting");
    assert_eq!(value["summary"]["crafted"], 5);
    assert_eq!(value["summary"]["complete"], false);
    assert_eq!(value["learned"][0]["name"], "Cherry Bomb");
    assert_eq!(value["learned"][0]["count"], 5);
}

#[test]
fn selected_json_keeps_only_requested_fields() {
    let session = fixture_session(RecipeKind::Cooking);
    let fields = FieldSelection {
        unlearned: true,
        crafted: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&session, &fields);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(keys, vec!["kind", "crafted", "unlearned"]);
    assert_eq!(value["crafted"], serde_json::json!(["Fried Egg", "Salad"]));
}

#[test]
fn text_report_lists_uncrafted_between_separators() {
    let session = fixture_session(RecipeKind::Crafting);
    let rendered = render_text_report(&session);
    let lines: Vec<&str> = rendered.lines().collect();
    let separator = "-".repeat(30);

    assert_eq!(lines[0], separator);
    assert_eq!(lines[lines.len() - 2], separator);
    assert!(lines.contains(&"Keg"));
    assert!(lines.contains(&"Wedding Ring"));
    assert!(lines.contains(&"Cask"));
    assert!(!lines.contains(&"Torch"));

    let uncrafted = session.summary().uncrafted;
    assert_eq!(lines.len(), uncrafted + 3);
    assert_eq!(
        lines[lines.len() - 1],
        format!(
            "You have {}/{} ({}) items remaining in crafting.",
            uncrafted,
            session.summary().reference_total,
            format_percent(session.summary().fraction_remaining)
        )
    );
}

#[test]
fn verbose_report_adds_section_details() {
    let session = fixture_session(RecipeKind::Cooking);
    let rendered =
        render_text_report_with_options(&session, TextRenderOptions { verbose: true });

    assert!(rendered.starts_with("cooking section: bytes "));
    assert!(rendered.contains("(3 records, 3 unique)"));
    assert!(rendered.contains("70 of them not yet learned, 1 learned but never cooked."));
    assert!(!rendered.contains("Not in the cooking table"));
}

#[test]
fn verbose_report_names_recipes_outside_the_table() {
    let session = fixture_session(RecipeKind::Crafting);
    let rendered =
        render_text_report_with_options(&session, TextRenderOptions { verbose: true });

    assert!(rendered.ends_with("Not in the crafting table: Wedding Ring\n"));
}

#[test]
fn complete_section_prints_done_message() {
    let blob = format!(
        "<cookingRecipes>{}</cookingRecipes>",
        recipe_core::core_api::recipe_catalog::reference_items(RecipeKind::Cooking)
            .iter()
            .map(|name| record(name, 1))
            .collect::<String>()
    );
    let session = Engine::new()
        .open_str(&blob, RecipeKind::Cooking)
        .expect("synthetic save should parse");
    let rendered = render_text_report(&session);

    assert!(rendered.ends_with("You have cooked everything.\n"));
    assert_eq!(rendered.lines().count(), 3);
}

#[test]
fn selected_pairs_follow_field_order() {
    let session = fixture_session(RecipeKind::Cooking);
    let fields = FieldSelection {
        summary: true,
        learned: true,
        ..FieldSelection::default()
    };
    let pairs = render_selected_pairs(&session, &fields);

    assert_eq!(pairs[0], ("kind", "cooking".to_string()));
    assert!(pairs.contains(&("learned_count", "3".to_string())));
    assert!(pairs.contains(&("learned", "Omelet=0".to_string())));
    assert_eq!(pairs.last(), Some(&("learned", "Salad=2".to_string())));
}

#[test]
fn percent_uses_two_decimals() {
    assert_eq!(format_percent(0.5), "50.00%");
    assert_eq!(format_percent(104.0 / 108.0), "96.30%");
}
