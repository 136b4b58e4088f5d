use recipe_core::core_api::{CoreErrorCode, find_section, parse_recipes};
use recipe_core::layout::locate_section;

fn record(name: &str, count: &str) -> String {
    format!("<item><key><string>{name}</string></key><value><int>{count}</int></value></item>")
}

#[test]
fn scans_every_record_in_any_order() {
    let records = [("Keg", 0), ("Torch", 3), ("Furnace", 12), ("Bee House", 1)];
    let forward: String = records
        .iter()
        .map(|(name, count)| record(name, &count.to_string()))
        .collect();
    let backward: String = records
        .iter()
        .rev()
        .map(|(name, count)| record(name, &count.to_string()))
        .collect();

    for text in [forward, backward] {
        let book = parse_recipes(&text, "crafting").expect("section should parse");
        assert_eq!(book.len(), records.len());
        assert_eq!(book.records_scanned(), records.len());
        for (name, count) in records {
            assert_eq!(book.get(name), Some(count), "count for {name}");
        }
    }
}

#[test]
fn empty_section_has_no_recipes() {
    let book = parse_recipes("", "cooking").expect("empty section should parse");
    assert!(book.is_empty());
}

#[test]
fn duplicate_names_keep_last_count() {
    let text = format!("{}{}", record("Torch", "3"), record("Torch", "0"));
    let book = parse_recipes(&text, "crafting").expect("section should parse");

    assert_eq!(book.len(), 1);
    assert_eq!(book.records_scanned(), 2);
    assert_eq!(book.get("Torch"), Some(0));
}

#[test]
fn whitespace_between_tags_is_accepted() {
    let text = "\n  <item>\n    <key><string>Keg</string></key>\n    <value><int>4</int></value>\n  </item>\n";
    let book = parse_recipes(text, "crafting").expect("indented section should parse");
    assert_eq!(book.get("Keg"), Some(4));
}

#[test]
fn truncated_section_is_malformed() {
    let full = format!("{}{}", record("Keg", "0"), record("Torch", "3"));
    for cut in [5, 40, full.len() - 3] {
        let err = parse_recipes(&full[..cut], "crafting").expect_err("truncated section must fail");
        assert_eq!(err.code, CoreErrorCode::MalformedRecord, "cut at {cut}");
    }
}

#[test]
fn trailing_garbage_is_malformed() {
    let text = format!("{}<item>", record("Keg", "0"));
    let err = parse_recipes(&text, "crafting").expect_err("partial record must fail");
    assert_eq!(err.code, CoreErrorCode::MalformedRecord);
}

#[test]
fn negative_count_is_invalid() {
    let err = parse_recipes(&record("Keg", "-1"), "crafting").expect_err("negative count must fail");
    assert_eq!(err.code, CoreErrorCode::InvalidCount);
    assert!(err.message.contains("Keg"));
}

#[test]
fn signed_count_is_invalid() {
    let err = parse_recipes(&record("Keg", "+3"), "crafting").expect_err("signed count must fail");
    assert_eq!(err.code, CoreErrorCode::InvalidCount);
    assert!(err.message.contains("'+3'"));
}

#[test]
fn overflowing_count_is_invalid() {
    let err = parse_recipes(&record("Keg", "99999999999"), "crafting")
        .expect_err("count beyond u32 must fail");
    assert_eq!(err.code, CoreErrorCode::InvalidCount);
}

#[test]
fn empty_count_is_invalid() {
    let err = parse_recipes(&record("Torch", ""), "crafting").expect_err("empty count must fail");
    assert_eq!(err.code, CoreErrorCode::InvalidCount);
    assert!(err.message.contains("Torch"));
}

#[test]
fn locates_section_between_markers() {
    let blob = format!(
        "<player><craftingRecipes>{}</craftingRecipes><cookingRecipes></cookingRecipes></player>",
        record("Keg", "1")
    );

    let section = locate_section(&blob, "crafting").expect("crafting section should exist");
    assert_eq!(section.text, record("Keg", "1"));
    assert_eq!(&blob[section.range.start..section.range.end], section.text);

    let cooking = locate_section(&blob, "cooking").expect("cooking section should exist");
    assert!(cooking.text.is_empty());
    assert!(cooking.range.is_empty());
}

#[test]
fn section_match_is_greedy() {
    let blob = "<craftingRecipes>A</craftingRecipes><x/><craftingRecipes>B</craftingRecipes>";
    let section = locate_section(blob, "crafting").expect("section should exist");
    assert_eq!(section.text, "A</craftingRecipes><x/><craftingRecipes>B");
}

#[test]
fn missing_section_names_the_kind() {
    let err = find_section("<player></player>", "cooking").expect_err("section is absent");
    assert_eq!(err.code, CoreErrorCode::SectionNotFound);
    assert!(err.message.contains("cookingRecipes"));

    let err = find_section("</cookingRecipes><cookingRecipes>", "cooking")
        .expect_err("close before open is not a section");
    assert_eq!(err.code, CoreErrorCode::SectionNotFound);
}
