//! Integration tests over the recipe fixtures: parse, dump, render and shopping list.

use std::fs;
use std::path::{Path, PathBuf};

use cook::{Document, ErrorKind, HtmlRenderer, ParseError, RenderConfig, ShoppingList, parse_recipe};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/recipes").join(name)
}

/// Helper to run the frontend on a fixture file
fn parse_fixture(name: &str) -> Result<Document, ParseError> {
    let source = fs::read(fixture(name)).unwrap();
    parse_recipe(name, &source)
}

fn fixtures_with(extension: &str) -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/recipes");
    let mut paths: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == extension))
        .collect();
    paths.sort();
    paths
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

#[test]
fn test_tea_dump() {
    let document = parse_fixture("tea.cook").unwrap();
    insta::assert_snapshot!(document.to_string(), @r#"
    (recipe "tea.cook"
      (metadata "servings" "1")
      (step
        (instruction "Boil ")
        (ingredient "water" :quantity "250" :unit "ml")
        (instruction " in a ")
        (cookware "kettle")
        (instruction " over high heat."))
      (step
        (instruction "Steep ")
        (ingredient "tea" :quantity "1" :unit "bag")
        (instruction " for ")
        (timer "" :magnitude "3" :unit "minutes")
        (instruction ", then add ")
        (ingredient "milk" :quantity "1" :unit "tbsp")
        (instruction ".")))
    "#);
}

#[test]
fn test_pancakes_structure() {
    let document = parse_fixture("pancakes.cook").unwrap();
    assert!(document.errors.is_empty());
    assert_eq!(document.steps.len(), 3);

    let metadata = document.metadata();
    assert_eq!(metadata.get("servings").map(String::as_str), Some("4"));
    assert_eq!(metadata.get("source").map(String::as_str), Some("grandma"));

    let names: Vec<_> = document.ingredients().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["eggs", "milk", "flour", "butter"]);
    let cookware: Vec<_> = document.cookware().map(|c| c.name.as_str()).collect();
    assert_eq!(cookware, ["large bowl", "frying pan"]);
    let timers: Vec<_> = document.timers().map(|t| (t.name.as_str(), t.magnitude.as_str())).collect();
    assert_eq!(timers, [("", "30"), ("flip", "2")]);

    // The trailing lines of the last step are joined into one step.
    let last = document.steps.last().unwrap();
    assert_eq!(last.position.line, 9);
    assert_eq!(last.timers().count(), 1);
}

#[test]
fn test_pancakes_html() {
    let document = parse_fixture("pancakes.cook").unwrap();
    let html = HtmlRenderer::new(RenderConfig::new().with_metadata(true))
        .render(&document)
        .unwrap();

    assert!(html.starts_with(r#"<article class="cook-recipe">"#));
    assert!(html.contains("<dt>servings</dt><dd>4</dd>"));
    assert_eq!(html.matches(r#"<li class="cook-step">"#).count(), 3);
    assert!(html.contains(r#"<span class="cook-ingredient">300 ml milk</span>"#));
    assert!(html.contains(r#"<span class="cook-cookware">large bowl</span>"#));
    assert!(html.contains(r#"<span class="cook-timer" data-seconds="1800">30 minutes</span>"#));
    assert!(!html.contains("lumps"));
}

#[test]
fn test_shopping_list_across_recipes() {
    let tea = parse_fixture("tea.cook").unwrap();
    let pancakes = parse_fixture("pancakes.cook").unwrap();
    let list = ShoppingList::from_documents([&tea, &pancakes]);

    insta::assert_snapshot!(list.to_string().trim_end(), @r"
    water: 250 ml
    tea: 1 bag
    milk: 1 tbsp, 300 ml
    eggs: 3
    flour: 125 g
    butter: some
    ");
}

#[test]
fn test_valid_fixtures_parse() {
    let valid = ["pancakes.cook", "tea.cook"];
    for path in fixtures_with("cook") {
        let name = file_name(&path);
        let result = parse_fixture(&name);
        if valid.contains(&name.as_str()) {
            assert!(result.is_ok(), "expected {name} to parse, got {:?}", result.unwrap_err());
        } else {
            assert!(result.is_err(), "expected {name} to fail");
        }
    }
}

#[test]
fn test_unclosed_brace_error() {
    let err = parse_fixture("unclosed.cook").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.source_name, "unclosed.cook");
    assert_eq!((err.position.line, err.position.column), (1, 5));
    assert!(err.message.contains("unclosed ingredient"), "{}", err.message);
    assert!(err.to_string().starts_with("unclosed.cook:1:5: "));
}

#[test]
fn test_missing_metadata_key_error() {
    let err = parse_fixture("no_key.cook").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "missing metadata key on line 1");
}

#[test]
fn test_crlf_source_matches_lf() {
    let lf = fs::read_to_string(fixture("tea.cook")).unwrap();
    let crlf = lf.replace('\n', "\r\n");
    let a = parse_recipe("tea.cook", lf.as_bytes()).unwrap();
    let b = parse_recipe("tea.cook", crlf.as_bytes()).unwrap();
    assert_eq!(a.to_string(), b.to_string());
}
