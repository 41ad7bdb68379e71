use std::borrow::Cow;

use pretty_assertions::assert_eq;
use relaxed_json_core::{load, load_str, ErrorType, JsonDoc, JsonError, JsonLoader, LoaderOptions};
use relaxed_json_test_bench::consts::{
    CONFIG_COLON_INPUT, EMPTY_CONTAINERS_INPUT, NESTED_INPUT, STR_UTF8_INPUT,
};

fn top_level_pairs() -> JsonLoader {
    JsonLoader::new(LoaderOptions {
        multiple_roots: true,
        ..LoaderOptions::default()
    })
}

#[test]
fn load_config_file() {
    let doc = top_level_pairs().load(CONFIG_COLON_INPUT.as_bytes()).unwrap();
    let items = doc.as_sequence().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].as_str(), Some("context.properties"));
    assert_eq!(items[1].get("default.clock.rate").and_then(JsonDoc::as_i64), Some(48000));
    let modules = items[3].as_sequence().unwrap();
    let names: Vec<_> = modules
        .iter()
        .filter_map(|m| m.get("name").and_then(JsonDoc::as_str))
        .collect();
    assert_eq!(
        names,
        vec!["libpipewire-module-rt", "libpipewire-module-protocol-native"]
    );
    assert_eq!(
        modules[0]
            .get("args")
            .and_then(|a| a.get("nice.level"))
            .and_then(JsonDoc::as_i64),
        Some(-11)
    );
}

#[test]
fn load_config_single_root() {
    assert_eq!(
        load_str(CONFIG_COLON_INPUT),
        Err(JsonError::new(ErrorType::TrailingContent, 21))
    );
}

#[test]
fn load_scalars() {
    let doc = load_str("[null true 12 -0.5 1e3 nan word \"q\"]").unwrap();
    assert_eq!(
        doc,
        JsonDoc::Sequence(vec![
            JsonDoc::Null,
            JsonDoc::Bool(true),
            JsonDoc::Integer(12),
            JsonDoc::FloatingPoint(-0.5),
            JsonDoc::FloatingPoint(1000.0),
            JsonDoc::Bare(Cow::Borrowed("nan")),
            JsonDoc::Bare(Cow::Borrowed("word")),
            JsonDoc::String(Cow::Borrowed("q")),
        ])
    );
}

#[test]
fn load_utf8_and_nested() {
    let doc = load_str(STR_UTF8_INPUT).unwrap();
    assert_eq!(doc.get("jezik").and_then(JsonDoc::as_str), Some("srpski ћирилица"));
    assert_eq!(doc.get("emoji").and_then(JsonDoc::as_str), Some("🦀"));

    let doc = load_str(NESTED_INPUT).unwrap();
    assert_eq!(doc.get("c").and_then(JsonDoc::as_str), Some("x\ny"));
    assert_eq!(doc.get("missing"), None);

    let doc = load_str(EMPTY_CONTAINERS_INPUT).unwrap();
    assert_eq!(doc.get_index(2).and_then(|o| o.get("a")), Some(&JsonDoc::Sequence(vec![])));
}

#[test]
fn load_outlives_input() {
    let owned = {
        let input = String::from("{key: \"value\"}");
        load_str(&input).unwrap().into_owned()
    };
    assert_eq!(owned.get("key").and_then(JsonDoc::as_str), Some("value"));
}

#[test]
fn load_propagates_tokenizer_errors() {
    assert_eq!(
        load(br#"{a: [1 "x\q"]}"#),
        Err(JsonError::new(ErrorType::InvalidEscape(b'q'), 10))
    );
    assert_eq!(
        load(b"{a: [1 2]"),
        Err(JsonError::new(ErrorType::UnterminatedContainer, 9))
    );
}

#[test]
fn load_any_close_bracket_ends_scope() {
    assert_eq!(
        load(b"[1}"),
        Ok(JsonDoc::Sequence(vec![JsonDoc::Integer(1)]))
    );
    assert_eq!(
        load(b"{a: [1 2}"),
        Err(JsonError::new(ErrorType::UnterminatedContainer, 9))
    );
}
