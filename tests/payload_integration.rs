//! Integration tests for payload dispatch, configuration and diagnostics.

use std::str::FromStr;

use magic_layout::{
    normalize_json, normalize_raw_json, to_json, Config, InputError, MagicLayoutError,
    PayloadOutcome,
};

#[test]
fn test_type_spelling_of_kind() {
    let outcome = normalize_json(
        r#"{ "type": "figma", "data": [{ "type": "TEXT", "id": "t" }] }"#,
        &Config::default(),
    )
    .unwrap();
    assert!(matches!(outcome, PayloadOutcome::Normalized(tree) if tree.len() == 1));
}

#[test]
fn test_unsupported_kind() {
    let outcome = normalize_json(
        r#"{ "kind": "sketch", "data": { "type": "NOT_EVEN_FIGMA" } }"#,
        &Config::default(),
    )
    .unwrap();
    assert_eq!(
        outcome,
        PayloadOutcome::Unsupported {
            kind: "sketch".to_string()
        }
    );
}

#[test]
fn test_kind_matching_is_exact() {
    let outcome = normalize_json(r#"{ "kind": "Figma", "data": [] }"#, &Config::default()).unwrap();
    assert!(matches!(outcome, PayloadOutcome::Unsupported { .. }));
}

#[test]
fn test_config_disables_regrouping() {
    let config = Config::from_str(
        r#"
[normalize]
regroup_backgrounds = false
"#,
    )
    .unwrap();
    let source = r#"{ "type": "FRAME", "id": "p", "children": [
        { "type": "RECTANGLE", "id": "A", "width": 100, "height": 100 },
        { "type": "TEXT", "id": "B", "x": 10, "y": 10, "width": 20, "height": 20 }
    ] }"#;

    let tree = normalize_raw_json(source, &config).unwrap();
    assert_eq!(tree.roots[0].id_str(), Some("p"));
    assert_eq!(tree.roots[0].children().len(), 2);
}

#[test]
fn test_compact_output() {
    let config: Config = "[output]\npretty = false\n".parse().unwrap();
    let tree = normalize_raw_json(r#"[{ "type": "TEXT", "id": "t", "characters": "x" }]"#, &config).unwrap();
    let json = to_json(&tree, &config).unwrap();
    assert_eq!(
        json,
        r#"[{"id":"t","name":"","x":0.0,"y":0.0,"width":0.0,"height":0.0,"type":"TEXT","characters":"x"}]"#
    );
}

#[test]
fn test_json_error_report_points_at_input() {
    let source = "{\n  \"type\": \"FRAME\",\n  \"id\": 12,\n}";
    let err = normalize_raw_json(source, &Config::default()).unwrap_err();
    let MagicLayoutError::Input(input) = err else {
        panic!("expected an input error, got {err:?}");
    };
    assert!(matches!(input, InputError::Json { line: 3, .. }), "{input:?}");

    let report = input.format(source, "page.json");
    assert!(report.contains("invalid input document"));
    assert!(report.contains("page.json"));
}
