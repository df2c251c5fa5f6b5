use collect_values::{CollectError, CollectOptions, Configuration, FieldSet, FieldValue, Selector};

// =========================================================================
// FieldSet parsing
// =========================================================================

#[test]
fn field_set_lowercases_and_splits() {
    let set = FieldSet::parse("Email, firstName,,ZIP ");

    assert!(set.contains("email"));
    assert!(set.contains("firstname"));
    assert!(set.contains("zip"));
    assert!(!set.contains("Email"), "Lookups expect lower-cased input");
    assert_eq!(set.len(), 3);
}

#[test]
fn empty_list_is_empty_set() {
    let set = FieldSet::parse("");
    assert!(set.is_empty());
    assert!(!set.contains(""));
}

#[test]
fn wildcard_only_when_leading() {
    let all = FieldSet::parse_with_wildcard("*");
    assert!(all.is_wildcard());
    assert!(all.contains("anything"));

    let later = FieldSet::parse_with_wildcard("color,*");
    assert!(!later.is_wildcard());
    assert!(later.contains("color"));
    assert!(!later.contains("shape"));

    assert!(!FieldSet::parse("*").is_wildcard(), "Plain lists have no wildcard");
}

// =========================================================================
// Layering
// =========================================================================

#[test]
fn merge_over_is_shallow_and_whole_value() {
    let base = CollectOptions::default()
        .with_skip("a,b")
        .with_int_fields("n")
        .with_default("x", "1");
    let top = CollectOptions::default().with_skip("c").with_default("y", "2");

    let merged = top.merge_over(base);

    assert_eq!(merged.skip.as_deref(), Some("c"), "Lists replace, never merge");
    assert_eq!(merged.int_fields.as_deref(), Some("n"));
    let defaults = merged.defaults.expect("defaults set");
    assert_eq!(defaults.len(), 1, "Defaults map is replaced whole");
    assert_eq!(defaults["y"], FieldValue::text("2"));
}

#[test]
fn resolve_layers_call_over_process_over_builtin() {
    let process = CollectOptions::default()
        .with_skip("secret")
        .with_name_add_prefix("p");
    let call = CollectOptions::default().with_name_add_prefix("c");

    let config = Configuration::resolve(&process, Some(&call)).unwrap();

    assert!(config.skip.contains("secret"), "Process layer applies");
    assert_eq!(config.name_add_prefix, "c", "Call layer wins");
    assert!(config.multi_checkboxes.is_empty(), "Built-in layer fills the rest");
    assert_eq!(config.selector, Selector::default());
    assert!(config.name_strip_pattern.is_none());
}

#[test]
fn resolve_without_call_options_uses_process_layer() {
    let process = CollectOptions::default().with_value_checkboxes("*");
    let config = Configuration::resolve(&process, None).unwrap();
    assert!(config.value_checkboxes.is_wildcard());
}

#[test]
fn empty_strip_pattern_means_no_pattern() {
    let config = Configuration::from_options(CollectOptions::default().with_name_strip_regex("")).unwrap();
    assert!(config.name_strip_pattern.is_none());
}

#[test]
fn bad_strip_pattern_fails_resolution() {
    let call = CollectOptions::default().with_name_strip_regex("[a-");
    let err = Configuration::resolve(&CollectOptions::default(), Some(&call)).unwrap_err();

    assert!(matches!(err, CollectError::InvalidStripPattern { .. }));
    assert!(err.to_string().contains("[a-"), "Message names the pattern: {}", err);
}

#[test]
fn default_selector_skips_buttons_and_files() {
    let selector = Selector::default();
    assert_eq!(selector.tags, vec!["input", "select", "textarea"]);
    for t in ["button", "submit", "reset", "image", "file"] {
        assert!(selector.exclude_types.iter().any(|e| e == t), "missing {}", t);
    }
}

// =========================================================================
// Deserialization
// =========================================================================

#[test]
fn options_deserialize_from_yaml_with_aliases() {
    let yaml = r#"
skip: "password"
multiCheckboxNames: "tags"
valueCheckboxes: "*"
noTrimFields: "notes"
intFields: "age,tags"
nameStripPattern: "^f_"
nameAddPrefix: "x"
defaults:
  country: "NZ"
  count: 3
  picks: ["a", 1]
someUnknownOption: true
"#;

    let options: CollectOptions = serde_yaml::from_str(yaml).expect("parses");

    assert_eq!(options.skip.as_deref(), Some("password"));
    assert_eq!(options.multi_checkboxes.as_deref(), Some("tags"));
    assert_eq!(options.value_checkboxes.as_deref(), Some("*"));
    assert_eq!(options.no_trim_fields.as_deref(), Some("notes"));
    assert_eq!(options.int_fields.as_deref(), Some("age,tags"));
    assert_eq!(options.name_strip_regex.as_deref(), Some("^f_"));
    assert_eq!(options.name_add_prefix.as_deref(), Some("x"));
    assert!(options.selector.is_none());

    let defaults = options.defaults.expect("defaults");
    assert_eq!(defaults["country"], FieldValue::text("NZ"));
    assert_eq!(defaults["count"], FieldValue::Int(3));
    assert_eq!(
        defaults["picks"],
        FieldValue::List(vec![FieldValue::text("a"), FieldValue::Int(1)])
    );
}

#[test]
fn options_deserialize_selector_with_partial_fields() {
    let json = r#"{ "selector": { "tags": ["select"] } }"#;

    let options: CollectOptions = serde_json::from_str(json).expect("parses");
    let selector = options.selector.expect("selector");

    assert_eq!(selector.tags, vec!["select"]);
    assert_eq!(selector.exclude_types, Selector::default().exclude_types);
}

#[test]
fn not_a_number_serializes_as_null() {
    let value = FieldValue::List(vec![FieldValue::Int(1), FieldValue::NotANumber]);
    assert_eq!(serde_json::to_string(&value).unwrap(), "[1,null]");
}

#[test]
fn defaults_of_any_type_deserialize_unchanged() {
    let yaml = r#"
defaults:
  subscribed: true
  ratio: 1.5
  missing: null
  meta: { a: 1 }
  tags: [true, "x"]
"#;

    let options: CollectOptions = serde_yaml::from_str(yaml).expect("parses");
    let defaults = options.defaults.expect("defaults");

    assert_eq!(defaults["subscribed"], FieldValue::Json(serde_json::json!(true)));
    assert_eq!(defaults["ratio"], FieldValue::Json(serde_json::json!(1.5)));
    assert_eq!(
        defaults["missing"],
        FieldValue::Json(serde_json::Value::Null),
        "null stays null, not the integer sentinel"
    );
    assert_eq!(defaults["meta"], FieldValue::Json(serde_json::json!({ "a": 1 })));
    assert_eq!(
        defaults["tags"],
        FieldValue::List(vec![FieldValue::Json(serde_json::json!(true)), FieldValue::text("x")])
    );

    let json = serde_json::to_value(&defaults).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "subscribed": true,
            "ratio": 1.5,
            "missing": null,
            "meta": { "a": 1 },
            "tags": [true, "x"]
        })
    );
}
