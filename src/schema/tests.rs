//! Schema inference tests

use super::*;
use serde_json::json;

fn object(schema: &Schema) -> &ObjectSchema {
    schema.as_object().expect("expected object schema")
}

#[test]
fn test_infer_primitives() {
    assert_eq!(infer_schema(&json!(null)), Schema::Primitive(Primitive::Null));
    assert_eq!(infer_schema(&json!(true)), Schema::Primitive(Primitive::Boolean));
    assert_eq!(infer_schema(&json!("x")), Schema::Primitive(Primitive::String));
    assert_eq!(infer_schema(&json!(3)), Schema::Primitive(Primitive::INTEGER));
    assert_eq!(infer_schema(&json!(3.5)), Schema::Primitive(Primitive::FLOAT));
    assert_eq!(infer_schema(&json!(2.0)), Schema::Primitive(Primitive::INTEGER));
}

#[test]
fn test_infer_simple_object() {
    let schema = infer_schema(&json!({
        "id": 1,
        "tags": ["a", "b"],
        "meta": {"active": true}
    }));

    let root = object(&schema);
    assert_eq!(root.len(), 3);
    assert!(root.is_required("id"));
    assert!(root.is_required("tags"));
    assert!(root.is_required("meta"));

    assert_eq!(
        root.get_property("tags"),
        Some(&Schema::array(Primitive::String.into()))
    );
    let meta = object(root.get_property("meta").unwrap());
    assert_eq!(
        meta.get_property("active"),
        Some(&Schema::Primitive(Primitive::Boolean))
    );
}

#[test]
fn test_property_order_follows_input() {
    let schema = infer_schema(&json!({"zeta": 1, "alpha": 2, "mid": 3}));
    let keys: Vec<_> = object(&schema).properties.keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_empty_array_is_any_items() {
    assert_eq!(infer_schema(&json!([])), Schema::array(Schema::any()));
}

#[test]
fn test_optional_field_from_array_samples() {
    let schema = infer_schema(&json!([{"id": 1, "nickname": "a"}, {"id": 2}]));
    let items = object(schema.as_array_items().unwrap());

    assert!(items.is_required("id"));
    assert!(!items.is_required("nickname"));
    assert_eq!(
        items.get_property("nickname"),
        Some(&Schema::Primitive(Primitive::String))
    );
}

#[test]
fn test_conflicting_primitives_become_any() {
    let schema = infer_schema(&json!([1, "a"]));
    assert_eq!(schema, Schema::array(Schema::any()));

    let schema = infer_schema(&json!([null, "a"]));
    assert_eq!(schema, Schema::array(Schema::any()));
}

#[test]
fn test_object_and_array_conflict_becomes_any() {
    let merged = merge_schemas(&infer_schema(&json!({"a": 1})), &infer_schema(&json!([1])));
    assert!(merged.is_any());
}

#[test]
fn test_any_yields_to_other_side() {
    let concrete = infer_schema(&json!({"a": 1}));
    assert_eq!(merge_schemas(&Schema::any(), &concrete), concrete);
    assert_eq!(merge_schemas(&concrete, &Schema::any()), concrete);

    // An empty array merges cleanly with a populated one
    let schema = infer_schema(&json!([[], ["x"]]));
    assert_eq!(
        schema,
        Schema::array(Schema::array(Primitive::String.into()))
    );
}

#[test]
fn test_out_of_range_numbers_become_any() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"big": 1e400, "huge": 123456789012345678901234567890, "n": 1}"#)
            .unwrap();
    let schema = infer_schema(&value);
    let obj = object(&schema);

    assert!(obj.get_property("big").unwrap().is_any());
    assert_eq!(obj.get_property("huge"), Some(&Schema::Primitive(Primitive::INTEGER)));
    assert_eq!(obj.get_property("n"), Some(&Schema::Primitive(Primitive::INTEGER)));

    // Another sample still fills the gap
    let value: serde_json::Value = serde_json::from_str("[-1e999, 2.5]").unwrap();
    assert_eq!(infer_schema(&value), Schema::array(Primitive::FLOAT.into()));
}

#[test]
fn test_number_hint_comes_from_first_sample() {
    let schema = infer_schema(&json!([1, 2.5]));
    assert_eq!(schema, Schema::array(Primitive::INTEGER.into()));

    let schema = infer_schema(&json!([2.5, 1]));
    assert_eq!(schema, Schema::array(Primitive::FLOAT.into()));
}

#[test]
fn test_merge_does_not_restore_required() {
    let full = infer_schema(&json!({"id": 1, "name": "a"}));
    let partial = infer_schema(&json!({"id": 2}));

    let merged = merge_schemas(&full, &partial);
    assert!(!object(&merged).is_required("name"));

    // Merging the settled shape with a full instance again keeps it optional
    let again = merge_schemas(&merged, &full);
    assert!(!object(&again).is_required("name"));
    assert!(object(&again).is_required("id"));

    let twice = merge_schemas(&merge_schemas(&full, &partial), &full);
    assert_eq!(again, twice);
}

#[test]
fn test_required_set_independent_of_sample_order() {
    let samples = [
        json!({"a": 1, "b": 1}),
        json!({"a": 1}),
        json!({"a": 1, "c": 1}),
    ];

    let forward = infer_schema(&json!(samples.to_vec()));
    let mut reversed = samples.to_vec();
    reversed.reverse();
    let backward = infer_schema(&json!(reversed));

    let forward = object(forward.as_array_items().unwrap());
    let backward = object(backward.as_array_items().unwrap());
    assert_eq!(forward.required, backward.required);
    assert_eq!(forward.required.len(), 1);
    assert!(forward.is_required("a"));
}

#[test]
fn test_nested_array_objects_merge_recursively() {
    let schema = infer_schema(&json!({
        "users": [
            {"profile": {"age": 3, "city": "x"}},
            {"profile": {"age": 4}}
        ]
    }));

    let users = object(&schema).get_property("users").unwrap();
    let user = object(users.as_array_items().unwrap());
    assert!(user.is_required("profile"));

    let profile = object(user.get_property("profile").unwrap());
    assert!(profile.is_required("age"));
    assert!(!profile.is_required("city"));
}

#[test]
fn test_sample_limit_ignores_tail() {
    let mut items: Vec<serde_json::Value> = (0..50).map(|i| json!({"id": i})).collect();
    items.push(json!({"id": "late", "extra": true}));

    let schema = SchemaInferrer::new().infer(&json!(items));
    let item = object(schema.as_array_items().unwrap());
    assert_eq!(item.len(), 1);
    assert_eq!(item.get_property("id"), Some(&Primitive::INTEGER.into()));

    let schema = SchemaInferrer::new().with_sample_limit(51).infer(&json!(items));
    let item = object(schema.as_array_items().unwrap());
    assert_eq!(item.len(), 2);
    assert!(item.get_property("id").unwrap().is_any());
}

#[test]
fn test_max_depth_collapses_to_any() {
    let value = json!({"a": {"b": {"c": 1}}});
    let schema = SchemaInferrer::new().with_max_depth(2).infer(&value);

    let a = object(object(&schema).get_property("a").unwrap());
    let b = object(a.get_property("b").unwrap());
    assert!(b.get_property("c").unwrap().is_any());
}

#[test]
fn test_required_is_subset_of_properties() {
    let schema = infer_schema(&json!([{"a": 1}, {"b": 2}, {"a": 3, "b": 4, "c": 5}]));
    let item = object(schema.as_array_items().unwrap());
    for key in &item.required {
        assert!(item.properties.contains_key(key));
    }
    assert!(item.required.is_empty());
}

// ============================================================================
// Signatures
// ============================================================================

#[test]
fn test_signature_ignores_key_order() {
    let a = infer_schema(&json!({"x": 1, "y": {"z": "s"}}));
    let b = infer_schema(&json!({"y": {"z": "t"}, "x": 2}));
    assert_eq!(signature(&a), signature(&b));
}

#[test]
fn test_signature_distinguishes_shapes() {
    let a = infer_schema(&json!({"x": 1}));
    let b = infer_schema(&json!({"x": "1"}));
    let c = infer_schema(&json!({"x": 1, "y": 1}));
    assert_ne!(signature(&a), signature(&b));
    assert_ne!(signature(&a), signature(&c));
}

#[test]
fn test_signature_format() {
    let schema = infer_schema(&json!({"b": [true], "a": 1.5}));
    assert_eq!(signature(&schema), r#"[["a","number"],["b","[boolean]"]]"#);
}

#[test]
fn test_schema_serializes_to_json() {
    let schema = infer_schema(&json!({"id": 1}));
    let value = schema.to_json();
    assert_eq!(value["type"], "object");
    assert_eq!(value["properties"]["id"]["type"], "primitive");
    assert_eq!(value["properties"]["id"]["kind"], "number");
    assert_eq!(value["required"], json!(["id"]));

    let back: Schema = serde_json::from_value(value).unwrap();
    assert_eq!(back, schema);
}
