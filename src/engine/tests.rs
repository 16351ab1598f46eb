//! Tests for engine module

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(Dialect::Typescript, "// Invalid JSON")]
#[test_case(Dialect::Zod, "// Invalid JSON")]
#[test_case(Dialect::Sql, "-- Invalid JSON")]
#[test_case(Dialect::Pydantic, "# Invalid JSON")]
fn test_invalid_input_sentinel(dialect: Dialect, expected: &str) {
    assert_eq!(generate("{not json", dialect), expected);
}

#[test_case(Dialect::Typescript)]
#[test_case(Dialect::Zod)]
#[test_case(Dialect::Sql)]
#[test_case(Dialect::Pydantic)]
fn test_try_generate_surfaces_parse_error(dialect: Dialect) {
    let err = try_generate("{not json", dialect, &EngineConfig::default()).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_run_flags_invalid_input() {
    let engine = Engine::new();

    let bad = engine.run("", Dialect::Sql);
    assert!(bad.invalid_input);
    assert_eq!(bad.text, "-- Invalid JSON");

    let good = engine.run("{\"a\": 1}", Dialect::Sql);
    assert!(!good.invalid_input);
    assert!(good.text.starts_with("CREATE TABLE \"root\" ("));
}

#[test]
fn test_generate_round_trip_typescript() {
    let out = generate(
        r#"{"id": 1, "tags": ["a","b"], "meta": {"active": true}}"#,
        Dialect::Typescript,
    );

    let meta = out.find("export interface Meta").unwrap();
    let root = out.find("export interface Root").unwrap();
    assert!(meta < root);
    assert!(out.contains("  id: number;"));
    assert!(out.contains("  tags: string[];"));
    assert!(out.contains("  meta: Meta;"));
    assert!(out.contains("  active: boolean;"));
}

#[test]
fn test_root_name_from_config() {
    let config = EngineConfig::default().with_root_name("Order");
    let out = generate_with(r#"{"total": 9.5}"#, Dialect::Typescript, &config);
    assert_eq!(out, "export interface Order {\n  total: number;\n}");

    let out = generate_with(r#"{"total": 9.5}"#, Dialect::Sql, &config);
    assert!(out.starts_with("CREATE TABLE \"order\" ("));
}

#[test]
fn test_stats_can_be_disabled() {
    let input = r#"[{"s": "a"}, {"s": "b"}]"#;
    assert!(generate(input, Dialect::Typescript).contains("  s: \"a\" | \"b\";"));

    let mut config = EngineConfig::default();
    config.stats.enabled = false;
    assert!(generate_with(input, Dialect::Typescript, &config).contains("  s: string;"));
}

#[test]
fn test_sample_limit_from_config() {
    let items: Vec<String> = (0..60).map(|i| format!("{{\"id\": {i}}}")).collect();
    let mut input = format!("[{}", items.join(","));
    input.push_str(r#",{"id": 1, "late": true}]"#);

    let out = generate(&input, Dialect::Typescript);
    assert!(!out.contains("late"));

    let mut config = EngineConfig::default();
    config.inference.sample_limit = 100;
    let out = generate_with(&input, Dialect::Typescript, &config);
    assert!(out.contains("  late?: boolean;"));
}

#[test]
fn test_nesting_deeper_than_parser_limit_is_valid_input() {
    let input = format!("{}{}", "[".repeat(200), "]".repeat(200));

    let out = generate(&input, Dialect::Typescript);
    assert_eq!(out, format!("export type Root = any{};", "[]".repeat(65)));

    let object = format!("{}1{}", r#"{"a":"#.repeat(300), "}".repeat(300));
    let generation = Engine::new().run(&object, Dialect::Zod);
    assert!(!generation.invalid_input);
    assert!(generation.text.contains("  a: z.any(),"));
}

#[test]
fn test_deep_malformed_input_is_still_invalid() {
    let input = format!("{}{}", "[".repeat(200), "]".repeat(199));
    assert_eq!(generate(&input, Dialect::Typescript), "// Invalid JSON");

    let input = format!("{}x{}", "[".repeat(200), "]".repeat(200));
    assert_eq!(generate(&input, Dialect::Sql), "-- Invalid JSON");
}

#[test]
fn test_out_of_range_numbers_are_valid_input() {
    let out = generate(r#"{"x": 1e400, "y": 1}"#, Dialect::Typescript);
    assert_eq!(out, "export interface Root {\n  x: any;\n  y: number;\n}");

    let out = generate(r#"[{"n": -1e999}, {"n": 2.5}]"#, Dialect::Pydantic);
    assert!(out.contains("    n: float"));
}

#[test]
fn test_infer_and_stats_documents() {
    let config = EngineConfig::default();
    let schema = infer_document(r#"{"a": [1]}"#, &config).unwrap();
    assert!(schema.as_object().unwrap().is_required("a"));

    let stats = collect_document_stats(r#"{"a": [1, 2]}"#, &config).unwrap();
    assert!(stats.enum_candidates("a").is_some());

    assert!(infer_document("nope", &config).is_err());
}

#[test]
fn test_generation_display() {
    let generation = Generation::invalid(Dialect::Pydantic);
    assert_eq!(generation.to_string(), "# Invalid JSON");
}
