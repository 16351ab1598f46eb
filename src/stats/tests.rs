//! Literal statistics tests

use super::*;
use serde_json::json;

fn strings(stats: &LiteralStats, path: &str) -> Vec<String> {
    stats
        .values(path)
        .map(|set| set.iter().map(Literal::to_json_literal).collect())
        .unwrap_or_default()
}

#[test]
fn test_array_indices_do_not_extend_path() {
    let stats = collect_stats(&json!({
        "items": [
            {"status": "open"},
            {"status": "closed"},
            {"status": "open"}
        ]
    }));

    assert_eq!(strings(&stats, "items.status"), vec!["\"closed\"", "\"open\""]);
    assert!(stats.values("items.0.status").is_none());
}

#[test]
fn test_root_scalars_and_nested_paths() {
    let stats = collect_stats(&json!({"a": {"b": {"c": 3}}, "d": "x"}));
    assert_eq!(strings(&stats, "a.b.c"), vec!["3"]);
    assert_eq!(strings(&stats, "d"), vec!["\"x\""]);

    let stats = collect_stats(&json!(["p", "q"]));
    assert_eq!(strings(&stats, ""), vec!["\"p\"", "\"q\""]);
}

#[test]
fn test_booleans_and_nulls_are_ignored() {
    let stats = collect_stats(&json!({"flag": true, "gone": null}));
    assert!(stats.is_empty());
}

#[test]
fn test_numbers_sort_by_value() {
    let stats = collect_stats(&json!({"n": [10, 2, 1, 2]}));
    assert_eq!(strings(&stats, "n"), vec!["1", "2", "10"]);
}

#[test]
fn test_enum_threshold_boundaries() {
    assert!(!is_enum_candidate(0));
    assert!(!is_enum_candidate(1));
    assert!(is_enum_candidate(2));
    assert!(is_enum_candidate(8));
    assert!(!is_enum_candidate(9));

    let single = collect_stats(&json!([{"k": "a"}, {"k": "a"}]));
    assert!(single.enum_candidates("k").is_none());

    let pair = collect_stats(&json!([{"k": "a"}, {"k": "b"}]));
    assert_eq!(pair.enum_candidates("k").map(|s| s.len()), Some(2));

    let nine: Vec<_> = (0..9).map(|i| json!({ "k": format!("v{i}") })).collect();
    let nine = collect_stats(&json!(nine));
    assert_eq!(nine.values("k").map(|s| s.len()), Some(9));
    assert!(nine.enum_candidates("k").is_none());
}

#[test]
fn test_array_sample_cap() {
    let values: Vec<_> = (0..30).map(|i| json!(i)).collect();
    let stats = collect_stats(&json!({ "n": values }));
    assert_eq!(stats.values("n").map(|s| s.len()), Some(DEFAULT_ARRAY_SAMPLE));

    let stats = StatsCollector::new()
        .with_array_sample(3)
        .collect(&json!({ "n": [1, 2, 3, 4] }));
    assert_eq!(strings(&stats, "n"), vec!["1", "2", "3"]);
}

#[test]
fn test_budget_truncates_silently() {
    // root object, then "a", then "b"; "c" is never visited
    let stats = StatsCollector::new()
        .with_budget(3)
        .collect(&json!({"a": "x", "b": "y", "c": "z"}));

    assert_eq!(strings(&stats, "a"), vec!["\"x\""]);
    assert_eq!(strings(&stats, "b"), vec!["\"y\""]);
    assert!(stats.values("c").is_none());
}

#[test]
fn test_budget_flags_truncation_only_when_values_are_skipped() {
    let value = json!({"a": "x", "b": "y"});

    let exact_collector = StatsCollector::new().with_budget(3);
    let exact = exact_collector.walk(&value);
    assert!(!exact.truncated);
    assert_eq!(strings(&exact.stats, "b"), vec!["\"y\""]);

    let short_collector = StatsCollector::new().with_budget(2);
    let short = short_collector.walk(&value);
    assert!(short.truncated);
    assert!(short.stats.values("b").is_none());

    // Depth pruning is not budget exhaustion
    let shallow_collector = StatsCollector::new().with_max_depth(0);
    let shallow = shallow_collector.walk(&json!({"nested": "n"}));
    assert!(!shallow.truncated);
}

#[test]
fn test_out_of_range_numbers_are_skipped() {
    let value: serde_json::Value = serde_json::from_str(r#"{"n": [1e400, 2, 3]}"#).unwrap();
    let stats = collect_stats(&value);
    assert_eq!(strings(&stats, "n"), vec!["2", "3"]);
}

#[test]
fn test_max_depth_stops_descent() {
    let stats = StatsCollector::new()
        .with_max_depth(1)
        .collect(&json!({"top": "t", "nested": {"deep": "d"}}));

    assert_eq!(strings(&stats, "top"), vec!["\"t\""]);
    assert!(stats.values("nested.deep").is_none());
}

#[test]
fn test_string_literals_are_escaped() {
    let stats = collect_stats(&json!({"q": "say \"hi\""}));
    assert_eq!(strings(&stats, "q"), vec![r#""say \"hi\"""#]);
}

#[test]
fn test_child_path() {
    assert_eq!(child_path("", "a"), "a");
    assert_eq!(child_path("a", "b"), "a.b");
}
