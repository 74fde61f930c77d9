use insta::assert_snapshot;

use enumerable::{block, Array, EnumerableExt, ErrorKind, Value};

mod common;

use common::{one_to, strings};

fn length(value: &Value) -> Value {
    Value::from(value.as_str().map(str::len).unwrap_or(0))
}

#[test]
fn test_sort_by_is_stable() {
    let words = strings(&["pear", "fig", "plum", "kiwi", "date", "yam"]);
    let mut by_length = block(|args| Ok(length(&args[0])));
    let sorted = words.sort_by(Some(&mut by_length)).unwrap();
    assert_snapshot!(sorted.to_string(), @r#"["fig", "yam", "pear", "plum", "kiwi", "date"]"#);
}

#[test]
fn test_sort_by_array_keys() {
    let words = strings(&["bb", "a", "ab", "b"]);
    let mut by_length_then_text = block(|args| Ok(Value::from(vec![length(&args[0]), args[0].clone()])));
    let sorted = words.sort_by(Some(&mut by_length_then_text)).unwrap();
    assert_snapshot!(sorted.to_string(), @r#"["a", "b", "ab", "bb"]"#);
}

#[test]
fn test_minmax_with_comparator() {
    let words = strings(&["albatross", "dog", "horse"]);
    let mut by_length = block(|args| Ok(Value::from(length(&args[0]).compare(&length(&args[1]))?)));
    let result = words.minmax(Some(&mut by_length)).unwrap();
    assert_snapshot!(result.to_string(), @r#"["dog", "albatross"]"#);
}

#[test]
fn test_minmax_ties_keep_earliest() {
    let words = strings(&["ab", "cd", "e", "f"]);
    let mut by_length = block(|args| Ok(Value::from(length(&args[0]).compare(&length(&args[1]))?)));
    let result = words.minmax(Some(&mut by_length)).unwrap();
    assert_snapshot!(result.to_string(), @r#"["e", "ab"]"#);
}

#[test]
fn test_minmax_empty() {
    assert_snapshot!(Array::new().minmax(None).unwrap().to_string(), @"[nil, nil]");
}

#[test]
fn test_max_by_min_by() {
    let words = strings(&["albatross", "dog", "horse"]);
    let mut by_length = block(|args| Ok(length(&args[0])));
    assert_eq!(words.max_by(Some(&mut by_length)).unwrap(), Value::from("albatross"));
    assert_eq!(words.min_by(Some(&mut by_length)).unwrap(), Value::from("dog"));
}

#[test]
fn test_minmax_by_calls_block_twice_per_element() {
    let mut calls = 0;
    let mut by_length = block(|args| {
        calls += 1;
        Ok(length(&args[0]))
    });
    let result = strings(&["albatross", "dog", "horse"])
        .minmax_by(Some(&mut by_length))
        .unwrap();
    assert_snapshot!(result.to_string(), @r#"["dog", "albatross"]"#);
    assert_eq!(calls, 6);
}

#[test]
fn test_incomparable_keys() {
    let mut mixed = block(|args| {
        Ok(if args[0].to_integer()? % 2 == 0 {
            Value::from("even")
        } else {
            args[0].clone()
        })
    });
    let error = one_to(4).max_by(Some(&mut mixed)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Comparison);
    assert_snapshot!(error.to_string(), @"comparison of String with Integer failed");
}

#[test]
fn test_sort_min_max() {
    let values = Array::from(vec![Value::from(3), Value::from(1.5), Value::from(2)]);
    assert_snapshot!(values.sort(None).unwrap().to_string(), @"[1.5, 2, 3]");
    assert_eq!(values.min(None).unwrap(), Value::from(1.5));
    assert_eq!(values.max(None).unwrap(), Value::from(3));
}

#[test]
fn test_sort_with_inconsistent_comparator() {
    let mut state = 7i64;
    let mut erratic = block(|_| {
        state = (state * 1_103_515_245 + 12_345) % 2_147_483_648;
        Ok(Value::from(state % 3 - 1))
    });
    let source = one_to(500);
    let shuffled = source.sort(Some(&mut erratic)).unwrap();
    let shuffled = shuffled.as_array().unwrap();
    assert_eq!(shuffled.len(), 500);
    assert_eq!(shuffled.sort(None).unwrap(), source.to_a().unwrap());
}

#[test]
fn test_sort_with_erroring_comparator() {
    let mut calls = 0;
    let mut fails_late = block(|args| {
        calls += 1;
        if calls == 5 {
            Ok(Value::Nil)
        } else {
            Ok(Value::from(args[0].compare(&args[1])?))
        }
    });
    let error = one_to(20).sort(Some(&mut fails_late)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Comparison);
    assert_eq!(calls, 5);
}
