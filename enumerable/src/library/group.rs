use crate::error;
use crate::sequence::{Block, Enumerable};
use crate::value::{Map, Value, ValueIndexMap};

use super::{each_step, each_value, proceed};

/// Group elements by the block's result. Keys come out in the order they
/// were first seen.
pub(crate) fn group_by(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut groups: ValueIndexMap<Vec<Value>> = ValueIndexMap::default();
    each_step(source, |args, element| {
        let key = block(args)?;
        groups.entry(key).or_default().push(element);
        proceed()
    })?;
    let map: Map = groups
        .into_iter()
        .map(|(key, group)| (key, Value::from(group)))
        .collect();
    Ok(map.into())
}

pub(crate) fn tally(source: &dyn Enumerable) -> error::Result<Value> {
    let mut counts: ValueIndexMap<usize> = ValueIndexMap::default();
    each_value(source, |value| {
        *counts.entry(value).or_insert(0) += 1;
        proceed()
    })?;
    let map: Map = counts
        .into_iter()
        .map(|(value, count)| (value, Value::from(count)))
        .collect();
    Ok(map.into())
}

/// Drop duplicates, keyed by the element or by the block's result. The first
/// element for each key is kept.
pub(crate) fn uniq(
    source: &dyn Enumerable,
    mut block: Option<&mut Block<'_>>,
) -> error::Result<Value> {
    let mut seen: ValueIndexMap<Value> = ValueIndexMap::default();
    each_step(source, |args, element| {
        let key = match block.as_mut() {
            Some(block) => block(args)?,
            None => element.clone(),
        };
        seen.entry(key).or_insert(element);
        proceed()
    })?;
    Ok(seen.into_values().collect::<Vec<_>>().into())
}

/// Build a map out of `[key, value]` pairs, optionally produced by the
/// block. Later keys overwrite earlier ones.
pub(crate) fn to_h(
    source: &dyn Enumerable,
    mut block: Option<&mut Block<'_>>,
) -> error::Result<Value> {
    let map = Map::new();
    let mut index = 0usize;
    each_step(source, |args, element| {
        let pair = match block.as_mut() {
            Some(block) => block(args)?,
            None => element,
        };
        let pair = match pair {
            Value::Array(pair) => pair,
            other => {
                return Err(error::Error::TypeMismatch(format!(
                    "wrong element type {} at {} (expected array)",
                    other.kind(),
                    index
                )))
            }
        };
        if pair.len() != 2 {
            return Err(error::Error::ShapeMismatch(format!(
                "wrong array length at {} (expected 2, was {})",
                index,
                pair.len()
            )));
        }
        let pair = pair.to_vec();
        map.insert(pair[0].clone(), pair[1].clone());
        index += 1;
        proceed()
    })?;
    Ok(map.into())
}

/// Call the block with each element and the seed, then hand back the seed
/// itself.
pub(crate) fn each_with_object(
    source: &dyn Enumerable,
    seed: Value,
    block: &mut Block<'_>,
) -> error::Result<Value> {
    each_value(source, |value| {
        block(&[value, seed.clone()])?;
        proceed()
    })?;
    Ok(seed)
}

pub(crate) fn filter_map(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut result = Vec::new();
    each_step(source, |args, _| {
        let mapped = block(args)?;
        if mapped.is_truthy() {
            result.push(mapped);
        }
        proceed()
    })?;
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::block;
    use crate::value::{Array, Range};
    use crate::ErrorKind;

    fn strings(values: &[&str]) -> Array {
        values.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn test_group_by_first_seen_order() {
        let mut by_mod_three = block(|args| Ok(Value::from(args[0].to_integer()? % 3)));
        let groups = group_by(&Range::new(1, 6), &mut by_mod_three).unwrap();
        assert_eq!(groups.to_string(), "{1 => [1, 4], 2 => [2, 5], 0 => [3, 6]}");
    }

    #[test]
    fn test_group_by_distinguishes_integer_and_float_keys() {
        let values: Array = vec![Value::from(1), Value::from(1.0)].into();
        let mut identity = block(|args| Ok(args[0].clone()));
        let groups = group_by(&values, &mut identity).unwrap();
        assert_eq!(groups.to_string(), "{1 => [1], 1.0 => [1.0]}");
    }

    #[test]
    fn test_tally() {
        let result = tally(&strings(&["a", "b", "c", "b"])).unwrap();
        assert_eq!(result.to_string(), r#"{"a" => 1, "b" => 2, "c" => 1}"#);
    }

    #[test]
    fn test_uniq() {
        let result = uniq(&strings(&["a", "b", "a", "c", "b"]), None).unwrap();
        assert_eq!(result.to_string(), r#"["a", "b", "c"]"#);
    }

    #[test]
    fn test_uniq_by_block_keeps_first_element() {
        let mut by_length = block(|args| Ok(Value::from(args[0].as_str().unwrap_or("").len())));
        let result = uniq(&strings(&["ab", "cd", "e", "fgh", "i"]), Some(&mut by_length)).unwrap();
        assert_eq!(result.to_string(), r#"["ab", "e", "fgh"]"#);
    }

    #[test]
    fn test_to_h() {
        let map = Map::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let mut swap = block(|args| Ok(Value::from(vec![args[1].clone(), args[0].clone()])));
        let result = to_h(&map, Some(&mut swap)).unwrap();
        assert_eq!(result.to_string(), r#"{1 => "a", 2 => "b"}"#);
    }

    #[test]
    fn test_to_h_later_keys_overwrite() {
        let pairs: Array = vec![
            Value::from(vec![Value::from("a"), Value::from(1)]),
            Value::from(vec![Value::from("b"), Value::from(2)]),
            Value::from(vec![Value::from("a"), Value::from(3)]),
        ]
        .into();
        let result = to_h(&pairs, None).unwrap();
        assert_eq!(result.to_string(), r#"{"a" => 3, "b" => 2}"#);
    }

    #[test]
    fn test_to_h_errors() {
        let not_pairs: Array = vec![Value::from(vec![Value::from(1), Value::from(2)]), Value::from(3)].into();
        let error = to_h(&not_pairs, None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            error.to_string(),
            "wrong element type Integer at 1 (expected array)"
        );
        let triple: Array = vec![Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])].into();
        let error = to_h(&triple, None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(
            error.to_string(),
            "wrong array length at 0 (expected 2, was 3)"
        );
    }

    #[test]
    fn test_each_with_object_returns_seed_itself() {
        let seed = Array::new();
        let mut collect_doubles = block(|args| {
            let doubled = args[0].add(&args[0])?;
            if let Some(memo) = args[1].as_array() {
                memo.push(doubled);
            }
            Ok(Value::Nil)
        });
        let result = each_with_object(&Range::new(1, 3), seed.clone().into(), &mut collect_doubles)
            .unwrap();
        assert!(result.as_array().unwrap().ptr_eq(&seed));
        assert_eq!(seed.to_string(), "[2, 4, 6]");
    }

    #[test]
    fn test_filter_map() {
        let mut evens_squared = block(|args| {
            let i = args[0].to_integer()?;
            Ok(if i % 2 == 0 {
                Value::from(i * i)
            } else {
                Value::from(false)
            })
        });
        let result = filter_map(&Range::new(1, 6), &mut evens_squared).unwrap();
        assert_eq!(result.to_string(), "[4, 16, 36]");
    }
}
