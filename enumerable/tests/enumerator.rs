use insta::assert_snapshot;
use rstest::rstest;

use enumerable::{block, Array, EnumerableExt, Enumerator, Map, Method, Range, Value};

mod common;

use common::{counted_naturals, one_to, recording, strings};

fn enumerator(value: Value) -> Enumerator {
    match value {
        Value::Enumerator(enumerator) => enumerator,
        other => panic!("expected an enumerator, got {}", other),
    }
}

#[rstest]
#[case(Method::GroupBy, vec![])]
#[case(Method::SortBy, vec![])]
#[case(Method::MaxBy, vec![])]
#[case(Method::MinBy, vec![])]
#[case(Method::MinmaxBy, vec![])]
#[case(Method::FilterMap, vec![])]
#[case(Method::FlatMap, vec![])]
#[case(Method::DropWhile, vec![])]
#[case(Method::TakeWhile, vec![])]
#[case(Method::FindIndex, vec![])]
#[case(Method::EachSlice, vec![Value::from(2)])]
#[case(Method::EachCons, vec![Value::from(2)])]
#[case(Method::Cycle, vec![Value::from(2)])]
fn test_realizing_twice_is_idempotent(#[case] method: Method, #[case] args: Vec<Value>) {
    let source = numbers_with_duplicates();
    let first = source.to_enum(method, args.clone()).unwrap();
    let second = source.to_enum(method, args).unwrap();
    let first_seen = Array::new();
    let second_seen = Array::new();
    let first_result = first.realize(&mut classify(&first_seen)).unwrap();
    let second_result = second.realize(&mut classify(&second_seen)).unwrap();
    assert_eq!(first_result.to_string(), second_result.to_string());
    assert_eq!(first_seen.to_string(), second_seen.to_string());
}

fn classify(seen: &Array) -> impl FnMut(&[Value]) -> enumerable::Result<Value> + '_ {
    move |args: &[Value]| {
        seen.push(args.to_vec());
        Ok(Value::from(args[0].to_integer().unwrap_or(0) % 3 == 0))
    }
}

fn numbers_with_duplicates() -> Array {
    common::numbers(&[3, 1, 4, 1, 5, 9, 2, 6])
}

#[test]
fn test_enumerator_records_receiver_and_args() {
    let source = one_to(4);
    let deferred = enumerator(source.each_slice(&Value::from(2), None).unwrap());
    assert_eq!(deferred.method(), Method::EachSlice);
    assert_eq!(deferred.args(), &[Value::from(2)]);
    assert!(deferred.receiver().as_array().unwrap().ptr_eq(&source));
    assert_snapshot!(deferred.to_string(), @"#<Enumerator: [1, 2, 3, 4]:each_slice(2)>");
}

#[test]
fn test_enumerator_is_a_source() {
    let slices = enumerator(one_to(5).each_slice(&Value::from(2), None).unwrap());
    assert_snapshot!(slices.to_a().unwrap().to_string(), @"[[1, 2], [3, 4], [5]]");

    let indexed = enumerator(strings(&["a", "b"]).each_with_index(None).unwrap());
    assert_snapshot!(indexed.to_a().unwrap().to_string(), @r#"[["a", 0], ["b", 1]]"#);

    let mut big = block(|args| {
        let total = match args[0].as_array() {
            Some(slice) => slice.sum(None, None)?,
            None => Value::from(0),
        };
        Ok(Value::from(total.compare(&Value::from(5))?.is_gt()))
    });
    let slices = enumerator(one_to(6).each_slice(&Value::from(2), None).unwrap());
    assert_snapshot!(slices.select(Some(&mut big)).unwrap().to_string(), @"[[3, 4], [5, 6]]");
}

#[test]
fn test_enumerator_over_endless_source_stops() {
    let (naturals, produced) = counted_naturals();
    let deferred = enumerator(naturals.each_slice(&Value::from(3), None).unwrap());
    let slices = deferred.first(&[Value::from(2)]).unwrap();
    assert_snapshot!(slices.to_string(), @"[[0, 1, 2], [3, 4, 5]]");
    assert_eq!(produced.get(), 6);
}

#[test]
fn test_map_over_map_receiver() {
    let ages = Map::new();
    ages.insert("ann", 31);
    ages.insert("bob", 27);
    let deferred = enumerator(ages.map(None).unwrap());
    let mut describe = block(|args| {
        let name = args[0].as_str().unwrap_or("?");
        Ok(Value::from(format!("{}={}", name, args[1])))
    });
    let result = deferred.realize(&mut describe).unwrap();
    assert_snapshot!(result.to_string(), @r#"["ann=31", "bob=27"]"#);
}

#[test]
fn test_chained_enumerators() {
    let deferred = enumerator(Range::new(1, 6).each_slice(&Value::from(2), None).unwrap());
    let indexed = enumerator(deferred.each_with_index(None).unwrap());
    let seen = Array::new();
    let result = indexed.realize(&mut recording(&seen)).unwrap();
    assert!(matches!(result, Value::Enumerator(_)));
    assert_snapshot!(seen.to_string(), @"[[[1, 2], 0], [[3, 4], 1], [[5, 6], 2]]");
}

#[test]
fn test_by_name() {
    let deferred = Enumerator::by_name(Value::from(one_to(3)), "reverse_each", vec![]).unwrap();
    assert_eq!(deferred.method(), Method::ReverseEach);
    assert_snapshot!(deferred.to_a().unwrap().to_string(), @"[3, 2, 1]");
}
