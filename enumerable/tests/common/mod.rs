// not every test file uses every helper
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use enumerable::{error, from_fn, Array, EnumerableExt, Value, Yielded};

pub(crate) fn numbers(values: &[i64]) -> Array {
    values.iter().map(|i| Value::from(*i)).collect()
}

pub(crate) fn one_to(n: i64) -> Array {
    (1..=n).map(Value::from).collect()
}

pub(crate) fn strings(values: &[&str]) -> Array {
    values.iter().map(|s| Value::from(*s)).collect()
}

/// A block that records what it is called with into `seen`: the single
/// argument itself, or all arguments as one array.
pub(crate) fn recording(seen: &Array) -> impl FnMut(&[Value]) -> error::Result<Value> + '_ {
    move |args: &[Value]| {
        if args.len() == 1 {
            seen.push(args[0].clone());
        } else {
            seen.push(args.to_vec());
        }
        Ok(Value::Nil)
    }
}

/// The natural numbers, endlessly, together with a count of how many have
/// been produced so far.
pub(crate) fn counted_naturals() -> (impl EnumerableExt, Rc<Cell<usize>>) {
    let produced = Rc::new(Cell::new(0));
    let counter = produced.clone();
    let naturals = from_fn(move |visitor| {
        let mut i = 0i64;
        loop {
            counter.set(counter.get() + 1);
            if visitor(Yielded::Single(Value::from(i)))?.is_break() {
                return Ok(());
            }
            i += 1;
        }
    });
    (naturals, produced)
}

/// A finite source that counts how often it is traversed.
pub(crate) fn counted_letters() -> (impl EnumerableExt, Rc<Cell<usize>>) {
    let traversals = Rc::new(Cell::new(0));
    let counter = traversals.clone();
    let letters = from_fn(move |visitor| {
        counter.set(counter.get() + 1);
        for letter in ["a", "b", "c"] {
            if visitor(Yielded::Single(Value::from(letter)))?.is_break() {
                break;
            }
        }
        Ok(())
    });
    (letters, traversals)
}
