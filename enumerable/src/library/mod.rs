/// The traversal algorithms, one module per family.
///
/// Everything here is written against `&dyn Enumerable` and a block that has
/// already been supplied. Deciding whether to hand back a deferred
/// enumerator instead is up to the callers in `sequence`.
mod collect;
mod group;
mod order;
mod predicate;
mod transform;
mod window;

use std::cmp::Ordering;

use crate::error;
use crate::sequence::{Enumerable, Flow, Yielded};
use crate::value::Value;

pub(crate) use collect::{
    each, each_entry, each_with_index, find, include, inject, map, partition, reject, select,
    sum, to_a,
};
pub(crate) use group::{each_with_object, filter_map, group_by, tally, to_h, uniq};
pub(crate) use order::{max, max_by, min, min_by, minmax, minmax_by, sort, sort_by};
pub(crate) use predicate::{all, any, count, find_index, none, one};
pub(crate) use transform::{cycle, flat_map, reverse_each, zip};
pub(crate) use window::{
    drop, drop_while, each_cons, each_slice, first, slice_size, take, take_while,
};

/// Visit every step as its shaped element.
pub(crate) fn each_value<F>(source: &dyn Enumerable, mut f: F) -> error::Result<()>
where
    F: FnMut(Value) -> error::Result<Flow>,
{
    source.each(&mut |yielded: Yielded| f(yielded.shape()))
}

/// Visit every step as the block arguments it stands for, together with its
/// shaped element.
pub(crate) fn each_step<F>(source: &dyn Enumerable, mut f: F) -> error::Result<()>
where
    F: FnMut(&[Value], Value) -> error::Result<Flow>,
{
    source.each(&mut |yielded: Yielded| match yielded {
        Yielded::Single(value) => f(std::slice::from_ref(&value), value.clone()),
        Yielded::Tuple(values) => {
            let element = Value::from(values.clone());
            f(&values, element)
        }
    })
}

/// Every shaped element, in order.
pub(crate) fn to_vec(source: &dyn Enumerable) -> error::Result<Vec<Value>> {
    let mut values = Vec::new();
    each_value(source, |value| {
        values.push(value);
        Ok(Flow::Continue(()))
    })?;
    Ok(values)
}

/// Ask the source to stop, noting which operation did so.
fn stop(operation: &'static str) -> Flow {
    tracing::trace!(operation, "stopping traversal early");
    Flow::Break(())
}

fn proceed() -> error::Result<Flow> {
    Ok(Flow::Continue(()))
}

/// Stable sort with a comparator that can fail. The first failure ends the
/// sort and is returned.
///
/// A comparator that is not a total order yields some permutation of the
/// items and never a panic, unlike `slice::sort_by`.
fn sort_fallibly<T, F>(items: &mut Vec<T>, mut compare: F) -> error::Result<()>
where
    F: FnMut(&T, &T) -> error::Result<Ordering>,
{
    *items = merge_sort(std::mem::take(items), &mut compare)?;
    Ok(())
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> error::Result<Vec<T>>
where
    F: FnMut(&T, &T) -> error::Result<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare)?;
    let right = merge_sort(right, compare)?;
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // ties go left, which keeps the sort stable
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => compare(a, b)?.is_gt(),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    Ok(merged)
}
