use std::cmp::Ordering;

use crate::error;
use crate::sequence::{Block, Enumerable};
use crate::value::{comparator_ordering, Value};

use super::{each_step, each_value, proceed, sort_fallibly, to_vec};

/// Orders elements with a two-argument comparator block when there is one,
/// and by the elements' own ordering otherwise.
struct Comparator<'a, 'b>(Option<&'a mut Block<'b>>);

impl Comparator<'_, '_> {
    fn compare(&mut self, a: &Value, b: &Value) -> error::Result<Ordering> {
        match self.0.as_mut() {
            Some(block) => {
                let result = block(&[a.clone(), b.clone()])?;
                comparator_ordering(&result, a, b)
            }
            None => a.compare(b),
        }
    }
}

/// Stable sort by the block's result. Elements with equal keys keep their
/// original relative order.
pub(crate) fn sort_by(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut keyed: Vec<(Value, usize, Value)> = Vec::new();
    each_step(source, |args, element| {
        let key = block(args)?;
        keyed.push((key, keyed.len(), element));
        proceed()
    })?;
    sort_fallibly(&mut keyed, |(a, i, _), (b, j, _)| Ok(a.compare(b)?.then(i.cmp(j))))?;
    Ok(keyed
        .into_iter()
        .map(|(_, _, element)| element)
        .collect::<Vec<_>>()
        .into())
}

// The first element is the initial best; after that only a strict
// improvement in the wanted direction replaces it.
fn extreme_by(
    source: &dyn Enumerable,
    block: &mut Block<'_>,
    wanted: Ordering,
) -> error::Result<Value> {
    let mut best: Option<(Value, Value)> = None;
    each_step(source, |args, element| {
        let key = block(args)?;
        let better = match &best {
            None => true,
            Some((best_key, _)) => key.compare(best_key)? == wanted,
        };
        if better {
            best = Some((key, element));
        }
        proceed()
    })?;
    Ok(best.map(|(_, element)| element).into())
}

pub(crate) fn max_by(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    extreme_by(source, block, Ordering::Greater)
}

pub(crate) fn min_by(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    extreme_by(source, block, Ordering::Less)
}

fn extreme(
    source: &dyn Enumerable,
    block: Option<&mut Block<'_>>,
    wanted: Ordering,
) -> error::Result<Value> {
    let mut comparator = Comparator(block);
    let mut best: Option<Value> = None;
    each_value(source, |value| {
        best = Some(match best.take() {
            None => value,
            Some(best) => {
                if comparator.compare(&value, &best)? == wanted {
                    value
                } else {
                    best
                }
            }
        });
        proceed()
    })?;
    Ok(best.into())
}

pub(crate) fn max(source: &dyn Enumerable, block: Option<&mut Block<'_>>) -> error::Result<Value> {
    extreme(source, block, Ordering::Greater)
}

pub(crate) fn min(source: &dyn Enumerable, block: Option<&mut Block<'_>>) -> error::Result<Value> {
    extreme(source, block, Ordering::Less)
}

/// `[min, max]` in one pass. Ties keep the earliest element.
pub(crate) fn minmax(
    source: &dyn Enumerable,
    block: Option<&mut Block<'_>>,
) -> error::Result<Value> {
    let mut comparator = Comparator(block);
    let mut extremes: Option<(Value, Value)> = None;
    each_value(source, |value| {
        extremes = Some(match extremes.take() {
            None => (value.clone(), value),
            Some((min, max)) => {
                let min = if comparator.compare(&value, &min)?.is_lt() {
                    value.clone()
                } else {
                    min
                };
                let max = if comparator.compare(&value, &max)?.is_gt() {
                    value
                } else {
                    max
                };
                (min, max)
            }
        });
        proceed()
    })?;
    let (min, max) = extremes.unwrap_or_default();
    Ok(vec![min, max].into())
}

/// `[min, max]` by the block's result.
///
/// The block is evaluated twice per element, once for each extreme.
pub(crate) fn minmax_by(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut min: Option<(Value, Value)> = None;
    let mut max: Option<(Value, Value)> = None;
    each_step(source, |args, element| {
        let key = block(args)?;
        let lower = match &min {
            None => true,
            Some((min_key, _)) => key.compare(min_key)?.is_lt(),
        };
        if lower {
            min = Some((key, element.clone()));
        }
        let key = block(args)?;
        let higher = match &max {
            None => true,
            Some((max_key, _)) => key.compare(max_key)?.is_gt(),
        };
        if higher {
            max = Some((key, element));
        }
        proceed()
    })?;
    let min: Value = min.map(|(_, element)| element).into();
    let max: Value = max.map(|(_, element)| element).into();
    Ok(vec![min, max].into())
}

/// Stable sort by the elements' ordering or by a comparator block.
pub(crate) fn sort(source: &dyn Enumerable, block: Option<&mut Block<'_>>) -> error::Result<Value> {
    let mut comparator = Comparator(block);
    let mut values = to_vec(source)?;
    sort_fallibly(&mut values, |a, b| comparator.compare(a, b))?;
    Ok(values.into())
}
