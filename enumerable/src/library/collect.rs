use std::slice;

use crate::error;
use crate::sequence::{Block, Enumerable};
use crate::value::Value;

use super::{each_step, each_value, proceed, stop, to_vec};

/// Call the block with the raw values of every step.
pub(crate) fn each(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<()> {
    each_step(source, |args, _| {
        block(args)?;
        proceed()
    })
}

/// Call the block once per shaped element.
pub(crate) fn each_entry(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<()> {
    each_value(source, |value| {
        block(slice::from_ref(&value))?;
        proceed()
    })
}

pub(crate) fn each_with_index(
    source: &dyn Enumerable,
    block: &mut Block<'_>,
) -> error::Result<()> {
    let mut index = 0usize;
    each_value(source, |value| {
        block(&[value, Value::from(index)])?;
        index += 1;
        proceed()
    })
}

pub(crate) fn to_a(source: &dyn Enumerable) -> error::Result<Value> {
    Ok(to_vec(source)?.into())
}

pub(crate) fn map(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut result = Vec::new();
    each_step(source, |args, _| {
        result.push(block(args)?);
        proceed()
    })?;
    Ok(result.into())
}

fn split(
    source: &dyn Enumerable,
    block: &mut Block<'_>,
) -> error::Result<(Vec<Value>, Vec<Value>)> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    each_step(source, |args, element| {
        if block(args)?.is_truthy() {
            accepted.push(element);
        } else {
            rejected.push(element);
        }
        proceed()
    })?;
    Ok((accepted, rejected))
}

pub(crate) fn select(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let (accepted, _) = split(source, block)?;
    Ok(accepted.into())
}

pub(crate) fn reject(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let (_, rejected) = split(source, block)?;
    Ok(rejected.into())
}

/// `[accepted, rejected]`.
pub(crate) fn partition(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let (accepted, rejected) = split(source, block)?;
    Ok(vec![Value::from(accepted), Value::from(rejected)].into())
}

pub(crate) fn find(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut found = Value::Nil;
    each_step(source, |args, element| {
        if block(args)?.is_truthy() {
            found = element;
            return Ok(stop("find"));
        }
        proceed()
    })?;
    Ok(found)
}

pub(crate) fn include(source: &dyn Enumerable, value: &Value) -> error::Result<bool> {
    let mut found = false;
    each_value(source, |element| {
        if element.loose_eq(value) {
            found = true;
            return Ok(stop("include?"));
        }
        proceed()
    })?;
    Ok(found)
}

/// Left fold. Without an initial value the first element starts the
/// accumulator, and an empty source folds to nil.
pub(crate) fn inject(
    source: &dyn Enumerable,
    init: Option<Value>,
    block: &mut Block<'_>,
) -> error::Result<Value> {
    let mut accumulator = init;
    each_value(source, |value| {
        accumulator = Some(match accumulator.take() {
            Some(accumulator) => block(&[accumulator, value])?,
            None => value,
        });
        proceed()
    })?;
    Ok(accumulator.into())
}

/// Add every element, or what the block makes of it, to `init` (0 unless
/// given).
pub(crate) fn sum(
    source: &dyn Enumerable,
    init: Option<Value>,
    mut block: Option<&mut Block<'_>>,
) -> error::Result<Value> {
    let mut total = init.unwrap_or_else(|| Value::from(0));
    each_step(source, |args, element| {
        let addend = match block.as_mut() {
            Some(block) => block(args)?,
            None => element,
        };
        total = total.add(&addend)?;
        proceed()
    })?;
    Ok(total)
}
