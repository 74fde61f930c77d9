use std::slice;

use crate::error;
use crate::sequence::{Block, Enumerable};
use crate::value::Value;

use super::{each_step, each_value, proceed, to_vec};

/// Map and flatten one level: results that are themselves enumerable
/// contribute their elements, anything else is kept as is.
pub(crate) fn flat_map(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut result = Vec::new();
    each_step(source, |args, _| {
        let mapped = block(args)?;
        if mapped.as_enumerable().is_some() {
            result.extend(mapped.to_sequence()?);
        } else {
            result.push(mapped);
        }
        proceed()
    })?;
    Ok(result.into())
}

/// Pair every element with the elements at the same position in `others`.
///
/// The receiver decides the length; missing positions in `others` are nil.
/// With a block each tuple is passed to it and the result is nil.
pub(crate) fn zip(
    source: &dyn Enumerable,
    others: &[Value],
    mut block: Option<&mut Block<'_>>,
) -> error::Result<Value> {
    let others = others
        .iter()
        .map(Value::to_sequence)
        .collect::<error::Result<Vec<_>>>()?;
    let mut result = Vec::new();
    let mut index = 0;
    each_value(source, |value| {
        let mut tuple = Vec::with_capacity(others.len() + 1);
        tuple.push(value);
        tuple.extend(
            others
                .iter()
                .map(|other| other.get(index).cloned().unwrap_or_default()),
        );
        index += 1;
        let tuple = Value::from(tuple);
        match block.as_mut() {
            Some(block) => {
                block(&[tuple])?;
            }
            None => result.push(tuple),
        }
        proceed()
    })?;
    if block.is_some() {
        Ok(Value::Nil)
    } else {
        Ok(result.into())
    }
}

/// Call the block for every element, `n` times over, or forever when `n` is
/// nil.
///
/// The source is traversed once; later rounds replay the block arguments it
/// produced.
/// Without `n` this only returns through an error from the block, or through
/// an early stop when the block forwards to a visitor.
pub(crate) fn cycle(
    source: &dyn Enumerable,
    n: &Value,
    block: &mut Block<'_>,
) -> error::Result<Value> {
    let rounds = if n.is_nil() {
        None
    } else {
        let n = n.to_integer()?;
        if n <= 0 {
            return Ok(Value::Nil);
        }
        Some(n)
    };
    let mut buffer: Vec<Vec<Value>> = Vec::new();
    each_step(source, |args, _| {
        buffer.push(args.to_vec());
        block(args)?;
        proceed()
    })?;
    if buffer.is_empty() {
        return Ok(Value::Nil);
    }
    match rounds {
        Some(n) => {
            for _ in 1..n {
                for args in &buffer {
                    block(args)?;
                }
            }
        }
        None => loop {
            for args in &buffer {
                block(args)?;
            }
        },
    }
    Ok(Value::Nil)
}

/// Call the block for every element, last to first.
pub(crate) fn reverse_each(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<()> {
    let values = to_vec(source)?;
    for value in values.iter().rev() {
        block(slice::from_ref(value))?;
    }
    Ok(())
}
