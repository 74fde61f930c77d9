use std::collections::VecDeque;

use crate::error;
use crate::sequence::{Block, Enumerable};
use crate::value::Value;

use super::{each_step, each_value, proceed, stop};

fn non_negative(n: &Value, operation: &str) -> error::Result<usize> {
    let n = n.to_integer()?;
    if n < 0 {
        return Err(error::Error::negative_size(operation));
    }
    usize::try_from(n).map_err(|_| error::Error::OutOfRange(format!("{} too big", n)))
}

/// The window or chunk size for `each_cons` and `each_slice`.
pub(crate) fn slice_size(n: &Value) -> error::Result<usize> {
    let n = n.to_integer()?;
    if n <= 0 {
        return Err(error::Error::invalid_size());
    }
    usize::try_from(n).map_err(|_| error::Error::OutOfRange(format!("{} too big", n)))
}

pub(crate) fn drop(source: &dyn Enumerable, n: &Value) -> error::Result<Value> {
    let n = non_negative(n, "drop")?;
    let mut seen = 0;
    let mut result = Vec::new();
    each_value(source, |value| {
        if seen < n {
            seen += 1;
        } else {
            result.push(value);
        }
        proceed()
    })?;
    Ok(result.into())
}

pub(crate) fn take(source: &dyn Enumerable, n: &Value) -> error::Result<Value> {
    let n = non_negative(n, "take")?;
    Ok(take_values(source, n)?.into())
}

fn take_values(source: &dyn Enumerable, n: usize) -> error::Result<Vec<Value>> {
    let mut result = Vec::with_capacity(n.min(64));
    if n == 0 {
        return Ok(result);
    }
    each_value(source, |value| {
        result.push(value);
        if result.len() >= n {
            Ok(stop("take"))
        } else {
            proceed()
        }
    })?;
    Ok(result)
}

pub(crate) fn drop_while(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut dropping = true;
    let mut result = Vec::new();
    each_step(source, |args, value| {
        if dropping && !block(args)?.is_truthy() {
            dropping = false;
        }
        if !dropping {
            result.push(value);
        }
        proceed()
    })?;
    Ok(result.into())
}

pub(crate) fn take_while(source: &dyn Enumerable, block: &mut Block<'_>) -> error::Result<Value> {
    let mut result = Vec::new();
    each_step(source, |args, value| {
        if !block(args)?.is_truthy() {
            return Ok(stop("take_while"));
        }
        result.push(value);
        proceed()
    })?;
    Ok(result.into())
}

/// Call the block with every run of `n` consecutive elements.
pub(crate) fn each_cons(
    source: &dyn Enumerable,
    n: &Value,
    block: &mut Block<'_>,
) -> error::Result<Value> {
    let size = slice_size(n)?;
    let mut window = VecDeque::with_capacity(size.min(64));
    each_value(source, |value| {
        if window.len() == size {
            window.pop_front();
        }
        window.push_back(value);
        if window.len() == size {
            let snapshot: Vec<Value> = window.iter().cloned().collect();
            block(&[Value::from(snapshot)])?;
        }
        proceed()
    })?;
    Ok(Value::Nil)
}

/// Call the block with consecutive chunks of `n` elements. The last chunk
/// may be shorter.
pub(crate) fn each_slice(
    source: &dyn Enumerable,
    n: &Value,
    block: &mut Block<'_>,
) -> error::Result<Value> {
    let size = slice_size(n)?;
    let mut chunk = Vec::with_capacity(size.min(64));
    each_value(source, |value| {
        chunk.push(value);
        if chunk.len() == size {
            let full = std::mem::replace(&mut chunk, Vec::with_capacity(size.min(64)));
            block(&[Value::from(full)])?;
        }
        proceed()
    })?;
    if !chunk.is_empty() {
        block(&[Value::from(chunk)])?;
    }
    Ok(Value::Nil)
}

/// `first` with no arguments is the first element, or nil. With a count it
/// is `take`.
pub(crate) fn first(source: &dyn Enumerable, args: &[Value]) -> error::Result<Value> {
    match args {
        [] => {
            let mut first = Value::Nil;
            each_value(source, |value| {
                first = value;
                Ok(stop("first"))
            })?;
            Ok(first)
        }
        [n] => {
            let n = non_negative(n, "take")?;
            Ok(take_values(source, n)?.into())
        }
        _ => Err(error::Error::ArityMismatch {
            given: args.len(),
            expected: "0..1",
        }),
    }
}
