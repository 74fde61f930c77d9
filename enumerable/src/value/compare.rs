use std::cmp::Ordering;

use ibig::IBig;

use crate::error;

use super::convert::integer_to_f64;
use super::{Array, Value};

impl Value {
    /// Equality as the `==` operator sees it.
    ///
    /// Unlike `PartialEq`, numbers compare by numeric value across integers
    /// and floats, recursively inside arrays.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
                integer_to_f64(i) == f.0
            }
            (Value::Float(a), Value::Float(b)) => a.0 == b.0,
            (Value::Array(a), Value::Array(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| a.loose_eq(b))
            }
            _ => self == other,
        }
    }

    /// Three-way comparison.
    ///
    /// Numbers compare numerically, strings and symbols lexically, arrays
    /// element by element. Values that are otherwise equal compare as equal.
    /// Anything else has no ordering and is an error.
    pub fn compare(&self, other: &Value) -> error::Result<Ordering> {
        let ordering = match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Integer(a), Value::Float(b)) => integer_to_f64(a).partial_cmp(&b.0),
            (Value::Float(a), Value::Integer(b)) => a.0.partial_cmp(&integer_to_f64(b)),
            (Value::Float(a), Value::Float(b)) => a.0.partial_cmp(&b.0),
            (Value::String(a), Value::String(b)) | (Value::Symbol(a), Value::Symbol(b)) => {
                Some(a.cmp(b))
            }
            (Value::Array(a), Value::Array(b)) => return compare_arrays(a, b),
            _ if self.loose_eq(other) => Some(Ordering::Equal),
            _ => None,
        };
        ordering.ok_or_else(|| error::Error::Comparison(self.kind(), other.kind()))
    }

    /// Case equality: does this value, used as a pattern, match `other`?
    ///
    /// A kind matches values of that kind and a range matches the numbers it
    /// covers. Any other pattern matches values loosely equal to it.
    pub fn case_eq(&self, other: &Value) -> bool {
        match self {
            Value::Kind(kind) => other.kind() == *kind,
            Value::Range(range) => range.covers(other),
            _ => self.loose_eq(other),
        }
    }
}

fn compare_arrays(a: &Array, b: &Array) -> error::Result<Ordering> {
    let (a, b) = (a.to_vec(), b.to_vec());
    for (a, b) in a.iter().zip(b.iter()) {
        let ordering = a.compare(b)?;
        if ordering.is_ne() {
            return Ok(ordering);
        }
    }
    Ok(a.len().cmp(&b.len()))
}

/// Interpret what a two-argument comparator block returned for `a` and `b`.
///
/// The block must answer with an integer whose sign is the ordering.
pub(crate) fn comparator_ordering(
    result: &Value,
    a: &Value,
    b: &Value,
) -> error::Result<Ordering> {
    match result {
        Value::Integer(i) => Ok(i.cmp(&IBig::from(0))),
        _ => Err(error::Error::Comparison(a.kind(), b.kind())),
    }
}
