use ibig::IBig;
use ordered_float::OrderedFloat;

use crate::error;
use crate::library;

use super::Value;

pub(crate) fn integer_to_f64(i: &IBig) -> f64 {
    match i64::try_from(i.clone()) {
        Ok(i) => i as f64,
        // beyond i64 we go through the canonical representation
        Err(_) => i.to_string().parse().unwrap_or(f64::NAN),
    }
}

impl Value {
    /// Coerce a size or count argument to an integer.
    ///
    /// Floats are truncated towards zero. Any other kind of value is a type
    /// mismatch.
    pub fn to_integer(&self) -> error::Result<i64> {
        match self {
            Value::Integer(i) => Ok(i64::try_from(i.clone())?),
            Value::Float(OrderedFloat(f)) => {
                if f.is_nan() || f.is_infinite() {
                    Err(error::Error::OutOfRange(format!(
                        "{} cannot be converted into Integer",
                        Value::from(*f)
                    )))
                } else if *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Ok(f.trunc() as i64)
                } else {
                    Err(error::Error::OutOfRange(format!(
                        "float {} out of range of integer",
                        f
                    )))
                }
            }
            _ => Err(error::Error::no_implicit_conversion(self.kind(), "Integer")),
        }
    }

    /// Coerce the value to a finite sequence of elements.
    ///
    /// Anything enumerable is traversed in full; endless ranges are refused
    /// rather than looped over.
    pub fn to_sequence(&self) -> error::Result<Vec<Value>> {
        if let Value::Range(range) = self {
            if range.is_endless() {
                return Err(error::Error::OutOfRange(
                    "cannot convert endless range to an array".to_string(),
                ));
            }
        }
        match self.as_enumerable() {
            Some(source) => library::to_vec(source),
            None => Err(error::Error::TypeMismatch(format!(
                "wrong argument type {} (must respond to :each)",
                self.kind()
            ))),
        }
    }

    /// `self + other`, for numbers, strings and arrays.
    pub fn add(&self, other: &Value) -> error::Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
            (Value::Integer(a), Value::Float(b)) => Ok(Value::from(integer_to_f64(a) + b.0)),
            (Value::Float(a), Value::Integer(b)) => Ok(Value::from(a.0 + integer_to_f64(b))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::from(a.0 + b.0)),
            (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{}{}", a, b))),
            (Value::Array(a), Value::Array(b)) => {
                let mut values = a.to_vec();
                values.extend(b.to_vec());
                Ok(Value::from(values))
            }
            (Value::Integer(_) | Value::Float(_), _) => Err(error::Error::TypeMismatch(format!(
                "{} can't be coerced into {}",
                other.kind(),
                self.kind()
            ))),
            _ => Err(error::Error::no_implicit_conversion(
                other.kind(),
                &self.kind().to_string(),
            )),
        }
    }
}
