use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use ibig::IBig;
use ordered_float::OrderedFloat;
use strum_macros::{Display, EnumDiscriminants};

use crate::error;
use crate::sequence::{Enumerable, Enumerator, Source};

use super::{Array, Map, Range};

/// A dynamic value, as produced by a source and handed to blocks.
///
/// Arrays and maps are shared handles: cloning a `Value` that holds one
/// gives you the same underlying collection, not a copy.
#[derive(Debug, Clone, EnumDiscriminants)]
#[strum_discriminants(name(ValueKind), derive(Display, Hash))]
#[strum_discriminants(cfg_attr(feature = "serde", derive(serde::Serialize)))]
pub enum Value {
    /// The absent value. Falsy.
    Nil,
    /// `true` or `false`. `false` is falsy.
    Boolean(bool),
    /// An arbitrary precision integer.
    Integer(IBig),
    /// A double precision float.
    Float(OrderedFloat<f64>),
    String(Rc<str>),
    Symbol(Rc<str>),
    Array(Array),
    /// An insertion-ordered map.
    Map(Map),
    Range(Range),
    /// A value kind, used as a pattern that matches values of that kind.
    Kind(ValueKind),
    Enumerator(Enumerator),
    /// Any other enumerable source.
    Object(Source),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(name.into())
    }

    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Access the value as a source of elements, if it is one.
    pub fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        match self {
            Value::Array(array) => Some(array),
            Value::Map(map) => Some(map),
            Value::Range(range) => Some(range),
            Value::Enumerator(enumerator) => Some(enumerator),
            Value::Object(source) => Some(source),
            _ => None,
        }
    }

    /// Access the value as an array, if it is one.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

// Strict equality: the notion used for map keys. An integer and a float are
// never the same key, even when numerically equal; see `loose_eq` for that.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Range(a), Value::Range(b)) => a == b,
            (Value::Kind(a), Value::Kind(b)) => a == b,
            (Value::Enumerator(a), Value::Enumerator(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.hash(state),
            Value::String(s) | Value::Symbol(s) => s.hash(state),
            Value::Array(array) => array.hash(state),
            // map equality ignores order, so only the size is hashed
            Value::Map(map) => map.len().hash(state),
            Value::Range(range) => range.hash(state),
            Value::Kind(kind) => kind.hash(state),
            Value::Enumerator(enumerator) => enumerator.identity().hash(state),
            Value::Object(source) => source.identity().hash(state),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<IBig> for Value {
    fn from(i: IBig) -> Self {
        Value::Integer(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(OrderedFloat(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values.into())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Range> for Value {
    fn from(range: Range) -> Self {
        Value::Range(range)
    }
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Self {
        Value::Kind(kind)
    }
}

impl From<Enumerator> for Value {
    fn from(enumerator: Enumerator) -> Self {
        Value::Enumerator(enumerator)
    }
}

impl From<Source> for Value {
    fn from(source: Source) -> Self {
        Value::Object(source)
    }
}

// the result of a three-way comparison, as a comparator block returns it
impl From<Ordering> for Value {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Value::from(-1),
            Ordering::Equal => Value::from(0),
            Ordering::Greater => Value::from(1),
        }
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Nil, Into::into)
    }
}

impl TryFrom<Value> for bool {
    type Error = error::Error;

    fn try_from(value: Value) -> error::Result<bool> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(error::Error::no_implicit_conversion(
                other.kind(),
                "Boolean",
            )),
        }
    }
}
