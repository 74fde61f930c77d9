use crate::value::Value;

/// What a source produces in one step.
///
/// Most sources produce a single value per step. Some produce several, like
/// a map producing a key and a value. Algorithms never look at the arity
/// themselves; they call [`Yielded::shape`] to get the one logical element
/// of the step.
#[derive(Debug, Clone, PartialEq)]
pub enum Yielded {
    Single(Value),
    Tuple(Vec<Value>),
}

impl Yielded {
    /// Build from the raw values of a step.
    ///
    /// No values is a single `nil`, one value is that value, more are a
    /// tuple.
    pub fn from_values(mut values: Vec<Value>) -> Self {
        if values.len() > 1 {
            Yielded::Tuple(values)
        } else {
            Yielded::Single(values.pop().unwrap_or_default())
        }
    }

    /// The logical element: the value itself, or an array of the tuple's
    /// values in position order.
    pub fn shape(self) -> Value {
        match self {
            Yielded::Single(value) => value,
            Yielded::Tuple(values) => Value::from(values),
        }
    }

    /// The raw values, as positional block arguments.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Yielded::Single(value) => vec![value],
            Yielded::Tuple(values) => values,
        }
    }
}

impl From<Value> for Yielded {
    fn from(value: Value) -> Self {
        Yielded::Single(value)
    }
}
