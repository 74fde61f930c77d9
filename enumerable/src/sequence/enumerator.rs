use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error;
use crate::library;
use crate::value::Value;

use super::shape::Yielded;
use super::traits::{Block, Enumerable, Visitor};

/// The operations a deferred enumerator can stand for.
///
/// These are exactly the operations that, called without a block, hand back
/// an [`Enumerator`] instead of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Method {
    Each,
    EachEntry,
    EachWithIndex,
    DropWhile,
    TakeWhile,
    EachCons,
    EachSlice,
    FindIndex,
    GroupBy,
    EachWithObject,
    FilterMap,
    SortBy,
    MaxBy,
    MinBy,
    MinmaxBy,
    FlatMap,
    Cycle,
    ReverseEach,
    Map,
    Select,
    Reject,
    Partition,
    Find,
}

#[derive(Debug)]
struct Deferred {
    receiver: Value,
    method: Method,
    args: Vec<Value>,
}

/// A deferred call: a receiver, the operation to run on it and the arguments
/// to run it with.
///
/// Nothing is traversed until the enumerator is realized with a block, and it
/// can be realized any number of times. Traversing an enumerator itself runs
/// the operation with a block that forwards to the visitor, so the whole set
/// of operations is available on enumerators too.
#[derive(Clone)]
pub struct Enumerator(Rc<Deferred>);

impl Enumerator {
    /// Defer `method` with `args` on `receiver`.
    ///
    /// The receiver has to be enumerable.
    pub fn new(receiver: Value, method: Method, args: Vec<Value>) -> error::Result<Self> {
        if receiver.as_enumerable().is_none() {
            return Err(error::Error::TypeMismatch(format!(
                "wrong argument type {} (must respond to :each)",
                receiver.kind()
            )));
        }
        tracing::trace!(%method, receiver = %receiver, "deferring operation");
        Ok(Enumerator(Rc::new(Deferred {
            receiver,
            method,
            args,
        })))
    }

    /// Defer an operation given by its name, like `"each_slice"`.
    pub fn by_name(receiver: Value, name: &str, args: Vec<Value>) -> error::Result<Self> {
        let method: Method = name.parse().map_err(|_| {
            error::Error::InvalidArgument(format!("undefined method `{}' for enumerator", name))
        })?;
        Self::new(receiver, method, args)
    }

    pub fn receiver(&self) -> &Value {
        &self.0.receiver
    }

    pub fn method(&self) -> Method {
        self.0.method
    }

    pub fn args(&self) -> &[Value] {
        &self.0.args
    }

    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    fn arg(&self, index: usize) -> Value {
        self.0.args.get(index).cloned().unwrap_or(Value::Nil)
    }

    /// Run the deferred operation with `block`.
    ///
    /// The outcome is what calling the operation directly with the same
    /// arguments and block would have produced.
    pub fn realize(&self, block: &mut Block<'_>) -> error::Result<Value> {
        tracing::trace!(method = %self.method(), "realizing enumerator");
        let source = self.receiver().as_enumerable().ok_or_else(|| {
            error::Error::TypeMismatch(format!(
                "wrong argument type {} (must respond to :each)",
                self.receiver().kind()
            ))
        })?;
        match self.method() {
            Method::Each => {
                library::each(source, block)?;
                Ok(self.receiver().clone())
            }
            Method::EachEntry => {
                library::each_entry(source, block)?;
                Ok(self.receiver().clone())
            }
            Method::EachWithIndex => {
                library::each_with_index(source, block)?;
                Ok(self.receiver().clone())
            }
            Method::ReverseEach => {
                library::reverse_each(source, block)?;
                Ok(self.receiver().clone())
            }
            Method::DropWhile => library::drop_while(source, block),
            Method::TakeWhile => library::take_while(source, block),
            Method::EachCons => library::each_cons(source, &self.arg(0), block),
            Method::EachSlice => library::each_slice(source, &self.arg(0), block),
            Method::FindIndex => library::find_index(source, None, Some(block)),
            Method::GroupBy => library::group_by(source, block),
            Method::EachWithObject => library::each_with_object(source, self.arg(0), block),
            Method::FilterMap => library::filter_map(source, block),
            Method::SortBy => library::sort_by(source, block),
            Method::MaxBy => library::max_by(source, block),
            Method::MinBy => library::min_by(source, block),
            Method::MinmaxBy => library::minmax_by(source, block),
            Method::FlatMap => library::flat_map(source, block),
            Method::Cycle => library::cycle(source, &self.arg(0), block),
            Method::Map => library::map(source, block),
            Method::Select => library::select(source, block),
            Method::Reject => library::reject(source, block),
            Method::Partition => library::partition(source, block),
            Method::Find => library::find(source, block),
        }
    }
}

impl Enumerable for Enumerator {
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()> {
        // The operation only knows how to call a block, so an early stop
        // asked for by the visitor travels back through it as `Error::Stop`.
        // Once stopped the visitor is never called again, even if the
        // operation calls the block once more while unwinding.
        let stopped = Cell::new(false);
        let mut forward = |args: &[Value]| -> error::Result<Value> {
            if stopped.get() {
                return Err(error::Error::Stop);
            }
            if visitor(Yielded::from_values(args.to_vec()))?.is_break() {
                stopped.set(true);
                return Err(error::Error::Stop);
            }
            Ok(Value::Nil)
        };
        match self.realize(&mut forward) {
            Ok(_) => Ok(()),
            // a stop that belongs to an enumerator further out keeps going
            Err(error::Error::Stop) if stopped.get() => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn to_value(&self) -> Value {
        Value::Enumerator(self.clone())
    }
}

impl PartialEq for Enumerator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Enumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumerator")
            .field("receiver", &self.0.receiver)
            .field("method", &self.0.method)
            .field("args", &self.0.args)
            .finish()
    }
}

impl fmt::Display for Enumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Enumerator: {}:{}", self.receiver(), self.method())?;
        if !self.args().is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.args().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ")")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{block, EnumerableExt};
    use crate::value::{Array, Range};
    use crate::ErrorKind;

    fn one_to_three() -> Value {
        Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])
    }

    #[test]
    fn test_display() {
        let enumerator =
            Enumerator::new(one_to_three(), Method::EachSlice, vec![Value::from(2)]).unwrap();
        assert_eq!(
            enumerator.to_string(),
            "#<Enumerator: [1, 2, 3]:each_slice(2)>"
        );
        let enumerator = Enumerator::new(one_to_three(), Method::MinmaxBy, vec![]).unwrap();
        assert_eq!(enumerator.to_string(), "#<Enumerator: [1, 2, 3]:minmax_by>");
    }

    #[test]
    fn test_by_name() {
        let enumerator = Enumerator::by_name(one_to_three(), "each_with_object", vec![]).unwrap();
        assert_eq!(enumerator.method(), Method::EachWithObject);
        let error = Enumerator::by_name(one_to_three(), "frobnicate", vec![]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_receiver_must_be_enumerable() {
        let error = Enumerator::new(Value::from(1), Method::Each, vec![]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "wrong argument type Integer (must respond to :each)"
        );
    }

    #[test]
    fn test_realize_returns_receiver_for_each() {
        let array = Array::from(vec![Value::from(1), Value::from(2)]);
        let enumerator = Enumerator::new(array.to_value(), Method::Each, vec![]).unwrap();
        let seen = Array::new();
        let result = enumerator
            .realize(&mut block(|args| {
                seen.push(args[0].clone());
                Ok(Value::Nil)
            }))
            .unwrap();
        assert!(result.as_array().unwrap().ptr_eq(&array));
        assert_eq!(seen.to_string(), "[1, 2]");
    }

    #[test]
    fn test_traversal_stops_inside_endless_operation() {
        let cycle = Enumerator::new(one_to_three(), Method::Cycle, vec![]).unwrap();
        let taken = cycle.take(&Value::from(7)).unwrap();
        assert_eq!(taken.to_string(), "[1, 2, 3, 1, 2, 3, 1]");
    }

    #[test]
    fn test_nested_enumerators_stop() {
        let inner = Enumerator::new(Value::from(Range::endless(1)), Method::EachSlice, vec![
            Value::from(2),
        ])
        .unwrap();
        let outer = Enumerator::new(inner.to_value(), Method::EachWithIndex, vec![]).unwrap();
        let taken = outer.first(&[Value::from(2)]).unwrap();
        assert_eq!(taken.to_string(), "[[[1, 2], 0], [[3, 4], 1]]");
    }

    #[test]
    fn test_identity() {
        let a = Enumerator::new(one_to_three(), Method::Each, vec![]).unwrap();
        let b = Enumerator::new(one_to_three(), Method::Each, vec![]).unwrap();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
