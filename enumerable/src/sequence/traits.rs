use std::ops::ControlFlow;

use crate::error;
use crate::value::Value;

use super::shape::Yielded;
use super::source::Source;

/// What a visitor answers after each step: keep going, or stop.
///
/// Stopping is a normal, successful way for a traversal to end.
pub type Flow = ControlFlow<()>;

/// The callback a source invokes once per step.
pub type Visitor<'a> = dyn FnMut(Yielded) -> error::Result<Flow> + 'a;

/// A caller-supplied block: positional arguments in, one value out.
pub type Block<'a> = dyn FnMut(&[Value]) -> error::Result<Value> + 'a;

/// Pin down the signature of a closure meant to be passed as a [`Block`].
///
/// ```
/// use enumerable::{block, EnumerableExt, Range, Value};
///
/// let mut by_parity = block(|args| Ok(Value::from(args[0].to_integer()? % 2)));
/// let groups = Range::new(1, 4).group_by(Some(&mut by_parity)).unwrap();
/// assert_eq!(groups.to_string(), "{1 => [1, 3], 0 => [2, 4]}");
/// ```
pub fn block<F>(f: F) -> F
where
    F: FnMut(&[Value]) -> error::Result<Value>,
{
    f
}

/// The iteration capability: the one thing a source has to provide.
///
/// Implement this and [`EnumerableExt`](super::EnumerableExt) provides the
/// whole set of traversal algorithms on top of it.
pub trait Enumerable {
    /// Invoke `visitor` once per element, in order.
    ///
    /// When the visitor answers [`Flow::Break`] the implementation must stop
    /// without calling it again and return `Ok(())`. An error from the
    /// visitor ends the traversal and is returned unchanged.
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()>;

    /// The source as a value, so it can be handed back to callers and
    /// recorded as the receiver of a deferred enumerator.
    fn to_value(&self) -> Value
    where
        Self: Sized + Clone + 'static,
    {
        Value::Object(Source::new(self.clone()))
    }
}
