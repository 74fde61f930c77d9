use std::fmt;
use std::rc::Rc;

use crate::error;
use crate::value::Value;

use super::traits::{Enumerable, Visitor};

/// A type-erased, shared enumerable source.
#[derive(Clone)]
pub struct Source(Rc<dyn Enumerable>);

impl Source {
    pub fn new<E>(enumerable: E) -> Self
    where
        E: Enumerable + 'static,
    {
        Source(Rc::new(enumerable))
    }

    pub fn ptr_eq(&self, other: &Source) -> bool {
        self.identity() == other.identity()
    }

    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl Enumerable for Source {
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()> {
        self.0.each(visitor)
    }

    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source({:#x})", self.identity())
    }
}

/// A source backed by a closure that drives the visitor itself.
///
/// Handy for generators and for sources that produce several values per
/// step. Create one with [`from_fn`].
pub struct FromFn<F>(Rc<F>);

impl<F> Clone for FromFn<F> {
    fn clone(&self) -> Self {
        FromFn(self.0.clone())
    }
}

/// Create a source from a closure that calls the visitor once per step.
///
/// The closure must honour the visitor's early-stop answer.
///
/// ```
/// use enumerable::{from_fn, EnumerableExt, Value, Yielded};
///
/// let naturals = from_fn(|visitor| {
///     let mut i = 0;
///     while visitor(Yielded::Single(Value::from(i)))?.is_continue() {
///         i += 1;
///     }
///     Ok(())
/// });
/// assert_eq!(naturals.first(&[Value::from(3)]).unwrap().to_string(), "[0, 1, 2]");
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&mut Visitor<'_>) -> error::Result<()>,
{
    FromFn(Rc::new(f))
}

impl<F> Enumerable for FromFn<F>
where
    F: Fn(&mut Visitor<'_>) -> error::Result<()>,
{
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()> {
        (self.0)(visitor)
    }
}
