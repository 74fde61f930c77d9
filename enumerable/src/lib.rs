//! Traversal algorithms derived from a single iteration capability.
//!
//! Implement [`Enumerable`] for a type (visit each element in order, stop
//! when asked to) and [`EnumerableExt`] gives it windowing, predicates,
//! grouping, ordering, pairing and repetition on top.
//!
//! ```
//! use enumerable::{block, EnumerableExt, Range, Value};
//!
//! let range = Range::new(1, 10);
//! let slices = enumerable::Array::new();
//! range
//!     .each_slice(
//!         &Value::from(3),
//!         Some(&mut block(|args| {
//!             slices.push(args[0].clone());
//!             Ok(Value::Nil)
//!         })),
//!     )
//!     .unwrap();
//! assert_eq!(slices.to_string(), "[[1, 2, 3], [4, 5, 6], [7, 8, 9], [10]]");
//! ```
pub mod error;
mod library;
pub mod sequence;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use sequence::{
    block, from_fn, Block, Enumerable, EnumerableExt, Enumerator, Flow, FromFn, Method, Source,
    Visitor, Yielded,
};
pub use value::{Array, Map, Range, Value, ValueKind};
