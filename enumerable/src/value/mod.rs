/// Values.
///
/// The dynamic values that sources produce and blocks consume, together with
/// the capabilities the algorithms rely on: truthiness, equality, ordering,
/// case equality and coercion to integers and sequences.
mod array;
mod compare;
mod convert;
mod display;
mod map;
mod range;
mod value_core;

pub use array::Array;
pub(crate) use compare::comparator_ordering;
pub use map::Map;
pub(crate) use map::ValueIndexMap;
pub use range::Range;
pub use value_core::{Value, ValueKind};
