/// Sequences.
///
/// A sequence is anything that can visit its elements in order, with the
/// ability to stop early. That one capability is the [`Enumerable`] trait;
/// [`EnumerableExt`] builds every traversal algorithm on top of it.
mod enumerator;
mod ext;
mod shape;
mod source;
mod traits;

pub use enumerator::{Enumerator, Method};
pub use ext::EnumerableExt;
pub use shape::Yielded;
pub use source::{from_fn, FromFn, Source};
pub use traits::{block, Block, Enumerable, Flow, Visitor};
