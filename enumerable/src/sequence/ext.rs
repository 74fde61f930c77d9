use crate::error;
use crate::library;
use crate::value::Value;

use super::enumerator::{Enumerator, Method};
use super::traits::{Block, Enumerable};

fn deferred<S>(source: &S, method: Method, args: Vec<Value>) -> error::Result<Value>
where
    S: EnumerableExt,
{
    Ok(source.to_enum(method, args)?.into())
}

/// The traversal algorithms, available on anything [`Enumerable`].
///
/// Operations that take an optional block return a deferred [`Enumerator`]
/// (as [`Value::Enumerator`]) when called without one. Realizing that
/// enumerator later with a block is the same as calling the operation with
/// that block now.
///
/// Blocks receive the raw values of a step as their arguments: a map's block
/// gets the key and the value, an array's block gets the element.
pub trait EnumerableExt: Enumerable + Clone + 'static {
    /// Defer `method` with `args` on this source.
    fn to_enum(&self, method: Method, args: Vec<Value>) -> error::Result<Enumerator> {
        Enumerator::new(self.to_value(), method, args)
    }

    /// All elements, in order.
    fn to_a(&self) -> error::Result<Value> {
        library::to_a(self)
    }

    /// Alias of [`EnumerableExt::to_a`].
    fn entries(&self) -> error::Result<Value> {
        self.to_a()
    }

    /// Call the block once per element, passing multi-value steps as one
    /// array. Returns the receiver.
    fn each_entry(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => {
                library::each_entry(self, block)?;
                Ok(self.to_value())
            }
            None => deferred(self, Method::EachEntry, vec![]),
        }
    }

    /// Call the block with each element and its position. Returns the
    /// receiver.
    fn each_with_index(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => {
                library::each_with_index(self, block)?;
                Ok(self.to_value())
            }
            None => deferred(self, Method::EachWithIndex, vec![]),
        }
    }

    /// Everything after the first `n` elements.
    ///
    /// A negative `n` is an [`error::Error::InvalidArgument`].
    fn drop(&self, n: &Value) -> error::Result<Value> {
        library::drop(self, n)
    }

    /// The first `n` elements. The source is not traversed further than
    /// needed, so this is safe on endless sources.
    ///
    /// A negative `n` is an [`error::Error::InvalidArgument`].
    fn take(&self, n: &Value) -> error::Result<Value> {
        library::take(self, n)
    }

    /// Skip elements while the block holds, keep everything from the first
    /// element where it doesn't.
    fn drop_while(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::drop_while(self, block),
            None => deferred(self, Method::DropWhile, vec![]),
        }
    }

    /// Keep elements while the block holds; stop at the first where it
    /// doesn't.
    fn take_while(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::take_while(self, block),
            None => deferred(self, Method::TakeWhile, vec![]),
        }
    }

    /// Sliding windows of `n` consecutive elements.
    fn each_cons(&self, n: &Value, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::slice_size(n)?;
        match block {
            Some(block) => library::each_cons(self, n, block),
            None => deferred(self, Method::EachCons, vec![n.clone()]),
        }
    }

    /// Consecutive chunks of `n` elements; the last one may be shorter.
    fn each_slice(&self, n: &Value, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::slice_size(n)?;
        match block {
            Some(block) => library::each_slice(self, n, block),
            None => deferred(self, Method::EachSlice, vec![n.clone()]),
        }
    }

    /// `first()` is the first element or nil; `first(n)` is `take(n)`.
    fn first(&self, args: &[Value]) -> error::Result<Value> {
        library::first(self, args)
    }

    /// `count()`, `count(item)` or count by block.
    fn count(&self, args: &[Value], block: Option<&mut Block<'_>>) -> error::Result<usize> {
        library::count(self, args, block)
    }

    /// `all?`: with a pattern, a block, or by the elements' truthiness.
    fn all(&self, pattern: Option<&Value>, block: Option<&mut Block<'_>>) -> error::Result<bool> {
        library::all(self, pattern, block)
    }

    fn any(&self, pattern: Option<&Value>, block: Option<&mut Block<'_>>) -> error::Result<bool> {
        library::any(self, pattern, block)
    }

    fn none(&self, pattern: Option<&Value>, block: Option<&mut Block<'_>>) -> error::Result<bool> {
        library::none(self, pattern, block)
    }

    /// True when exactly one element matches.
    fn one(&self, pattern: Option<&Value>, block: Option<&mut Block<'_>>) -> error::Result<bool> {
        library::one(self, pattern, block)
    }

    /// Position of the first element equal to `value` or accepted by the
    /// block, or nil.
    fn find_index(
        &self,
        value: Option<&Value>,
        block: Option<&mut Block<'_>>,
    ) -> error::Result<Value> {
        if value.is_none() && block.is_none() {
            return deferred(self, Method::FindIndex, vec![]);
        }
        library::find_index(self, value, block)
    }

    /// Map from block result to the elements that produced it.
    fn group_by(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::group_by(self, block),
            None => deferred(self, Method::GroupBy, vec![]),
        }
    }

    /// Map from element to how often it occurs.
    fn tally(&self) -> error::Result<Value> {
        library::tally(self)
    }

    fn uniq(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::uniq(self, block)
    }

    fn to_h(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::to_h(self, block)
    }

    /// Call the block with each element and `seed`; returns `seed` itself.
    fn each_with_object(
        &self,
        seed: Value,
        block: Option<&mut Block<'_>>,
    ) -> error::Result<Value> {
        match block {
            Some(block) => library::each_with_object(self, seed, block),
            None => deferred(self, Method::EachWithObject, vec![seed]),
        }
    }

    fn filter_map(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::filter_map(self, block),
            None => deferred(self, Method::FilterMap, vec![]),
        }
    }

    fn sort_by(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::sort_by(self, block),
            None => deferred(self, Method::SortBy, vec![]),
        }
    }

    fn max_by(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::max_by(self, block),
            None => deferred(self, Method::MaxBy, vec![]),
        }
    }

    fn min_by(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::min_by(self, block),
            None => deferred(self, Method::MinBy, vec![]),
        }
    }

    /// `[min, max]`, by the elements' ordering or a comparator block that
    /// answers -1, 0 or 1.
    fn minmax(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::minmax(self, block)
    }

    fn minmax_by(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::minmax_by(self, block),
            None => deferred(self, Method::MinmaxBy, vec![]),
        }
    }

    fn min(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::min(self, block)
    }

    fn max(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::max(self, block)
    }

    fn sort(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::sort(self, block)
    }

    fn flat_map(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::flat_map(self, block),
            None => deferred(self, Method::FlatMap, vec![]),
        }
    }

    /// Alias of [`EnumerableExt::flat_map`].
    fn collect_concat(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        self.flat_map(block)
    }

    /// Tuples of each element with the elements at the same position in
    /// `others`.
    fn zip(&self, others: &[Value], block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::zip(self, others, block)
    }

    /// Repeat the elements `n` times, or forever when `n` is nil.
    fn cycle(&self, n: &Value, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::cycle(self, n, block),
            None => deferred(self, Method::Cycle, vec![n.clone()]),
        }
    }

    /// Call the block for every element, last to first. Returns the
    /// receiver.
    fn reverse_each(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => {
                library::reverse_each(self, block)?;
                Ok(self.to_value())
            }
            None => deferred(self, Method::ReverseEach, vec![]),
        }
    }

    fn map(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::map(self, block),
            None => deferred(self, Method::Map, vec![]),
        }
    }

    /// Alias of [`EnumerableExt::map`].
    fn collect(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        self.map(block)
    }

    fn select(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::select(self, block),
            None => deferred(self, Method::Select, vec![]),
        }
    }

    /// Alias of [`EnumerableExt::select`].
    fn filter(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        self.select(block)
    }

    fn reject(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::reject(self, block),
            None => deferred(self, Method::Reject, vec![]),
        }
    }

    /// `[accepted, rejected]` by the block.
    fn partition(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::partition(self, block),
            None => deferred(self, Method::Partition, vec![]),
        }
    }

    /// The first element the block accepts, or nil.
    fn find(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        match block {
            Some(block) => library::find(self, block),
            None => deferred(self, Method::Find, vec![]),
        }
    }

    /// Alias of [`EnumerableExt::find`].
    fn detect(&self, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        self.find(block)
    }

    fn include(&self, value: &Value) -> error::Result<bool> {
        library::include(self, value)
    }

    /// Left fold over the elements, starting from `init` or the first
    /// element.
    fn inject(&self, init: Option<Value>, block: &mut Block<'_>) -> error::Result<Value> {
        library::inject(self, init, block)
    }

    fn sum(&self, init: Option<Value>, block: Option<&mut Block<'_>>) -> error::Result<Value> {
        library::sum(self, init, block)
    }
}

impl<T> EnumerableExt for T where T: Enumerable + Clone + 'static {}
