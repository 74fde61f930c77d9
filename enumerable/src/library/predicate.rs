use crate::error;
use crate::sequence::{Block, Enumerable};
use crate::value::Value;

use super::{each_step, proceed, stop};

/// How an element is tested by the predicate operations.
enum Matcher<'a, 'b> {
    /// Case equality against a pattern.
    Pattern(&'a Value),
    /// Loose equality against a value.
    Equal(&'a Value),
    /// Truthiness of the block's result.
    Block(&'a mut Block<'b>),
    /// Truthiness of the element itself.
    Truthy,
}

impl<'a, 'b> Matcher<'a, 'b> {
    fn new(
        operand: Option<&'a Value>,
        block: Option<&'a mut Block<'b>>,
        operation: &'static str,
        by_equality: bool,
    ) -> Self {
        match (operand, block) {
            (Some(operand), block) => {
                if block.is_some() {
                    tracing::warn!(operation, "given block not used");
                }
                if by_equality {
                    Matcher::Equal(operand)
                } else {
                    Matcher::Pattern(operand)
                }
            }
            (None, Some(block)) => Matcher::Block(block),
            (None, None) => Matcher::Truthy,
        }
    }

    fn pattern(
        pattern: Option<&'a Value>,
        block: Option<&'a mut Block<'b>>,
        operation: &'static str,
    ) -> Self {
        Self::new(pattern, block, operation, false)
    }

    fn matches(&mut self, args: &[Value], element: &Value) -> error::Result<bool> {
        Ok(match self {
            Matcher::Pattern(pattern) => pattern.case_eq(element),
            Matcher::Equal(value) => element.loose_eq(value),
            Matcher::Block(block) => block(args)?.is_truthy(),
            Matcher::Truthy => element.is_truthy(),
        })
    }
}

/// Count all elements, the elements equal to an item, or the elements the
/// block accepts.
pub(crate) fn count(
    source: &dyn Enumerable,
    args: &[Value],
    block: Option<&mut Block<'_>>,
) -> error::Result<usize> {
    let mut matcher = match (args, block) {
        ([], None) => None,
        ([], Some(block)) => Some(Matcher::Block(block)),
        ([item], block) => Some(Matcher::new(Some(item), block, "count", true)),
        _ => {
            return Err(error::Error::ArityMismatch {
                given: args.len(),
                expected: "0..1",
            })
        }
    };
    let mut count = 0;
    each_step(source, |args, element| {
        let counted = match &mut matcher {
            Some(matcher) => matcher.matches(args, &element)?,
            None => true,
        };
        if counted {
            count += 1;
        }
        proceed()
    })?;
    Ok(count)
}

pub(crate) fn all(
    source: &dyn Enumerable,
    pattern: Option<&Value>,
    block: Option<&mut Block<'_>>,
) -> error::Result<bool> {
    let mut matcher = Matcher::pattern(pattern, block, "all?");
    let mut result = true;
    each_step(source, |args, element| {
        if !matcher.matches(args, &element)? {
            result = false;
            return Ok(stop("all?"));
        }
        proceed()
    })?;
    Ok(result)
}

pub(crate) fn any(
    source: &dyn Enumerable,
    pattern: Option<&Value>,
    block: Option<&mut Block<'_>>,
) -> error::Result<bool> {
    let mut matcher = Matcher::pattern(pattern, block, "any?");
    let mut result = false;
    each_step(source, |args, element| {
        if matcher.matches(args, &element)? {
            result = true;
            return Ok(stop("any?"));
        }
        proceed()
    })?;
    Ok(result)
}

pub(crate) fn none(
    source: &dyn Enumerable,
    pattern: Option<&Value>,
    block: Option<&mut Block<'_>>,
) -> error::Result<bool> {
    let mut matcher = Matcher::pattern(pattern, block, "none?");
    let mut result = true;
    each_step(source, |args, element| {
        if matcher.matches(args, &element)? {
            result = false;
            return Ok(stop("none?"));
        }
        proceed()
    })?;
    Ok(result)
}

/// Exactly one element matches. Gives up as soon as a second match is seen.
pub(crate) fn one(
    source: &dyn Enumerable,
    pattern: Option<&Value>,
    block: Option<&mut Block<'_>>,
) -> error::Result<bool> {
    let mut matcher = Matcher::pattern(pattern, block, "one?");
    let mut matches = 0;
    each_step(source, |args, element| {
        if matcher.matches(args, &element)? {
            matches += 1;
            if matches > 1 {
                return Ok(stop("one?"));
            }
        }
        proceed()
    })?;
    Ok(matches == 1)
}

/// The position of the first element equal to `value`, or the first the
/// block accepts; nil if there is none.
pub(crate) fn find_index(
    source: &dyn Enumerable,
    value: Option<&Value>,
    block: Option<&mut Block<'_>>,
) -> error::Result<Value> {
    let mut matcher = Matcher::new(value, block, "find_index", true);
    let mut index = 0usize;
    let mut found = None;
    each_step(source, |args, element| {
        if matcher.matches(args, &element)? {
            found = Some(index);
            return Ok(stop("find_index"));
        }
        index += 1;
        proceed()
    })?;
    Ok(found.into())
}
