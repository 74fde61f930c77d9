use ibig::IBig;

use crate::error;
use crate::sequence::{Enumerable, Visitor, Yielded};

use super::convert::integer_to_f64;
use super::Value;

/// An integer range. It may be inclusive, exclusive or endless.
///
/// An endless range is an unbounded source; bound its traversal with
/// `take`, `first` or an early-terminating predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    start: IBig,
    end: Option<IBig>,
    exclusive: bool,
}

impl Range {
    /// `start..=end`
    pub fn new(start: impl Into<IBig>, end: impl Into<IBig>) -> Self {
        Range {
            start: start.into(),
            end: Some(end.into()),
            exclusive: false,
        }
    }

    /// `start..end`
    pub fn exclusive(start: impl Into<IBig>, end: impl Into<IBig>) -> Self {
        Range {
            start: start.into(),
            end: Some(end.into()),
            exclusive: true,
        }
    }

    /// `start..`
    pub fn endless(start: impl Into<IBig>) -> Self {
        Range {
            start: start.into(),
            end: None,
            exclusive: false,
        }
    }

    pub fn start(&self) -> &IBig {
        &self.start
    }

    pub fn end(&self) -> Option<&IBig> {
        self.end.as_ref()
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn is_endless(&self) -> bool {
        self.end.is_none()
    }

    fn admits(&self, i: &IBig) -> bool {
        match &self.end {
            None => true,
            Some(end) if self.exclusive => i < end,
            Some(end) => i <= end,
        }
    }

    /// Whether a numeric value lies within the range. Non-numeric values
    /// never do.
    pub fn covers(&self, value: &Value) -> bool {
        match value {
            Value::Integer(i) => i >= &self.start && self.admits(i),
            Value::Float(f) => {
                let f = f.0;
                if f.is_nan() || f < integer_to_f64(&self.start) {
                    return false;
                }
                match &self.end {
                    None => true,
                    Some(end) if self.exclusive => f < integer_to_f64(end),
                    Some(end) => f <= integer_to_f64(end),
                }
            }
            _ => false,
        }
    }
}

impl Enumerable for Range {
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()> {
        let mut i = self.start.clone();
        while self.admits(&i) {
            if visitor(Yielded::Single(Value::Integer(i.clone())))?.is_break() {
                break;
            }
            i += 1;
        }
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Range(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers() {
        let range = Range::new(1, 6);
        assert!(range.covers(&Value::from(1)));
        assert!(range.covers(&Value::from(6)));
        assert!(range.covers(&Value::from(2.5)));
        assert!(!range.covers(&Value::from(7)));
        assert!(!range.covers(&Value::from("3")));
        assert!(!Range::exclusive(1, 6).covers(&Value::from(6)));
        assert!(Range::endless(0).covers(&Value::from(1_000_000)));
    }

    #[test]
    fn test_empty_when_end_before_start() {
        let mut visits = 0;
        Range::new(3, 1)
            .each(&mut |_: Yielded| {
                visits += 1;
                Ok(crate::sequence::Flow::Continue(()))
            })
            .unwrap();
        assert_eq!(visits, 0);
    }
}
