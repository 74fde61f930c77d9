use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error;
use crate::sequence::{Enumerable, Flow, Visitor, Yielded};

use super::Value;

/// A shared, growable array of values.
///
/// Clones share storage, so an array handed to a block as a seed can be
/// filled in by that block and observed by the caller afterwards.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both handles refer to the same array.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(values)))
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for Array {}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.borrow().hash(state);
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

impl Enumerable for Array {
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()> {
        // index each step rather than holding a borrow, so the visitor may
        // push onto the array it is iterating
        let mut index = 0;
        while let Some(value) = self.get(index) {
            if visitor(Yielded::Single(value))?.is_break() {
                break;
            }
            index += 1;
        }
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Array(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let array = Array::new();
        let alias = array.clone();
        alias.push(1);
        assert_eq!(array.len(), 1);
        assert!(array.ptr_eq(&alias));
        assert!(!array.ptr_eq(&Array::from(vec![Value::from(1)])));
        assert_eq!(array, Array::from(vec![Value::from(1)]));
    }

    #[test]
    fn test_each_stops_on_break() {
        let array: Array = (1..=5).map(Value::from).collect();
        let mut seen = Vec::new();
        array
            .each(&mut |yielded: Yielded| {
                let value = yielded.shape();
                let stop = value == Value::from(3);
                seen.push(value);
                Ok(if stop {
                    Flow::Break(())
                } else {
                    Flow::Continue(())
                })
            })
            .unwrap();
        assert_eq!(seen, vec![Value::from(1), Value::from(2), Value::from(3)]);
    }
}
