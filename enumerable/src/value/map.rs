use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error;
use crate::sequence::{Enumerable, Visitor, Yielded};

use super::Value;

// keys keep their first insertion position, which is what every grouping
// operation reports as "first-seen order"
pub(crate) type ValueIndexMap<V> = IndexMap<Value, V, ahash::RandomState>;

/// A shared, insertion-ordered map from value to value.
///
/// Traversing a map yields each entry as a key/value pair.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<ValueIndexMap<Value>>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Insert an entry. An existing key keeps its position and gets the new
    /// value.
    pub fn insert(&self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    pub fn keys(&self) -> Vec<Value> {
        self.0.borrow().keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().values().cloned().collect()
    }

    pub fn entry_at(&self, index: usize) -> Option<(Value, Value)> {
        self.0
            .borrow()
            .get_index(index)
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    pub fn borrow(&self) -> Ref<'_, ValueIndexMap<Value>> {
        self.0.borrow()
    }

    /// Whether both handles refer to the same map.
    pub fn ptr_eq(&self, other: &Map) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<ValueIndexMap<Value>> for Map {
    fn from(map: ValueIndexMap<Value>) -> Self {
        Map(Rc::new(RefCell::new(map)))
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        iter.into_iter().collect::<ValueIndexMap<Value>>().into()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for Map {}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

impl Enumerable for Map {
    fn each(&self, visitor: &mut Visitor<'_>) -> error::Result<()> {
        let mut index = 0;
        while let Some((key, value)) = self.entry_at(index) {
            if visitor(Yielded::Tuple(vec![key, value]))?.is_break() {
                break;
            }
            index += 1;
        }
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}
