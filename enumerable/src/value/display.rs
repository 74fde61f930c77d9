use std::fmt;

use super::{Array, Map, Range, Value};

// values render in inspect notation, so strings are quoted and nil is
// spelled out
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(float) => {
                let float = float.0;
                if float.is_nan() {
                    write!(f, "NaN")
                } else if float.is_infinite() {
                    let sign = if float.is_sign_negative() { "-" } else { "" };
                    write!(f, "{}Infinity", sign)
                } else {
                    write!(f, "{:?}", float)
                }
            }
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::Array(array) => write!(f, "{}", array),
            Value::Map(map) => write!(f, "{}", map),
            Value::Range(range) => write!(f, "{}", range),
            Value::Kind(kind) => write!(f, "{}", kind),
            Value::Enumerator(enumerator) => write!(f, "{}", enumerator),
            Value::Object(_) => write!(f, "#<Object>"),
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{")?;
        for (i, (key, value)) in self.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.is_exclusive() { "..." } else { ".." };
        match self.end() {
            Some(end) => write!(f, "{}{}{}", self.start(), dots, end),
            None => write!(f, "{}{}", self.start(), dots),
        }
    }
}
