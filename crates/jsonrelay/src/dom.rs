//! A backend that materializes the event stream into a [`Value`] tree.

use alloc::{string::ToString, vec::Vec};

use crate::{
    backend::Backend,
    error::Error,
    value::{Object, Value},
};

/// Build-stack entry: either a finished value (a scalar, a completed
/// container, or an object key awaiting its value) or the marker that
/// separates a container's members from the enclosing scope.
#[derive(Debug)]
enum Slot {
    Mark,
    Value(Value),
}

/// Builds a [`Value`] tree from the parse events.
///
/// Containers are assembled on an explicit stack: `begin_array` /
/// `begin_object` push a marker, members pile up above it, and the matching
/// `end_*` event collapses everything down to the marker into a single
/// value. Duplicate object keys follow last-write-wins: the value of the
/// final occurrence lands at the position of the first.
///
/// The stack is bounded; an input whose open containers and pending members
/// exceed [`DomBackend::DEFAULT_ELEMENT_LIMIT`] (or the limit given to
/// [`DomBackend::with_limit`]) fails the parse with
/// [`Error::NestingTooDeep`].
///
/// ```rust
/// use jsonrelay::{DomBackend, Extensions, Parser, Value};
///
/// let mut parser = Parser::new(DomBackend::new(), Extensions::empty());
/// parser.input(b"[null, 7]");
/// assert_eq!(
///     parser.eof().unwrap(),
///     Some(Value::Array(vec![Value::Null, Value::UInt(7)]))
/// );
/// ```
#[derive(Debug)]
pub struct DomBackend {
    stack: Vec<Slot>,
    limit: usize,
}

impl DomBackend {
    /// Bound on the build stack for a backend made with
    /// [`DomBackend::new`].
    pub const DEFAULT_ELEMENT_LIMIT: usize = 1024;

    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_ELEMENT_LIMIT)
    }

    /// Creates a backend whose build stack may hold at most `limit`
    /// entries.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    fn push(&mut self, slot: Slot) -> Result<(), Error> {
        if self.stack.len() >= self.limit {
            return Err(Error::NestingTooDeep);
        }
        self.stack.push(slot);
        Ok(())
    }
}

impl Default for DomBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for DomBackend {
    type Result = Option<Value>;

    fn result(&mut self) -> Self::Result {
        match self.stack.pop() {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    fn string_value(&mut self, s: &str) -> Result<(), Error> {
        self.push(Slot::Value(Value::String(s.into())))
    }

    fn int64_value(&mut self, v: i64) -> Result<(), Error> {
        self.push(Slot::Value(Value::Int(v)))
    }

    fn uint64_value(&mut self, v: u64) -> Result<(), Error> {
        self.push(Slot::Value(Value::UInt(v)))
    }

    fn double_value(&mut self, v: f64) -> Result<(), Error> {
        self.push(Slot::Value(Value::Double(v)))
    }

    fn boolean_value(&mut self, v: bool) -> Result<(), Error> {
        self.push(Slot::Value(Value::Boolean(v)))
    }

    fn null_value(&mut self) -> Result<(), Error> {
        self.push(Slot::Value(Value::Null))
    }

    fn begin_array(&mut self) -> Result<(), Error> {
        self.push(Slot::Mark)
    }

    fn end_array(&mut self) -> Result<(), Error> {
        let mut elements = Vec::new();
        loop {
            match self.stack.pop() {
                Some(Slot::Value(value)) => elements.push(value),
                Some(Slot::Mark) | None => break,
            }
        }
        elements.reverse();
        self.stack.push(Slot::Value(Value::Array(elements)));
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), Error> {
        self.push(Slot::Mark)
    }

    fn key(&mut self, k: &str) -> Result<(), Error> {
        self.push(Slot::Value(Value::String(k.to_string())))
    }

    fn end_object(&mut self) -> Result<(), Error> {
        // Members sit on the stack as alternating key and value entries;
        // the value of each pair is on top.
        let mut pairs = Vec::new();
        loop {
            let value = match self.stack.pop() {
                Some(Slot::Value(value)) => value,
                Some(Slot::Mark) | None => break,
            };
            let key = match self.stack.pop() {
                Some(Slot::Value(Value::String(k))) => k,
                _ => {
                    debug_assert!(false, "object member without a string key");
                    break;
                }
            };
            pairs.push((key, value));
        }
        // Pairs were popped in reverse document order; inserting in
        // document order makes later duplicates overwrite earlier values
        // while keeping the position of the first occurrence.
        let mut object = Object::with_capacity_and_hasher(pairs.len(), Default::default());
        for (key, value) in pairs.into_iter().rev() {
            object.insert(key, value);
        }
        self.stack.push(Slot::Value(Value::Object(object)));
        Ok(())
    }
}
