//! Streaming, incremental JSON parsing with SAX-style events.
//!
//! [`Parser`] accepts UTF-8 input in arbitrary byte chunks, validates it
//! against RFC 7159 (plus an opt-in set of [`Extensions`]), and pushes a
//! stream of events into a [`Backend`] as the document is recognized. The
//! backend decides what the events become: [`NullBackend`] discards them,
//! [`DomBackend`] materializes a [`Value`] tree, and user code can implement
//! [`Backend`] for anything else.
//!
//! Input may be split anywhere: between tokens, inside a string, or in the
//! middle of a multi-byte UTF-8 sequence. The parser suspends its state at
//! each [`Parser::input`] boundary and resumes seamlessly with the next
//! chunk.
//!
//! ```rust
//! use jsonrelay::{DomBackend, Extensions, Parser, Value};
//!
//! let mut parser = Parser::new(DomBackend::new(), Extensions::empty());
//! parser.input(b"{\"greeting\": \"he").input(b"llo\"}");
//! let root = parser.eof().unwrap();
//! let Some(Value::Object(object)) = root else {
//!     panic!("expected an object root");
//! };
//! assert_eq!(object["greeting"], Value::String("hello".into()));
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod backend;
mod coord;
mod dom;
mod error;
mod escape_buffer;
mod extensions;
mod parser;
mod utf8;
mod value;

pub use backend::{Backend, NullBackend};
pub use coord::Coord;
pub use dom::DomBackend;
pub use error::Error;
pub use extensions::Extensions;
pub use parser::Parser;
pub use value::{Array, Object, Value};
