//! Shared helpers for the black-box test suites.

#![allow(dead_code)]

use jsonrelay::{Backend, Error, Extensions, Parser};

/// One recorded backend notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Str(String),
    Int(i64),
    UInt(u64),
    Double(f64),
    Bool(bool),
    Null,
    BeginArray,
    EndArray,
    BeginObject,
    Key(String),
    EndObject,
}

/// A backend that records every notification it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Backend for Recorder {
    type Result = Vec<Event>;

    fn result(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn string_value(&mut self, s: &str) -> Result<(), Error> {
        self.events.push(Event::Str(s.to_string()));
        Ok(())
    }

    fn int64_value(&mut self, v: i64) -> Result<(), Error> {
        self.events.push(Event::Int(v));
        Ok(())
    }

    fn uint64_value(&mut self, v: u64) -> Result<(), Error> {
        self.events.push(Event::UInt(v));
        Ok(())
    }

    fn double_value(&mut self, v: f64) -> Result<(), Error> {
        self.events.push(Event::Double(v));
        Ok(())
    }

    fn boolean_value(&mut self, v: bool) -> Result<(), Error> {
        self.events.push(Event::Bool(v));
        Ok(())
    }

    fn null_value(&mut self) -> Result<(), Error> {
        self.events.push(Event::Null);
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), Error> {
        self.events.push(Event::BeginArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        self.events.push(Event::EndArray);
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), Error> {
        self.events.push(Event::BeginObject);
        Ok(())
    }

    fn key(&mut self, k: &str) -> Result<(), Error> {
        self.events.push(Event::Key(k.to_string()));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        self.events.push(Event::EndObject);
        Ok(())
    }
}

/// Parses `src` in one chunk and returns the recorded events.
pub fn parse(src: &str, extensions: Extensions) -> Result<Vec<Event>, Error> {
    let mut parser = Parser::new(Recorder::default(), extensions);
    parser.input(src.as_bytes());
    parser.eof()
}

/// Parses the concatenation of `chunks`, fed one at a time.
pub fn parse_chunked(chunks: &[&[u8]], extensions: Extensions) -> Result<Vec<Event>, Error> {
    let mut parser = Parser::new(Recorder::default(), extensions);
    for &chunk in chunks {
        parser.input(chunk);
    }
    parser.eof()
}
