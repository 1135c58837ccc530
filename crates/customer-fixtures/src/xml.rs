//! Minimal streaming XML writer.
//!
//! Wraps `quick-xml` with the handful of operations the document templates
//! need: a declaration, nested elements and tag/value fields. Text content is
//! escaped by `quick-xml`; fields with an empty value are written as
//! self-closing elements.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Spaces per nesting level.
const INDENT_WIDTH: usize = 4;

/// A tag name paired with its text value.
pub(crate) type Field<'a> = (&'a str, &'a str);

/// Streaming writer producing indented XML into any [`Write`] sink.
pub(crate) struct XmlSink<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlSink<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', INDENT_WIDTH),
        }
    }

    /// Writes `<?xml version="1.0" encoding="UTF-8"?>`.
    pub(crate) fn declaration(&mut self) -> io::Result<()> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub(crate) fn open(&mut self, tag: &str) -> io::Result<()> {
        self.emit(Event::Start(BytesStart::new(tag)))
    }

    pub(crate) fn close(&mut self, tag: &str) -> io::Result<()> {
        self.emit(Event::End(BytesEnd::new(tag)))
    }

    /// Writes `<tag>value</tag>`, or `<tag/>` when `value` is empty.
    pub(crate) fn field(&mut self, tag: &str, value: &str) -> io::Result<()> {
        if value.is_empty() {
            return self.emit(Event::Empty(BytesStart::new(tag)));
        }
        self.open(tag)?;
        self.emit(Event::Text(BytesText::new(value)))?;
        self.close(tag)
    }

    pub(crate) fn fields(&mut self, fields: &[Field<'_>]) -> io::Result<()> {
        fields
            .iter()
            .try_for_each(|&(tag, value)| self.field(tag, value))
    }

    /// Writes `fields` wrapped in a `tag` element.
    pub(crate) fn section(&mut self, tag: &str, fields: &[Field<'_>]) -> io::Result<()> {
        self.open(tag)?;
        self.fields(fields)?;
        self.close(tag)
    }

    /// Terminates the last line, flushes and hands back the sink.
    pub(crate) fn finish(self) -> io::Result<W> {
        let mut inner = self.writer.into_inner();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok(inner)
    }

    fn emit(&mut self, event: Event<'_>) -> io::Result<()> {
        self.writer.write_event(event)
    }
}
