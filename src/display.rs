//! Destinations that accept markup for display.
//!
//! A notebook host decides how HTML reaches the page. Each sink here speaks
//! one such convention; callers pick the one their host understands.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::markup::Markup;

/// Errors that can occur while handing markup to a sink
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to write markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode display bundle: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait DisplaySink {
    fn display(&mut self, markup: &Markup) -> Result<(), DisplayError>;
}

/// Writes the raw HTML
pub struct HtmlSink<W: Write> {
    writer: W,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for HtmlSink<W> {
    fn display(&mut self, markup: &Markup) -> Result<(), DisplayError> {
        self.writer.write_all(markup.as_str().as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes markup framed for the evcxr notebook kernel, which renders
/// anything between the content markers on stdout as rich output
pub struct EvcxrSink<W: Write> {
    writer: W,
}

impl<W: Write> EvcxrSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for EvcxrSink<W> {
    fn display(&mut self, markup: &Markup) -> Result<(), DisplayError> {
        writeln!(self.writer, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(self.writer, "{markup}")?;
        writeln!(self.writer, "EVCXR_END_CONTENT")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MimeBundle<'a> {
    data: MimeData<'a>,
    metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct MimeData<'a> {
    #[serde(rename = "text/html")]
    html: &'a str,
}

/// Writes one JSON MIME bundle per line, shaped like the content of a
/// Jupyter `display_data` message
pub struct BundleSink<W: Write> {
    writer: W,
}

impl<W: Write> BundleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for BundleSink<W> {
    fn display(&mut self, markup: &Markup) -> Result<(), DisplayError> {
        let bundle = MimeBundle {
            data: MimeData {
                html: markup.as_str(),
            },
            metadata: serde_json::Map::new(),
        };
        serde_json::to_writer(&mut self.writer, &bundle)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps everything it is shown
#[derive(Debug, Default)]
pub struct MemorySink {
    pub shown: Vec<Markup>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for MemorySink {
    fn display(&mut self, markup: &Markup) -> Result<(), DisplayError> {
        self.shown.push(markup.clone());
        Ok(())
    }
}
