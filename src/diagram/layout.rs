//! The compact layout the Wokwi editor saves `diagram.json` in.
//!
//! ```text
//! {
//!   "version": 1,
//!   "author": "wokwi_components",
//!   "editor": "wokwi",
//!   "parts": [
//!     { "type": "wokwi-led", "id": "led_1", "top": 10, "left": 10, "attrs": {"color":"red"} }
//!   ],
//!   "connections": [
//!     [ "arduino-uno_1:13", "led_1:A", "green", [] ]
//!   ],
//!   "dependencies": {}
//! }
//! ```
//!
//! Top-level fields get a line each, and so do the entries of the top-level
//! arrays. Each entry is written on one line with spaces inside its brackets.
//! Anything nested deeper is written compactly.

use super::Diagram;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

#[derive(Debug, Clone, Copy)]
enum Style {
  /// One member per line at this indent.
  Lines(&'static str),
  /// One line, `{ a, b }`.
  Spaced,
  /// One line, `{a,b}`.
  Compact,
}

#[derive(Debug)]
struct Frame {
  style: Style,
  has_value: bool,
}

/// Chooses a [`Style`] per container from its nesting depth.
#[derive(Debug, Default)]
struct LayoutFormatter {
  frames: Vec<Frame>,
}

impl LayoutFormatter {
  fn open<W: ?Sized + io::Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
    let is_array = bracket == b"[";
    let style = match (self.frames.len(), is_array) {
      (0, _) => Style::Lines("  "),
      (1, true) => Style::Lines("    "),
      (2, _) => Style::Spaced,
      _ => Style::Compact,
    };
    self.frames.push(Frame {
      style,
      has_value: false,
    });
    writer.write_all(bracket)
  }

  fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
    match self.frames.pop() {
      Some(Frame {
        style: Style::Lines(indent),
        has_value: true,
      }) => {
        writer.write_all(b"\n")?;
        // the closing bracket sits one level out
        writer.write_all(indent[2..].as_bytes())?;
      }
      Some(Frame {
        style: Style::Spaced,
        has_value: true,
      }) => writer.write_all(b" ")?,
      _ => {}
    }
    writer.write_all(bracket)
  }

  fn member<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    let Some(frame) = self.frames.last_mut() else {
      return Ok(());
    };
    frame.has_value = true;
    if !first {
      writer.write_all(b",")?;
    }
    match frame.style {
      Style::Lines(indent) => {
        writer.write_all(b"\n")?;
        writer.write_all(indent.as_bytes())
      }
      Style::Spaced => writer.write_all(b" "),
      Style::Compact => Ok(()),
    }
  }
}

impl Formatter for LayoutFormatter {
  fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.open(writer, b"[")
  }

  fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.close(writer, b"]")
  }

  fn begin_array_value<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
    first: bool,
  ) -> io::Result<()> {
    self.member(writer, first)
  }

  fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.open(writer, b"{")
  }

  fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.close(writer, b"}")
  }

  fn begin_object_key<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
    first: bool,
  ) -> io::Result<()> {
    self.member(writer, first)
  }

  fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    match self.frames.last() {
      Some(Frame {
        style: Style::Compact,
        ..
      }) => writer.write_all(b":"),
      _ => writer.write_all(b": "),
    }
  }
}

impl Diagram {
  /// Renders the document in the compact Wokwi editor layout: one part or
  /// connection per line.
  ///
  /// The output is valid JSON and parses back to the same document.
  pub fn to_wokwi_layout(&self) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, LayoutFormatter::default());
    self.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)
  }
}
