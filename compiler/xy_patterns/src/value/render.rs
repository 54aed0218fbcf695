//! Text rendering of values.
//!
//! Two forms exist. The *parse form* (`Display`) re-escapes strings and
//! keeps floats distinguishable from integers, so a parser reading it back
//! rebuilds an equal value. The *display form* writes string contents raw
//! and is what `print`/`println` emit.

use std::fmt::{self, Write};

use super::sequence::slice_text;
use super::{Seq, Value};
use crate::stack::ensure_sufficient_stack;

/// Which textual form to produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Round-trippable source text.
    Parse,
    /// Raw text for output.
    Display,
}

impl Value {
    /// Render in the requested form.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_value(&mut out, self, mode);
        out
    }

    /// Display form (raw string contents).
    pub fn display_value(&self) -> String {
        self.render(RenderMode::Display)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, RenderMode::Parse)
    }
}

fn write_value<W: Write>(out: &mut W, value: &Value, mode: RenderMode) -> fmt::Result {
    match value {
        Value::Int(n) => write!(out, "{n}"),
        Value::Float(x) => write_float(out, *x),
        Value::Symbol(name) => out.write_str(name),
        Value::Str(s) => write_text(out, s, mode),
        Value::Shuffle(shuffle) => write!(out, "{shuffle}"),
        Value::Primitive(name) => out.write_str(name),
        Value::Slice(slice) if matches!(slice.base(), Value::Str(_)) => {
            write_text(out, &slice_text(slice), mode)
        }
        Value::List(_) | Value::Slice(_) | Value::Join(_) => match value.as_seq() {
            Some(seq) => ensure_sufficient_stack(|| write_seq(out, seq, mode)),
            None => Ok(()),
        },
    }
}

fn write_seq<W: Write>(out: &mut W, seq: Seq<'_>, mode: RenderMode) -> fmt::Result {
    out.write_char('[')?;
    for (i, item) in seq.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write_value(out, &item, mode)?;
    }
    out.write_char(']')
}

// `{:?}` keeps a trailing `.0` on integral floats so they re-read as floats.
fn write_float<W: Write>(out: &mut W, x: f64) -> fmt::Result {
    write!(out, "{x:?}")
}

fn write_text<W: Write>(out: &mut W, text: &str, mode: RenderMode) -> fmt::Result {
    if mode == RenderMode::Display {
        return out.write_str(text);
    }
    out.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            '\r' => out.write_str("\\r")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
