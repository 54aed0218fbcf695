//! The sequence family: List, String, Slice and Join.
//!
//! All four answer the same contract through the borrowed [`Seq`] view:
//! `size`, `at`, `head`, `push_all_into`, `iter`. Operations that build a
//! new sequence sharing storage with an existing one (`tail`, `slice`,
//! `join`) live on [`Value`] because they need an owned handle to the
//! backing storage.
//!
//! # Views
//!
//! - A Slice always points at a non-slice backing sequence. Slicing a slice
//!   rebases onto the backing sequence instead of nesting.
//! - A Join holds a flat list of non-join segments. Joining a join splices
//!   its segments rather than nesting.
//!
//! # Copy-on-write join
//!
//! `join` consumes its receiver. When the receiver's storage is uniquely
//! owned (a Join segment list or a String buffer) it is extended in place;
//! otherwise a new value is allocated. Both paths produce the same logical
//! sequence.

use std::borrow::Cow;

use super::{Heap, Value};

/// `[begin, end)` window over a non-slice sequence.
#[derive(Clone, Debug)]
pub struct SliceValue {
    base: Value,
    begin: usize,
    end: usize,
}

impl SliceValue {
    /// Backing sequence (never itself a slice).
    pub fn base(&self) -> &Value {
        &self.base
    }

    /// First index into the backing sequence.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last index into the backing sequence.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Borrowed view of any sequence representation.
#[derive(Clone, Copy)]
pub enum Seq<'a> {
    List(&'a [Value]),
    Str(&'a str),
    Slice(&'a SliceValue),
    Join(&'a [Value]),
}

impl<'a> Seq<'a> {
    /// Number of elements.
    pub fn size(&self) -> usize {
        match self {
            Seq::List(items) => items.len(),
            Seq::Str(s) => s.chars().count(),
            Seq::Slice(slice) => slice.end - slice.begin,
            Seq::Join(segments) => segments.iter().map(segment_size).sum(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Element at `index`, or `None` when `index >= size()`.
    pub fn at(&self, index: usize) -> Option<Value> {
        match self {
            Seq::List(items) => items.get(index).cloned(),
            Seq::Str(s) => s.chars().nth(index).map(char_value),
            Seq::Slice(slice) => {
                if index >= slice.end - slice.begin {
                    return None;
                }
                slice.base.as_seq()?.at(slice.begin + index)
            }
            Seq::Join(segments) => {
                let mut offset = index;
                for segment in segments.iter() {
                    let seq = segment.as_seq()?;
                    let size = seq.size();
                    if offset < size {
                        return seq.at(offset);
                    }
                    offset -= size;
                }
                None
            }
        }
    }

    /// First element, or `None` for an empty sequence.
    #[inline]
    pub fn head(&self) -> Option<Value> {
        self.at(0)
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Value> + 'a> {
        match *self {
            Seq::List(items) => Box::new(items.iter().cloned()),
            Seq::Str(s) => Box::new(s.chars().map(char_value)),
            Seq::Slice(slice) => match slice.base.as_seq() {
                Some(base) => Box::new(
                    base.iter()
                        .skip(slice.begin)
                        .take(slice.end - slice.begin),
                ),
                None => Box::new(std::iter::empty()),
            },
            Seq::Join(segments) => Box::new(
                segments
                    .iter()
                    .filter_map(Value::as_seq)
                    .flat_map(|seq| seq.iter()),
            ),
        }
    }

    /// Append every element, in order, to `out`.
    pub fn push_all_into(&self, out: &mut Vec<Value>) {
        match *self {
            Seq::List(items) => out.extend_from_slice(items),
            Seq::Slice(slice) => match &slice.base {
                Value::List(items) => out.extend_from_slice(&items[slice.begin..slice.end]),
                _ => out.extend(self.iter()),
            },
            _ => out.extend(self.iter()),
        }
    }

    /// Elements collected into a fresh vector.
    pub fn to_vec(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.size());
        self.push_all_into(&mut out);
        out
    }
}

fn segment_size(segment: &Value) -> usize {
    segment.as_seq().map_or(0, |seq| seq.size())
}

fn char_value(c: char) -> Value {
    Value::int(i64::from(u32::from(c)))
}

impl Value {
    /// Borrow this value as a sequence, if it is one.
    pub fn as_seq(&self) -> Option<Seq<'_>> {
        match self {
            Value::List(items) => Some(Seq::List(items)),
            Value::Str(s) => Some(Seq::Str(s)),
            Value::Slice(slice) => Some(Seq::Slice(slice)),
            Value::Join(segments) => Some(Seq::Join(segments)),
            _ => None,
        }
    }

    /// View `[begin, end)` of `seq`.
    ///
    /// Slices of slices are rebased onto the ultimate backing sequence.
    ///
    /// # Panics
    ///
    /// Panics if `seq` is not a sequence or the bounds fall outside it; both
    /// are internal invariant violations.
    pub fn slice(seq: &Value, begin: usize, end: usize) -> Value {
        let mut base = seq;
        let mut begin = begin;
        let mut end = end;
        while let Value::Slice(inner) = base {
            begin += inner.begin;
            end += inner.begin;
            base = &inner.base;
        }
        let size = base.as_seq().map(|s| s.size());
        assert!(
            matches!(size, Some(size) if begin <= end && end <= size),
            "slice [{begin}, {end}) out of range for {} of size {size:?}",
            base.type_name()
        );
        Value::Slice(Heap::new(SliceValue {
            base: base.clone(),
            begin,
            end,
        }))
    }

    /// Everything after the first element.
    ///
    /// Empty and single-element sequences yield an empty List. Returns
    /// `None` for non-sequences.
    pub fn tail(&self) -> Option<Value> {
        let size = self.as_seq()?.size();
        if size <= 1 {
            Some(Value::empty_list())
        } else {
            Some(Value::slice(self, 1, size))
        }
    }

    /// Coerce a scalar into a one-element List; sequences pass through.
    pub fn into_sequence(self) -> Value {
        if self.is_sequence() {
            self
        } else {
            Value::list(vec![self])
        }
    }

    /// Concatenate `self` and `other` without copying elements.
    ///
    /// Text + text (Strings or slices of them) yields a String; a Join on
    /// either side is extended; anything else becomes a two-segment Join.
    /// Scalars are treated as one-element Lists.
    pub fn join(self, other: Value) -> Value {
        if self.is_text() && other.is_text() {
            return join_text(self, &other);
        }
        match (self.into_sequence(), other.into_sequence()) {
            (Value::Join(mut segments), right) => {
                if let Some(owned) = segments.get_mut() {
                    tracing::trace!(segments = owned.len(), "join extended in place");
                    push_segment(owned, right);
                    Value::Join(segments)
                } else {
                    let mut copied = Vec::with_capacity(segments.len() + 1);
                    copied.extend(segments.iter().cloned());
                    push_segment(&mut copied, right);
                    Value::Join(Heap::new(copied))
                }
            }
            (left, right) => {
                let mut segments = Vec::with_capacity(2);
                segments.push(left);
                push_segment(&mut segments, right);
                Value::Join(Heap::new(segments))
            }
        }
    }

    /// Text of a String or of a Slice over one.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Slice(slice) if matches!(slice.base, Value::Str(_)) => {
                Some(Cow::Owned(slice_text(slice)))
            }
            _ => None,
        }
    }

    /// Shallow copy into a fresh List (Strings into a fresh String).
    ///
    /// Scalars are returned unchanged.
    pub fn materialize(&self) -> Value {
        if let Some(text) = self.as_text() {
            return Value::string(text);
        }
        match self.as_seq() {
            Some(seq) => Value::list(seq.to_vec()),
            None => self.clone(),
        }
    }

    /// Reversed copy: text stays a String, other sequences become Lists.
    pub fn reversed(&self) -> Option<Value> {
        if let Some(text) = self.as_text() {
            return Some(Value::string(text.chars().rev().collect::<String>()));
        }
        let mut items = self.as_seq()?.to_vec();
        items.reverse();
        Some(Value::list(items))
    }
}

/// String join of two text values, in place when the left buffer is unique.
fn join_text(left: Value, right: &Value) -> Value {
    let suffix = right.as_text().unwrap_or_default();
    match left {
        Value::Str(mut buffer) => {
            if let Some(owned) = buffer.get_mut() {
                tracing::trace!("string join in place");
                owned.push_str(&suffix);
                Value::Str(buffer)
            } else {
                Value::string(format!("{buffer}{suffix}"))
            }
        }
        other => {
            let prefix = other.as_text().unwrap_or_default();
            Value::string(format!("{prefix}{suffix}"))
        }
    }
}

fn push_segment(segments: &mut Vec<Value>, segment: Value) {
    match segment {
        Value::Join(inner) => segments.extend(inner.iter().cloned()),
        other => segments.push(other),
    }
}

/// Text covered by a slice over a String.
pub(super) fn slice_text(slice: &SliceValue) -> String {
    match &slice.base {
        Value::Str(s) => s
            .chars()
            .skip(slice.begin)
            .take(slice.end - slice.begin)
            .collect(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests;
