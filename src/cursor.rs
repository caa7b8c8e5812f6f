//! Forward and reverse cursors over a `DynamicArray`
//!
//! A cursor is a position plus a borrow of the array. It owns nothing. While
//! a cursor is alive the array cannot be mutated through any other path, so
//! growth, insertion, erasure and shrinking all require every cursor to be
//! dropped first. A `position()` read from a cursor and kept past that point
//! is only meaningful until the next such operation; nothing checks this at
//! runtime.
//!
//! Two cursors are equal when they borrow the same array and sit at the same
//! position. Identity is the array itself, not its buffer, so cursors over
//! two distinct empty arrays differ.
//!
//! `Cursor` and `ReverseCursor` are also iterators, yielding the element under
//! the cursor and then stepping. `CursorMut` and `ReverseCursorMut` write
//! through the element under them.

use std::iter::FusedIterator;
use std::ops::{Deref, DerefMut};
use std::ptr;

use crate::array::{DynamicArray, Value};

/// Cursor stepping from index 0 towards the end
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    array: &'a DynamicArray,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(array: &'a DynamicArray, pos: usize) -> Self {
        Self { array, pos }
    }

    fn values(&self) -> &'a [Value] {
        self.array.as_slice()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Element under the cursor, `None` at the end sentinel
    pub fn get(&self) -> Option<&'a Value> {
        self.values().get(self.pos)
    }

    /// Step forward and return the moved cursor (pre-increment)
    pub fn advance(&mut self) -> Self {
        self.pos += 1;
        *self
    }

    /// Step forward and return the cursor as it was (post-increment)
    pub fn post_advance(&mut self) -> Self {
        let prev = *self;
        self.pos += 1;
        prev
    }
}

/// # Panics
///
/// Dereferencing the end sentinel panics.
impl Deref for Cursor<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced cursor at position {} past the end", self.pos),
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let value = self.get()?;
        self.pos += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values().len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}

/// Cursor stepping from the last element towards index 0
///
/// Internally `next` is one past the element under the cursor, so the
/// sentinel before index 0 is `next == 0`.
#[derive(Clone, Copy, Debug)]
pub struct ReverseCursor<'a> {
    array: &'a DynamicArray,
    next: usize,
}

impl<'a> ReverseCursor<'a> {
    pub(crate) fn new(array: &'a DynamicArray, next: usize) -> Self {
        Self { array, next }
    }

    fn values(&self) -> &'a [Value] {
        self.array.as_slice()
    }

    /// Index under the cursor, `None` at the sentinel before index 0
    pub fn position(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    pub fn get(&self) -> Option<&'a Value> {
        self.position().and_then(|idx| self.values().get(idx))
    }

    /// Step backward and return the moved cursor (pre-increment)
    pub fn advance(&mut self) -> Self {
        self.next = self.next.saturating_sub(1);
        *self
    }

    /// Step backward and return the cursor as it was (post-increment)
    pub fn post_advance(&mut self) -> Self {
        let prev = *self;
        self.next = self.next.saturating_sub(1);
        prev
    }
}

/// # Panics
///
/// Dereferencing the sentinel before index 0 panics.
impl Deref for ReverseCursor<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced reverse cursor before the first element"),
        }
    }
}

impl PartialEq for ReverseCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array) && self.next == other.next
    }
}

impl Eq for ReverseCursor<'_> {}

impl<'a> Iterator for ReverseCursor<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let value = self.get()?;
        self.next -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.min(self.values().len());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReverseCursor<'_> {}

impl FusedIterator for ReverseCursor<'_> {}

/// Writable cursor stepping from index 0 towards the end
///
/// Holds the array's only borrow, so it is neither `Copy` nor comparable.
/// Stepping methods return the position instead of a second cursor.
#[derive(Debug)]
pub struct CursorMut<'a> {
    array: &'a mut DynamicArray,
    pos: usize,
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(array: &'a mut DynamicArray, pos: usize) -> Self {
        Self { array, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.array.len()
    }

    pub fn get(&self) -> Option<&Value> {
        self.array.as_slice().get(self.pos)
    }

    /// Element under the cursor for writing, `None` at the end sentinel
    pub fn get_mut(&mut self) -> Option<&mut Value> {
        self.array.as_mut_slice().get_mut(self.pos)
    }

    /// Step forward (pre-increment)
    pub fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Step forward and return the position before the step (post-increment)
    pub fn post_advance(&mut self) -> usize {
        let prev = self.pos;
        self.pos += 1;
        prev
    }
}

/// # Panics
///
/// Dereferencing the end sentinel panics.
impl Deref for CursorMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced cursor at position {} past the end", self.pos),
        }
    }
}

impl DerefMut for CursorMut<'_> {
    fn deref_mut(&mut self) -> &mut Value {
        let pos = self.pos;
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced cursor at position {} past the end", pos),
        }
    }
}

/// Writable cursor stepping from the last element towards index 0
#[derive(Debug)]
pub struct ReverseCursorMut<'a> {
    array: &'a mut DynamicArray,
    next: usize,
}

impl<'a> ReverseCursorMut<'a> {
    pub(crate) fn new(array: &'a mut DynamicArray, next: usize) -> Self {
        Self { array, next }
    }

    /// Index under the cursor, `None` at the sentinel before index 0
    pub fn position(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    pub fn is_rend(&self) -> bool {
        self.next == 0
    }

    pub fn get(&self) -> Option<&Value> {
        self.position().and_then(|idx| self.array.as_slice().get(idx))
    }

    pub fn get_mut(&mut self) -> Option<&mut Value> {
        let idx = self.position()?;
        self.array.as_mut_slice().get_mut(idx)
    }

    /// Step backward (pre-increment); saturates at the sentinel
    pub fn advance(&mut self) -> &mut Self {
        self.next = self.next.saturating_sub(1);
        self
    }

    /// Step backward and return the position before the step (post-increment)
    pub fn post_advance(&mut self) -> Option<usize> {
        let prev = self.position();
        self.next = self.next.saturating_sub(1);
        prev
    }
}

/// # Panics
///
/// Dereferencing the sentinel before index 0 panics.
impl Deref for ReverseCursorMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced reverse cursor before the first element"),
        }
    }
}

impl DerefMut for ReverseCursorMut<'_> {
    fn deref_mut(&mut self) -> &mut Value {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced reverse cursor before the first element"),
        }
    }
}
