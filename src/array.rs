//! Resizable contiguous storage for `Value` elements
//!
//! The buffer is an owned boxed slice whose length is the capacity. Every
//! reallocation builds a fresh buffer, copies the occupied prefix and swaps it
//! in; nothing is resized in place.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::cursor::{Cursor, CursorMut, ReverseCursor, ReverseCursorMut};
use crate::error::{DynarrError, Result};

/// Element type stored by [`DynamicArray`]
pub type Value = f64;

/// Growth factor used by `Default` and the CLI when none is given
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Growable array with a configurable multiplicative growth factor
///
/// Slots `[0, len)` hold live values, `[len, capacity)` are allocated but
/// unused. A capacity of zero owns no allocation.
pub struct DynamicArray {
    buffer: Box<[Value]>,
    len: usize,
    growth_factor: f64,
}

/// Largest number of slots a single buffer may hold
pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<Value>();

/// Reject growth factors that would not strictly increase capacity
///
/// NaN fails the comparison and is rejected too, as is infinity.
pub fn validate_growth_factor(growth_factor: f64) -> Result<f64> {
    if growth_factor > 1.0 && growth_factor.is_finite() {
        Ok(growth_factor)
    } else {
        Err(DynarrError::InvalidArgument(format!(
            "growth factor must be a finite number > 1.0, got {}",
            growth_factor
        )))
    }
}

/// Allocate a zeroed buffer of exactly `capacity` slots
///
/// Oversized requests and allocator failures come back as
/// `CapacityOverflow` instead of aborting.
fn allocate(capacity: usize) -> Result<Box<[Value]>> {
    if capacity > MAX_CAPACITY {
        return Err(DynarrError::CapacityOverflow { requested: capacity });
    }
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| DynarrError::CapacityOverflow { requested: capacity })?;
    buffer.resize(capacity, 0.0);
    Ok(buffer.into_boxed_slice())
}

impl DynamicArray {
    /// Build an array from the first `size` values of `source`
    ///
    /// Capacity equals `size`. Fails if the growth factor is not above 1.0,
    /// if `source` is missing while `size > 0`, or if it holds fewer than
    /// `size` values.
    pub fn from_raw_parts(source: Option<&[Value]>, size: usize, growth_factor: f64) -> Result<Self> {
        let growth_factor = validate_growth_factor(growth_factor)?;

        let values: &[Value] = match source {
            Some(values) if values.len() >= size => &values[..size],
            Some(values) => {
                return Err(DynarrError::InvalidArgument(format!(
                    "source holds {} values, expected at least {}",
                    values.len(),
                    size
                )));
            }
            None if size > 0 => {
                return Err(DynarrError::InvalidArgument(
                    "source is missing for a nonzero size".to_string(),
                ));
            }
            None => &[],
        };

        Ok(Self {
            buffer: Box::from(values),
            len: size,
            growth_factor,
        })
    }

    pub fn from_slice(values: &[Value], growth_factor: f64) -> Result<Self> {
        Self::from_raw_parts(Some(values), values.len(), growth_factor)
    }

    /// Empty array with no allocation
    pub fn with_growth_factor(growth_factor: f64) -> Result<Self> {
        Self::from_raw_parts(None, 0, growth_factor)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Ratio of live elements to allocated slots, 0.0 with no allocation
    pub fn load_factor(&self) -> f64 {
        if self.capacity() == 0 {
            0.0
        } else {
            self.len as f64 / self.capacity() as f64
        }
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.buffer[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.buffer[..self.len]
    }

    // ------------------------------------------------------------
    // Ownership
    // ------------------------------------------------------------

    /// Move the contents out, leaving `self` empty with no allocation
    ///
    /// The growth factor stays with both arrays.
    pub fn take(&mut self) -> Self {
        Self {
            buffer: std::mem::take(&mut self.buffer),
            len: std::mem::replace(&mut self.len, 0),
            growth_factor: self.growth_factor,
        }
    }

    /// Release our buffer and take over `other`'s, leaving `other` empty
    pub fn assign_from(&mut self, other: &mut DynamicArray) {
        *self = other.take();
    }

    /// Free the buffer and reset to the empty state; safe to call repeatedly
    pub fn release(&mut self) {
        self.buffer = Box::default();
        self.len = 0;
    }

    // ------------------------------------------------------------
    // Capacity
    // ------------------------------------------------------------

    /// Capacity after one growth step from `capacity`
    ///
    /// Saturates at `usize::MAX`, which `allocate` then rejects.
    fn next_capacity(&self, capacity: usize) -> usize {
        let scaled = if capacity == 0 {
            self.growth_factor.ceil()
        } else {
            (capacity as f64 * self.growth_factor).ceil()
        };
        // Float rounding must not stall growth at very large capacities.
        (scaled as usize).max(capacity.saturating_add(1))
    }

    /// Swap in a buffer of `new_capacity` slots holding the live elements
    ///
    /// On failure the old buffer is kept untouched.
    fn reallocate(&mut self, new_capacity: usize, reason: &'static str) -> Result<()> {
        trace!(
            reason,
            old_capacity = self.capacity(),
            new_capacity,
            len = self.len,
            "reallocating buffer"
        );
        let mut buffer = allocate(new_capacity)?;
        buffer[..self.len].copy_from_slice(&self.buffer[..self.len]);
        self.buffer = buffer;
        Ok(())
    }

    /// Reallocate to the next capacity of the growth sequence
    ///
    /// An empty allocation grows to `ceil(growth_factor)`, otherwise to
    /// `ceil(capacity * growth_factor)`. Capacity always strictly increases.
    /// Fails with `CapacityOverflow` when the next step cannot be allocated.
    pub fn grow(&mut self) -> Result<()> {
        let new_capacity = self.next_capacity(self.capacity());
        self.reallocate(new_capacity, "grow")
    }

    /// Make room for exactly `min_capacity` slots
    ///
    /// No-op when the capacity already suffices. Fails if `min_capacity` is
    /// below the current length.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<()> {
        if min_capacity < self.len {
            return Err(DynarrError::InvalidArgument(format!(
                "capacity {} is less than the current length {}",
                min_capacity, self.len
            )));
        }
        if min_capacity > self.capacity() {
            self.reallocate(min_capacity, "reserve")?;
        }
        Ok(())
    }

    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity() != self.len {
            self.reallocate(self.len, "shrink_to_fit")?;
        }
        Ok(())
    }

    // ------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------

    /// Append `value`; fails only if growth cannot be allocated
    pub fn push_back(&mut self, value: Value) -> Result<()> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buffer[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert at index 0, shifting every element one slot right. O(len).
    pub fn push_front(&mut self, value: Value) -> Result<()> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buffer.copy_within(0..self.len, 1);
        self.buffer[0] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert `value` so that it ends up at index `pos`
    pub fn insert(&mut self, value: Value, pos: usize) -> Result<()> {
        if pos == 0 {
            return self.push_front(value);
        }
        if pos == self.len {
            return self.push_back(value);
        }
        if pos > self.len {
            return Err(DynarrError::OutOfRange {
                what: "insert position",
                index: pos,
                len: self.len,
            });
        }

        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buffer.copy_within(pos..self.len, pos + 1);
        self.buffer[pos] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert all of `values` starting at index `pos`
    ///
    /// Capacity follows the growth sequence until `len + values.len()` fits;
    /// only the final capacity is allocated.
    pub fn insert_slice(&mut self, values: &[Value], pos: usize) -> Result<()> {
        if pos > self.len {
            return Err(DynarrError::OutOfRange {
                what: "insert position",
                index: pos,
                len: self.len,
            });
        }

        let count = values.len();
        let required = self
            .len
            .checked_add(count)
            .ok_or(DynarrError::CapacityOverflow { requested: usize::MAX })?;
        if required > MAX_CAPACITY {
            return Err(DynarrError::CapacityOverflow { requested: required });
        }
        let mut capacity = self.capacity();
        while capacity < required {
            capacity = self.next_capacity(capacity);
        }
        if capacity != self.capacity() {
            self.reallocate(capacity, "insert_slice")?;
        }

        self.buffer.copy_within(pos..self.len, pos + count);
        self.buffer[pos..pos + count].copy_from_slice(values);
        self.len = required;
        Ok(())
    }

    /// Insert the live elements of another array starting at `pos`
    ///
    /// Inserting an array into itself does not borrow-check; clone it first.
    pub fn insert_array(&mut self, other: &DynamicArray, pos: usize) -> Result<()> {
        self.insert_slice(other.as_slice(), pos)
    }

    // ------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------

    pub fn pop_back(&mut self) -> Result<Value> {
        if self.len == 0 {
            return Err(DynarrError::Underflow("can't pop from an empty array"));
        }
        self.len -= 1;
        Ok(self.buffer[self.len])
    }

    /// Remove index 0, shifting the rest one slot left. O(len).
    pub fn pop_front(&mut self) -> Result<Value> {
        if self.len == 0 {
            return Err(DynarrError::Underflow("can't pop from an empty array"));
        }
        let value = self.buffer[0];
        self.buffer.copy_within(1..self.len, 0);
        self.len -= 1;
        Ok(value)
    }

    /// Remove `count` elements starting at `pos`, keeping the capacity
    ///
    /// A count running past the end is clamped to the remaining elements.
    pub fn erase(&mut self, pos: usize, count: usize) -> Result<()> {
        if self.len == 0 {
            return Err(DynarrError::Underflow("can't erase from an empty array"));
        }
        if pos >= self.len {
            return Err(DynarrError::OutOfRange {
                what: "erase position",
                index: pos,
                len: self.len,
            });
        }

        let available = self.len - pos;
        let count = if count > available {
            debug!(requested = count, clamped = available, "clamping erase count");
            available
        } else {
            count
        };

        self.buffer.copy_within(pos + count..self.len, pos);
        self.len -= count;
        Ok(())
    }

    /// Remove `[begin, end)` into a tight buffer of the remaining length
    ///
    /// `end` past the length is clamped, but `end <= begin` is rejected.
    /// Unlike [`erase`](Self::erase) this drops any spare capacity.
    pub fn erase_between(&mut self, begin: usize, end: usize) -> Result<()> {
        if self.len == 0 {
            return Err(DynarrError::Underflow("can't erase from an empty array"));
        }
        if begin >= self.len {
            return Err(DynarrError::OutOfRange {
                what: "erase start",
                index: begin,
                len: self.len,
            });
        }
        if end <= begin {
            return Err(DynarrError::EmptyInterval { begin, end });
        }

        let end = end.min(self.len);
        let new_len = self.len - (end - begin);
        trace!(
            old_capacity = self.capacity(),
            new_capacity = new_len,
            "rebuilding buffer after erase_between"
        );

        let mut buffer = allocate(new_len)?;
        buffer[..begin].copy_from_slice(&self.buffer[..begin]);
        buffer[begin..].copy_from_slice(&self.buffer[end..self.len]);
        self.buffer = buffer;
        self.len = new_len;
        Ok(())
    }

    // ------------------------------------------------------------
    // Access
    // ------------------------------------------------------------

    pub fn get(&self, idx: usize) -> Result<&Value> {
        self.as_slice().get(idx).ok_or(DynarrError::OutOfRange {
            what: "index",
            index: idx,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, idx: usize) -> Result<&mut Value> {
        let len = self.len;
        self.as_mut_slice().get_mut(idx).ok_or(DynarrError::OutOfRange {
            what: "index",
            index: idx,
            len,
        })
    }

    /// Index of the first element equal to `value`
    pub fn find(&self, value: Value) -> Option<usize> {
        self.as_slice().iter().position(|v| *v == value)
    }

    // ------------------------------------------------------------
    // Cursors
    // ------------------------------------------------------------

    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self, 0)
    }

    /// One past the last element; never dereferenced
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self, self.len)
    }

    pub fn rbegin(&self) -> ReverseCursor<'_> {
        ReverseCursor::new(self, self.len)
    }

    /// One before index 0; never dereferenced
    pub fn rend(&self) -> ReverseCursor<'_> {
        ReverseCursor::new(self, 0)
    }

    pub fn iter(&self) -> Cursor<'_> {
        self.begin()
    }

    pub fn iter_rev(&self) -> ReverseCursor<'_> {
        self.rbegin()
    }

    /// Writable cursor at index 0
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        CursorMut::new(self, 0)
    }

    /// Writable cursor at the last element, stepping towards index 0
    pub fn rbegin_mut(&mut self) -> ReverseCursorMut<'_> {
        let len = self.len;
        ReverseCursorMut::new(self, len)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.as_mut_slice().iter_mut()
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self {
            buffer: Box::default(),
            len: 0,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// Deep copy of the live elements; the copy's capacity equals its length
impl Clone for DynamicArray {
    fn clone(&self) -> Self {
        Self {
            buffer: Box::from(self.as_slice()),
            len: self.len,
            growth_factor: self.growth_factor,
        }
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("values", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.growth_factor)
            .finish()
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Index<usize> for DynamicArray {
    type Output = Value;

    fn index(&self, idx: usize) -> &Value {
        match self.get(idx) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for DynamicArray {
    fn index_mut(&mut self, idx: usize) -> &mut Value {
        match self.get_mut(idx) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl FromIterator<Value> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = DynamicArray::default();
        array.extend(iter);
        array
    }
}

/// # Panics
///
/// Panics if growth cannot be allocated, like `Vec`.
impl Extend<Value> for DynamicArray {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.push_back(value) {
                panic!("{}", e);
            }
        }
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a Value;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a> IntoIterator for &'a mut DynamicArray {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(values: &[Value]) -> DynamicArray {
        DynamicArray::from_slice(values, 2.0).unwrap()
    }

    #[test]
    fn test_construct_from_slice() {
        let v = array(&[10.0, 20.0, 30.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_construct_rejects_bad_growth_factor() {
        assert!(DynamicArray::from_slice(&[1.0], 1.0).unwrap_err().is_invalid_argument());
        assert!(DynamicArray::with_growth_factor(0.5).unwrap_err().is_invalid_argument());
        assert!(DynamicArray::with_growth_factor(f64::NAN).unwrap_err().is_invalid_argument());
        assert!(DynamicArray::with_growth_factor(f64::INFINITY).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_huge_growth_factor_fails_without_mutation() {
        let mut v = DynamicArray::from_slice(&[1.0, 2.0], 1e300).unwrap();
        assert!(v.push_back(3.0).unwrap_err().is_capacity_overflow());
        assert!(v.push_front(0.0).unwrap_err().is_capacity_overflow());
        assert!(v.insert(0.5, 1).unwrap_err().is_capacity_overflow());
        assert!(v.insert_slice(&[9.0], 2).unwrap_err().is_capacity_overflow());
        assert!(v.grow().unwrap_err().is_capacity_overflow());
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_reserve_beyond_address_space_fails() {
        let mut v = array(&[1.0]);
        let err = v.reserve(usize::MAX).unwrap_err();
        assert!(err.is_capacity_overflow());
        assert_eq!(
            err.to_string(),
            format!("capacity overflow: cannot allocate {} slots", usize::MAX)
        );
        assert!(v.reserve(MAX_CAPACITY + 1).unwrap_err().is_capacity_overflow());
        assert_eq!(v.capacity(), 1);
        assert_eq!(v.as_slice(), &[1.0]);
    }

    #[test]
    fn test_construct_rejects_missing_source() {
        let err = DynamicArray::from_raw_parts(None, 3, 2.0).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = DynamicArray::from_raw_parts(Some(&[1.0][..]), 3, 2.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_construct_takes_prefix() {
        let v = DynamicArray::from_raw_parts(Some(&[1.0, 2.0, 3.0][..]), 2, 2.0).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_construct_empty_has_no_capacity() {
        let v = DynamicArray::from_raw_parts(None, 0, 1.5).unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.load_factor(), 0.0);
    }

    #[test]
    fn test_grow_from_zero_uses_ceil_of_factor() {
        let mut v = DynamicArray::with_growth_factor(1.5).unwrap();
        v.grow().unwrap();
        assert_eq!(v.capacity(), 2);

        let mut v = DynamicArray::with_growth_factor(3.0).unwrap();
        v.grow().unwrap();
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_grow_small_factor_still_progresses() {
        let mut v = DynamicArray::from_slice(&[1.0], 1.01).unwrap();
        v.grow().unwrap();
        assert_eq!(v.capacity(), 2);
        v.grow().unwrap();
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_push_back_triggers_growth() {
        let mut v = array(&[10.0, 20.0, 30.0]);
        v.push_back(40.0).unwrap();
        assert_eq!(v.capacity(), 6);
        assert_eq!(v.len(), 4);
        assert_eq!(v[3], 40.0);
    }

    #[test]
    fn test_push_front_shifts() {
        let mut v = array(&[2.0, 3.0]);
        v.push_front(1.0).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_insert_middle() {
        let mut v = array(&[1.0, 3.0]);
        v.insert(2.0, 1).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_insert_past_end_fails_without_mutation() {
        let mut v = array(&[1.0, 2.0]);
        let err = v.insert(9.0, 3).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_insert_slice_grows_by_formula() {
        let mut v = array(&[1.0, 5.0]);
        v.insert_slice(&[2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        // 2 -> 4 -> 8
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_insert_slice_exact_fit_does_not_grow() {
        let mut v = array(&[1.0, 2.0]);
        v.reserve(4).unwrap();
        v.insert_slice(&[3.0, 4.0], 2).unwrap();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_insert_array() {
        let mut v = array(&[1.0, 4.0]);
        let other = array(&[2.0, 3.0]);
        v.insert_array(&other, 1).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(other.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_pop_back_and_front() {
        let mut v = array(&[1.0, 2.0, 3.0]);
        assert_eq!(v.pop_back().unwrap(), 3.0);
        assert_eq!(v.pop_front().unwrap(), 1.0);
        assert_eq!(v.as_slice(), &[2.0]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut v = DynamicArray::default();
        assert!(v.pop_back().unwrap_err().is_underflow());
        assert!(v.pop_front().unwrap_err().is_underflow());
    }

    #[test]
    fn test_erase_range() {
        let mut v = array(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        v.erase(1, 2).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 4.0, 5.0]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_erase_clamps_count() {
        let mut v = array(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        v.erase(3, 100).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_erase_errors() {
        let mut v = DynamicArray::default();
        assert!(v.erase(0, 1).unwrap_err().is_underflow());
        let mut v = array(&[1.0]);
        assert!(v.erase(1, 1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_erase_between_is_tight() {
        let mut v = array(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        v.push_back(6.0).unwrap();
        v.erase_between(1, 3).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 4.0, 5.0, 6.0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_erase_between_clamps_end() {
        let mut v = array(&[1.0, 2.0, 3.0]);
        v.erase_between(1, 10).unwrap();
        assert_eq!(v.as_slice(), &[1.0]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_erase_between_errors() {
        let mut v = DynamicArray::default();
        assert!(v.erase_between(0, 1).unwrap_err().is_underflow());
        let mut v = array(&[1.0, 2.0]);
        assert!(v.erase_between(2, 3).unwrap_err().is_out_of_range());
        assert!(v.erase_between(1, 1).unwrap_err().is_out_of_range());
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_erase_between_empty_interval_message() {
        let mut v = array(&[1.0, 2.0, 3.0]);
        let err = v.erase_between(2, 1).unwrap_err();
        assert!(matches!(err, DynarrError::EmptyInterval { begin: 2, end: 1 }));
        assert_eq!(err.to_string(), "erase interval [2, 1) is empty");
        assert_eq!(
            v.erase_between(1, 1).unwrap_err().to_string(),
            "erase interval [1, 1) is empty"
        );
    }

    #[test]
    fn test_reserve() {
        let mut v = DynamicArray::default();
        v.reserve(2).unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 2);
        v.reserve(1).unwrap();
        assert_eq!(v.capacity(), 2);

        let mut v = array(&[1.0, 2.0, 3.0]);
        assert!(v.reserve(2).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut v = array(&[1.0, 2.0, 3.0]);
        v.push_back(4.0).unwrap();
        assert_eq!(v.capacity(), 6);
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut v = array(&[1.0, 2.0]);
        *v.get_mut(1).unwrap() = 7.0;
        assert_eq!(*v.get(1).unwrap(), 7.0);
        assert!(v.get(2).unwrap_err().is_out_of_range());
        v[0] = 5.0;
        assert_eq!(v[0], 5.0);
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for length 2")]
    fn test_index_out_of_range_panics() {
        let v = array(&[1.0, 2.0]);
        let _value: Value = v[2];
    }

    #[test]
    fn test_find() {
        let v = array(&[4.0, 5.0, 4.0]);
        assert_eq!(v.find(4.0), Some(0));
        assert_eq!(v.find(5.0), Some(1));
        assert_eq!(v.find(6.0), None);
    }

    #[test]
    fn test_load_factor() {
        let mut v = array(&[1.0, 2.0, 3.0]);
        assert_eq!(v.load_factor(), 1.0);
        v.push_back(4.0).unwrap();
        assert_eq!(v.load_factor(), 4.0 / 6.0);
    }

    #[test]
    fn test_clone_is_tight_and_independent() {
        let mut v = array(&[1.0, 2.0, 3.0]);
        v.push_back(4.0).unwrap();
        let mut copy = v.clone();
        assert_eq!(copy.capacity(), 4);
        assert_eq!(copy, v);
        copy[0] = 100.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(copy.growth_factor(), v.growth_factor());
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut v = DynamicArray::from_slice(&[1.0, 2.0], 3.0).unwrap();
        let moved = v.take();
        assert_eq!(moved.as_slice(), &[1.0, 2.0]);
        assert_eq!(moved.growth_factor(), 3.0);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_assign_from() {
        let mut dst = array(&[9.0]);
        let mut src = array(&[1.0, 2.0]);
        dst.assign_from(&mut src);
        assert_eq!(dst.as_slice(), &[1.0, 2.0]);
        assert_eq!(src.capacity(), 0);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut v = array(&[1.0, 2.0]);
        v.release();
        v.release();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        v.push_back(3.0).unwrap();
        assert_eq!(v.as_slice(), &[3.0]);
    }

    #[test]
    fn test_from_iterator_uses_default_growth() {
        let v: DynamicArray = (1..=5).map(|i| i as Value).collect();
        assert_eq!(v.len(), 5);
        // 0 -> 2 -> 4 -> 8
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.growth_factor(), DEFAULT_GROWTH_FACTOR);
    }

    #[test]
    fn test_iter_mut() {
        let mut v = array(&[1.0, 2.0]);
        for x in &mut v {
            *x *= 10.0;
        }
        assert_eq!(v.as_slice(), &[10.0, 20.0]);
    }
}
