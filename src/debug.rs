use std::io::{self, Write};

use crate::array::DynamicArray;
use crate::ops::{Op, Outcome};

/// Debug output for the buffer layout
///
/// Live values are printed in order, followed by one underscore per spare
/// slot, so `1 2 3 _ _ _` is three values in a buffer of six.
pub fn debug_layout<W: Write>(writer: &mut W, array: &DynamicArray) -> io::Result<()> {
    let mut slots: Vec<String> = array.iter().map(|v| v.to_string()).collect();
    slots.extend(std::iter::repeat_n("_".to_string(), array.capacity() - array.len()));

    if slots.is_empty() {
        writeln!(writer, "(no buffer)")
    } else {
        writeln!(writer, "{}", slots.join(" "))
    }
}

/// One-line summary of length, capacity and load factor
pub fn write_stats<W: Write>(writer: &mut W, array: &DynamicArray) -> io::Result<()> {
    writeln!(
        writer,
        "len {}, capacity {}, load factor {:.3}",
        array.len(),
        array.capacity(),
        array.load_factor()
    )
}

/// Report the value produced by a step, if any
pub fn write_outcome<W: Write>(writer: &mut W, op: &Op, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Removed(value) => writeln!(writer, "{} -> {}", op, value),
        Outcome::Found(Some(idx)) => writeln!(writer, "{} -> {}", op, idx),
        Outcome::Found(None) => writeln!(writer, "{} -> not found", op),
    }
}

/// Emit debug output for one applied step: the step, stats, then layout
pub fn debug_step<W: Write>(
    writer: &mut W,
    step: usize,
    op: &Op,
    array: &DynamicArray,
) -> io::Result<()> {
    write!(writer, "[{}] {}: ", step, op)?;
    write_stats(writer, array)?;
    debug_layout(writer, array)
}
