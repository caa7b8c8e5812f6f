//! A growable contiguous array of `f64` values with a configurable growth
//! factor, forward/reverse cursors, and a small CLI driver around it.

pub mod array;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod debug;
pub mod error;
pub mod input;
pub mod ops;
pub mod output;

pub use array::{DEFAULT_GROWTH_FACTOR, DynamicArray, MAX_CAPACITY, Value};
pub use cursor::{Cursor, CursorMut, ReverseCursor, ReverseCursorMut};
pub use error::{DynarrError, Result};
