use std::fmt;

use crate::array::{DynamicArray, Value};
use crate::error::{DynarrError, Result};

/// One step of an operation script given with -x
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    PushBack(Value),
    PushFront(Value),
    Insert { pos: usize, value: Value },
    InsertAll { pos: usize, values: Vec<Value> },
    PopBack,
    PopFront,
    Erase { pos: usize, count: usize },
    EraseBetween { begin: usize, end: usize },
    Reserve(usize),
    Shrink,
    Find(Value),
    Set { index: usize, value: Value },
}

/// What an applied step produced, beyond mutating the array
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Done,
    Removed(Value),
    Found(Option<usize>),
}

impl Op {
    /// Parse an operation like "insert:2:7.5" or "pop_back"
    ///
    /// Format: NAME[:ARG[:ARG]], with insert_all taking a comma-separated list
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let expect_args = |n: usize| -> Result<()> {
            if args.len() == n {
                Ok(())
            } else {
                Err(DynarrError::InvalidOperation(format!(
                    "{} takes {} argument(s), got {}",
                    name,
                    n,
                    args.len()
                )))
            }
        };

        let op = match name {
            "push_back" => {
                expect_args(1)?;
                Op::PushBack(parse_value(args[0])?)
            }
            "push_front" => {
                expect_args(1)?;
                Op::PushFront(parse_value(args[0])?)
            }
            "insert" => {
                expect_args(2)?;
                Op::Insert {
                    pos: parse_index(args[0])?,
                    value: parse_value(args[1])?,
                }
            }
            "insert_all" => {
                expect_args(2)?;
                let values = args[1]
                    .split(',')
                    .filter(|v| !v.is_empty())
                    .map(parse_value)
                    .collect::<Result<Vec<_>>>()?;
                Op::InsertAll {
                    pos: parse_index(args[0])?,
                    values,
                }
            }
            "pop_back" => {
                expect_args(0)?;
                Op::PopBack
            }
            "pop_front" => {
                expect_args(0)?;
                Op::PopFront
            }
            "erase" => {
                expect_args(2)?;
                Op::Erase {
                    pos: parse_index(args[0])?,
                    count: parse_index(args[1])?,
                }
            }
            "erase_between" => {
                expect_args(2)?;
                Op::EraseBetween {
                    begin: parse_index(args[0])?,
                    end: parse_index(args[1])?,
                }
            }
            "reserve" => {
                expect_args(1)?;
                Op::Reserve(parse_index(args[0])?)
            }
            "shrink" => {
                expect_args(0)?;
                Op::Shrink
            }
            "find" => {
                expect_args(1)?;
                Op::Find(parse_value(args[0])?)
            }
            "set" => {
                expect_args(2)?;
                Op::Set {
                    index: parse_index(args[0])?,
                    value: parse_value(args[1])?,
                }
            }
            _ => {
                return Err(DynarrError::InvalidOperation(format!(
                    "unknown operation: {}",
                    s
                )));
            }
        };

        Ok(op)
    }

    /// Apply this step to `array`
    ///
    /// A failing step leaves the array as it was.
    pub fn apply(&self, array: &mut DynamicArray) -> Result<Outcome> {
        match self {
            Op::PushBack(value) => array.push_back(*value)?,
            Op::PushFront(value) => array.push_front(*value)?,
            Op::Insert { pos, value } => array.insert(*value, *pos)?,
            Op::InsertAll { pos, values } => array.insert_slice(values, *pos)?,
            Op::PopBack => return array.pop_back().map(Outcome::Removed),
            Op::PopFront => return array.pop_front().map(Outcome::Removed),
            Op::Erase { pos, count } => array.erase(*pos, *count)?,
            Op::EraseBetween { begin, end } => array.erase_between(*begin, *end)?,
            Op::Reserve(capacity) => array.reserve(*capacity)?,
            Op::Shrink => array.shrink_to_fit()?,
            Op::Find(value) => return Ok(Outcome::Found(array.find(*value))),
            Op::Set { index, value } => *array.get_mut(*index)? = *value,
        }
        Ok(Outcome::Done)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::PushBack(value) => write!(f, "push_back:{}", value),
            Op::PushFront(value) => write!(f, "push_front:{}", value),
            Op::Insert { pos, value } => write!(f, "insert:{}:{}", pos, value),
            Op::InsertAll { pos, values } => {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "insert_all:{}:{}", pos, joined.join(","))
            }
            Op::PopBack => write!(f, "pop_back"),
            Op::PopFront => write!(f, "pop_front"),
            Op::Erase { pos, count } => write!(f, "erase:{}:{}", pos, count),
            Op::EraseBetween { begin, end } => write!(f, "erase_between:{}:{}", begin, end),
            Op::Reserve(capacity) => write!(f, "reserve:{}", capacity),
            Op::Shrink => write!(f, "shrink"),
            Op::Find(value) => write!(f, "find:{}", value),
            Op::Set { index, value } => write!(f, "set:{}:{}", index, value),
        }
    }
}

fn parse_value(s: &str) -> Result<Value> {
    s.trim()
        .parse()
        .map_err(|_| DynarrError::InvalidOperation(format!("invalid value: {}", s)))
}

fn parse_index(s: &str) -> Result<usize> {
    s.trim()
        .parse()
        .map_err(|_| DynarrError::InvalidOperation(format!("invalid position: {}", s)))
}
