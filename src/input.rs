use std::io::{BufRead, Read};

use bstr::ByteSlice;

use crate::array::Value;
use crate::error::{DynarrError, Result};

/// Read whitespace-separated numbers from input, appending them to `values`
///
/// Input is raw bytes; every field must be valid UTF-8 and parse as a number.
pub fn read_values<R: BufRead>(mut reader: R, values: &mut Vec<Value>) -> Result<()> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    for field in buffer.fields() {
        let value = field
            .to_str()
            .ok()
            .and_then(|s| s.parse::<Value>().ok())
            .ok_or_else(|| DynarrError::InvalidValue(field.to_str_lossy().into_owned()))?;
        values.push(value);
    }

    Ok(())
}
