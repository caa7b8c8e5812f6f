use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::array::{DynamicArray, Value};
use crate::config::Config;

/// Write the array's values, one per record, in cursor order
pub fn write_values<W: Write>(writer: W, array: &DynamicArray, config: &Config) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    let delimiter = config.record_delimiter;

    if config.reverse {
        write_all(&mut writer, array.iter_rev(), delimiter)?;
    } else {
        write_all(&mut writer, array.iter(), delimiter)?;
    }

    writer.flush()
}

fn write_all<'a, W, I>(writer: &mut W, values: I, delimiter: u8) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Value>,
{
    for value in values {
        write!(writer, "{}", value)?;
        writer.write_all(&[delimiter])?;
    }
    Ok(())
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
