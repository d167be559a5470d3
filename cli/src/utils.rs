use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write output to a file or stdout
///
/// The file is only created here, once the whole output is known, so a
/// failed conversion never leaves a partial file behind.
pub(crate) fn write_output(file: Option<&str>, data: &[u8]) -> Result<()> {
    match file {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Format grid bytes as a hexadecimal dump
///
/// Same layout as `xxd`-style dumps: 16 bytes per line, offset in hex, hex
/// bytes split in two groups of eight. Grid bytes are never printable, so
/// there is no ASCII column.
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;
    let mut output = String::new();

    for (offset, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        output.push_str(&format!("{:08x}  ", offset * BYTES_PER_LINE));
        let line = chunk
            .iter()
            .enumerate()
            .map(|(i, byte)| {
                if i == 8 {
                    format!(" {byte:02x}")
                } else {
                    format!("{byte:02x}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }

    output
}
