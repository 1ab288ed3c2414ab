//! Menu codec
//!
//! Reading fields from and writing prompts to the terminal.
//!
//! ## Line Format
//! Every answer is one line. The trailing newline (and any surrounding
//! whitespace) is stripped; inner spaces are kept. Bytes that are not valid
//! UTF-8 are replaced with `U+FFFD` rather than failing the read. End of
//! input is reported as `Ok(None)` so the session can wind down quietly.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, RosterError};

use super::{MenuChoice, Response};

/// Write the menu block followed by the `Enter choice: ` prompt
pub fn write_menu<W: Write>(writer: &mut W, title: &str) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "===== {} =====", title)?;
    for choice in MenuChoice::ALL {
        writeln!(writer, "{}", choice)?;
    }
    write_prompt(writer, "Enter choice: ")
}

/// Write a prompt without a newline and flush so it shows before input
pub fn write_prompt<W: Write>(writer: &mut W, prompt: &str) -> Result<()> {
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a response's status line
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writeln!(writer, "{}", response.message())?;
    writer.flush()?;
    Ok(())
}

/// Read one trimmed line
///
/// Returns `Ok(None)` at end of input.
pub fn read_field<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Read one line and parse it as a number
///
/// Returns `Ok(None)` at end of input and `InvalidInput` if the line does
/// not parse.
pub fn read_number<R, T>(reader: &mut R) -> Result<Option<T>>
where
    R: BufRead,
    T: FromStr,
{
    let Some(line) = read_field(reader)? else {
        return Ok(None);
    };

    line.parse::<T>()
        .map(Some)
        .map_err(|_| RosterError::InvalidInput(format!("expected a number, got {:?}", line)))
}
