//! Terminal prompt helpers
//!
//! Reads single form fields from a line-oriented input.

use std::io::{self, BufRead, Write};

/// Prints `label`, then reads one line without its line terminator.
///
/// Returns `None` at end of input.
pub fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Reads a yes/no answer; anything other than `y`/`yes` is no.
pub fn read_flag<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<bool>> {
    let answer = read_field(input, output, &format!("{} [y/N]", label))?;
    Ok(answer.map(|a| {
        let a = a.trim().to_ascii_lowercase();
        a == "y" || a == "yes"
    }))
}
