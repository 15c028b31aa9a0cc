//! Confirmation gate before destructive replacement.

use std::io::{self, BufRead, Write};

/// Exact input required to proceed.
pub const CONFIRMATION_TOKEN: &str = "YES";

/// Prompt shown before reading the confirmation line.
pub const CONFIRMATION_PROMPT: &str = "Do you want to replace matching files with symbolic links?\n\
     ALL THE DUPLICATES WILL BE DELETED AND REPLACED WITH LINKS\n\
     Type YES in caps, to proceed\n\
     > ";

/// Ask for confirmation and read one line of input.
///
/// Only the trailing line ending is stripped; the rest must equal
/// [`CONFIRMATION_TOKEN`] exactly. End of input counts as declining.
pub fn confirm<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    output.write_all(CONFIRMATION_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);

    Ok(answer == CONFIRMATION_TOKEN)
}
