use std::io::{self, BufRead, Write};

pub const CONFIRM_QUESTION: &str = "Are you sure you want to DESTROY all emojis? (Y/n): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    /// Input closed before an answer was given.
    Closed,
}

/// Ask for confirmation. Anything but a line that is exactly `n` or `N` confirms.
pub fn confirm<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<Confirmation> {
    write!(writer, "\n{}", CONFIRM_QUESTION)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Confirmation::Closed);
    }

    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.eq_ignore_ascii_case("n") {
        Ok(Confirmation::Declined)
    } else {
        Ok(Confirmation::Confirmed)
    }
}
