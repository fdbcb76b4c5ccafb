// src/util/helper.rs
use std::io::{self, BufRead, IsTerminal};

pub fn is_stderr_piped() -> bool {
    !io::stderr().is_terminal()
}

/// Reads one line and trims it; `None` at end of input
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn given_padded_line_when_read_then_trimmed() {
        let mut input = Cursor::new("  home \nsecond\n");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), Some("home".to_string()));
        assert_eq!(read_trimmed_line(&mut input).unwrap(), Some("second".to_string()));
        assert_eq!(read_trimmed_line(&mut input).unwrap(), None);
    }
}
