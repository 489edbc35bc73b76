use std::io;
use std::io::BufRead;

/// Where the game reads its lines from.
pub trait LineSource {
    /// Next line without its line terminator, `None` once input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_endings() {
        let mut input: &[u8] = b"1\r\nAl\n\n 2 3 \nlast";

        assert_eq!(input.next_line().unwrap().as_deref(), Some("1"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("Al"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.next_line().unwrap().as_deref(), Some(" 2 3 "));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut input: &[u8] = b"\xff\xfe\n";
        assert!(input.next_line().is_err());
    }
}
