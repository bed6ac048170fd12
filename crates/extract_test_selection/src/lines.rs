// crates/extract_test_selection/src/lines.rs

use std::io::{self, BufRead};

/// Splits a pull-request body into lines without failing on its encoding.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD. Only genuine I/O errors are yielded as `Err`.
/// The reader is consumed one `\n`-terminated chunk at a time.
pub fn pr_body_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').flat_map(|chunk| {
        let lines: Vec<io::Result<String>> = match chunk {
            Ok(mut bytes) => {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                bytes
                    .split(|&byte| byte == b'\r')
                    .map(|line| Ok(String::from_utf8_lossy(line).into_owned()))
                    .collect()
            }
            Err(err) => vec![Err(err)],
        };
        lines
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<String> {
        pr_body_lines(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_all_terminators_end_a_line() {
        assert_eq!(collect(b"a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(collect(b"a\n\nb\r\n\r\n"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(collect(b"Caf\xe9\nok\n"), vec!["Caf\u{fffd}", "ok"]);
    }
}
