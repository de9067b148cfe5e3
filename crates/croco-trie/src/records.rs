// Line-oriented record reading shared by the dictionary and cost loaders.

use std::io::{self, BufRead};
use std::str::FromStr;

use crate::RecordError;

/// Call `f` with every line of `reader` and its 1-based line number.
///
/// Lines are passed without their `\n` / `\r\n` terminator. Bytes are not
/// required to be valid UTF-8.
pub(crate) fn for_each_line<R: BufRead>(
    mut reader: R,
    mut f: impl FnMut(usize, &[u8]),
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_no += 1;
        f(line_no, trim_line_end(&buf));
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Field `index` of a split record.
pub(crate) fn field<'a>(
    fields: &[&'a [u8]],
    index: usize,
    name: &'static str,
) -> Result<&'a [u8], RecordError> {
    fields
        .get(index)
        .copied()
        .ok_or(RecordError::MissingField { field: name, index })
}

/// Parse a numeric field, ignoring surrounding ASCII whitespace.
pub(crate) fn number<T: FromStr>(bytes: &[u8], name: &'static str) -> Result<T, RecordError> {
    let invalid = || RecordError::InvalidNumber {
        field: name,
        value: String::from_utf8_lossy(bytes).into_owned(),
    };
    std::str::from_utf8(bytes.trim_ascii())
        .map_err(|_| invalid())?
        .parse()
        .map_err(|_| invalid())
}
