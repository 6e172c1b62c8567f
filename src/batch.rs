//! Line-oriented conversion of UTM strings, as used by the `utmconv` binary.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{ParseCoord, Utm};

/// Reads newline separated UTM strings (see [`Utm`]'s [`ParseCoord`] impl) from
/// `input` and writes one `latitude longitude` line per coordinate to `output`.
///
/// Blank lines are ignored. Lines that are not UTF-8 or don't parse are logged
/// and skipped, and the rest of the input is still converted.
///
/// Returns the number of skipped lines.
///
/// # Errors
///
/// Only I/O errors from `input` or `output` stop the conversion.
///
/// ```
/// let mut out = Vec::new();
/// let failed = utmconv::batch::convert_lines(&b"10n 500000 0\nnot utm\n"[..], &mut out).unwrap();
///
/// assert_eq!(failed, 1);
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
/// ```
pub fn convert_lines<R, W>(input: R, mut output: W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut failed = 0_usize;

    for (index, chunk) in input.split(b'\n').enumerate() {
        let line_no = index + 1;

        let line = match String::from_utf8(chunk?) {
            Ok(line) => line,
            Err(e) => {
                warn!(line_no, "skipping: {e}");
                failed += 1;
                continue;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Utm::parse_coord(line) {
            Ok(utm) => writeln!(output, "{}", utm.to_latlon())?,
            Err(e) => {
                warn!(line_no, input = line, "skipping: {e}");
                failed += 1;
            }
        }
    }

    output.flush()?;

    Ok(failed)
}
