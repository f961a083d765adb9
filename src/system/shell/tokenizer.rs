//! In-place line tokenizer.
//!
//! The tokenizer splits a completed line on runs of spaces and tabs without
//! copying: the first separator of every run is overwritten with `0` and the
//! returned tokens are slices into the original buffer. The buffer no longer
//! holds the typed line afterwards; it stays unusable as a string until the
//! intake writes the next line over it from offset zero.
//!
//! Leading and trailing whitespace are not trimmed. A line that starts with a
//! separator yields an empty first token, and one that ends with a separator
//! yields an empty last token:
//!
//! ```text
//! "set  led   1"   -> ["set", "led", "1"]
//! " led"           -> ["", "led"]
//! "led "           -> ["led", ""]
//! ```

use heapless::Vec;

use super::charset::is_whitespace;
use super::config::ArgOverflow;
use super::error::ShellError;

/// Argument vector produced by [`tokenize`]; `argv[0]` is the command name.
pub type Argv<'b, const M: usize> = Vec<&'b str, M>;

/// Split `line` into at most `M` tokens, terminating each in place.
///
/// `line` is the logical content of the line buffer, without its terminator.
///
/// # Errors
///
/// * [`ShellError::Encoding`] - `line` is not valid UTF-8
/// * [`ShellError::TooManyArguments`] - more than `M` tokens and `overflow` is
///   [`ArgOverflow::Reject`]
///
/// With [`ArgOverflow::Truncate`] the first `M` tokens are returned and the
/// rest of the line is ignored.
///
/// # Examples
///
/// ```rust
/// use libcli::system::shell::{tokenize, ArgOverflow};
///
/// let mut line = *b"set  led   1";
/// let argv = tokenize::<4>(&mut line, ArgOverflow::Reject).unwrap();
/// assert_eq!(argv.as_slice(), &["set", "led", "1"]);
/// ```
pub fn tokenize<const M: usize>(
    line: &mut [u8],
    overflow: ArgOverflow,
) -> Result<Argv<'_, M>, ShellError> {
    if core::str::from_utf8(line).is_err() {
        return Err(ShellError::Encoding);
    }

    let spans = split_in_place::<M>(line, overflow)?;

    // Separators are ASCII, so every span boundary falls on a char boundary.
    let line: &[u8] = line;
    let mut argv = Vec::new();
    for (start, end) in spans {
        let token = core::str::from_utf8(&line[start..end]).map_err(|_| ShellError::Encoding)?;
        argv.push(token).map_err(|_| ShellError::TooManyArguments)?;
    }

    Ok(argv)
}

/// Terminate tokens in place and record their `(start, end)` offsets.
fn split_in_place<const M: usize>(
    line: &mut [u8],
    overflow: ArgOverflow,
) -> Result<Vec<(usize, usize), M>, ShellError> {
    let mut spans: Vec<(usize, usize), M> = Vec::new();
    let len = line.len();
    let mut start = 0;
    let mut i = 0;

    while i < len {
        if !is_whitespace(line[i]) {
            i += 1;
            continue;
        }

        line[i] = 0;
        if !push_span(&mut spans, (start, i), overflow)? {
            return Ok(spans);
        }

        i += 1;
        while i < len && is_whitespace(line[i]) {
            i += 1;
        }
        start = i;
    }

    push_span(&mut spans, (start, len), overflow)?;
    Ok(spans)
}

/// Returns `Ok(false)` once the vector is full and excess tokens are dropped.
fn push_span<const M: usize>(
    spans: &mut Vec<(usize, usize), M>,
    span: (usize, usize),
    overflow: ArgOverflow,
) -> Result<bool, ShellError> {
    match spans.push(span) {
        Ok(()) => Ok(true),
        Err(_) => match overflow {
            ArgOverflow::Truncate => Ok(false),
            ArgOverflow::Reject => Err(ShellError::TooManyArguments),
        },
    }
}
