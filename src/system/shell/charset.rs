//! Character classification for line intake.
//!
//! These predicates decide which received bytes are allowed into the line
//! buffer. They are pure and operate on raw bytes because input arrives one
//! byte at a time from the transport.

/// Returns `true` for the token separators: space and horizontal tab.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Returns `true` for visible ASCII punctuation (`!` through `/`, `:` through `@`,
/// `[` through `` ` `` and `{` through `~`).
///
/// This is the full ASCII punctuation set, so `_` and `~` are accepted
/// deliberately; older consoles built on a hand-picked subset rejected them.
/// Space is not punctuation; it is accepted through [`is_whitespace`].
#[inline]
pub const fn is_punctuation(byte: u8) -> bool {
    byte.is_ascii_punctuation()
}

/// Returns `true` for ASCII `0-9`, `a-z` and `A-Z`.
#[inline]
pub const fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Returns `true` if the byte may be stored in the line buffer.
///
/// This is the only gate applied to ordinary input: anything that is not
/// alphanumeric, punctuation or whitespace (control bytes, non-ASCII bytes)
/// is dropped by the intake without echo.
#[inline]
pub const fn is_printable(byte: u8) -> bool {
    is_alphanumeric(byte) || is_punctuation(byte) || is_whitespace(byte)
}
