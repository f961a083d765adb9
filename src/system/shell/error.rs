//! Error type for shell operations

/// Errors reported by the shell's intake, tokenizer and configuration layers.
///
/// None of these are fatal. Intake errors describe a byte that was dropped,
/// dispatch errors are reported to the user through the output sink and the
/// shell goes straight back to waiting for the next line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShellError {
    /// The line buffer is full; the byte was not stored.
    BufferOverflow,
    /// A completed line is still waiting to be dispatched; the byte was not stored.
    LinePending,
    /// The line contains more tokens than the argument vector can hold.
    TooManyArguments,
    /// The line is not valid UTF-8.
    Encoding,
    /// A configuration document could not be parsed.
    InvalidConfig,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ShellError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ShellError::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            ShellError::LinePending => defmt::write!(f, "LinePending"),
            ShellError::TooManyArguments => defmt::write!(f, "TooManyArguments"),
            ShellError::Encoding => defmt::write!(f, "Encoding"),
            ShellError::InvalidConfig => defmt::write!(f, "InvalidConfig"),
        }
    }
}
