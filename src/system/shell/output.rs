//! Output sink abstraction.
//!
//! The shell never talks to a peripheral directly. Echo, erase sequences,
//! prompts and error messages all go through an [`OutputSink`] supplied by the
//! application, typically a function that pushes bytes into a UART transmit
//! register or queue.

/// Destination for everything the shell writes.
///
/// Implementations must accept short ASCII strings including control bytes
/// (`\x08`, `\r`, `\n`). Because the intake echoes from interrupt context, a
/// sink must not block for long; buffering or dropping is preferable to
/// spinning on a full transmit FIFO.
///
/// Any `FnMut(&str)` is a sink:
///
/// ```rust
/// use libcli::system::shell::OutputSink;
///
/// let mut written = 0;
/// let mut sink = |text: &str| written += text.len();
/// sink.write_str("\r\n> ");
/// assert_eq!(written, 4);
/// ```
pub trait OutputSink {
    /// Write `text` to the terminal.
    fn write_str(&mut self, text: &str);
}

impl<F> OutputSink for F
where
    F: FnMut(&str),
{
    fn write_str(&mut self, text: &str) {
        self(text)
    }
}

/// Capture output in a fixed-capacity string. Text that does not fit is
/// dropped whole, so the captured output never contains a partial write.
impl<const N: usize> OutputSink for heapless::String<N> {
    fn write_str(&mut self, text: &str) {
        let _ = self.push_str(text);
    }
}

#[cfg(feature = "std")]
impl OutputSink for std::string::String {
    fn write_str(&mut self, text: &str) {
        self.push_str(text);
    }
}
