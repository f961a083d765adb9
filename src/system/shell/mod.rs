//! Interrupt-driven command shell for embedded systems.
//!
//! The shell turns a stream of bytes from a serial receiver into command
//! invocations. It is split along the two execution contexts of a typical
//! microcontroller firmware:
//!
//! - **Intake** ([`Shell::receive`]) runs once per received byte, usually from
//!   the UART receive interrupt. It edits the line buffer, echoes the effect
//!   and raises the line-ready signal on Enter.
//! - **Dispatch** ([`Shell::process`]) is polled from the main loop. When a
//!   line is ready it tokenizes it in place, looks the first token up in the
//!   command table and runs the handler.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Intake        │───▶│  Line Buffer    │───▶│   Dispatch      │
//! │   (one byte,    │    │  + LineSignal   │    │   (main loop)   │
//! │   RX interrupt) │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             │
//!          ▼                                             ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Echo /        │    │   In-place      │◀───│   Command       │
//! │   Erase Output  │    │   Tokenizer     │    │   Table Lookup  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Line editing
//!
//! | Byte                  | Effect                                               |
//! |-----------------------|------------------------------------------------------|
//! | `\r` (Enter)          | terminate the line, raise the line-ready signal      |
//! | `0x7F` (Backspace)    | drop the last character, write `"\x08 \x08"`         |
//! | printable ASCII, tab  | append and echo, unless the buffer is full           |
//! | anything else         | ignored                                              |
//!
//! # Usage
//!
//! ```rust
//! use core::cell::RefCell;
//! use libcli::system::shell::{Command, Shell};
//!
//! fn led(argc: usize, argv: &[&str]) -> i32 {
//!     if argc == 2 && argv[1] == "on" { 0 } else { 1 }
//! }
//!
//! static COMMANDS: [Command<'static>; 1] = [Command {
//!     name: "led",
//!     help: "Switch the status LED",
//!     handler: &led,
//! }];
//!
//! let terminal = RefCell::new(String::new());
//! let mut shell = Shell::new(|text: &str| terminal.borrow_mut().push_str(text), &COMMANDS);
//! shell.init();
//!
//! // Normally called from the receive interrupt, one byte at a time.
//! for &byte in b"led on\r" {
//!     shell.receive(byte).unwrap();
//! }
//!
//! // Polled from the main loop.
//! shell.process();
//! assert!(terminal.borrow().ends_with("\r\n> led on"));
//! ```
//!
//! To share one shell between an interrupt handler and the main loop, wrap it
//! in a [`SharedShell`].

use core::str;

use crate::log::{debug, trace, warning};

/// Character classification used by the intake.
pub mod charset;
/// Command table entries, lookup and help formatting.
pub mod command;
/// Runtime configuration.
pub mod config;
/// Error type.
pub mod error;
/// Output sink trait and implementations.
pub mod output;
/// Critical-section wrapper for interrupt sharing.
pub mod shared;
/// Line-ready signal.
pub mod signal;
/// In-place tokenizer.
pub mod tokenizer;

pub use charset::{is_alphanumeric, is_printable, is_punctuation, is_whitespace};
pub use command::{Command, Handler, find_command, write_help};
pub use config::{ArgOverflow, DEFAULT_BANNER, DEFAULT_PROMPT, ShellConfig};
pub use error::ShellError;
pub use output::OutputSink;
pub use shared::SharedShell;
pub use signal::LineSignal;
pub use tokenizer::{Argv, tokenize};

/// Default line buffer capacity, terminator included.
///
/// A line holds at most `INPUT_BUFFER_SIZE - 1` characters.
pub const INPUT_BUFFER_SIZE: usize = 100;

/// Maximum number of tokens per line: the command name plus nine arguments.
pub const MAX_ARGS: usize = 10;

/// Byte sent by the terminal for the Enter key.
pub const KEY_ENTER: u8 = b'\r';

/// Byte sent by the terminal for the Backspace key.
pub const KEY_BACKSPACE: u8 = 0x7F;

/// Moves the cursor back, blanks the cell and moves back again.
pub const ERASE_SEQUENCE: &str = "\x08 \x08";

/// Written before the command name when no table entry matches.
pub const NOT_FOUND_MESSAGE: &str = "\r\nCommand not found: ";

/// Written when a line has more than [`MAX_ARGS`] tokens under [`ArgOverflow::Reject`].
pub const TOO_MANY_ARGS_MESSAGE: &str = "\r\nToo many arguments";

/// Shell state: line buffer, line-ready signal, output sink and command table.
///
/// `N` is the line buffer capacity including the terminator. The shell never
/// allocates; its size is dominated by the `N`-byte buffer.
pub struct Shell<'a, O: OutputSink, const N: usize = INPUT_BUFFER_SIZE> {
    buffer: [u8; N],
    char_count: usize,
    ready: LineSignal,
    output: O,
    commands: &'a [Command<'a>],
    config: ShellConfig<'a>,
}

impl<'a, O: OutputSink> Shell<'a, O> {
    /// Create a shell with a [`INPUT_BUFFER_SIZE`] byte line buffer and the
    /// default configuration.
    ///
    /// Nothing is written until [`init`](Self::init) is called.
    pub const fn new(output: O, commands: &'a [Command<'a>]) -> Self {
        Self::with_buffer(output, commands, ShellConfig::DEFAULT)
    }

    /// Create a shell with a [`INPUT_BUFFER_SIZE`] byte line buffer and an
    /// explicit configuration.
    pub const fn with_config(
        output: O,
        commands: &'a [Command<'a>],
        config: ShellConfig<'a>,
    ) -> Self {
        Self::with_buffer(output, commands, config)
    }
}

impl<'a, O: OutputSink, const N: usize> Shell<'a, O, N> {
    /// Create a shell with an `N` byte line buffer.
    ///
    /// `N` comes from a type annotation or turbofish:
    ///
    /// ```rust
    /// use libcli::system::shell::{Shell, ShellConfig};
    ///
    /// let shell = Shell::<_, 16>::with_buffer(|_: &str| {}, &[], ShellConfig::DEFAULT);
    /// assert_eq!(shell.capacity(), 16);
    /// ```
    pub const fn with_buffer(
        output: O,
        commands: &'a [Command<'a>],
        config: ShellConfig<'a>,
    ) -> Self {
        const { assert!(N >= 2, "line buffer needs room for a character and the terminator") };

        Self {
            buffer: [0; N],
            char_count: 0,
            ready: LineSignal::new(),
            output,
            commands,
            config,
        }
    }

    /// Reset the line state and greet the user with the banner and a prompt.
    pub fn init(&mut self) {
        self.char_count = 0;
        self.ready.clear();
        self.output.write_str(self.config.banner);
        self.output.write_str(self.config.prompt);
    }

    /// Feed one received byte to the line editor.
    ///
    /// This is the intake entry point and is meant to be called from the
    /// receive interrupt. It only touches the line buffer, the line-ready
    /// signal and the output sink.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the byte was applied, or deliberately ignored (non-printable
    ///   byte, Backspace on an empty line)
    /// * `Err(ShellError::BufferOverflow)` - printable byte dropped because the
    ///   line is full; Backspace and Enter still work
    /// * `Err(ShellError::LinePending)` - byte dropped because the previous line
    ///   has not been dispatched yet
    pub fn receive(&mut self, byte: u8) -> Result<(), ShellError> {
        if self.ready.is_raised() {
            trace!("byte {} dropped, line pending", byte);
            return Err(ShellError::LinePending);
        }

        match byte {
            KEY_ENTER => {
                self.buffer[self.char_count] = 0;
                self.ready.raise();
            }
            KEY_BACKSPACE => {
                if self.char_count > 0 {
                    self.char_count -= 1;
                    if self.config.echo {
                        self.output.write_str(ERASE_SEQUENCE);
                    }
                }
            }
            _ if !is_printable(byte) => {
                trace!("non-printable byte {} ignored", byte);
            }
            _ => {
                if self.char_count >= N - 1 {
                    warning!("line buffer full, byte {} dropped", byte);
                    return Err(ShellError::BufferOverflow);
                }

                self.buffer[self.char_count] = byte;
                self.char_count += 1;

                if self.config.echo {
                    let echo = [byte];
                    if let Ok(text) = str::from_utf8(&echo) {
                        self.output.write_str(text);
                    }
                }
            }
        }

        Ok(())
    }

    /// Dispatch the pending line, if any.
    ///
    /// This is the processing entry point, meant to be polled from the main
    /// loop; it returns immediately when no line is ready. Otherwise it takes
    /// the line, clears the buffer for the next one and runs the first command
    /// whose name equals the line's first token. Unknown commands and lines
    /// with too many tokens are reported through the output sink. Handlers are
    /// responsible for their own output, including the next prompt.
    pub fn process(&mut self) {
        let Some(len) = self.take_line() else {
            return;
        };

        let overflow = self.config.arg_overflow;
        let argv = match tokenize::<MAX_ARGS>(&mut self.buffer[..len], overflow) {
            Ok(argv) => argv,
            Err(error) => {
                report_rejected(&mut self.output, self.config.prompt, error);
                return;
            }
        };

        let name = argv.first().copied().unwrap_or("");
        match find_command(self.commands, name) {
            Some(command) => {
                debug!("dispatching {} with {} arguments", name, argv.len() - 1);
                command.handler.call(argv.len(), &argv);
            }
            None => report_not_found(&mut self.output, self.config.prompt, name),
        }
    }

    /// Consume the line-ready signal and return the length of the completed
    /// line, leaving the buffer free for the next one.
    ///
    /// An empty line is answered with a prompt here and yields `None`.
    fn take_line(&mut self) -> Option<usize> {
        if !self.ready.take() {
            return None;
        }

        let len = self.char_count;
        self.char_count = 0;

        if len == 0 {
            self.output.write_str(self.config.prompt);
            return None;
        }

        Some(len)
    }

    /// Whether a completed line is waiting for [`process`](Self::process).
    pub fn is_line_ready(&self) -> bool {
        self.ready.is_raised()
    }

    /// Number of characters in the line being edited.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Line buffer capacity, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The characters typed so far on the current line.
    ///
    /// Only meaningful before dispatch; tokenizing terminates words in place.
    pub fn line(&self) -> &str {
        str::from_utf8(&self.buffer[..self.char_count]).unwrap_or("")
    }

    /// The command table.
    pub fn commands(&self) -> &'a [Command<'a>] {
        self.commands
    }

    /// The active configuration.
    pub fn config(&self) -> &ShellConfig<'a> {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next byte or line.
    pub fn set_config(&mut self, config: ShellConfig<'a>) {
        self.config = config;
    }

    /// Enable or disable echo of typed characters and erase sequences.
    pub fn set_echo(&mut self, enabled: bool) {
        self.config.echo = enabled;
    }

    /// The output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Mutable access to the output sink, for writing outside of the shell.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: OutputSink, const N: usize> core::fmt::Debug for Shell<'_, O, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("line", &self.line())
            .field("char_count", &self.char_count)
            .field("ready", &self.ready.is_raised())
            .field("commands", &self.commands.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn report_rejected<O: OutputSink + ?Sized>(output: &mut O, prompt: &str, error: ShellError) {
    warning!("line rejected: {}", error);
    if error == ShellError::TooManyArguments {
        output.write_str(TOO_MANY_ARGS_MESSAGE);
    }
    output.write_str(prompt);
}

fn report_not_found<O: OutputSink + ?Sized>(output: &mut O, prompt: &str, name: &str) {
    debug!("command not found: {}", name);
    output.write_str(NOT_FOUND_MESSAGE);
    output.write_str(name);
    output.write_str(prompt);
}
