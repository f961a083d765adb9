//! Sharing one shell between an interrupt handler and the main loop.
//!
//! The intake and dispatch entry points both need `&mut Shell`, but they run
//! in different execution contexts. [`SharedShell`] keeps the shell in a
//! `critical_section::Mutex<RefCell<_>>`, so it can live in a `static` and be
//! reached from both sides:
//!
//! ```rust,no_run
//! use libcli::system::shell::{Command, SharedShell, Shell};
//!
//! fn uart_write(text: &str) {
//!     // push `text` into the UART transmit queue
//! #   let _ = text;
//! }
//!
//! static COMMANDS: [Command<'static>; 0] = [];
//! static SHELL: SharedShell<'static, fn(&str)> =
//!     SharedShell::new(Shell::new(uart_write as fn(&str), &COMMANDS));
//!
//! // UART receive interrupt
//! fn on_uart_rx(byte: u8) {
//!     let _ = SHELL.receive(byte);
//! }
//!
//! // Firmware entry point
//! fn main() {
//!     SHELL.init();
//!     loop {
//!         SHELL.process();
//!     }
//! }
//! ```
//!
//! [`SharedShell::process`] copies the completed line out of the shell inside
//! a critical section and runs the handler after leaving it. Handlers may
//! therefore call back into the same `SharedShell` (to write a reply through
//! [`lock`](SharedShell::lock), for example) and bytes received while a
//! handler runs go into the now empty line buffer.

use core::cell::RefCell;

use critical_section::Mutex;

use super::command::find_command;
use super::error::ShellError;
use super::output::OutputSink;
use super::tokenizer::tokenize;
use super::{INPUT_BUFFER_SIZE, MAX_ARGS, Shell, report_not_found, report_rejected};
use crate::log::debug;

/// A [`Shell`] guarded by a critical section.
pub struct SharedShell<'a, O: OutputSink, const N: usize = INPUT_BUFFER_SIZE> {
    inner: Mutex<RefCell<Shell<'a, O, N>>>,
}

impl<'a, O: OutputSink, const N: usize> SharedShell<'a, O, N> {
    /// Wrap a shell. Usable in a `static` initializer.
    pub const fn new(shell: Shell<'a, O, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(shell)),
        }
    }

    /// Run `f` with exclusive access to the shell inside a critical section.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Shell<'a, O, N>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// See [`Shell::init`].
    pub fn init(&self) {
        self.lock(|shell| shell.init());
    }

    /// See [`Shell::receive`]. Call from the receive interrupt.
    pub fn receive(&self, byte: u8) -> Result<(), ShellError> {
        self.lock(|shell| shell.receive(byte))
    }

    /// See [`Shell::process`]. Call from the main loop.
    ///
    /// The line is copied to the stack under the lock; tokenizing and the
    /// handler run without it. Polling an idle shell holds the critical
    /// section only long enough to read the line-ready signal.
    pub fn process(&self) {
        let mut line = [0u8; N];
        let taken = self.lock(|shell| {
            let len = shell.take_line()?;
            line[..len].copy_from_slice(&shell.buffer[..len]);
            Some((len, shell.commands, shell.config.arg_overflow))
        });
        let Some((len, commands, overflow)) = taken else {
            return;
        };

        let argv = match tokenize::<MAX_ARGS>(&mut line[..len], overflow) {
            Ok(argv) => argv,
            Err(error) => {
                self.lock(|shell| report_rejected(&mut shell.output, shell.config.prompt, error));
                return;
            }
        };

        let name = argv.first().copied().unwrap_or("");
        match find_command(commands, name) {
            Some(command) => {
                debug!("dispatching {} with {} arguments", name, argv.len() - 1);
                command.handler.call(argv.len(), &argv);
            }
            None => self.lock(|shell| report_not_found(&mut shell.output, shell.config.prompt, name)),
        }
    }

    /// See [`Shell::is_line_ready`].
    pub fn is_line_ready(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_line_ready())
    }
}

impl<O: OutputSink, const N: usize> core::fmt::Debug for SharedShell<'_, O, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedShell").finish_non_exhaustive()
    }
}
