//! System utilities for embedded devices.
//!
//! This module groups the device-facing utilities of the crate. They are
//! `no_std`, allocation-free and driven entirely by the application: the
//! crate owns no peripherals, no interrupts and no global state.
//!
//! # Available Utilities
//!
//! - **[`shell`]**: Interrupt-driven command line shell over a byte stream
//!
//! # Usage
//!
//! ```rust
//! use libcli::system::shell::{Command, Shell};
//!
//! fn status(_argc: usize, _argv: &[&str]) -> i32 {
//!     0
//! }
//!
//! static COMMANDS: [Command<'static>; 1] = [Command {
//!     name: "status",
//!     help: "Show device status",
//!     handler: &status,
//! }];
//!
//! let mut shell = Shell::new(|text: &str| print!("{}", text), &COMMANDS);
//! shell.init();
//! ```

/// Command shell for UART-style terminals.
///
/// Provides per-byte line intake with echo and backspace, in-place
/// tokenization and dispatch against a fixed command table.
pub mod shell;
