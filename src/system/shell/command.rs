//! Command table entries and lookup.
//!
//! The command table is owned by the application and handed to the shell
//! once. The shell only reads it: entries are looked up by exact,
//! case-sensitive name in table order, and the first match wins.
//!
//! ```rust
//! use libcli::system::shell::{find_command, Command, Handler};
//!
//! fn led(argc: usize, argv: &[&str]) -> i32 {
//!     if argc == 2 && argv[1] == "on" { 0 } else { -1 }
//! }
//!
//! static COMMANDS: [Command<'static>; 1] = [Command {
//!     name: "led",
//!     help: "Switch the status LED: led on|off",
//!     handler: &led,
//! }];
//!
//! let command = find_command(&COMMANDS, "led").unwrap();
//! assert_eq!(command.handler.call(2, &["led", "on"]), 0);
//! assert!(find_command(&COMMANDS, "LED").is_none());
//! ```

use super::output::OutputSink;

/// Behavior invoked when a line's first token names a command.
///
/// `argv[0]` is the command name and `argc == argv.len()`. The returned
/// status code belongs to the application; the shell does not inspect it.
/// Every `Fn(usize, &[&str]) -> i32`, including plain functions, is a handler.
pub trait Handler {
    /// Run the command.
    fn call(&self, argc: usize, argv: &[&str]) -> i32;
}

impl<F> Handler for F
where
    F: Fn(usize, &[&str]) -> i32,
{
    fn call(&self, argc: usize, argv: &[&str]) -> i32 {
        self(argc, argv)
    }
}

/// One entry of the command table.
#[derive(Clone, Copy)]
pub struct Command<'a> {
    /// Name typed by the user. Must be non-empty; matching is case-sensitive.
    pub name: &'a str,

    /// One-line description for application-provided help output.
    pub help: &'a str,

    /// Code run when the command is invoked.
    pub handler: &'a (dyn Handler + Sync),
}

impl core::fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Find the first entry named exactly `name`.
pub fn find_command<'t, 'a>(commands: &'t [Command<'a>], name: &str) -> Option<&'t Command<'a>> {
    commands.iter().find(|command| command.name == name)
}

/// Write one `name\t\thelp` line per entry, in table order.
///
/// The shell has no built-in commands. Applications that want a `help`
/// command call this from their own handler with their own sink.
pub fn write_help<O: OutputSink + ?Sized>(output: &mut O, commands: &[Command<'_>]) {
    for command in commands {
        output.write_str(command.name);
        output.write_str("\t\t");
        output.write_str(command.help);
        output.write_str("\r\n");
    }
}
