use super::support::{Recorder, Terminal};
use libcli::system::shell::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

static UART_TX: Mutex<String> = Mutex::new(String::new());
static REBOOTS: AtomicUsize = AtomicUsize::new(0);

fn uart_write(text: &str) {
    UART_TX.lock().unwrap().push_str(text);
}

fn reboot(_argc: usize, _argv: &[&str]) -> i32 {
    REBOOTS.fetch_add(1, Ordering::SeqCst);
    0
}

static COMMANDS: [Command<'static>; 1] = [Command {
    name: "reboot",
    help: "Restart the device",
    handler: &reboot,
}];

static SHELL: SharedShell<'static, fn(&str)> =
    SharedShell::new(Shell::new(uart_write as fn(&str), &COMMANDS));

static CONSOLE_TX: Mutex<String> = Mutex::new(String::new());

fn console_write(text: &str) {
    CONSOLE_TX.lock().unwrap().push_str(text);
}

/// Replies through the shell it was dispatched from and types ahead.
fn status(_argc: usize, _argv: &[&str]) -> i32 {
    assert!(!CONSOLE.is_line_ready());
    CONSOLE.lock(|shell| {
        shell.output_mut().write_str("\r\nok");
        let prompt = shell.config().prompt;
        shell.output_mut().write_str(prompt);
    });
    assert_eq!(CONSOLE.receive(b'x'), Ok(()));
    0
}

static CONSOLE_COMMANDS: [Command<'static>; 1] = [Command {
    name: "status",
    help: "Show status",
    handler: &status,
}];

static CONSOLE: SharedShell<'static, fn(&str)> =
    SharedShell::new(Shell::new(console_write as fn(&str), &CONSOLE_COMMANDS));

/// Stand-in for the UART receive interrupt.
fn on_uart_rx(byte: u8) {
    let _ = SHELL.receive(byte);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_shell_from_interrupt_and_main_loop() {
        SHELL.init();
        assert!(UART_TX.lock().unwrap().ends_with(DEFAULT_PROMPT));

        let rx = std::thread::spawn(|| {
            for &byte in b"reboot\r" {
                on_uart_rx(byte);
            }
        });
        rx.join().unwrap();

        assert!(SHELL.is_line_ready());
        SHELL.process();
        SHELL.process();

        assert_eq!(REBOOTS.load(Ordering::SeqCst), 1);
        assert!(!SHELL.is_line_ready());
        assert!(UART_TX.lock().unwrap().contains("reboot"));
    }

    #[test]
    fn test_handler_reenters_shared_shell() {
        CONSOLE.init();
        for &byte in b"status\r" {
            assert_eq!(CONSOLE.receive(byte), Ok(()));
        }

        CONSOLE.process();

        let tx = CONSOLE_TX.lock().unwrap().clone();
        assert!(tx.ends_with("status\r\nok\r\n> x"));
        assert_eq!(CONSOLE.lock(|shell| shell.line().to_owned()), "x");
        assert!(!CONSOLE.is_line_ready());
    }

    #[test]
    fn test_shared_shell_reports_unknown_command() {
        let terminal = Terminal::new();
        let shared = SharedShell::new(Shell::new(terminal.clone(), &[]));

        for &byte in b"nope 1\r" {
            let _ = shared.receive(byte);
        }
        terminal.take();
        shared.process();

        assert_eq!(terminal.take(), "\r\nCommand not found: nope\r\n> ");
    }

    #[test]
    fn test_shared_shell_lock_exposes_state() {
        let terminal = Terminal::new();
        let shared = SharedShell::new(Shell::new(terminal.clone(), &[]));

        for &byte in b"abc" {
            assert_eq!(shared.receive(byte), Ok(()));
        }

        assert_eq!(shared.lock(|shell| shell.char_count()), 3);
        assert_eq!(terminal.take(), "abc");
    }

    #[test]
    fn test_shared_shell_dispatches() {
        let recorder = Recorder::new();
        let led = recorder.handler(0);
        let commands = [Command {
            name: "led",
            help: "",
            handler: &led,
        }];
        let terminal = Terminal::new();
        let shared = SharedShell::new(Shell::new(terminal.clone(), &commands));

        for &byte in b"led off\r" {
            let _ = shared.receive(byte);
        }
        assert_eq!(shared.receive(b'x'), Err(ShellError::LinePending));

        shared.process();

        assert_eq!(recorder.calls(), vec![vec!["led", "off"]]);
        assert!(!shared.is_line_ready());
    }

    #[test]
    fn test_shared_shell_debug() {
        let shared = SharedShell::new(Shell::new(Terminal::new(), &[]));
        assert!(format!("{:?}", shared).starts_with("SharedShell"));
    }
}
