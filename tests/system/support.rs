use libcli::system::shell::{OutputSink, Shell};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

/// Terminal stand-in that records everything the shell writes.
///
/// Clones share the same transcript, so a test can keep one handle while the
/// shell owns another.
#[derive(Clone, Default)]
pub struct Terminal {
    transcript: Rc<RefCell<String>>,
    writes: Rc<RefCell<usize>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the transcript.
    pub fn take(&self) -> String {
        *self.writes.borrow_mut() = 0;
        std::mem::take(&mut *self.transcript.borrow_mut())
    }

    /// Number of sink calls since the last `take`.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl OutputSink for Terminal {
    fn write_str(&mut self, text: &str) {
        self.transcript.borrow_mut().push_str(text);
        *self.writes.borrow_mut() += 1;
    }
}

/// Records the argument vectors handlers are invoked with.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self, status: i32) -> impl Fn(usize, &[&str]) -> i32 + Sync + '_ {
        move |argc: usize, argv: &[&str]| {
            assert_eq!(argc, argv.len(), "argc must match argv");
            self.calls
                .lock()
                .unwrap()
                .push(argv.iter().map(|arg| arg.to_string()).collect());
            status
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

/// Feed bytes as a receive interrupt would, discarding per-byte results.
pub fn feed<O: OutputSink, const N: usize>(shell: &mut Shell<'_, O, N>, bytes: &[u8]) {
    for &byte in bytes {
        let _ = shell.receive(byte);
    }
}
