//! Runtime shell configuration.
//!
//! Line limits are compile-time constants; everything a product may want to
//! brand or tune without rebuilding the shell lives in [`ShellConfig`]. A
//! configuration can be built in code or parsed from a JSON document stored
//! alongside the firmware:
//!
//! ```rust
//! use libcli::system::shell::{ArgOverflow, ShellConfig};
//!
//! let config = ShellConfig::from_json(r#"{"prompt":"$ ","arg_overflow":"truncate"}"#).unwrap();
//! assert_eq!(config.prompt, "$ ");
//! assert_eq!(config.arg_overflow, ArgOverflow::Truncate);
//! assert!(config.echo);
//! ```

use serde::Deserialize;

use super::error::ShellError;

/// Banner written by [`Shell::init`](super::Shell::init) before the first prompt.
pub const DEFAULT_BANNER: &str = "\r\nlibcli v0.1";

/// Prompt written after the banner and after every dispatched line.
///
/// The leading line break is part of the prompt so that an empty line
/// produces exactly one write.
pub const DEFAULT_PROMPT: &str = "\r\n> ";

/// What to do with a line that has more tokens than [`MAX_ARGS`](super::MAX_ARGS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgOverflow {
    /// Report "Too many arguments" and do not run any handler.
    Reject,
    /// Keep the first `MAX_ARGS` tokens and drop the rest.
    Truncate,
}

/// Shell presentation and policy settings.
///
/// Strings are borrowed, so a configuration parsed from a document stored in
/// flash costs no RAM beyond this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig<'a> {
    /// Text written once by `init`, before the first prompt.
    pub banner: &'a str,
    /// Text written whenever the shell is ready for a new line.
    pub prompt: &'a str,
    /// Echo accepted characters and erase sequences back to the terminal.
    pub echo: bool,
    /// Policy for lines with too many tokens.
    pub arg_overflow: ArgOverflow,
}

impl Default for ShellConfig<'_> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'a> ShellConfig<'a> {
    /// The configuration used by [`Shell::new`](super::Shell::new).
    pub const DEFAULT: Self = Self {
        banner: DEFAULT_BANNER,
        prompt: DEFAULT_PROMPT,
        echo: true,
        arg_overflow: ArgOverflow::Reject,
    };

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    ///
    /// Strings are borrowed from `json` rather than unescaped, so they should
    /// be written without escape sequences.
    ///
    /// # Errors
    ///
    /// * [`ShellError::InvalidConfig`] - malformed JSON or an unknown policy name
    pub fn from_json(json: &'a str) -> Result<Self, ShellError> {
        serde_json_core::from_str::<ShellConfig<'a>>(json)
            .map(|(config, _)| config)
            .map_err(|_| ShellError::InvalidConfig)
    }
}
