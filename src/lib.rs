//! # libcli - Embedded Command Shell
//!
//! A small interactive command shell for microcontrollers. Bytes arrive one at
//! a time from a receive interrupt, are collected into a fixed-size line
//! buffer with echo and backspace support, and completed lines are dispatched
//! from the main loop to handlers in an application-supplied command table.
//!
//! ## Features
//!
//! - **Zero-allocation**: the line buffer and argument vector have fixed capacity
//! - **Interrupt-friendly intake**: one call per received byte, bounded work, no blocking
//! - **Zero-copy tokenizer**: arguments are slices into the line buffer
//! - **Static command tables**: commands are plain `static` arrays of name, help text and handler
//! - **Overflow-safe**: long lines and excess arguments are rejected, never written out of bounds
//! - **Transport-agnostic**: all output goes through a caller-supplied sink
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Basic Shell Example
//!
//! ```rust
//! use libcli::system::shell::{Command, Shell};
//!
//! fn reset(_argc: usize, _argv: &[&str]) -> i32 {
//!     // trigger a system reset
//!     0
//! }
//!
//! static COMMANDS: [Command<'static>; 1] = [Command {
//!     name: "reset",
//!     help: "Reset the device",
//!     handler: &reset,
//! }];
//!
//! let mut shell = Shell::new(|text: &str| print!("{}", text), &COMMANDS);
//! shell.init();
//!
//! for &byte in b"reset\r" {
//!     let _ = shell.receive(byte);
//! }
//! shell.process();
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Hosted targets for testing and simulation
//! - Any platform supporting Rust's `core` library and a `critical-section` implementation
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![doc(html_root_url = "https://shishir-dey.github.io/libcli/")]

mod log;

/// System utilities for embedded devices.
///
/// Contains the command shell and its supporting pieces: character
/// classification, tokenizer, command table and output sinks.
pub mod system;
