//! ansikit - ANSI terminal output for plain programs.
//!
//! Two pieces:
//! - [`initialize`]: a one-shot, best-effort setup call that enables escape
//!   sequence interpretation on Windows consoles and selects UTF-8 output
//! - [`seq`]: a catalog of escape sequences (attributes, colors, cursor
//!   movement, hyperlinks) as constants and small builder functions
//!
//! ```no_run
//! use ansikit::seq::{attr, color, link};
//!
//! ansikit::initialize();
//! println!("{}{}error:{} disk full", attr::BOLD, color::FG_RED, attr::RESET);
//! println!("{}", link::wrap("https://example.com", "docs"));
//! ```
//!
//! This is not a TUI library: there is no input handling, no screen model,
//! and no color capability detection.

pub mod init;
pub mod seq;

pub use init::{initialize, Config, Initializer, OutputMode, StepError, StepOutcome};
pub use seq::{Color, Sequence};
