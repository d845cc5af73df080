//! Structured logging with a rotating log file.
//!
//! The plugin runs inside Zellij's WASM sandbox without a usable stderr, so
//! `tracing` events are formatted as plain text lines and written to a
//! size-rotated file in the plugin's data directory.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → zslideshow.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/zslideshow/zslideshow.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` config option and defaults to
//! `"info"`. Any `EnvFilter` directive works, e.g. `zslideshow::app=trace`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, init_tracing_at, LOG_FILE_NAME};
