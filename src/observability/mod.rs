//! Tracing with file-based log output.
//!
//! This module provides the observability infrastructure for the plugin:
//! `tracing` spans and events, filtered by a configurable level, formatted
//! and written to a rotating file under the plugin data directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → rotating log file
//! ```
//!
//! # Configuration
//!
//! The level comes from the `trace_level` plugin configuration option
//! (default `"info"`). Logs are written to
//! `~/.local/share/zellij/truthlens/truthlens.log`, rotating at 10MB with
//! 3-backup retention.
//!
//! # Usage
//!
//! Initialize tracing early in the plugin lifecycle:
//!
//! ```rust
//! use truthlens::observability::init_tracing;
//! use truthlens::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
