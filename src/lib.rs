//! # trc - Caching Translation CLI
//!
//! `trc` is a command-line tool for translating text line by line through an
//! external translation provider. Results are cached in a local JSON file so
//! repeated inputs never hit the network twice.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a literal string (auto-detect -> Spanish by default)
//! trc "Hello world"
//!
//! # Translate a file line by line, write to another file
//! trc -f input.txt -o output.txt
//!
//! # Translate from stdin
//! printf 'Hello\nHow are you?\n' | trc --stdin
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/trc/config.toml`:
//!
//! ```toml
//! [trc]
//! source = "en"
//! target = "ja"
//!
//! [cache]
//! errors = false
//! ```

/// Translation cache persisted as a flat JSON file.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and default resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input resolution from a literal argument, a file, or stdin.
pub mod input;

/// Cache file and configuration path resolution.
pub mod paths;

/// Translation client for the external provider.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
