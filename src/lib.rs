//! # indic_eval
//!
//! Command-line front end for the evaluation workspace.
//!
//! - [`cli`]: clap argument definitions and their validation
//! - [`config`]: the immutable run configuration
//! - [`app`]: wiring adapters into use cases per command
//! - [`presentation`]: human-readable and JSON printers
//! - [`logging`]: `env_logger` setup

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
