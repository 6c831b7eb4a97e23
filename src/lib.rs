//! GM activity log converter
//!
//! Decodes the fixed-format binary audit log emitted by the game server's
//! GM command channel and renders it as an aligned text report.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::cargo)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::multiple_crate_versions
)]

pub mod error;
pub mod log;

pub use error::{GmLogError, Result};
pub use log::{LogFile, LogRecord};
