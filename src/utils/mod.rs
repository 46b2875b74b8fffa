//! Utility functions and helpers for translate-relay.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
