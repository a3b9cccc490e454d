//! gantt-export - Export a GitHub Project board to a Mermaid Gantt diagram
//!
//! This library fetches the items of a Projects (v2) board, normalizes their
//! scheduling fields into tasks and milestones, and renders the result as a
//! Mermaid `gantt` block.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use error::{Error, Result};
