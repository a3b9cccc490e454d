//! Core domain logic for gantt-export
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`Project`, `ProjectItem`, `FieldValue`, `Task`, `MilestoneEntry`)
//! - `services/` - Field extraction, normalization, milestone collection, rendering
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
