//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - GitHub GraphQL client implementing `ProjectSource`

pub mod github;
