//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the core and the project
//! tracking API. Implementations live in the `adapters` module.

mod project_source;

pub use project_source::ProjectSource;
#[cfg(test)]
pub use project_source::MockProjectSource;
