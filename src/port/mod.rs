//! Port definitions for external collaborators.

pub mod catalog;

pub use catalog::ToolCatalog;
