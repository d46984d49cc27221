//! Catalog port for tool lookup.
//!
//! This module defines the single query capability the checkout flow
//! needs from whatever holds the tool inventory. The core never learns
//! whether the backing store is a static map, a data file, or something
//! bigger.

use crate::domain::Tool;

/// Lookup access to the rentable-tool inventory.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`); every domain
///   value is immutable, so concurrent reads need no locking
/// - A catalog holds at most one entry per tool code
/// - `lookup` returns an owned snapshot; callers never observe later
///   catalog changes through it
pub trait ToolCatalog: Send + Sync {
    /// Find a tool by its code. Returns `None` on a catalog miss.
    fn lookup(&self, tool_code: &str) -> Option<Tool>;
}
