//! In-memory catalog backed by a plain map.

use std::collections::HashMap;

use crate::domain::Tool;
use crate::port::ToolCatalog;

/// A [`ToolCatalog`] over an in-memory map, keyed by tool code.
///
/// Used directly in tests and embedded setups, and as the storage layer of
/// the JSON file adapter. On duplicate codes the first occurrence wins and
/// later entries are silently dropped.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    tools: HashMap<String, Tool>,
}

impl InMemoryCatalog {
    /// Build a catalog from tools, first occurrence winning per code.
    pub fn from_tools(tools: impl IntoIterator<Item = Tool>) -> Self {
        let mut map = HashMap::new();
        for tool in tools {
            map.entry(tool.code().as_str().to_owned()).or_insert(tool);
        }
        Self { tools: map }
    }

    /// All tools in the catalog, sorted by code for stable output.
    #[must_use]
    pub fn tools(&self) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self.tools.values().collect();
        tools.sort_by(|a, b| a.code().as_str().cmp(b.code().as_str()));
        tools
    }

    /// Number of distinct tool codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when the catalog holds no tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolCatalog for InMemoryCatalog {
    fn lookup(&self, tool_code: &str) -> Option<Tool> {
        self.tools.get(tool_code).cloned()
    }
}
