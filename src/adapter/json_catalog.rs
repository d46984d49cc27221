//! JSON-file-backed tool catalog.
//!
//! Loads the catalog data shape consumed from the inventory feed: an array
//! of entries carrying a tool code, a tool type object with the daily
//! charge and the three charge flags, and a brand name. Any failure to
//! read, parse, or validate the data is fatal: the checkout system cannot
//! run without its inventory, so [`CatalogError`] propagates to the caller
//! untouched.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use super::memory::InMemoryCatalog;
use crate::domain::{Tool, ToolCode, ToolType};
use crate::error::CatalogError;
use crate::port::ToolCatalog;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToolTypeRecord {
    name: String,
    daily_charge: Decimal,
    has_weekday_charge: bool,
    has_weekend_charge: bool,
    has_holiday_charge: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToolRecord {
    tool_code: String,
    tool_type: ToolTypeRecord,
    brand_name: String,
}

impl ToolRecord {
    fn into_tool(self) -> Result<Tool, CatalogError> {
        let code = self.tool_code.clone();

        let tool_type = ToolType::try_new(
            self.tool_type.name,
            self.tool_type.daily_charge,
            self.tool_type.has_weekday_charge,
            self.tool_type.has_weekend_charge,
            self.tool_type.has_holiday_charge,
        )
        .map_err(|source| CatalogError::InvalidEntry {
            code: code.clone(),
            source,
        })?;

        Tool::try_new(ToolCode::new(self.tool_code), tool_type, self.brand_name)
            .map_err(|source| CatalogError::InvalidEntry { code, source })
    }
}

/// A [`ToolCatalog`] loaded from a JSON data file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    inner: InMemoryCatalog,
}

impl JsonCatalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the file cannot be read, is not valid
    /// JSON, or contains an entry that violates a domain invariant.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&data)?;
        debug!(path = %path.display(), tools = catalog.inner.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// Duplicate tool codes keep the first occurrence and silently drop
    /// the rest.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let records: Vec<ToolRecord> = serde_json::from_str(data).map_err(CatalogError::Parse)?;

        let tools = records
            .into_iter()
            .map(ToolRecord::into_tool)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            inner: InMemoryCatalog::from_tools(tools),
        })
    }

    /// All tools in the catalog, sorted by code.
    #[must_use]
    pub fn tools(&self) -> Vec<&Tool> {
        self.inner.tools()
    }
}

impl ToolCatalog for JsonCatalog {
    fn lookup(&self, tool_code: &str) -> Option<Tool> {
        self.inner.lookup(tool_code)
    }
}
