//! Static product catalog: materials, add-ons and detail processing.

mod addon;
mod builtin;
mod material;

pub use addon::{AddOn, DetailProcessing, ProcessingPrice};
pub use material::{Category, Material};

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only lookup tables for pricing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Materials keyed by id.
    pub materials: BTreeMap<String, Material>,
    /// Add-ons in display order.
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    /// Detail processing options keyed by id.
    #[serde(default)]
    pub processing: BTreeMap<String, DetailProcessing>,
}

impl Catalog {
    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a catalog from JSON text.
    ///
    /// Material map keys win over any `id` inside the record.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(text)?;
        for (id, material) in &mut catalog.materials {
            material.id = id.clone();
        }
        tracing::debug!(
            "Loaded catalog with {} material(s), {} add-on(s)",
            catalog.materials.len(),
            catalog.add_ons.len()
        );
        Ok(catalog)
    }

    /// Find a material by id.
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Materials of one category, in id order.
    pub fn materials_in(&self, category: Category) -> impl Iterator<Item = &Material> {
        self.materials
            .values()
            .filter(move |m| m.category == category)
    }

    /// Find an add-on by id.
    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Find a detail processing option by id.
    pub fn processing(&self, id: &str) -> Option<&DetailProcessing> {
        self.processing.get(id)
    }
}
