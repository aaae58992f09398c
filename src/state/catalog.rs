#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api::Catalog;
use crate::net::types::{Company, Material, SupplierMaterialName};

/// Catalog page state: the three fetched collections and loading status.
///
/// The collections are applied together or not at all; a failed fetch
/// leaves the previously applied (initially empty) collections in place.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub materials: Vec<Material>,
    pub companies: Vec<Company>,
    pub names: Vec<SupplierMaterialName>,
    pub loading: bool,
}

impl CatalogState {
    /// Fresh page state, loading until the first fetch settles.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Apply one fetch outcome. A successful read replaces all three
    /// collections atomically; a failed read keeps whatever was applied
    /// before (so a refetch error never wipes the rendered table) and
    /// hands the error back for logging.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged when the outcome is `Err`.
    pub fn apply(&mut self, outcome: Result<Catalog, String>) -> Result<(), String> {
        self.loading = false;
        let catalog = outcome?;
        self.materials = catalog.materials;
        self.companies = catalog.companies;
        self.names = catalog.names;
        Ok(())
    }
}

/// Draft for the create-name dialog. Ids are `None` until the user picks
/// an option.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameDraft {
    pub supplier_id: Option<i64>,
    pub material_id: Option<i64>,
    pub name: String,
}

impl NameDraft {
    /// Completeness check run before the create request. Returns the
    /// first missing-field message, or `None` when the draft can be sent.
    pub fn validate(&self) -> Option<&'static str> {
        if self.supplier_id.is_none() {
            return Some("Select a supplier");
        }
        if self.material_id.is_none() {
            return Some("Select a material");
        }
        if self.name.trim().is_empty() {
            return Some("Enter a name");
        }
        None
    }
}
