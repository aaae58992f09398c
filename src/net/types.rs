//! Wire types shared with the backend API.

/// A raw material in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
}

/// A company, referenced both as itself and as a supplier.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// A join record: what `supplier` calls `material` in its own paperwork.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SupplierMaterialName {
    pub id: i64,
    pub name: String,
    pub material: Material,
    pub supplier: Company,
    /// Not every deployment returns this column yet.
    #[serde(default)]
    pub created_at: Option<String>,
}
