//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade to logged/alerted states without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{Company, Material, SupplierMaterialName};

/// The three reference collections the catalog page renders, fetched as
/// one atomic unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub materials: Vec<Material>,
    pub companies: Vec<Company>,
    pub names: Vec<SupplierMaterialName>,
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("GET {url} failed: {}", resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch all materials from `GET /api/materials`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn fetch_materials() -> Result<Vec<Material>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/materials").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all companies from `GET /api/companies`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/companies").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all join records from `GET /api/supplier-material-names`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn fetch_supplier_material_names() -> Result<Vec<SupplierMaterialName>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/supplier-material-names").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch materials, companies, and join records concurrently.
///
/// This is the page's single coordination point: if any one of the three
/// reads fails the whole catalog fails and none of the results are
/// applied.
///
/// # Errors
///
/// Returns the first failing read's error string.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    #[cfg(feature = "hydrate")]
    {
        let (materials, companies, names) = futures::try_join!(
            fetch_materials(),
            fetch_companies(),
            fetch_supplier_material_names(),
        )?;
        Ok(Catalog {
            materials,
            companies,
            names,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a join record via `POST /api/supplier-material-names`.
///
/// The endpoint takes its inputs as query parameters; the response body is
/// unused beyond signalling success (callers refetch the catalog).
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn create_supplier_material_name(
    material_id: i64,
    supplier_id: i64,
    name: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let material_id = material_id.to_string();
        let supplier_id = supplier_id.to_string();
        let resp = gloo_net::http::Request::post("/api/supplier-material-names")
            .query([
                ("materialId", material_id.as_str()),
                ("supplierId", supplier_id.as_str()),
                ("name", name),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("create failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (material_id, supplier_id, name);
        Err("not available on server".to_owned())
    }
}

/// Delete a join record via `DELETE /api/supplier-material-names/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn delete_supplier_material_name(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/supplier-material-names/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("delete failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Persistence seam for the company form.
///
/// The backend endpoint for companies is not wired up yet; until it lands
/// this serializes the draft and logs it so the submit flow is complete
/// end to end.
// TODO: switch to POST /api/companies once the backend exposes it.
pub async fn save_company(draft: &crate::state::company_form::CompanyDraft) -> Result<(), String> {
    let payload = serde_json::to_string(draft).map_err(|e| e.to_string())?;
    #[cfg(feature = "hydrate")]
    {
        log::info!("company draft ready to save: {payload}");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
