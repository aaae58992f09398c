//! Routed pages.

pub mod company_form;
pub mod home;
pub mod supplier_names;
