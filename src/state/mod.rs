//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page domain so each page depends on a small focused
//! model: `catalog` for the supplier-material-name listing and its create
//! dialog, `company_form` for the company draft and its nested contact
//! lists. All mutation helpers are plain functions over plain structs so
//! they are unit-testable without a browser.

pub mod catalog;
pub mod company_form;
