//! Wire types for every backend resource — the single typed decoding
//! boundary shared by all consumers. Screens never reshape raw JSON; they
//! decode into these structs once and derive from there.

pub mod auth;
pub mod candidate;
pub mod dashboard;
pub mod role;

use serde::{Deserialize, Serialize};

/// Pagination envelope flattened into list responses. Endpoints that do not
/// paginate simply omit the fields, which decode as zeros.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}
