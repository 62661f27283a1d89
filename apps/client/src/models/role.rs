use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PageInfo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    #[default]
    Active,
    Paused,
    Closed,
}

impl RoleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStatus::Active => "active",
            RoleStatus::Paused => "paused",
            RoleStatus::Closed => "closed",
        }
    }
}

/// A job posting that candidates apply against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requirements: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub status: RoleStatus,
    /// Derived by the backend; not maintained client-side.
    #[serde(default)]
    pub candidates_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /roles` and `PUT /roles/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    pub title: String,
    pub description: String,
    pub requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoleStatus>,
}

/// Query-side filter for `GET /roles`.
#[derive(Debug, Clone, Default)]
pub struct RoleFilter {
    pub status: Option<RoleStatus>,
    pub department: Option<String>,
    pub search: Option<String>,
}

impl RoleFilter {
    /// Query pairs in a fixed order, for appending to the request URL.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(department) = &self.department {
            pairs.push(("department", department.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Response of `GET /roles`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleList {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Response of single-role endpoints, which wrap the resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub role: Role,
}
