use serde::{Deserialize, Serialize};

use crate::user::{AuthUser, UserRecord};

/// Envelope returned by the admin users list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserListResponse {
    pub success: bool,
    pub data: Vec<UserRecord>,
    pub pagination: PaginationInfo,
}

/// Pagination block on list responses. Only `total` is load-bearing; the
/// rest is tolerated and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationInfo {
    pub total: u64,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub total_pages: Option<u32>,
}

/// Envelope returned by the bill upload endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Envelope returned by the `me` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeResponse {
    pub success: bool,
    pub user: AuthUser,
}

/// Envelope returned by the sign-in endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInResponse {
    pub access_token: String,
    pub user: AuthUser,
}
