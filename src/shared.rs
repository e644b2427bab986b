//! Shared link and upload email settings attached to items

use crate::date::BoxTime;
use crate::permission::Permission;

/// Metadata of a shared link
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SharedObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanity_url: Option<String>,
    #[serde(
        rename = "is_password_enabled",
        skip_serializing_if = "crate::common::is_false"
    )]
    pub password_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unshared_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub download_count: u64,
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub preview_count: u64,
    /// Access level of the link, like `open`, `company` or `collaborators`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(rename = "permissions", skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,
}

/// Upload by email configuration of a folder
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct UploadEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
