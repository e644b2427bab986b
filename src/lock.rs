use crate::date::BoxTime;

/// Advisory lock placed on a file
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct BoxLock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the user who created the lock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<BoxTime>,
    /// Whether the lock also prevents downloads
    #[serde(
        rename = "is_download_prevented",
        skip_serializing_if = "crate::common::is_false"
    )]
    pub download_prevented: bool,
}

impl BoxLock {
    /// Whether the lock has an expiration date
    pub fn expires(&self) -> bool {
        self.expires_at.is_some_and(|value| !value.is_zero())
    }
}
