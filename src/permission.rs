/// The actions allowed on an item or a shared link.
///
/// Every flag defaults to `false` and is omitted from the wire when unset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Permission {
    #[serde(rename = "can_download", skip_serializing_if = "crate::common::is_false")]
    pub download: bool,
    #[serde(rename = "can_preview", skip_serializing_if = "crate::common::is_false")]
    pub preview: bool,
    #[serde(rename = "can_upload", skip_serializing_if = "crate::common::is_false")]
    pub upload: bool,
    #[serde(rename = "can_comment", skip_serializing_if = "crate::common::is_false")]
    pub comment: bool,
    #[serde(rename = "can_rename", skip_serializing_if = "crate::common::is_false")]
    pub rename: bool,
    #[serde(rename = "can_delete", skip_serializing_if = "crate::common::is_false")]
    pub delete: bool,
    #[serde(rename = "can_share", skip_serializing_if = "crate::common::is_false")]
    pub share: bool,
    #[serde(
        rename = "can_set_share_access",
        skip_serializing_if = "crate::common::is_false"
    )]
    pub set_share_access: bool,
}
