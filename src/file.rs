use crate::collection::Collection;
use crate::date::BoxTime;
use crate::entity::{Entity, FILE};
use crate::lock::BoxLock;
use crate::permission::Permission;
use crate::shared::SharedObject;
use crate::user::MiniUser;

/// A structure representing a file on Box
///
/// The `type` key is ignored when decoding and is not written back. Wrap the
/// value in an [`Item`](crate::item::Item), or use [`File::to_entity`], to get
/// an object carrying `"type": "file"`.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// SHA-1 of the file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_collection: Option<Collection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trashed_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purged_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_created_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_modified_at: Option<BoxTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<MiniUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<MiniUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<MiniUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_link: Option<SharedObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub comment_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<BoxLock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "crate::common::is_false")]
    pub is_package: bool,
}

impl File {
    /// The mini representation of the file
    pub fn to_entity(&self) -> Entity {
        Entity {
            sequence_id: self.sequence_id.clone(),
            name: self.name.clone(),
            id: self.id.clone(),
            etag: self.etag.clone(),
            kind: Some(FILE.to_string()),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }
}
