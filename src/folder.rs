use crate::collection::Collection;
use crate::date::BoxTime;
use crate::entity::{Entity, FOLDER};
use crate::permission::Permission;
use crate::shared::{SharedObject, UploadEmail};
use crate::user::MiniUser;

/// The id of the root folder, "All Files"
pub const ROOT: &str = "0";

/// A structure representing a folder on Box
///
/// The `type` key is ignored when decoding and is not written back. Wrap the
/// value in an [`Item`](crate::item::Item), or use [`Folder::to_entity`], to get
/// an object carrying `"type": "folder"`.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Folder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Size of the folder content in bytes
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub size: u64,
    /// The ancestors of the folder, from the root
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
    pub folder_upload_email: Option<UploadEmail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Entity>,
    /// `active`, `trashed` or `deleted`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_status: Option<String>,
    /// The first page of the folder content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection: Option<Collection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_state: Option<String>,
    #[serde(skip_serializing_if = "crate::common::is_false")]
    pub has_collaborations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Folder {
    pub fn is_root(&self) -> bool {
        self.id.as_deref() == Some(ROOT)
    }

    /// The mini representation of the folder
    pub fn to_entity(&self) -> Entity {
        Entity {
            sequence_id: self.sequence_id.clone(),
            name: self.name.clone(),
            id: self.id.clone(),
            etag: self.etag.clone(),
            kind: Some(FOLDER.to_string()),
        }
    }

    pub fn find_entry(&self, name: &str) -> Option<&Entity> {
        self.item_collection
            .as_ref()
            .and_then(|list| list.find(name))
    }

    pub fn find_file(&self, name: &str) -> Option<&Entity> {
        self.item_collection.as_ref().and_then(|list| {
            list.files()
                .find(|item| item.name.as_deref() == Some(name))
        })
    }

    pub fn find_folder(&self, name: &str) -> Option<&Entity> {
        self.item_collection.as_ref().and_then(|list| {
            list.folders()
                .find(|item| item.name.as_deref() == Some(name))
        })
    }
}
