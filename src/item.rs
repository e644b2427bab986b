//! Items decoded according to their `type` key

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::entity::{Entity, EntityKind, FILE, FOLDER};
use crate::file::File;
use crate::folder::Folder;

/// A folder or a file, dispatched on the `type` key of the payload.
///
/// Any other type, like `web_link`, or a payload without `type`, is kept
/// untouched as [`Item::Unknown`] and encodes back to the same object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Item {
    Folder(Folder),
    File(File),
    Unknown(Value),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedRef<'a> {
    Folder(&'a Folder),
    File(&'a File),
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Folder(value) => TaggedRef::Folder(value).serialize(serializer),
            Self::File(value) => TaggedRef::File(value).serialize(serializer),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(FOLDER) => EntityKind::Folder,
            Some(FILE) => EntityKind::File,
            other => {
                tracing::trace!("keeping item of type {other:?} as unknown");
                EntityKind::Unknown
            }
        };
        match kind {
            EntityKind::Folder => serde_json::from_value(value)
                .map(Self::Folder)
                .map_err(D::Error::custom),
            EntityKind::File => serde_json::from_value(value)
                .map(Self::File)
                .map_err(D::Error::custom),
            EntityKind::Unknown => Ok(Self::Unknown(value)),
        }
    }
}

macro_rules! item_field {
    ($field:ident) => {
        impl Item {
            pub fn $field(&self) -> Option<&str> {
                match self {
                    Self::Folder(item) => item.$field.as_deref(),
                    Self::File(item) => item.$field.as_deref(),
                    Self::Unknown(value) => value.get(stringify!($field)).and_then(Value::as_str),
                }
            }
        }
    };
}

item_field!(id);
item_field!(name);
item_field!(etag);
item_field!(sequence_id);

impl From<Folder> for Item {
    fn from(value: Folder) -> Self {
        Self::Folder(value)
    }
}

impl From<File> for Item {
    fn from(value: File) -> Self {
        Self::File(value)
    }
}

impl Item {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_folder(self) -> Option<Folder> {
        match self {
            Self::Folder(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_file(self) -> Option<File> {
        match self {
            Self::File(value) => Some(value),
            _ => None,
        }
    }

    /// The mini representation of the item.
    ///
    /// `None` when an unknown payload doesn't have the shape of an entity.
    pub fn to_entity(&self) -> Option<Entity> {
        match self {
            Self::Folder(value) => Some(value.to_entity()),
            Self::File(value) => Some(value.to_entity()),
            Self::Unknown(value) => Entity::deserialize(value).ok(),
        }
    }

    /// Key listing folders first, then files, then unknown items, each by name and id.
    ///
    /// Different versions of the same item share a key.
    ///
    /// ```
    /// use box_entity::{File, Folder, Item};
    ///
    /// let mut items = vec![Item::from(File::default()), Item::from(Folder::default())];
    /// items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    /// assert!(items[0].is_folder());
    /// ```
    pub fn sort_key(&self) -> (u8, Option<&str>, Option<&str>) {
        let rank = match self {
            Self::Folder(_) => 0,
            Self::File(_) => 1,
            Self::Unknown(_) => 2,
        };
        (rank, self.name(), self.id())
    }
}
