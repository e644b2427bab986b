//! The generic representation of folders and files, as found in collections and parent references

use std::convert::TryFrom;

use crate::error::Error;
use crate::file::File;
use crate::folder::Folder;

/// Discriminator value of a folder
pub const FOLDER: &str = "folder";
/// Discriminator value of a file
pub const FILE: &str = "file";

/// The kind of item an [`Entity`] describes
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    Folder,
    File,
    /// Missing or unrecognized discriminator
    Unknown,
}

/// Represents both a mini folder and a mini file.
///
/// The wire format carries both shapes in the same object, only the `type`
/// key tells them apart.
///
/// ```
/// use box_entity::entity::Entity;
/// use box_entity::file::File;
///
/// let entity: Entity = serde_json::from_str(r#"{"id":"1","name":"doc.txt","type":"file"}"#).unwrap();
/// assert!(entity.is_file());
///
/// let mut file = File::default();
/// entity.to_file(&mut file).unwrap();
/// assert_eq!(file.name.as_deref(), Some("doc.txt"));
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Entity {
    /// A unique id for use with the events endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifies the version of the entity, changes on every modification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self.kind.as_deref() {
            Some(FOLDER) => EntityKind::Folder,
            Some(FILE) => EntityKind::File,
            _ => EntityKind::Unknown,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind.as_deref() == Some(FOLDER)
    }

    pub fn is_file(&self) -> bool {
        self.kind.as_deref() == Some(FILE)
    }

    /// Copies the id, name, etag and sequence id of the entity into the given folder.
    /// The other fields of the folder are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFolder`] when the entity is not a folder, the target is then not modified.
    pub fn to_folder(&self, target: &mut Folder) -> Result<(), Error> {
        if !self.is_folder() {
            tracing::debug!("refusing conversion of {:?} entity to folder", self.kind);
            return Err(Error::NotAFolder);
        }
        target.id = self.id.clone();
        target.name = self.name.clone();
        target.etag = self.etag.clone();
        target.sequence_id = self.sequence_id.clone();
        Ok(())
    }

    /// Copies the id, name, etag and sequence id of the entity into the given file.
    /// The other fields of the file are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFile`] when the entity is not a file, the target is then not modified.
    pub fn to_file(&self, target: &mut File) -> Result<(), Error> {
        if !self.is_file() {
            tracing::debug!("refusing conversion of {:?} entity to file", self.kind);
            return Err(Error::NotAFile);
        }
        target.id = self.id.clone();
        target.name = self.name.clone();
        target.etag = self.etag.clone();
        target.sequence_id = self.sequence_id.clone();
        Ok(())
    }
}

impl TryFrom<&Entity> for Folder {
    type Error = Error;

    fn try_from(value: &Entity) -> Result<Self, Self::Error> {
        let mut folder = Folder::default();
        value.to_folder(&mut folder)?;
        Ok(folder)
    }
}

impl TryFrom<&Entity> for File {
    type Error = Error;

    fn try_from(value: &Entity) -> Result<Self, Self::Error> {
        let mut file = File::default();
        value.to_file(&mut file)?;
        Ok(file)
    }
}
