use crate::entity::Entity;

/// A page of entities.
///
/// `total_count` is reported by the server and is not checked against the
/// number of entries in the page.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Collection {
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub total_count: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entity>,
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub limit: u64,
    #[serde(skip_serializing_if = "crate::common::is_zero")]
    pub offset: u64,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entries.iter()
    }

    /// The entries of the page being folders
    pub fn folders(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter().filter(|item| item.is_folder())
    }

    /// The entries of the page being files
    pub fn files(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter().filter(|item| item.is_file())
    }

    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entries
            .iter()
            .find(|item| item.name.as_deref() == Some(name))
    }
}

impl IntoIterator for Collection {
    type Item = Entity;
    type IntoIter = std::vec::IntoIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
