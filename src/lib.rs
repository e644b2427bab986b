//! Entity model of the [Box API](https://developer.box.com/reference/).
//!
//! This crate only describes the shape of the payloads exchanged with the API,
//! the transport is left to the client using it.
//!
//! ```
//! use box_entity::{Collection, Folder};
//! use std::convert::TryFrom;
//!
//! let page: Collection = serde_json::from_str(r#"{
//!     "total_count": 1,
//!     "entries": [{"type": "folder", "id": "11446498", "name": "Pictures"}]
//! }"#).unwrap();
//! let folder = Folder::try_from(&page.entries[0]).unwrap();
//! assert_eq!(folder.name.as_deref(), Some("Pictures"));
//! ```

pub mod collection;
mod common;
pub mod date;
pub mod entity;
pub mod error;
pub mod file;
pub mod folder;
pub mod item;
pub mod lock;
pub mod permission;
pub mod shared;
pub mod user;

pub use collection::Collection;
pub use date::BoxTime;
pub use entity::{Entity, EntityKind};
pub use error::Error;
pub use file::File;
pub use folder::Folder;
pub use item::Item;
pub use lock::BoxLock;
pub use permission::Permission;
pub use shared::{SharedObject, UploadEmail};
pub use user::MiniUser;
