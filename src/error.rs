//! The errors returned when converting or decoding entities

/// All the possible errors returned by the entity model
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Conversion to a [`Folder`](crate::folder::Folder) requested on an entity of another type
    #[error("entity is not a folder")]
    NotAFolder,
    /// Conversion to a [`File`](crate::file::File) requested on an entity of another type
    #[error("entity is not a file")]
    NotAFile,
    /// Unable to parse a timestamp as RFC 3339
    #[error("unable to parse timestamp: {0}")]
    Time(#[from] chrono::ParseError),
    /// Unable to decode a JSON value
    #[error("unable to decode json value: {0}")]
    Json(#[from] serde_json::Error),
}
