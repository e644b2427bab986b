mod common;

use std::convert::TryFrom;

use box_entity::{BoxTime, Collection, Entity, Error, File, Folder, Item, Permission};

#[test]
fn converting_a_decoded_file() {
    common::init();
    let entity: Entity =
        serde_json::from_str(r#"{"id":"1","name":"doc.txt","type":"file"}"#).unwrap();
    assert!(entity.is_file());
    assert!(!entity.is_folder());

    let mut file = File::default();
    entity.to_file(&mut file).unwrap();
    assert_eq!(
        file,
        File {
            id: Some("1".into()),
            name: Some("doc.txt".into()),
            ..Default::default()
        }
    );

    let mut folder = Folder::default();
    let err = entity.to_folder(&mut folder).unwrap_err();
    assert!(matches!(err, Error::NotAFolder));
    assert_eq!(folder, Folder::default());
}

#[test]
fn encoding_permissions() {
    common::init();
    let value = Permission {
        download: true,
        preview: false,
        ..Default::default()
    };
    let json = serde_json::to_string(&value).unwrap();
    assert!(json.contains(r#""can_download":true"#));
    assert!(!json.contains("can_preview"));
}

#[test]
fn decoding_a_complete_folder() {
    common::init();
    let folder: Folder = serde_json::from_str(&common::fixture("folder.json")).unwrap();
    assert_eq!(folder.id.as_deref(), Some("11446498"));
    assert_eq!(folder.description.as_deref(), Some("Some pictures I took"));
    assert_eq!(
        folder.created_at.unwrap().to_string(),
        "2012-12-12T18:53:43Z"
    );
    assert_eq!(
        folder.owned_by.as_ref().and_then(|user| user.login.as_deref()),
        Some("sean@box.com")
    );
    let link = folder.shared_link.as_ref().unwrap();
    assert_eq!(link.access.as_deref(), Some("open"));
    assert!(link.permission.unwrap().download);
    assert_eq!(
        folder
            .folder_upload_email
            .as_ref()
            .and_then(|email| email.email.as_deref()),
        Some("upload.Picture.k13sdz1@u.box.com")
    );
    assert!(folder.parent.as_ref().unwrap().is_folder());
    assert_eq!(folder.path_collection.as_ref().unwrap().total_count, 1);
    assert_eq!(folder.tags, vec!["approved", "ready to publish"]);

    let tigers = folder.find_file("tigers.jpeg").unwrap();
    let file = File::try_from(tigers).unwrap();
    assert_eq!(file.etag.as_deref(), Some("3"));
    assert!(folder.find_folder("Holidays").is_some());
}

#[test]
fn reencoding_a_complete_folder() {
    common::init();
    let folder: Folder = serde_json::from_str(&common::fixture("folder.json")).unwrap();
    let encoded = serde_json::to_value(&folder).unwrap();
    // absent values are not written back
    assert!(encoded["shared_link"].get("download_url").is_none());
    assert!(encoded["shared_link"].get("unshared_at").is_none());
    assert!(encoded.get("trashed_at").is_none());
    assert_eq!(encoded["modified_at"], "2012-12-12T19:15:04Z");
    let decoded: Folder = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, folder);
}

#[test]
fn overlaying_collection_entries() {
    common::init();
    let page: Collection = serde_json::from_str(
        r#"{
    "total_count": 2,
    "entries": [
        {"type": "folder", "id": "11446500", "etag": "0", "name": "Holidays"},
        {"type": "file", "id": "5000948880", "etag": "3", "name": "tigers.jpeg"}
    ],
    "limit": 100,
    "offset": 0
}"#,
    )
    .unwrap();
    let mut known = Folder {
        id: Some("11446500".into()),
        etag: Some("-1".into()),
        item_status: Some("active".into()),
        ..Default::default()
    };
    for entry in &page {
        match entry.to_folder(&mut known) {
            Ok(()) => assert!(entry.is_folder()),
            Err(err) => assert!(matches!(err, Error::NotAFolder)),
        }
    }
    assert_eq!(known.etag.as_deref(), Some("0"));
    assert_eq!(known.name.as_deref(), Some("Holidays"));
    assert_eq!(known.item_status.as_deref(), Some("active"));
}

#[test]
fn decoding_items_of_a_page() {
    common::init();
    let mut items: Vec<Item> = serde_json::from_str(
        r#"[
    {"type": "file", "id": "5000948880", "name": "tigers.jpeg", "created_at": "2012-12-12T10:55:30-08:00"},
    {"type": "folder", "id": "11446500", "name": "Holidays", "created_at": null}
]"#,
    )
    .unwrap();
    items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    assert_eq!(items[0].name(), Some("Holidays"));
    let file = items.pop().and_then(Item::into_file).unwrap();
    assert_eq!(
        file.created_at,
        Some("2012-12-12T18:55:30Z".parse::<BoxTime>().unwrap())
    );
}

#[test]
fn rejecting_invalid_timestamps() {
    common::init();
    let err = serde_json::from_str::<Folder>(r#"{"id":"1","created_at":"yesterday"}"#).unwrap_err();
    assert!(err.is_data());
    let err = BoxTime::decode(br#""not-a-time""#).unwrap_err();
    assert!(matches!(err, Error::Time(_)));
    assert!(err.to_string().starts_with("unable to parse timestamp: "));
}
