use gpicker_testing::fixtures;
use gpicker_types::*;
use serde_json::{Value, json};

#[test]
fn test_two_records_keep_order() {
    let payload = fixtures::two_document_payload();
    let records = payload.as_array().unwrap();

    let documents = GoogleDocuments::map_all(Some(records)).unwrap();
    let expected = vec![
        GoogleDocument::from_record(0, fixtures::pdf_record().as_object().unwrap()).unwrap(),
        GoogleDocument::from_record(1, fixtures::sheet_record().as_object().unwrap()).unwrap(),
    ];
    assert_eq!(documents.into_inner(), expected);
}

#[test]
fn test_pdf_scenario() {
    let documents = GoogleDocuments::from_json_str(
        r#"[{"id":"1","serviceId":"drive","mimeType":"application/pdf","name":"doc.pdf","description":"","type":"pdf","lastEditedUtc":1700000000,"iconUrl":"http://x/icon.png","url":"http://x/doc","embedUrl":"http://x/embed","sizeBytes":1024,"isShared":false}]"#,
    )
    .unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name(), "doc.pdf");
    assert_eq!(documents[0].size_bytes(), 1024);
}

#[test]
fn test_every_missing_field_is_reported() {
    for field in DOCUMENT_FIELDS {
        let record = fixtures::without_field(fixtures::sheet_record(), field);
        let err = GoogleDocuments::map_all(Some(&[record])).unwrap_err();
        match err {
            Error::SchemaMismatch { field: reported, .. } => assert_eq!(reported, field),
            other => panic!("unexpected error for {field}: {other}"),
        }
    }
}

#[test]
fn test_non_numeric_size_is_reported() {
    let record = fixtures::with_field(fixtures::pdf_record(), "sizeBytes", json!("big"));
    let err = GoogleDocuments::map_all(Some(&[record])).unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"Schema mismatch in document #0 field 'sizeBytes': expected a non-negative integer, found "big""#
    );
}

#[test]
fn test_callback_round_trip() {
    let callback = fixtures::picker_callback("picked", fixtures::two_document_payload());

    let response = PickerResponse::from_value(&callback).unwrap();
    assert!(response.is_picked());
    assert_eq!(response.documents.len(), 2);
    assert!(response.documents[1].is_shared());

    let serialized = serde_json::to_value(&response).unwrap();
    assert_eq!(serialized, callback);
}

#[test]
fn test_loaded_callback_has_no_documents() {
    let callback = fixtures::picker_callback("loaded", Value::Null);

    let response = PickerResponse::from_value(&callback).unwrap();
    assert_eq!(response.action, PickerAction::Loaded);
    assert!(response.documents.is_empty());
}

#[test]
fn test_config_with_groups_serializes_for_presentation() {
    let mut office = ViewGroup::with_root(ViewId::Documents).with_label("Office");
    office.add(ViewId::Spreadsheets);
    office.add(ViewId::Presentations);
    office.remove(ViewId::Presentations).unwrap();

    let config = PickerConfig::builder("client", "key", "Pick")
        .views([ViewItem::from(office), ViewItem::from(ViewId::Folders)])
        .enable(Feature::MultiselectEnabled)
        .disable(Feature::NavHidden)
        .open(true)
        .build()
        .unwrap();

    let props = config.to_props().unwrap();
    assert_eq!(
        props["view_ids"],
        json!([
            {"type": "ViewGroup", "views": ["documents", "spreadsheets"], "label": "Office"},
            "folders"
        ])
    );
    assert_eq!(props["disabled_features"], json!(["navHidden"]));
    assert_eq!(props["open"], true);

    let parsed: PickerConfig = serde_json::from_value(props).unwrap();
    assert_eq!(parsed, config);
}
