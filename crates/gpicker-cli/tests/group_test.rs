use gpicker_testing::TestWorld;
use gpicker_testing::assertions::assert_view_group;

#[test]
fn test_group_with_label() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "group",
            "documents",
            "spreadsheets",
            "--label",
            "Office",
            "--format",
            "json",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_view_group(&json, &["documents", "spreadsheets"], Some("Office")).unwrap();
}

#[test]
fn test_group_resolves_symbolic_names() {
    let world = TestWorld::new();

    let result = world
        .run(&["group", "DOCS", "PDFS", "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_view_group(&json, &["all", "pdfs"], None).unwrap();
}

#[test]
fn test_group_unknown_view_passes_through_with_warning() {
    let world = TestWorld::new();

    let result = world
        .run(&["group", "all", "team-drives", "--format", "json"])
        .unwrap();
    assert!(result.success());
    assert!(result.stderr().contains("not in the catalog"));

    let json = result.json().unwrap();
    assert_view_group(&json, &["all", "team-drives"], None).unwrap();
}

#[test]
fn test_group_nested_json() {
    let world = TestWorld::new();
    let nested = r#"{"type":"ViewGroup","views":["docs-images","docs-videos"],"label":"Media"}"#;

    let result = world
        .run(&["group", "all", nested, "--label", "Drive", "--format", "json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["views"][0], "all");
    assert_view_group(&json["views"][1], &["docs-images", "docs-videos"], Some("Media")).unwrap();
    assert_eq!(json["label"], "Drive");
}

#[test]
fn test_group_rejects_nested_group_as_root() {
    let world = TestWorld::new();
    let nested = r#"{"type":"ViewGroup","views":["pdfs"]}"#;

    let result = world.run(&["group", nested, "all"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid argument"));
}

#[test]
fn test_group_plain_tree() {
    let world = TestWorld::new();

    let result = world
        .run(&["group", "documents", "spreadsheets", "--label", "Office"])
        .unwrap();
    assert!(result.success());
    assert_eq!(
        result.stdout(),
        "[Office]\n  documents (root)\n  spreadsheets\n"
    );
}
