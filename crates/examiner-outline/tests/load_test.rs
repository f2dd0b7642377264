use examiner_outline::{Error, Outline};
use std::io::Write;

#[test]
fn loads_yaml_file_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        r#"children:
  - heading: Geography
    body: |
      Questions about capitals
    children:
      - heading: K-Prime
        children:
          - heading: Berlin is the capital of Germany
            tags: ["true"]
"#
    )
    .unwrap();

    let outline = Outline::from_path(file.path()).unwrap();
    let category = &outline.children[0];

    assert_eq!(category.body.trim(), "Questions about capitals");
    assert_eq!(category.children[0].children[0].tags(), ["true".to_string()]);
}

#[test]
fn loads_json_file_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"children": [{{"heading": "Geography"}}]}}"#).unwrap();

    let outline = Outline::from_path(file.path()).unwrap();
    assert_eq!(outline.children[0].heading, "Geography");
}

#[test]
fn rejects_unknown_extension() {
    let file = tempfile::Builder::new().suffix(".org").tempfile().unwrap();

    let err = Outline::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::UnknownFormat { .. }));
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let err = Outline::from_path(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}
