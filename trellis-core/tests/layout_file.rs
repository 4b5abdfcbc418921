//! ViewLayout file loading and error-message tests.

use assert_fs::prelude::*;
use trellis_core::{FragmentRole, LayoutError, ViewLayout};

#[test]
fn load_missing_file_returns_io_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("views.yaml");

    let err = ViewLayout::load(&path).unwrap_err();
    assert!(matches!(err, LayoutError::Io { .. }), "got: {err}");
    assert!(err.to_string().contains("views.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("views.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = ViewLayout::load(file.path()).unwrap_err();
    assert!(matches!(err, LayoutError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("views.yaml"));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("views.yaml");
    file.write_str("- this is a list, not a mapping\n").expect("write");

    let err = ViewLayout::load(file.path()).unwrap_err();
    assert!(matches!(err, LayoutError::Parse { .. }), "got: {err}");
}

#[test]
fn load_full_layout() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("views.yaml");
    file.write_str(
        "layouts_root: views/layouts\n\
         pages_root: views/pages\n\
         shared_root: views/shared\n\
         fragment_extension: tmpl\n\
         name_marker: .html.tmpl\n\
         autoescape: false\n",
    )
    .expect("write");

    let layout = ViewLayout::load(file.path()).expect("load");
    assert_eq!(layout.root(FragmentRole::Layout), "views/layouts");
    assert_eq!(layout.root(FragmentRole::Shared), "views/shared");
    assert_eq!(layout.fragment_extension, "tmpl");
    assert_eq!(
        layout.page_short("views/pages/auth/login.html.tmpl"),
        Some("auth/login")
    );
    assert_eq!(layout.layout_short("views/layouts/base.html.tmpl"), Some("base"));
}
