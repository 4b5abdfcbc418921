use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn trellis() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("trellis"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn small_site() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "layouts/base.html.tera", "H{{ title }}");
    write(dir.path(), "pages/index.html.tera", "I");
    write(dir.path(), "pages/auth/login.html.tera", "L");
    write(dir.path(), "shared/footer.html.tera", "F");
    dir
}

// ---------------------------------------------------------------------------
// Bundled demo views
// ---------------------------------------------------------------------------

#[test]
fn check_demo_views_composes_every_pair() {
    trellis()
        .arg("check")
        .assert()
        .success()
        .stdout(contains("8 templates composed from 2 layouts × 4 pages"));
}

#[test]
fn list_demo_views_shows_composed_names() {
    trellis()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("base:auth/login"))
        .stdout(contains("plain:error"));
}

#[test]
fn list_json_is_machine_readable() {
    let output = trellis().args(["list", "--json"]).output().expect("run list");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().any(|r| r["name"] == "base:index"
        && r["layout"] == "layouts/base.html.tera"
        && r["page"] == "pages/index.html.tera"));
}

#[test]
fn render_demo_index_with_data_file() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data.json");
    fs::write(
        &data,
        r#"{ "title": "Home", "data": { "message": "Hello there", "total": 12.5 } }"#,
    )
    .unwrap();

    trellis()
        .args(["render", "base:index", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(contains("<title>Home | Trellis</title>"))
        .stdout(contains("Hello there"))
        .stdout(contains("2 + 3 = 5"))
        .stdout(contains("$12.50"))
        .stdout(contains("</html>"));
}

#[test]
fn render_unknown_name_fails_without_output() {
    trellis()
        .args(["render", "missing:name"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("template missing:name not found"));
}

#[test]
fn render_missing_field_fails() {
    trellis()
        .args(["render", "plain:auth/login"])
        .assert()
        .failure()
        .stderr(contains("plain:auth/login"));
}

// ---------------------------------------------------------------------------
// On-disk views
// ---------------------------------------------------------------------------

#[test]
fn render_views_dir_to_file() {
    let site = small_site();
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data.json");
    let out = tmp.path().join("out.html");
    fs::write(&data, r#"{ "title": "i" }"#).unwrap();

    trellis()
        .args(["render", "base:index", "--views"])
        .arg(site.path())
        .arg("--data")
        .arg(&data)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "HiIF");
}

#[test]
fn failed_render_leaves_existing_out_file_untouched() {
    let site = small_site();
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out.html");
    fs::write(&out, "precious").unwrap();

    trellis()
        .args(["render", "missing:name", "--views"])
        .arg(site.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("template missing:name not found"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "precious");

    // No data: `title` is undefined, so execution fails.
    trellis()
        .args(["render", "base:index", "--views"])
        .arg(site.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("base:index"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "precious");
}

#[test]
fn check_reports_missing_marker() {
    let site = small_site();
    write(site.path(), "pages/broken.tera", "x");

    trellis()
        .args(["check", "--views"])
        .arg(site.path())
        .assert()
        .failure()
        .stderr(contains("failed to compose views"))
        .stderr(contains("pages/broken.tera"));
}

#[test]
fn check_reports_missing_shared_root() {
    let site = small_site();
    fs::remove_dir_all(site.path().join("shared")).unwrap();

    trellis()
        .args(["check", "--views"])
        .arg(site.path())
        .assert()
        .failure()
        .stderr(contains("shared"));
}

#[test]
fn layout_file_overrides_roots_and_marker() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "views/layouts/base.html.tmpl", "<{{ title }}>");
    write(tmp.path(), "views/pages/index.html.tmpl", "I");
    write(tmp.path(), "views/shared/s.html.tmpl", "S");
    let layout = tmp.path().join("views.yaml");
    fs::write(
        &layout,
        "layouts_root: views/layouts\n\
         pages_root: views/pages\n\
         shared_root: views/shared\n\
         fragment_extension: tmpl\n\
         name_marker: .html.tmpl\n",
    )
    .unwrap();
    let data = tmp.path().join("data.json");
    fs::write(&data, r#"{ "title": "t" }"#).unwrap();

    trellis()
        .args(["render", "base:index", "--views"])
        .arg(tmp.path())
        .arg("--layout")
        .arg(&layout)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout("<t>IS");
}
