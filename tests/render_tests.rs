//! Integration tests for the render command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::yearcode_cmd;

#[test]
fn test_render_stdin() {
    let temp = TempDir::new().unwrap();
    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render"])
        .write_stdin("© [year from=\"2020\"] Acme. Since [year from='1995' mode=short].\n")
        .assert()
        .success()
        .stdout("© 2020-2025 Acme. Since 1995-2025.\n");
}

#[test]
fn test_render_stdin_escaped_and_unknown() {
    let temp = TempDir::new().unwrap();
    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render"])
        .write_stdin("[[year]] [years] [gallery] [year mode=\"short\" from=\"2021\"]")
        .assert()
        .success()
        .stdout("[year] [years] [gallery] 2021-25");
}

#[test]
fn test_render_file_to_stdout() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("footer.html");
    fs::write(&file, "<footer>&copy; [year from=\"2010\"]</footer>\n").unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render"])
        .arg(&file)
        .assert()
        .success()
        .stdout("<footer>&copy; 2010-2025</footer>\n");

    // File is untouched without --write
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "<footer>&copy; [year from=\"2010\"]</footer>\n"
    );
}

#[test]
fn test_render_file_in_place() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("footer.md");
    fs::write(&file, "(c) [year from=2024 mode=short]").unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render", "--write"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 1 shortcode(s)"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "(c) 2024-25");
}

#[test]
fn test_render_write_twice_keeps_escapes() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("footer.md");
    fs::write(&file, "Use [[year]]: [year from=2020]").unwrap();

    for _ in 0..2 {
        yearcode_cmd()
            .current_dir(temp.path())
            .args(["--year", "2025", "render", "--write"])
            .arg(&file)
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "Use [[year]]: 2020-2025"
        );
    }

    // Printing to stdout still unescapes
    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Use [year]: 2020-2025");
}

#[test]
fn test_render_directory_in_place() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site");
    fs::create_dir_all(site.join("blog")).unwrap();
    fs::write(site.join("index.html"), "[year]").unwrap();
    fs::write(site.join("blog/post.md"), "[year from=\"2001\"] [year]").unwrap();
    fs::write(site.join("app.js"), "// [year]").unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render", "site", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rendered 3 shortcode(s) in 2 of 2 file(s)",
        ))
        .stdout(predicate::str::contains("index.html"));

    assert_eq!(fs::read_to_string(site.join("index.html")).unwrap(), "2025");
    assert_eq!(
        fs::read_to_string(site.join("blog/post.md")).unwrap(),
        "2001-2025 2025"
    );
    assert_eq!(fs::read_to_string(site.join("app.js")).unwrap(), "// [year]");
}

#[test]
fn test_render_directory_custom_extensions() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.js"), "// [year]").unwrap();
    fs::write(temp.path().join("index.html"), "[year]").unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render", ".", "--write", "--ext", "js"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("app.js")).unwrap(), "// 2025");
    assert_eq!(
        fs::read_to_string(temp.path().join("index.html")).unwrap(),
        "[year]"
    );
}

#[test]
fn test_render_directory_requires_write() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["render", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --write"));
}

#[test]
fn test_render_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["render", "nope.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_render_uses_project_config() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();
    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "registered", "year"])
        .assert()
        .success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["--year", "2025", "render"])
        .write_stdin("[year] [runthings_year from=2020]")
        .assert()
        .success()
        .stdout("[year] 2020-2025");
}
