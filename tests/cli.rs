extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = include_str!("../config.xsd");

fn config_xml(output: &str, width: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n\
         <config>\n\
           <width>{}</width>\n\
           <height>4</height>\n\
           <x_min>-2</x_min>\n\
           <x_max>1</x_max>\n\
           <y_min>-1</y_min>\n\
           <y_max>1</y_max>\n\
           <iteration>50</iteration>\n\
           <threshold>50</threshold>\n\
           <output_path>{}</output_path>\n\
         </config>\n",
        width, output
    )
}

fn workspace(xml: Option<&str>, xsd: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(xml) = xml {
        fs::write(dir.path().join("config.xml"), xml).unwrap();
    }
    if let Some(xsd) = xsd {
        fs::write(dir.path().join("config.xsd"), xsd).unwrap();
    }
    dir
}

fn mandel(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mandel").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn renders_from_the_working_directory() {
    let dir = workspace(Some(&config_xml("out.png", "4")), Some(SCHEMA));
    mandel(dir.path()).assert().success();

    let image = image::open(dir.path().join("out.png")).unwrap().to_luma_alpha8();
    assert_eq!(image.dimensions(), (4, 4));
    assert_ne!(image.get_pixel(0, 0)[0], 0);
    assert_eq!(image.get_pixel(3, 2)[0], 0);
    assert!(image.pixels().all(|p| p[1] == 255));
}

#[test]
fn explicit_paths_and_thread_counts() {
    let dir = workspace(None, None);
    let xml = dir.path().join("frame.xml");
    let xsd = dir.path().join("frame.xsd");
    let out = dir.path().join("frame.png");
    fs::write(&xml, config_xml(&out.display().to_string(), "9")).unwrap();
    fs::write(&xsd, SCHEMA).unwrap();

    mandel(dir.path())
        .arg("--config")
        .arg(&xml)
        .arg("--schema")
        .arg(&xsd)
        .args(&["--threads", "8"])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn missing_xml_fails() {
    let dir = workspace(None, Some(SCHEMA));
    mandel(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find XML configuration file"));
}

#[test]
fn missing_xsd_fails() {
    let dir = workspace(Some(&config_xml("out.png", "4")), None);
    mandel(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find XSD configuration file"));
}

#[test]
fn schema_violations_fail() {
    let dir = workspace(Some(&config_xml("out.png", "four")), Some(SCHEMA));
    mandel(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation Error"))
        .stdout(predicate::str::contains("Validation failed..."));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn unwritable_outputs_fail() {
    let dir = workspace(Some(&config_xml("missing/dir/out.png", "4")), Some(SCHEMA));
    mandel(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not write image"));
}

#[test]
fn zero_threads_are_refused() {
    let dir = workspace(Some(&config_xml("out.png", "4")), Some(SCHEMA));
    mandel(dir.path())
        .args(&["--threads", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Thread count must be between 1 and 1024"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
    let dir = workspace(None, None);
    mandel(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--threads"));
}
