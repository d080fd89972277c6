//! Integration test: source document + scratch directory through the full pipeline.
//!
//! Each test builds a temp directory of image files and a separate source
//! document, runs the pipeline, and checks the rendered output.

use imgmatch_core::config::MatchConfig;
use imgmatch_core::matcher::basename;
use imgmatch_core::{report, run, MatchError, MatchedPair};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn source_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("images.ts");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn image_dir(files: &[&str]) -> TempDir {
    let dir = tempdir().unwrap();
    for f in files {
        fs::write(dir.path().join(f), b"\x89PNG").unwrap();
    }
    dir
}

#[test]
fn matches_only_referenced_files() {
    let (_src_dir, src) = source_file(
        r#"const x = "/images/abc/cat.png"; const y = "/images/def/dog.png";"#,
    );
    let images = image_dir(&["cat.png", "bird.png"]);

    let pairs = run(&src, images.path(), &MatchConfig::default()).unwrap();
    assert_eq!(
        pairs,
        vec![MatchedPair {
            file_name: "cat.png".into(),
            image_path: "/images/abc/cat.png".into(),
        }]
    );

    let mut out = Vec::new();
    report::write_pairs(&mut out, &pairs).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "('cat.png', '/images/abc/cat.png')\n"
    );
}

#[test]
fn duplicate_basename_uses_first_occurrence() {
    let (_src_dir, src) = source_file(
        r#"export const images = ["/images/a/x.png", "/images/b/x.png"];"#,
    );
    let images = image_dir(&["x.png"]);

    let pairs = run(&src, images.path(), &MatchConfig::default()).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].image_path, "/images/a/x.png");
}

#[test]
fn missing_source_fails_without_output() {
    let images = image_dir(&["cat.png"]);
    let missing = images.path().join("no-such-images.ts");

    let err = run(&missing, images.path(), &MatchConfig::default()).unwrap_err();
    assert!(matches!(err, MatchError::SourceUnavailable { .. }));
}

#[test]
fn missing_directory_fails() {
    let (src_dir, src) = source_file(r#""/images/a.png""#);
    let gone = src_dir.path().join("gone");

    let err = run(&src, &gone, &MatchConfig::default()).unwrap_err();
    assert!(matches!(err, MatchError::DirectoryUnavailable { .. }));
}

#[test]
fn subdirectories_are_not_matched() {
    let (_src_dir, src) = source_file(r#""/images/icons/icons" "/images/a.png""#);
    let images = image_dir(&["a.png"]);
    fs::create_dir(images.path().join("icons")).unwrap();

    let pairs = run(&src, images.path(), &MatchConfig::default()).unwrap();
    let names: Vec<_> = pairs.iter().map(|p| p.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.png"]);
}

#[test]
fn custom_prefix() {
    let (_src_dir, src) = source_file(r#"["/assets/img/a.png", "/images/b.png"]"#);
    let images = image_dir(&["a.png", "b.png"]);
    let cfg = MatchConfig {
        path_prefix: "/assets/".to_string(),
        ..MatchConfig::default()
    };

    let pairs = run(&src, images.path(), &cfg).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].image_path, "/assets/img/a.png");
}

#[test]
fn every_pair_is_consistent() {
    let (_src_dir, src) = source_file(
        r#"
        export const images = {
          vanilla: "/images/ice/vanilla.jpg",
          choco: "/images/ice/chocolate.jpg",
          choco2: "/images/popsicles/chocolate.jpg",
          lemon: "/images/popsicles/lemon.webp",
          other: '/images/single-quoted.jpg',
        };
        "#,
    );
    let images = image_dir(&[
        "vanilla.jpg",
        "chocolate.jpg",
        "lemon.webp",
        "single-quoted.jpg",
        "unused.png",
    ]);

    let pairs = run(&src, images.path(), &MatchConfig::default()).unwrap();
    let mut seen = HashSet::new();
    for p in &pairs {
        assert_eq!(basename(&p.image_path), p.file_name);
        assert!(seen.insert(p.file_name.clone()));
    }
    let names: HashSet<_> = pairs.iter().map(|p| p.file_name.as_str()).collect();
    assert_eq!(
        names,
        HashSet::from(["vanilla.jpg", "chocolate.jpg", "lemon.webp"])
    );
    let choco = pairs.iter().find(|p| p.file_name == "chocolate.jpg").unwrap();
    assert_eq!(choco.image_path, "/images/ice/chocolate.jpg");
}
