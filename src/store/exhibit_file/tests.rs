// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::rstest;

use super::{load_exhibit, parse_exhibit_json, parse_exhibit_yaml, ExhibitFormat, StoreError};
use crate::nav::NavError;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("vitrine-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

const YAML: &str = r#"
Groups:
  - Name: H&E
    Path: he
Stories:
  - Name: Intro
    Waypoints:
      - Name: Start
        Zoom: 1
        Pan: [0.5, 0.5]
        Group: H&E
"#;

const JSON: &str = r#"{
  "Exhibit": {
    "Groups": [{ "Name": "H&E", "Path": "he", "Colors": ["FF0000"], "Channels": ["DNA"] }],
    "Stories": [{
      "Name": "Intro",
      "Waypoints": [{ "Name": "Start", "Zoom": 2, "Pan": [0.25, 0.75], "Group": "H&E" }]
    }],
    "Images": [{ "Name": "slide", "Width": 100, "Height": 50, "TileSize": [256, 256] }]
  }
}"#;

fn label() -> &'static Path {
    Path::new("inline")
}

#[rstest]
#[case("exhibit.yaml", Some(ExhibitFormat::Yaml))]
#[case("exhibit.YML", Some(ExhibitFormat::Yaml))]
#[case("exhibit.json", Some(ExhibitFormat::Json))]
#[case("exhibit.toml", None)]
#[case("exhibit", None)]
fn format_follows_extension(#[case] name: &str, #[case] expected: Option<ExhibitFormat>) {
    assert_eq!(ExhibitFormat::from_path(Path::new(name)), expected);
}

#[test]
fn yaml_root_document_parses() {
    let exhibit = parse_exhibit_yaml(YAML, label()).expect("parse");
    assert_eq!(exhibit.stories[0].waypoints[0].group, "H&E");
    assert!(exhibit.images.is_empty());
}

#[test]
fn yaml_wrapper_key_is_unwrapped() {
    let wrapped = format!("Exhibit:\n{}", YAML.replace('\n', "\n  "));
    let exhibit = parse_exhibit_yaml(&wrapped, label()).expect("parse wrapped");
    assert_eq!(exhibit.groups[0].path, "he");
}

#[test]
fn json_wrapper_key_is_unwrapped() {
    let exhibit = parse_exhibit_json(JSON, label()).expect("parse");
    assert_eq!(exhibit.stories[0].waypoints[0].zoom, 2.0);
    assert_eq!(exhibit.images[0].tile_size, [256, 256]);
    assert_eq!(exhibit.images[0].max_level, 0);
}

#[test]
fn exhibit_without_stories_is_invalid() {
    let err = parse_exhibit_yaml("Stories: []\n", label()).expect_err("invalid");
    match err {
        StoreError::Invalid { source, .. } => assert_eq!(source, NavError::NoStories),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_yaml_reports_path() {
    let err = parse_exhibit_yaml("Groups: [", Path::new("broken.yaml")).expect_err("malformed");
    assert!(matches!(err, StoreError::Yaml { .. }));
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn loads_files_by_extension() {
    let tmp = TempDir::new("load");
    let yaml = tmp.write("exhibit.yml", YAML);
    let json = tmp.write("exhibit.json", JSON);

    assert_eq!(load_exhibit(&yaml).expect("yaml").stories.len(), 1);
    assert_eq!(load_exhibit(&json).expect("json").groups[0].channels, vec!["DNA"]);
}

#[test]
fn unsupported_and_missing_files_fail() {
    let tmp = TempDir::new("fail");
    let toml = tmp.write("exhibit.toml", "");
    assert!(matches!(load_exhibit(&toml), Err(StoreError::UnsupportedFormat { .. })));

    let missing = tmp.path.join("missing.yaml");
    let err = load_exhibit(&missing).expect_err("missing");
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn bundled_demo_exhibit_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("demo-exhibit.yaml");
    let exhibit = load_exhibit(&path).expect("demo exhibit");
    assert_eq!(exhibit.groups.len(), 2);
    assert_eq!(exhibit.layout.grid, vec![vec!["tonsil".to_owned(), "lymph-node".to_owned()]]);
}
