#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rls_optimize::input::loader;
use rls_optimize::input::policy::PolicyRecord;

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn fixture_input_path(fixture: &str) -> PathBuf {
    fixture_dir(fixture).join("input.json")
}

pub(crate) fn load_fixture_policies(fixture: &str) -> Vec<PolicyRecord> {
    loader::load_policies(&fixture_input_path(fixture)).expect("fixture policies should load")
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
