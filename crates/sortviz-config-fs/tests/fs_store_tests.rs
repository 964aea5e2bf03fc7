// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

use sortviz_app_core::config::{ConfigError, ConfigService, ConfigStore, PREFS_KEY};
use sortviz_app_core::prefs::VisualizerPrefs;
use sortviz_config_fs::FsConfigStore;
use sortviz_core::Direction;

#[test]
fn missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));
}

#[test]
fn creates_nested_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsConfigStore::with_base(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.path_for("prefs"), nested.join("prefs.json"));
}

#[test]
fn prefs_persist_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let mut prefs = VisualizerPrefs::default();
    prefs.run.direction = Direction::Descending;
    prefs.array.len = 12;

    let service = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
    service.save_prefs(&prefs).unwrap();
    assert!(dir.path().join(format!("{PREFS_KEY}.json")).is_file());

    let reopened = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
    assert_eq!(reopened.load_prefs().unwrap(), prefs);
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("prefs.json"), b"{not json").unwrap();
    let service = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
    assert!(matches!(service.load_prefs(), Err(ConfigError::Serde(_))));
}
