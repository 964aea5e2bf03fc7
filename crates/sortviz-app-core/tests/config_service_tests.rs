// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! ConfigService over the in-memory store.

use sortviz_app_core::config::{ConfigError, ConfigService, PREFS_KEY};
use sortviz_app_core::prefs::{PrefsError, VisualizerPrefs};
use sortviz_core::{Direction, Verbosity};
use sortviz_dry_tests::InMemoryConfigStore;

#[test]
fn missing_prefs_fall_back_to_defaults() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    assert_eq!(service.load_prefs().unwrap(), VisualizerPrefs::default());
    assert_eq!(store.load_count(), 1);
}

#[test]
fn saved_prefs_round_trip() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());

    let mut prefs = VisualizerPrefs::default();
    prefs.array.len = 12;
    prefs.array.min_value = -5;
    prefs.run.algorithm = "insertion".into();
    prefs.run.direction = Direction::Descending;
    prefs.run.verbosity = Verbosity::Comparisons;
    service.save_prefs(&prefs).unwrap();

    let reloaded = ConfigService::new(store).load_prefs().unwrap();
    assert_eq!(reloaded, prefs);
}

#[test]
fn partial_documents_fill_in_defaults() {
    let store = InMemoryConfigStore::new();
    store.put_raw(PREFS_KEY, br#"{ "run": { "direction": "descending" } }"#);
    let prefs = ConfigService::new(store).load_prefs().unwrap();
    assert_eq!(prefs.run.direction, Direction::Descending);
    assert_eq!(prefs.array, VisualizerPrefs::default().array);
}

#[test]
fn invalid_stored_prefs_are_rejected() {
    let store = InMemoryConfigStore::new();
    store.put_raw(
        PREFS_KEY,
        br#"{ "array": { "len": 4, "min_value": 10, "max_value": 1 } }"#,
    );
    let err = ConfigService::new(store).load_prefs().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(PrefsError::InvertedRange { min: 10, max: 1 })
    ));
}

#[test]
fn unknown_algorithm_is_not_saved() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    let mut prefs = VisualizerPrefs::default();
    prefs.run.algorithm = "quick".into();

    assert!(matches!(
        service.save_prefs(&prefs),
        Err(ConfigError::Invalid(PrefsError::Algorithm(_)))
    ));
    assert_eq!(store.save_count(), 0);
    assert!(!store.contains_key(PREFS_KEY));
}

#[test]
fn store_failures_propagate() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());

    store.set_fail_on_save(true);
    assert!(matches!(
        service.save_prefs(&VisualizerPrefs::default()),
        Err(ConfigError::Other(_))
    ));

    store.set_fail_on_load(true);
    assert!(matches!(service.load_prefs(), Err(ConfigError::Other(_))));
}

#[test]
fn garbage_bytes_are_a_serde_error() {
    let store = InMemoryConfigStore::new();
    store.put_raw(PREFS_KEY, b"not json");
    assert!(matches!(
        ConfigService::new(store).load_prefs(),
        Err(ConfigError::Serde(_))
    ));
}
