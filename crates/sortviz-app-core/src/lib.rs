// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for sortviz drivers (controller, prefs, config,
//! array generation). Keeps terminal/window adapters thin and framework-agnostic.

pub mod config;
pub mod controller;
pub mod generate;
pub mod prefs;
