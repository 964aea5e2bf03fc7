// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for sortviz crates.
//!
//! - [`InMemoryConfigStore`]: `ConfigStore` fake with call counters and
//!   failure injection.
//! - [`runs`]: helpers that drive sessions and check ordering invariants.

mod config;
pub mod runs;

pub use config::InMemoryConfigStore;
pub use runs::{drain, is_permutation, session_over, sorted_copy, FIXTURES};
