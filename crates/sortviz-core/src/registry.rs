// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Algorithm lookup: maps an id to a [`StepEmitter`] factory.

use crate::direction::{Direction, Verbosity};
use crate::emitter::{BubbleSort, InsertionSort, StepEmitter};
use crate::error::SortError;

/// Id of the built-in bubble sort.
pub const BUBBLE_SORT_ID: &str = "bubble";
/// Id of the built-in insertion sort.
pub const INSERTION_SORT_ID: &str = "insertion";

/// Function that builds a fresh emitter for one run.
pub type EmitterFactory = fn(Direction, Verbosity) -> Box<dyn StepEmitter>;

/// Descriptor for an algorithm registered with an [`AlgorithmRegistry`].
///
/// Every factory must honor the emitter contract: one swap or one shift per
/// suspension.
#[derive(Clone, Copy)]
pub struct AlgorithmEntry {
    /// Stable identifier, lowercase.
    pub id: &'static str,
    /// Human-readable name for titles and listings.
    pub name: &'static str,
    /// Extra lookup keys (e.g. single-letter key bindings).
    pub aliases: &'static [&'static str],
    /// Builds an emitter bound to a direction and verbosity.
    pub factory: EmitterFactory,
}

impl AlgorithmEntry {
    /// Creates an emitter for a new run.
    pub fn create(&self, direction: Direction, verbosity: Verbosity) -> Box<dyn StepEmitter> {
        (self.factory)(direction, verbosity)
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> {
        [self.id, self.name]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    fn matches(&self, key: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(key))
    }
}

impl core::fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AlgorithmEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

fn bubble_factory(direction: Direction, verbosity: Verbosity) -> Box<dyn StepEmitter> {
    Box::new(BubbleSort::new(direction, verbosity))
}

fn insertion_factory(direction: Direction, verbosity: Verbosity) -> Box<dyn StepEmitter> {
    Box::new(InsertionSort::new(direction, verbosity))
}

/// Built-in bubble sort entry.
pub const BUBBLE_SORT: AlgorithmEntry = AlgorithmEntry {
    id: BUBBLE_SORT_ID,
    name: "Bubble Sort",
    aliases: &["b", "bubble_sort", "bubblesort"],
    factory: bubble_factory,
};

/// Built-in insertion sort entry.
pub const INSERTION_SORT: AlgorithmEntry = AlgorithmEntry {
    id: INSERTION_SORT_ID,
    name: "Insertion Sort",
    aliases: &["i", "insertion_sort", "insertionsort"],
    factory: insertion_factory,
};

/// Ordered set of algorithms a session can run.
///
/// Lookups are case-insensitive over ids, names and aliases. Registration
/// order is preserved for listings.
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    entries: Vec<AlgorithmEntry>,
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AlgorithmRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A registry holding bubble sort and insertion sort.
    pub fn builtin() -> Self {
        Self {
            entries: vec![BUBBLE_SORT, INSERTION_SORT],
        }
    }

    /// Adds an algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::DuplicateAlgorithm`] if any of the entry's lookup
    /// keys collides with an already registered one.
    pub fn register(&mut self, entry: AlgorithmEntry) -> Result<(), SortError> {
        if entry
            .keys()
            .any(|key| self.entries.iter().any(|e| e.matches(key)))
        {
            return Err(SortError::DuplicateAlgorithm(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Resolves `key` to a registered algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::UnknownAlgorithm`] when nothing matches.
    pub fn get(&self, key: &str) -> Result<&AlgorithmEntry, SortError> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|e| e.matches(key))
            .ok_or_else(|| SortError::UnknownAlgorithm(key.to_owned()))
    }

    /// Registered entries in registration order.
    pub fn entries(&self) -> &[AlgorithmEntry] {
        &self.entries
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.id).collect()
    }
}
