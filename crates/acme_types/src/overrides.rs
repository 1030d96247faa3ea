//! Partial theme: a subset of slots to overwrite on top of a base theme.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ThemeSlot;

/// Slot → value pairs, serialized as a flat object keyed by wire key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeOverrides(BTreeMap<ThemeSlot, String>);

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, slot: ThemeSlot, value: impl Into<String>) -> Self {
        self.insert(slot, value);
        self
    }

    pub fn insert(&mut self, slot: ThemeSlot, value: impl Into<String>) {
        self.0.insert(slot, value.into());
    }

    pub fn get(&self, slot: ThemeSlot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    pub fn contains(&self, slot: ThemeSlot) -> bool {
        self.0.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeSlot, &str)> + '_ {
        self.0.iter().map(|(slot, value)| (*slot, value.as_str()))
    }

    /// Slots named by this override set, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = ThemeSlot> + '_ {
        self.0.keys().copied()
    }
}

impl<S: Into<String>> FromIterator<(ThemeSlot, S)> for ThemeOverrides {
    fn from_iter<I: IntoIterator<Item = (ThemeSlot, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(slot, value)| (slot, value.into()))
                .collect(),
        )
    }
}
