//! Custom account group registry
//!
//! Append-only store of user-declared account types. An entry is created the
//! first time an account uses a type name that neither the built-in taxonomy
//! nor the registry knows; after that the entry is never overwritten,
//! reparented or removed.

use crate::core::taxonomy;
use crate::types::group::PRIMARY;
use crate::types::CustomAccountGroup;
use std::collections::HashMap;

/// Append-only registry of custom account groups
///
/// Entries are kept in registration order; a name index gives exact-match
/// lookups without scanning.
#[derive(Debug, Default, Clone)]
pub struct CustomGroupRegistry {
    groups: Vec<CustomAccountGroup>,
    index: HashMap<String, usize>,
}

impl CustomGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under `chosen_parent` unless it is already known
    ///
    /// The parent must be a root group or "Primary", keeping the hierarchy two
    /// levels deep; a missing, blank or non-root parent (a built-in type, a
    /// custom type, an unknown name) falls back to "Primary". Names known to the
    /// built-in taxonomy or already registered are left untouched, so the
    /// first registration of a name always wins. Root group names are never
    /// registered as types; they stay roots and resolve to "Primary".
    ///
    /// # Returns
    ///
    /// The new entry if one was appended, `None` if the call was a no-op
    pub fn register_if_absent(
        &mut self,
        name: &str,
        chosen_parent: Option<&str>,
    ) -> Option<&CustomAccountGroup> {
        if name.is_empty()
            || name == PRIMARY
            || taxonomy::is_builtin(name)
            || taxonomy::is_primary_group(name)
            || self.index.contains_key(name)
        {
            return None;
        }

        let parent = chosen_parent
            .map(str::trim)
            .filter(|p| *p == PRIMARY || taxonomy::is_primary_group(p))
            .unwrap_or(PRIMARY);

        self.index.insert(name.to_string(), self.groups.len());
        self.groups.push(CustomAccountGroup {
            name: name.to_string(),
            parent: parent.to_string(),
        });
        self.groups.last()
    }

    /// Parent of a registered custom type (exact match)
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.groups[i].parent.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in registration order
    pub fn groups(&self) -> &[CustomAccountGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
