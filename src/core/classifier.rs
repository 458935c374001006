//! Account type classification
//!
//! The `Classifier` merges the built-in taxonomy with the custom group
//! registry. Lookups always consult the built-in table first, so a custom
//! registration can never shadow a built-in type, then the registry, and
//! finally fall back to "Primary".

use crate::core::registry::CustomGroupRegistry;
use crate::core::taxonomy::{self, BUILTIN_TYPES};
use crate::types::group::PRIMARY;
use crate::types::CustomAccountGroup;
use serde::Serialize;
use tracing::debug;

/// One entry of the assignable account type list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignableType {
    pub name: String,
    pub parent: String,
    pub builtin: bool,
}

/// Resolves account types to their parent group
#[derive(Debug, Default, Clone)]
pub struct Classifier {
    registry: CustomGroupRegistry,
}

impl Classifier {
    /// Classifier over the built-in taxonomy and an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier over the built-in taxonomy and a previously loaded registry
    pub fn with_registry(registry: CustomGroupRegistry) -> Self {
        Self { registry }
    }

    /// Parent group of `type_name`
    ///
    /// Built-in table first, then the custom registry, both exact match;
    /// "Primary" when neither has an entry.
    pub fn resolve_parent(&self, type_name: &str) -> &str {
        if let Some(parent) = taxonomy::parent_of(type_name) {
            return parent;
        }
        match self.registry.parent_of(type_name) {
            Some(parent) => parent,
            None => {
                debug!(type_name, "unclassified account type, defaulting to Primary");
                PRIMARY
            }
        }
    }

    /// Register a custom account type on first use
    ///
    /// See [`CustomGroupRegistry::register_if_absent`]; returns a copy of the
    /// new entry so it can be handed to the persistence collaborator.
    pub fn register_if_absent(
        &mut self,
        name: &str,
        chosen_parent: Option<&str>,
    ) -> Option<CustomAccountGroup> {
        self.registry
            .register_if_absent(name, chosen_parent)
            .cloned()
    }

    /// Types a user can assign to an account
    ///
    /// Built-in types in canonical order followed by custom types in
    /// registration order. With a filter, only names containing it as a
    /// case-insensitive substring are kept, whitespace included; the order
    /// is unchanged.
    pub fn list_assignable_types(&self, filter: Option<&str>) -> Vec<AssignableType> {
        let needle = filter.map(str::to_lowercase);

        let builtins = BUILTIN_TYPES.iter().map(|(name, parent)| AssignableType {
            name: name.to_string(),
            parent: parent.to_string(),
            builtin: true,
        });
        let customs = self.registry.groups().iter().map(|g| AssignableType {
            name: g.name.clone(),
            parent: g.parent.clone(),
            builtin: false,
        });

        builtins
            .chain(customs)
            .filter(|t| match &needle {
                Some(needle) => t.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect()
    }

    pub fn registry(&self) -> &CustomGroupRegistry {
        &self.registry
    }
}
