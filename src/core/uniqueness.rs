//! Name uniqueness validation
//!
//! Names are compared trimmed and case-folded. Accounts and ledgers each get
//! their own validator instance and are checked against their own name set;
//! the two name spaces never see each other.

use crate::types::{ChartError, RecordKind};

/// Canonical comparison form of a record name
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Guards one name space against duplicate names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniquenessValidator {
    kind: RecordKind,
}

impl UniquenessValidator {
    pub fn new(kind: RecordKind) -> Self {
        Self { kind }
    }

    /// Validator for chart of accounts names
    pub fn accounts() -> Self {
        Self::new(RecordKind::Account)
    }

    /// Validator for ledger names
    pub fn ledgers() -> Self {
        Self::new(RecordKind::Ledger)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Check `name` against the existing `(key, name)` pairs of this name space
    ///
    /// The record whose key equals `exclude` is skipped, so an edit can
    /// resubmit its own unchanged name.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the trimmed name, ready to store
    /// * `Err(ChartError::RequiredFieldMissing)` - the name is blank
    /// * `Err(ChartError::DuplicateName)` - another record has the same normalized name
    pub fn validate<'a, K, I>(
        &self,
        name: &str,
        existing: I,
        exclude: Option<K>,
    ) -> Result<String, ChartError>
    where
        K: PartialEq,
        I: IntoIterator<Item = (K, &'a str)>,
    {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ChartError::required("name"));
        }

        let wanted = trimmed.to_lowercase();
        let collision = existing
            .into_iter()
            .filter(|(key, _)| exclude.as_ref() != Some(key))
            .any(|(_, other)| normalize_name(other) == wanted);

        if collision {
            return Err(ChartError::duplicate(self.kind, trimmed));
        }

        Ok(trimmed.to_string())
    }
}
