//! Trait abstractions at the engine's persistence seam
//!
//! The engine does not define how records are stored. `ChartStore` is the
//! contract a persistence collaborator fulfils: hand out the current name
//! sets for uniqueness checks and durably record whatever the engine accepts.
//! `MemoryStore` is the in-process implementation.

use crate::types::{AccountId, ChartOfAccount, CustomAccountGroup, Ledger, LedgerId};

/// A stored record with a numeric identity and a unique name
pub trait Record {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
}

impl Record for ChartOfAccount {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.account_name
    }
}

impl Record for Ledger {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.ledger_name
    }
}

/// Persistence collaborator for the chart engine
///
/// Implementations must return the full current name set on every call;
/// the engine validates uniqueness against exactly what it is given.
pub trait ChartStore {
    /// Current `(id, name)` pairs of all accounts
    fn account_names(&self) -> Vec<(AccountId, String)>;

    /// Current `(id, name)` pairs of all ledgers
    fn ledger_names(&self) -> Vec<(LedgerId, String)>;

    fn account(&self, id: AccountId) -> Option<ChartOfAccount>;

    fn ledger(&self, id: LedgerId) -> Option<Ledger>;

    /// Every account in id order
    fn list_accounts(&self) -> Vec<ChartOfAccount>;

    /// Every ledger in id order
    fn list_ledgers(&self) -> Vec<Ledger>;

    /// Reserve the id for a new account
    fn next_account_id(&mut self) -> AccountId;

    /// Reserve the id for a new ledger
    fn next_ledger_id(&mut self) -> LedgerId;

    /// Record a created or updated account, replacing any record with the same id
    fn save_account(&mut self, account: ChartOfAccount);

    /// Record a created or updated ledger, replacing any record with the same id
    fn save_ledger(&mut self, ledger: Ledger);

    /// Record a newly registered custom account group
    fn save_custom_group(&mut self, group: CustomAccountGroup);

    /// Custom groups recorded so far, in registration order
    fn custom_groups(&self) -> Vec<CustomAccountGroup>;
}
