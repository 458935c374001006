//! Thread-safe chart engine
//!
//! This module provides `SharedChartEngine`, the same create and edit flows as
//! `ChartEngine` behind `&self`, so one chart can be shared across threads
//! (typically wrapped in an `Arc`).
//!
//! # Design
//!
//! Two `RwLock`s: one around the classifier (which owns the custom group
//! registry) and one around the `ChartStore`. Every write holds the store lock
//! for the whole check-then-insert sequence, so two concurrent creates with
//! the same normalized name cannot both pass the uniqueness check. Lookups
//! and name checks only take read locks.
//!
//! # Lock Order
//!
//! Whenever both locks are held, the store lock is taken first and the
//! classifier lock second. Ledger writes never touch the classifier.
//!
//! # Poisoning
//!
//! A panic while a lock is held cannot leave the store half-written (every
//! write is a single save after validation), so poisoned locks are
//! recovered with `PoisonError::into_inner`.

use crate::core::assignment::{self, FieldRules};
use crate::core::classifier::{AssignableType, Classifier};
use crate::core::engine::{build_account, prepare_account, prepare_ledger};
use crate::core::registry::CustomGroupRegistry;
use crate::core::store::MemoryStore;
use crate::core::traits::ChartStore;
use crate::core::uniqueness::UniquenessValidator;
use crate::types::{
    AccountDraft, AccountId, ChartError, ChartOfAccount, CustomAccountGroup, Ledger, LedgerDraft,
    LedgerId, RecordKind,
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Chart engine safe to share between threads
///
/// # Thread Safety
///
/// All methods take `&self`. The engine is `Send + Sync` whenever the store
/// is. Writes are serialized on the store lock, which is what makes the
/// uniqueness guarantee hold under concurrency.
#[derive(Debug)]
pub struct SharedChartEngine<S = MemoryStore> {
    classifier: RwLock<Classifier>,
    store: RwLock<S>,
    account_names: UniquenessValidator,
    ledger_names: UniquenessValidator,
}

impl SharedChartEngine<MemoryStore> {
    /// Create an engine over an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for SharedChartEngine<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ChartStore> SharedChartEngine<S> {
    /// Create an engine over `store`
    ///
    /// Custom groups already recorded in the store are loaded into the
    /// registry in their original order.
    pub fn with_store(store: S) -> Self {
        let mut registry = CustomGroupRegistry::new();
        for group in store.custom_groups() {
            registry.register_if_absent(&group.name, Some(group.parent.as_str()));
        }

        Self {
            classifier: RwLock::new(Classifier::with_registry(registry)),
            store: RwLock::new(store),
            account_names: UniquenessValidator::accounts(),
            ledger_names: UniquenessValidator::ledgers(),
        }
    }

    /// Parent group of an account type
    ///
    /// Returns an owned string since the registry lock is released on return.
    pub fn resolve_parent(&self, type_name: &str) -> String {
        read(&self.classifier).resolve_parent(type_name).to_string()
    }

    pub fn list_assignable_types(&self, filter: Option<&str>) -> Vec<AssignableType> {
        read(&self.classifier).list_assignable_types(filter)
    }

    /// Register a custom account type and record it in the store
    ///
    /// Two threads registering the same new name race on the classifier
    /// lock; exactly one of them gets `Some`, and the store sees it once.
    pub fn register_if_absent(
        &self,
        name: &str,
        chosen_parent: Option<&str>,
    ) -> Option<CustomAccountGroup> {
        let mut store = write(&self.store);
        let added = write(&self.classifier).register_if_absent(name.trim(), chosen_parent)?;
        info!(name = %added.name, parent = %added.parent, "registered custom account group");
        store.save_custom_group(added.clone());
        Some(added)
    }

    pub fn custom_groups(&self) -> Vec<CustomAccountGroup> {
        read(&self.classifier).registry().groups().to_vec()
    }

    /// Check an account name under a read lock, writing nothing
    pub fn check_account_name(
        &self,
        name: &str,
        exclude: Option<AccountId>,
    ) -> Result<String, ChartError> {
        let names = read(&self.store).account_names();
        self.account_names
            .validate(name, names.iter().map(|(id, n)| (*id, n.as_str())), exclude)
    }

    /// Check a ledger name under a read lock, writing nothing
    pub fn check_ledger_name(
        &self,
        name: &str,
        exclude: Option<LedgerId>,
    ) -> Result<String, ChartError> {
        let names = read(&self.store).ledger_names();
        self.ledger_names
            .validate(name, names.iter().map(|(id, n)| (*id, n.as_str())), exclude)
    }

    pub fn field_rules(&self, under: &str) -> FieldRules {
        assignment::field_rules(under.trim())
    }

    /// Create an account
    ///
    /// # Errors
    ///
    /// Same as [`ChartEngine::create_account`](crate::core::ChartEngine::create_account).
    pub fn create_account(&self, draft: AccountDraft) -> Result<ChartOfAccount, ChartError> {
        self.write_account(None, &draft)
            .inspect(|a| info!(id = a.id, name = %a.account_name, group = %a.group, "account created"))
            .inspect_err(|e| warn!(name = %draft.account_name, error = %e, "account rejected"))
    }

    /// Edit an account in place
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` for an unknown id, otherwise as `create_account`.
    pub fn update_account(
        &self,
        id: AccountId,
        draft: AccountDraft,
    ) -> Result<ChartOfAccount, ChartError> {
        self.write_account(Some(id), &draft)
            .inspect(|a| info!(id = a.id, name = %a.account_name, "account updated"))
            .inspect_err(|e| warn!(id, error = %e, "account update rejected"))
    }

    fn write_account(
        &self,
        id: Option<AccountId>,
        draft: &AccountDraft,
    ) -> Result<ChartOfAccount, ChartError> {
        let mut store = write(&self.store);
        if let Some(id) = id {
            if store.account(id).is_none() {
                return Err(ChartError::not_found(RecordKind::Account, id));
            }
        }

        let names = store.account_names();
        let prepared = prepare_account(
            &self.account_names,
            names.iter().map(|(id, n)| (*id, n.as_str())),
            id,
            draft,
        )?;

        let mut classifier = write(&self.classifier);
        if let Some(added) =
            classifier.register_if_absent(&prepared.account_type, draft.parent.as_deref())
        {
            info!(name = %added.name, parent = %added.parent, "registered custom account group");
            store.save_custom_group(added);
        }

        let id = match id {
            Some(id) => id,
            None => store.next_account_id(),
        };
        let account = build_account(id, prepared, &classifier, draft);
        store.save_account(account.clone());
        Ok(account)
    }

    /// Create a ledger
    ///
    /// # Errors
    ///
    /// Same as [`ChartEngine::create_ledger`](crate::core::ChartEngine::create_ledger).
    pub fn create_ledger(&self, draft: LedgerDraft) -> Result<Ledger, ChartError> {
        self.write_ledger(None, &draft)
            .inspect(|l| info!(id = l.id, name = %l.ledger_name, under = %l.under, "ledger created"))
            .inspect_err(|e| warn!(name = %draft.ledger_name, error = %e, "ledger rejected"))
    }

    /// Edit a ledger in place
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` for an unknown id, otherwise as `create_ledger`.
    pub fn update_ledger(&self, id: LedgerId, draft: LedgerDraft) -> Result<Ledger, ChartError> {
        self.write_ledger(Some(id), &draft)
            .inspect(|l| info!(id = l.id, name = %l.ledger_name, "ledger updated"))
            .inspect_err(|e| warn!(id, error = %e, "ledger update rejected"))
    }

    fn write_ledger(&self, id: Option<LedgerId>, draft: &LedgerDraft) -> Result<Ledger, ChartError> {
        let mut store = write(&self.store);
        if let Some(id) = id {
            if store.ledger(id).is_none() {
                return Err(ChartError::not_found(RecordKind::Ledger, id));
            }
        }

        let names = store.ledger_names();
        let (name, assignment) = prepare_ledger(
            &self.ledger_names,
            names.iter().map(|(id, n)| (*id, n.as_str())),
            id,
            draft,
        )?;

        let id = match id {
            Some(id) => id,
            None => store.next_ledger_id(),
        };
        let ledger = assignment.into_ledger(id, name);
        store.save_ledger(ledger.clone());
        Ok(ledger)
    }

    pub fn account(&self, id: AccountId) -> Option<ChartOfAccount> {
        read(&self.store).account(id)
    }

    pub fn ledger(&self, id: LedgerId) -> Option<Ledger> {
        read(&self.store).ledger(id)
    }

    /// Snapshot of all accounts in id order
    pub fn accounts(&self) -> Vec<ChartOfAccount> {
        read(&self.store).list_accounts()
    }

    /// Snapshot of all ledgers in id order
    pub fn ledgers(&self) -> Vec<Ledger> {
        read(&self.store).list_ledgers()
    }

    /// Give back the store once no other thread holds the engine
    pub fn into_store(self) -> S {
        self.store.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
