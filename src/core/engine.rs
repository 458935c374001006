//! Chart engine orchestration
//!
//! This module provides the `ChartEngine`, which gates every account and
//! ledger create or edit by coordinating the classifier, the two uniqueness
//! validators, the ledger assignment rules and the persistence collaborator.
//!
//! The engine enforces:
//! - name uniqueness per name space, excluding the record itself on edit
//! - registration of novel account types before the account is stored
//! - group-dependent ledger rules
//! - all-or-nothing writes: a rejected operation leaves every table untouched

use crate::core::assignment::{self, FieldRules, LedgerAssignment};
use crate::core::classifier::{AssignableType, Classifier};
use crate::core::registry::CustomGroupRegistry;
use crate::core::store::MemoryStore;
use crate::core::traits::ChartStore;
use crate::core::uniqueness::UniquenessValidator;
use crate::types::group::is_ledger_group;
use crate::types::{
    AccountDraft, AccountId, ChartError, ChartOfAccount, CustomAccountGroup, Ledger, LedgerDraft,
    LedgerId, RecordKind, ValidationErrors,
};
use tracing::{info, warn};

/// Account fields that passed validation
pub(crate) struct PreparedAccount {
    pub name: String,
    pub account_type: String,
}

/// Validate an account draft against the current account names
///
/// Checks the name and the account type together so both failures are
/// reported at once.
pub(crate) fn prepare_account<'a>(
    validator: &UniquenessValidator,
    names: impl IntoIterator<Item = (AccountId, &'a str)>,
    exclude: Option<AccountId>,
    draft: &AccountDraft,
) -> Result<PreparedAccount, ChartError> {
    let name = validator.validate(&draft.account_name, names, exclude);
    let account_type = draft.account_type.trim();

    let mut errors = ValidationErrors::new();
    if let Err(e) = &name {
        errors.push(e.clone());
    }
    if account_type.is_empty() {
        errors.push(ChartError::required("account type"));
    }
    errors.into_result(())?;

    Ok(PreparedAccount {
        name: name?,
        account_type: account_type.to_string(),
    })
}

/// Build the stored account once the type has been registered
pub(crate) fn build_account(
    id: AccountId,
    prepared: PreparedAccount,
    classifier: &Classifier,
    draft: &AccountDraft,
) -> ChartOfAccount {
    let group = classifier.resolve_parent(&prepared.account_type).to_string();
    ChartOfAccount {
        id,
        account_name: prepared.name,
        account_type: prepared.account_type,
        group,
        is_active: draft.is_active,
        mailing_name: draft
            .mailing_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
    }
}

/// Validate a ledger draft against the current ledger names and its group rules
///
/// `under` must be one of the enumerated ledger groups; callers normally
/// enforce this with a selection widget, the engine re-checks it.
pub(crate) fn prepare_ledger<'a>(
    validator: &UniquenessValidator,
    names: impl IntoIterator<Item = (LedgerId, &'a str)>,
    exclude: Option<LedgerId>,
    draft: &LedgerDraft,
) -> Result<(String, LedgerAssignment), ChartError> {
    let name = validator.validate(&draft.ledger_name, names, exclude);
    let under = draft.under.trim();
    let assignment = assignment::assign(draft);

    let mut errors = ValidationErrors::new();
    if let Err(e) = &name {
        errors.push(e.clone());
    }
    if !under.is_empty() && !is_ledger_group(under) {
        errors.push(ChartError::unresolved_group(under));
    }
    if let Err(e) = &assignment {
        errors.push(e.clone());
    }
    errors.into_result(())?;

    Ok((name?, assignment?))
}

/// Single-owner chart engine
///
/// Holds the classifier and both uniqueness validators, and writes accepted
/// records through its `ChartStore`. Use `SharedChartEngine` when several
/// threads need to share one chart.
pub struct ChartEngine<S = MemoryStore> {
    classifier: Classifier,
    account_names: UniquenessValidator,
    ledger_names: UniquenessValidator,
    store: S,
}

impl ChartEngine<MemoryStore> {
    /// Create an engine over an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for ChartEngine<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ChartStore> ChartEngine<S> {
    /// Create an engine over `store`
    ///
    /// Custom groups already recorded in the store are loaded into the
    /// registry in their original order.
    pub fn with_store(store: S) -> Self {
        let mut registry = CustomGroupRegistry::new();
        for group in store.custom_groups() {
            registry.register_if_absent(&group.name, Some(group.parent.as_str()));
        }

        ChartEngine {
            classifier: Classifier::with_registry(registry),
            account_names: UniquenessValidator::accounts(),
            ledger_names: UniquenessValidator::ledgers(),
            store,
        }
    }

    /// Parent group of an account type; see [`Classifier::resolve_parent`]
    pub fn resolve_parent(&self, type_name: &str) -> &str {
        self.classifier.resolve_parent(type_name)
    }

    /// Built-in then custom account types, optionally filtered
    pub fn list_assignable_types(&self, filter: Option<&str>) -> Vec<AssignableType> {
        self.classifier.list_assignable_types(filter)
    }

    /// Register a custom account type and record it in the store
    pub fn register_if_absent(
        &mut self,
        name: &str,
        chosen_parent: Option<&str>,
    ) -> Option<CustomAccountGroup> {
        let added = self.classifier.register_if_absent(name.trim(), chosen_parent)?;
        info!(name = %added.name, parent = %added.parent, "registered custom account group");
        self.store.save_custom_group(added.clone());
        Some(added)
    }

    /// Field activation decision for ledgers under `under`
    pub fn field_rules(&self, under: &str) -> FieldRules {
        assignment::field_rules(under.trim())
    }

    /// Check an account name without writing anything
    pub fn check_account_name(
        &self,
        name: &str,
        exclude: Option<AccountId>,
    ) -> Result<String, ChartError> {
        let names = self.store.account_names();
        self.account_names
            .validate(name, names.iter().map(|(id, n)| (*id, n.as_str())), exclude)
    }

    /// Check a ledger name without writing anything
    pub fn check_ledger_name(
        &self,
        name: &str,
        exclude: Option<LedgerId>,
    ) -> Result<String, ChartError> {
        let names = self.store.ledger_names();
        self.ledger_names
            .validate(name, names.iter().map(|(id, n)| (*id, n.as_str())), exclude)
    }

    /// Create an account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the name is blank or collides with another account
    /// - the account type is blank
    pub fn create_account(&mut self, draft: AccountDraft) -> Result<ChartOfAccount, ChartError> {
        self.write_account(None, &draft)
            .inspect(|a| info!(id = a.id, name = %a.account_name, group = %a.group, "account created"))
            .inspect_err(|e| warn!(name = %draft.account_name, error = %e, "account rejected"))
    }

    /// Edit an account in place
    ///
    /// Uniqueness is checked against every other account, so resubmitting
    /// the account's own name succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` for an unknown id, otherwise as `create_account`.
    pub fn update_account(
        &mut self,
        id: AccountId,
        draft: AccountDraft,
    ) -> Result<ChartOfAccount, ChartError> {
        if self.store.account(id).is_none() {
            return Err(ChartError::not_found(RecordKind::Account, id));
        }
        self.write_account(Some(id), &draft)
            .inspect(|a| info!(id = a.id, name = %a.account_name, "account updated"))
            .inspect_err(|e| warn!(id, error = %e, "account update rejected"))
    }

    fn write_account(
        &mut self,
        id: Option<AccountId>,
        draft: &AccountDraft,
    ) -> Result<ChartOfAccount, ChartError> {
        let names = self.store.account_names();
        let prepared = prepare_account(
            &self.account_names,
            names.iter().map(|(id, n)| (*id, n.as_str())),
            id,
            draft,
        )?;

        self.register_if_absent(&prepared.account_type, draft.parent.as_deref());

        let id = match id {
            Some(id) => id,
            None => self.store.next_account_id(),
        };
        let account = build_account(id, prepared, &self.classifier, draft);
        self.store.save_account(account.clone());
        Ok(account)
    }

    /// Create a ledger under one of the enumerated groups
    ///
    /// # Errors
    ///
    /// Returns every failure found: blank or duplicate name, blank or unknown
    /// `under`, and any violation of the group's rules.
    pub fn create_ledger(&mut self, draft: LedgerDraft) -> Result<Ledger, ChartError> {
        self.write_ledger(None, &draft)
            .inspect(|l| info!(id = l.id, name = %l.ledger_name, under = %l.under, "ledger created"))
            .inspect_err(|e| warn!(name = %draft.ledger_name, error = %e, "ledger rejected"))
    }

    /// Edit a ledger in place, re-running the rules of its (possibly new) group
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` for an unknown id, otherwise as `create_ledger`.
    pub fn update_ledger(&mut self, id: LedgerId, draft: LedgerDraft) -> Result<Ledger, ChartError> {
        if self.store.ledger(id).is_none() {
            return Err(ChartError::not_found(RecordKind::Ledger, id));
        }
        self.write_ledger(Some(id), &draft)
            .inspect(|l| info!(id = l.id, name = %l.ledger_name, "ledger updated"))
            .inspect_err(|e| warn!(id, error = %e, "ledger update rejected"))
    }

    fn write_ledger(
        &mut self,
        id: Option<LedgerId>,
        draft: &LedgerDraft,
    ) -> Result<Ledger, ChartError> {
        let names = self.store.ledger_names();
        let (name, assignment) = prepare_ledger(
            &self.ledger_names,
            names.iter().map(|(id, n)| (*id, n.as_str())),
            id,
            draft,
        )?;

        let id = match id {
            Some(id) => id,
            None => self.store.next_ledger_id(),
        };
        let ledger = assignment.into_ledger(id, name);
        self.store.save_ledger(ledger.clone());
        Ok(ledger)
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
