//! In-memory record storage
//!
//! `Table` keeps one kind of record keyed by id and hands out sequential ids.
//! `MemoryStore` bundles an account table, a ledger table and the custom
//! group log behind the `ChartStore` contract.

use crate::core::traits::{ChartStore, Record};
use crate::types::{AccountId, ChartOfAccount, CustomAccountGroup, Ledger, LedgerId};
use std::collections::BTreeMap;

/// Records of one kind, keyed by id
#[derive(Debug, Clone)]
pub struct Table<R> {
    records: BTreeMap<u32, R>,
    last_id: u32,
}

pub type AccountTable = Table<ChartOfAccount>;
pub type LedgerTable = Table<Ledger>;

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Reserve the next id; ids start at 1 and are never reused
    pub fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }

    /// Insert or replace the record with `record.id()`
    pub fn upsert(&mut self, record: R) {
        let id = record.id();
        self.last_id = self.last_id.max(id);
        self.records.insert(id, record);
    }

    pub fn get(&self, id: u32) -> Option<&R> {
        self.records.get(&id)
    }

    /// `(id, name)` pairs in id order
    pub fn names(&self) -> impl Iterator<Item = (u32, &str)> {
        self.records.values().map(|r| (r.id(), r.name()))
    }

    /// All records in id order
    pub fn all(&self) -> Vec<&R> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-process `ChartStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    accounts: AccountTable,
    ledgers: LedgerTable,
    custom_groups: Vec<CustomAccountGroup>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &AccountTable {
        &self.accounts
    }

    pub fn ledgers(&self) -> &LedgerTable {
        &self.ledgers
    }
}

impl ChartStore for MemoryStore {
    fn account_names(&self) -> Vec<(AccountId, String)> {
        self.accounts
            .names()
            .map(|(id, name)| (id, name.to_string()))
            .collect()
    }

    fn ledger_names(&self) -> Vec<(LedgerId, String)> {
        self.ledgers
            .names()
            .map(|(id, name)| (id, name.to_string()))
            .collect()
    }

    fn account(&self, id: AccountId) -> Option<ChartOfAccount> {
        self.accounts.get(id).cloned()
    }

    fn ledger(&self, id: LedgerId) -> Option<Ledger> {
        self.ledgers.get(id).cloned()
    }

    fn list_accounts(&self) -> Vec<ChartOfAccount> {
        self.accounts.all().into_iter().cloned().collect()
    }

    fn list_ledgers(&self) -> Vec<Ledger> {
        self.ledgers.all().into_iter().cloned().collect()
    }

    fn next_account_id(&mut self) -> AccountId {
        self.accounts.next_id()
    }

    fn next_ledger_id(&mut self) -> LedgerId {
        self.ledgers.next_id()
    }

    fn save_account(&mut self, account: ChartOfAccount) {
        self.accounts.upsert(account);
    }

    fn save_ledger(&mut self, ledger: Ledger) {
        self.ledgers.upsert(ledger);
    }

    fn save_custom_group(&mut self, group: CustomAccountGroup) {
        self.custom_groups.push(group);
    }

    fn custom_groups(&self) -> Vec<CustomAccountGroup> {
        self.custom_groups.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::group::{CASH_IN_HAND, CURRENT_ASSETS};

    fn account(id: AccountId, name: &str) -> ChartOfAccount {
        ChartOfAccount {
            id,
            account_name: name.to_string(),
            account_type: CASH_IN_HAND.to_string(),
            group: CURRENT_ASSETS.to_string(),
            is_active: true,
            mailing_name: None,
        }
    }

    #[test]
    fn test_table_ids_are_sequential() {
        let mut table = AccountTable::new();
        assert_eq!(table.next_id(), 1);
        assert_eq!(table.next_id(), 2);
    }

    #[test]
    fn test_table_upsert_replaces_by_id() {
        let mut table = AccountTable::new();
        table.upsert(account(1, "Cash"));
        table.upsert(account(1, "Main Cash"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).unwrap().account_name, "Main Cash");
    }

    #[test]
    fn test_table_upsert_advances_id_counter() {
        let mut table = AccountTable::new();
        table.upsert(account(10, "Imported"));
        assert_eq!(table.next_id(), 11);
    }

    #[test]
    fn test_table_names_in_id_order() {
        let mut table = AccountTable::new();
        table.upsert(account(2, "B"));
        table.upsert(account(1, "A"));

        let names: Vec<(u32, &str)> = table.names().collect();
        assert_eq!(names, vec![(1, "A"), (2, "B")]);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let id = store.next_account_id();
        store.save_account(account(id, "Cash"));
        store.save_custom_group(CustomAccountGroup {
            name: "Petty".to_string(),
            parent: CURRENT_ASSETS.to_string(),
        });

        assert_eq!(store.account_names(), vec![(1, "Cash".to_string())]);
        assert!(store.ledger_names().is_empty());
        assert_eq!(store.account(1).unwrap().account_name, "Cash");
        assert_eq!(store.list_accounts().len(), 1);
        assert!(store.list_ledgers().is_empty());
        assert_eq!(store.custom_groups().len(), 1);
    }
}
