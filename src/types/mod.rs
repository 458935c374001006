//! Types module
//!
//! Contains the data model shared by every engine component:
//! - `group`: group names, `GroupKind` and `UseAs`
//! - `account`: chart of accounts records and custom account groups
//! - `ledger`: ledger drafts, normalized ledgers and their sub-records
//! - `error`: error types for the chart engine

pub mod account;
pub mod error;
pub mod group;
pub mod ledger;

pub use account::{AccountDraft, AccountId, ChartOfAccount, CustomAccountGroup};
pub use error::{ChartError, RecordKind, ValidationErrors};
pub use group::{BankAccountKind, GroupKind, LimitKind, UseAs};
pub use ledger::{
    BalanceType, BankDetails, BankLimit, Ledger, LedgerDraft, LedgerId, MailingDetails,
};
