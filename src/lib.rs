//! Chart of Accounts Engine Library
//! # Overview
//!
//! This library classifies account types into a two-level taxonomy, gates
//! account and ledger creation on normalized name uniqueness, and applies
//! group-dependent rules to ledger fields.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (accounts, ledgers, groups, errors)
//! - [`cli`] - CLI arguments parsing and query dispatch
//! - [`core`] - Business logic components:
//!   - [`core::taxonomy`] - Built-in account types and their parents
//!   - [`core::classifier`] - Parent resolution with a custom group registry
//!   - [`core::uniqueness`] - Trimmed, case-folded name uniqueness
//!   - [`core::assignment`] - Ledger field rules per group
//!   - [`core::engine`] / [`core::shared`] - Create and edit orchestration
//! - [`io`] - CSV output for the query surface
//! - [`logging`] - Tracing subscriber setup
//!
//! # Ledger Group Rules
//!
//! - **Bank Accounts / Bank OD A/c / Bank OCC A/c**: bank and mailing details
//!   are required; OD and OCC accounts also need their credit limit
//! - **Income groups**: `use_as` is chosen from the income options
//! - **Expense groups**: `use_as` is always "Commission payable"
//! - **Current Liabilities**: `use_as` is always "Loan Disbursement"
//! - **Everything else**: no conditional fields
//!
//! # Example
//!
//! ```
//! use chart_engine::{AccountDraft, ChartEngine};
//!
//! let mut engine = ChartEngine::new();
//! let account = engine
//!     .create_account(AccountDraft::new("Cash A/c", "Cash-in-Hand"))
//!     .unwrap();
//! assert_eq!(account.group, "Current Assets");
//! assert!(engine
//!     .create_account(AccountDraft::new(" cash a/c ", "Cash-in-Hand"))
//!     .is_err());
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use core::{
    AssignableType, ChartEngine, ChartStore, Classifier, FieldRules, MemoryStore,
    SharedChartEngine, UniquenessValidator, UseAsRule,
};
pub use types::{
    AccountDraft, AccountId, BalanceType, BankDetails, ChartError, ChartOfAccount,
    CustomAccountGroup, GroupKind, Ledger, LedgerDraft, LedgerId, MailingDetails, UseAs,
};
