//! Ledger records and their group-dependent sub-records
//!
//! A `LedgerDraft` is what the caller submits; the assignment rules turn it
//! into a normalized `Ledger` in which every field that does not apply to the
//! target group has been dropped and every fixed field has been forced.

use super::group::{LimitKind, UseAs};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger identifier, assigned sequentially by the store
pub type LedgerId = u32;

/// Side of an opening balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceType {
    #[serde(rename = "Cr")]
    Credit,
    #[default]
    #[serde(rename = "Dr")]
    Debit,
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceType::Credit => write!(f, "Cr"),
            BalanceType::Debit => write!(f, "Dr"),
        }
    }
}

/// Bank account particulars, mandatory for ledgers under a bank group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub holder_name: String,
    pub account_number: String,

    /// 11-character bank routing code; optional, empty skips the format check
    pub routing_code: Option<String>,

    pub swift_code: Option<String>,
    pub bank_name: String,
    pub branch: Option<String>,
    pub opening_balance: Decimal,
    pub balance_type: BalanceType,
}

/// Postal particulars, mandatory for ledgers under a bank group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailingDetails {
    pub name: String,
    pub address: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
}

/// Credit limit of an overdraft or cash credit ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankLimit {
    pub kind: LimitKind,
    pub amount: Decimal,
}

/// Caller-supplied fields for creating or editing a ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDraft {
    pub ledger_name: String,
    pub under: String,

    /// Raw use-as label; only honoured for income groups
    pub use_as: Option<String>,

    pub bank_details: Option<BankDetails>,
    pub mailing_details: Option<MailingDetails>,
    pub od_limit: Option<Decimal>,
    pub occ_limit: Option<Decimal>,
    pub opening_balance: Option<Decimal>,
    pub opening_balance_type: Option<BalanceType>,
}

impl LedgerDraft {
    pub fn new(ledger_name: impl Into<String>, under: impl Into<String>) -> Self {
        Self {
            ledger_name: ledger_name.into(),
            under: under.into(),
            ..Self::default()
        }
    }

    pub fn with_use_as(mut self, use_as: impl Into<String>) -> Self {
        self.use_as = Some(use_as.into());
        self
    }

    pub fn with_bank_details(mut self, details: BankDetails) -> Self {
        self.bank_details = Some(details);
        self
    }

    pub fn with_mailing_details(mut self, details: MailingDetails) -> Self {
        self.mailing_details = Some(details);
        self
    }

    pub fn with_od_limit(mut self, limit: Decimal) -> Self {
        self.od_limit = Some(limit);
        self
    }

    pub fn with_occ_limit(mut self, limit: Decimal) -> Self {
        self.occ_limit = Some(limit);
        self
    }

    pub fn with_opening_balance(mut self, amount: Decimal, side: BalanceType) -> Self {
        self.opening_balance = Some(amount);
        self.opening_balance_type = Some(side);
        self
    }
}

/// A validated, normalized ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub id: LedgerId,
    pub ledger_name: String,
    pub under: String,
    pub use_as: Option<UseAs>,
    pub bank_details: Option<BankDetails>,
    pub mailing_details: Option<MailingDetails>,
    pub limit: Option<BankLimit>,
    pub opening_balance: Option<Decimal>,
    pub opening_balance_type: Option<BalanceType>,
}
