//! Chart of accounts records
//!
//! This module defines the account entity, the draft a caller submits to
//! create or edit one, and the custom account group record that is created
//! the first time an account uses a previously unseen type name.

use serde::{Deserialize, Serialize};

/// Account identifier, assigned sequentially by the store
pub type AccountId = u32;

/// An account in the chart of accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOfAccount {
    pub id: AccountId,

    /// Display name, trimmed; unique across accounts ignoring case
    pub account_name: String,

    /// Built-in or custom account type, trimmed
    pub account_type: String,

    /// Parent group `account_type` resolved to when the record was written
    pub group: String,

    pub is_active: bool,

    pub mailing_name: Option<String>,
}

/// Caller-supplied fields for creating or editing an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub account_name: String,
    pub account_type: String,

    /// Parent selected in the UI; only consulted when `account_type` is new
    pub parent: Option<String>,

    pub is_active: bool,
    pub mailing_name: Option<String>,
}

impl AccountDraft {
    /// Draft for an active account with no parent selection or mailing name
    pub fn new(account_name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            account_type: account_type.into(),
            parent: None,
            is_active: true,
            mailing_name: None,
        }
    }

    /// Set the parent group used if the account type has to be registered
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_mailing_name(mut self, mailing_name: impl Into<String>) -> Self {
        self.mailing_name = Some(mailing_name.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// A user-declared account type and the group it sits under
///
/// Created once, on first use of a novel type name, and never reparented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAccountGroup {
    pub name: String,
    pub parent: String,
}
