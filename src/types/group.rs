//! Account group names and group-dependent tags
//!
//! This module holds the vocabulary shared by the classifier and the ledger
//! assignment rules:
//! - primary group and account type names used across the taxonomy
//! - the closed set of groups a ledger may be registered under
//! - `GroupKind`, the tag that drives conditional field activation
//! - `UseAs`, the functional role a ledger can carry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root of the hierarchy and the fallback parent for unknown account types
pub const PRIMARY: &str = "Primary";

// Primary groups
pub const CAPITAL_ACCOUNT: &str = "Capital Account";
pub const CURRENT_ASSETS: &str = "Current Assets";
pub const CURRENT_LIABILITIES: &str = "Current Liabilities";
pub const FIXED_ASSETS: &str = "Fixed Assets";
pub const INVESTMENTS: &str = "Investments";
pub const LOANS_LIABILITY: &str = "Loans (Liability)";
pub const DIRECT_INCOMES: &str = "Direct Incomes";
pub const INDIRECT_INCOMES: &str = "Indirect Incomes";
pub const DIRECT_EXPENSES: &str = "Direct Expenses";
pub const INDIRECT_EXPENSES: &str = "Indirect Expenses";
pub const SUNDRY_DEBTORS: &str = "Sundry Debtors";
pub const SUNDRY_CREDITORS: &str = "Sundry Creditors";
pub const SUSPENSE: &str = "Suspense A/c";
pub const BRANCH_DIVISIONS: &str = "Branch / Divisions";

// Account types with group-dependent ledger rules
pub const BANK_ACCOUNTS: &str = "Bank Accounts";
pub const BANK_OCC: &str = "Bank OCC A/c";
pub const BANK_OD: &str = "Bank OD A/c";
pub const CASH_IN_HAND: &str = "Cash-in-Hand";
pub const INCOME_DIRECT: &str = "Income (Direct)";
pub const INCOME_INDIRECT: &str = "Income (Indirect)";
pub const EXPENSES_DIRECT: &str = "Expenses (Direct)";
pub const EXPENSES_INDIRECT: &str = "Expenses (Indirect)";

/// Groups whose ledgers pick `UseAs` freely from the income options
pub const INCOME_GROUPS: [&str; 4] = [DIRECT_INCOMES, INCOME_DIRECT, INCOME_INDIRECT, INDIRECT_INCOMES];

/// Groups whose ledgers are always tagged "Commission payable"
pub const EXPENSE_GROUPS: [&str; 4] = [
    DIRECT_EXPENSES,
    EXPENSES_DIRECT,
    EXPENSES_INDIRECT,
    INDIRECT_EXPENSES,
];

/// The closed set of groups a ledger can be registered under
///
/// Unlike account types this list is never extended at runtime.
pub const LEDGER_GROUPS: [&str; 31] = [
    BANK_ACCOUNTS,
    BANK_OCC,
    BANK_OD,
    BRANCH_DIVISIONS,
    CAPITAL_ACCOUNT,
    CASH_IN_HAND,
    CURRENT_ASSETS,
    CURRENT_LIABILITIES,
    "Deposits (Asset)",
    DIRECT_EXPENSES,
    DIRECT_INCOMES,
    "Duties & Taxes",
    EXPENSES_DIRECT,
    EXPENSES_INDIRECT,
    FIXED_ASSETS,
    INCOME_DIRECT,
    INCOME_INDIRECT,
    INDIRECT_EXPENSES,
    INDIRECT_INCOMES,
    INVESTMENTS,
    "Loans & Advances (Asset)",
    LOANS_LIABILITY,
    "Provisions",
    "Purchase Accounts",
    "Reserves & Surplus",
    "Sales Accounts",
    "Secured Loans",
    "Stock-in-Hand",
    SUNDRY_CREDITORS,
    SUNDRY_DEBTORS,
    "Unsecured Loans",
];

/// Returns true if `name` is one of the enumerated ledger groups (exact match)
pub fn is_ledger_group(name: &str) -> bool {
    LEDGER_GROUPS.contains(&name)
}

/// Which flavour of bank account a bank group represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankAccountKind {
    /// Plain bank account, no credit facility
    Current,
    /// Overdraft account; carries an OD limit
    Overdraft,
    /// Open cash credit account; carries an OCC limit
    CashCredit,
}

impl BankAccountKind {
    /// The credit limit field this kind of account requires, if any
    pub fn limit_kind(self) -> Option<LimitKind> {
        match self {
            BankAccountKind::Current => None,
            BankAccountKind::Overdraft => Some(LimitKind::Od),
            BankAccountKind::CashCredit => Some(LimitKind::Occ),
        }
    }
}

/// Credit limit carried by overdraft and cash credit ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitKind {
    Od,
    Occ,
}

impl LimitKind {
    /// Draft field name, used in validation errors
    pub fn field(self) -> &'static str {
        match self {
            LimitKind::Od => "od_limit",
            LimitKind::Occ => "occ_limit",
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Od => write!(f, "OD limit"),
            LimitKind::Occ => write!(f, "OCC limit"),
        }
    }
}

/// Group-dependent rule family for a ledger's `under` value
///
/// Every enumerated group maps to exactly one kind; the assignment rules
/// dispatch on this tag rather than on raw name sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Bank(BankAccountKind),
    Income,
    Expense,
    CurrentLiability,
    Plain,
}

impl GroupKind {
    /// Classify a ledger group name (exact match)
    pub fn of(under: &str) -> Self {
        match under {
            BANK_ACCOUNTS => GroupKind::Bank(BankAccountKind::Current),
            BANK_OD => GroupKind::Bank(BankAccountKind::Overdraft),
            BANK_OCC => GroupKind::Bank(BankAccountKind::CashCredit),
            CURRENT_LIABILITIES => GroupKind::CurrentLiability,
            name if INCOME_GROUPS.contains(&name) => GroupKind::Income,
            name if EXPENSE_GROUPS.contains(&name) => GroupKind::Expense,
            _ => GroupKind::Plain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Bank(BankAccountKind::Current) => "bank",
            GroupKind::Bank(BankAccountKind::Overdraft) => "bank-od",
            GroupKind::Bank(BankAccountKind::CashCredit) => "bank-occ",
            GroupKind::Income => "income",
            GroupKind::Expense => "expense",
            GroupKind::CurrentLiability => "current-liability",
            GroupKind::Plain => "plain",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Functional role tag carried by income, expense and current liability ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseAs {
    #[serde(rename = "Not Applicable")]
    NotApplicable,
    #[serde(rename = "Loan Application")]
    LoanApplication,
    #[serde(rename = "Loan Misc. Charges")]
    LoanMiscCharges,
    #[serde(rename = "Fixed Deposit")]
    FixedDeposit,
    #[serde(rename = "Member Registration")]
    MemberRegistration,
    #[serde(rename = "Recurring Deposit")]
    RecurringDeposit,
    #[serde(rename = "Commission payable")]
    CommissionPayable,
    #[serde(rename = "Loan Disbursement")]
    LoanDisbursement,
}

/// Options offered to the user for income-group ledgers, in display order
pub const INCOME_USE_AS: [UseAs; 6] = [
    UseAs::NotApplicable,
    UseAs::LoanApplication,
    UseAs::LoanMiscCharges,
    UseAs::FixedDeposit,
    UseAs::MemberRegistration,
    UseAs::RecurringDeposit,
];

const ALL_USE_AS: [UseAs; 8] = [
    UseAs::NotApplicable,
    UseAs::LoanApplication,
    UseAs::LoanMiscCharges,
    UseAs::FixedDeposit,
    UseAs::MemberRegistration,
    UseAs::RecurringDeposit,
    UseAs::CommissionPayable,
    UseAs::LoanDisbursement,
];

impl UseAs {
    pub fn as_str(&self) -> &'static str {
        match self {
            UseAs::NotApplicable => "Not Applicable",
            UseAs::LoanApplication => "Loan Application",
            UseAs::LoanMiscCharges => "Loan Misc. Charges",
            UseAs::FixedDeposit => "Fixed Deposit",
            UseAs::MemberRegistration => "Member Registration",
            UseAs::RecurringDeposit => "Recurring Deposit",
            UseAs::CommissionPayable => "Commission payable",
            UseAs::LoanDisbursement => "Loan Disbursement",
        }
    }
}

impl fmt::Display for UseAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseAs {
    type Err = String;

    /// Parses a display label; surrounding whitespace and case are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_USE_AS
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown use-as value '{}'", wanted))
    }
}
