//! Built-in taxonomy table
//!
//! Static mapping from every built-in account type to its parent primary
//! group. The table is fixed at compile time and read-only; absence of an
//! entry is a valid result, not an error.
//!
//! The hierarchy is exactly two levels deep: primary groups have no parent
//! of their own, and every account type maps to exactly one primary group.

use crate::types::group::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in account types in canonical display order
pub const BUILTIN_TYPES: [(&str, &str); 33] = [
    // Assets
    (BANK_ACCOUNTS, CURRENT_ASSETS),
    (CASH_IN_HAND, CURRENT_ASSETS),
    ("Deposits (Asset)", CURRENT_ASSETS),
    ("Loans & Advances (Asset)", CURRENT_ASSETS),
    ("Stock-in-Hand", CURRENT_ASSETS),
    ("Land & Building", FIXED_ASSETS),
    ("Plant & Machinery", FIXED_ASSETS),
    ("Investments in Shares", INVESTMENTS),
    ("Fixed Deposits", INVESTMENTS),
    // Liabilities
    (BANK_OCC, LOANS_LIABILITY),
    (BANK_OD, LOANS_LIABILITY),
    ("Secured Loans", LOANS_LIABILITY),
    ("Unsecured Loans", LOANS_LIABILITY),
    ("Duties & Taxes", CURRENT_LIABILITIES),
    ("Provisions", CURRENT_LIABILITIES),
    ("Member Deposits", CURRENT_LIABILITIES),
    ("Share Capital", CAPITAL_ACCOUNT),
    ("Reserves & Surplus", CAPITAL_ACCOUNT),
    // Income
    (INCOME_DIRECT, DIRECT_INCOMES),
    (INCOME_INDIRECT, INDIRECT_INCOMES),
    ("Sales Accounts", DIRECT_INCOMES),
    ("Interest Received", INDIRECT_INCOMES),
    // Expense
    (EXPENSES_DIRECT, DIRECT_EXPENSES),
    (EXPENSES_INDIRECT, INDIRECT_EXPENSES),
    ("Purchase Accounts", DIRECT_EXPENSES),
    ("Interest Paid", INDIRECT_EXPENSES),
    ("Commission Paid", INDIRECT_EXPENSES),
    // Roles
    ("member", SUNDRY_DEBTORS),
    ("salesman", SUNDRY_CREDITORS),
    ("agent", SUNDRY_CREDITORS),
    ("broker", SUNDRY_CREDITORS),
    ("reference", SUNDRY_DEBTORS),
    ("guarantor", SUNDRY_DEBTORS),
];

/// Roots of the hierarchy
pub const PRIMARY_GROUPS: [&str; 14] = [
    CAPITAL_ACCOUNT,
    CURRENT_ASSETS,
    CURRENT_LIABILITIES,
    FIXED_ASSETS,
    INVESTMENTS,
    LOANS_LIABILITY,
    DIRECT_INCOMES,
    INDIRECT_INCOMES,
    DIRECT_EXPENSES,
    INDIRECT_EXPENSES,
    SUNDRY_DEBTORS,
    SUNDRY_CREDITORS,
    SUSPENSE,
    BRANCH_DIVISIONS,
];

static INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BUILTIN_TYPES.iter().copied().collect());

/// Parent primary group of a built-in account type (exact match)
pub fn parent_of(type_name: &str) -> Option<&'static str> {
    INDEX.get(type_name).copied()
}

/// Returns true if `type_name` is a built-in account type
pub fn is_builtin(type_name: &str) -> bool {
    INDEX.contains_key(type_name)
}

/// Returns true if `name` is a root of the hierarchy
pub fn is_primary_group(name: &str) -> bool {
    PRIMARY_GROUPS.contains(&name)
}
