//! Ledger assignment rules
//!
//! Given the group a ledger is registered under, decides which conditional
//! fields are offered, forced or mandatory, validates the draft against
//! those rules and produces a normalized ledger body.
//!
//! # Rules by group kind
//!
//! - **Income**: `use_as` is a free choice among the income options
//! - **Expense**: `use_as` is forced to "Commission payable"
//! - **Current liability**: `use_as` is forced to "Loan Disbursement"
//! - **Bank**: bank and mailing details are mandatory; overdraft and cash
//!   credit accounts also need their credit limit
//! - **Plain**: no conditional fields
//!
//! Fields that do not apply to the group are dropped rather than rejected.
//! Validation never stops at the first failure: every violation is collected
//! and the draft is rejected as a whole.

use crate::types::group::INCOME_USE_AS;
use crate::types::{
    BalanceType, BankAccountKind, BankDetails, BankLimit, ChartError, GroupKind, Ledger,
    LedgerDraft, LedgerId, LimitKind, MailingDetails, UseAs, ValidationErrors,
};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

static ROUTING_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("routing code pattern compiles"));

/// How the `use_as` field behaves for a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseAsRule {
    /// Field is not shown and never stored
    NotApplicable,
    /// User picks one of the options
    Choice(&'static [UseAs]),
    /// Field is read-only and always holds this value
    Fixed(UseAs),
}

/// Field activation decision for one ledger group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub kind: GroupKind,
    pub use_as: UseAsRule,
    pub bank_details: bool,
    pub mailing_details: bool,
    pub limit: Option<LimitKind>,
}

/// Which fields a ledger under `under` must, may or cannot carry
pub fn field_rules(under: &str) -> FieldRules {
    let kind = GroupKind::of(under);
    let use_as = match kind {
        GroupKind::Income => UseAsRule::Choice(&INCOME_USE_AS),
        GroupKind::Expense => UseAsRule::Fixed(UseAs::CommissionPayable),
        GroupKind::CurrentLiability => UseAsRule::Fixed(UseAs::LoanDisbursement),
        GroupKind::Bank(_) | GroupKind::Plain => UseAsRule::NotApplicable,
    };
    let (bank, limit) = match kind {
        GroupKind::Bank(bank_kind) => (true, bank_kind.limit_kind()),
        _ => (false, None),
    };

    FieldRules {
        kind,
        use_as,
        bank_details: bank,
        mailing_details: bank,
        limit,
    }
}

/// Check a bank routing code
///
/// The code is trimmed and upper-cased, then must be 4 letters, the digit
/// `0`, and 6 letters or digits.
///
/// # Returns
///
/// * `Ok(None)` - no code supplied (blank), nothing to check
/// * `Ok(Some(code))` - the normalized code
/// * `Err(ChartError::FormatViolation)` - the code does not match
pub fn validate_routing_code(code: &str) -> Result<Option<String>, ChartError> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Ok(None);
    }
    if !ROUTING_CODE.is_match(&normalized) {
        return Err(ChartError::format_violation(
            "routing code",
            code.trim(),
            "expected 4 letters, the digit 0, then 6 letters or digits",
        ));
    }
    Ok(Some(normalized))
}

/// Validated ledger body, before it is given an id and a name
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerAssignment {
    pub under: String,
    pub use_as: Option<UseAs>,
    pub bank_details: Option<BankDetails>,
    pub mailing_details: Option<MailingDetails>,
    pub limit: Option<BankLimit>,
    pub opening_balance: Option<Decimal>,
    pub opening_balance_type: Option<BalanceType>,
}

impl LedgerAssignment {
    pub fn into_ledger(self, id: LedgerId, ledger_name: String) -> Ledger {
        Ledger {
            id,
            ledger_name,
            under: self.under,
            use_as: self.use_as,
            bank_details: self.bank_details,
            mailing_details: self.mailing_details,
            limit: self.limit,
            opening_balance: self.opening_balance,
            opening_balance_type: self.opening_balance_type,
        }
    }
}

/// Apply the rules of `draft.under` to `draft`
///
/// Does not check the ledger name (that is the uniqueness validator's job)
/// nor whether `under` belongs to the enumerated groups.
///
/// # Errors
///
/// Returns the single failure, or `ChartError::Rejected` carrying all of them.
pub fn assign(draft: &LedgerDraft) -> Result<LedgerAssignment, ChartError> {
    let mut errors = ValidationErrors::new();

    let under = draft.under.trim();
    if under.is_empty() {
        errors.push(ChartError::required("under"));
    }

    let rules = field_rules(under);
    debug!(under, kind = %rules.kind, "applying ledger assignment rules");

    let use_as = match rules.use_as {
        UseAsRule::NotApplicable => None,
        UseAsRule::Fixed(value) => Some(value),
        UseAsRule::Choice(options) => chosen_use_as(draft.use_as.as_deref(), options, &mut errors),
    };

    let (bank_details, mailing_details, limit) = match rules.kind {
        GroupKind::Bank(bank_kind) => (
            check_bank_details(draft.bank_details.as_ref(), &mut errors),
            check_mailing_details(draft.mailing_details.as_ref(), &mut errors),
            check_limit(draft, bank_kind, &mut errors),
        ),
        _ => (None, None, None),
    };

    if let Some(amount) = draft.opening_balance {
        check_non_negative("opening balance", amount, &mut errors);
    }

    errors.into_result(LedgerAssignment {
        under: under.to_string(),
        use_as,
        bank_details,
        mailing_details,
        limit,
        opening_balance: draft.opening_balance,
        opening_balance_type: draft
            .opening_balance
            .map(|_| draft.opening_balance_type.unwrap_or_default()),
    })
}

fn chosen_use_as(
    raw: Option<&str>,
    options: &[UseAs],
    errors: &mut ValidationErrors,
) -> Option<UseAs> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Some(UseAs::NotApplicable),
        Some(raw) => raw,
    };

    match raw.parse::<UseAs>() {
        Ok(value) if options.contains(&value) => Some(value),
        _ => {
            errors.push(ChartError::format_violation(
                "use as",
                raw,
                "not one of the options for this group",
            ));
            None
        }
    }
}

fn check_bank_details(
    details: Option<&BankDetails>,
    errors: &mut ValidationErrors,
) -> Option<BankDetails> {
    let Some(details) = details else {
        errors.push(ChartError::required("bank details"));
        return None;
    };

    let holder_name = required_text("account holder name", &details.holder_name, errors);
    let account_number = required_text("account number", &details.account_number, errors);
    let bank_name = required_text("bank name", &details.bank_name, errors);

    let routing_code = match details.routing_code.as_deref() {
        Some(code) => validate_routing_code(code).unwrap_or_else(|e| {
            errors.push(e);
            None
        }),
        None => None,
    };

    check_non_negative("bank opening balance", details.opening_balance, errors);

    Some(BankDetails {
        holder_name,
        account_number,
        routing_code,
        swift_code: optional_text(details.swift_code.as_deref()),
        bank_name,
        branch: optional_text(details.branch.as_deref()),
        opening_balance: details.opening_balance,
        balance_type: details.balance_type,
    })
}

fn check_mailing_details(
    details: Option<&MailingDetails>,
    errors: &mut ValidationErrors,
) -> Option<MailingDetails> {
    let Some(details) = details else {
        errors.push(ChartError::required("mailing details"));
        return None;
    };

    Some(MailingDetails {
        name: required_text("mailing name", &details.name, errors),
        address: optional_text(details.address.as_deref()),
        state: optional_text(details.state.as_deref()),
        country: optional_text(details.country.as_deref()),
        pincode: optional_text(details.pincode.as_deref()),
    })
}

fn check_limit(
    draft: &LedgerDraft,
    bank_kind: BankAccountKind,
    errors: &mut ValidationErrors,
) -> Option<BankLimit> {
    let kind = bank_kind.limit_kind()?;
    let supplied = match kind {
        LimitKind::Od => draft.od_limit,
        LimitKind::Occ => draft.occ_limit,
    };

    match supplied {
        Some(amount) => {
            check_non_negative(kind.field(), amount, errors);
            Some(BankLimit { kind, amount })
        }
        None => {
            errors.push(ChartError::required(&kind.to_string()));
            None
        }
    }
}

fn check_non_negative(field: &str, amount: Decimal, errors: &mut ValidationErrors) {
    if amount < Decimal::ZERO {
        errors.push(ChartError::format_violation(
            field,
            &amount.to_string(),
            "must not be negative",
        ));
    }
}

fn required_text(field: &str, value: &str, errors: &mut ValidationErrors) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(ChartError::required(field));
    }
    trimmed.to_string()
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::group::*;
    use rstest::rstest;

    fn bank_details(routing_code: Option<&str>) -> BankDetails {
        BankDetails {
            holder_name: "Sunrise Co-op Society".to_string(),
            account_number: "001234567890".to_string(),
            routing_code: routing_code.map(str::to_string),
            swift_code: Some("HDFCINBB".to_string()),
            bank_name: "HDFC Bank".to_string(),
            branch: Some("Fort".to_string()),
            opening_balance: Decimal::new(250000, 2),
            balance_type: BalanceType::Debit,
        }
    }

    fn mailing() -> MailingDetails {
        MailingDetails {
            name: "Sunrise Co-op Society".to_string(),
            address: Some("12 Hill Road".to_string()),
            state: Some("Maharashtra".to_string()),
            country: Some("India".to_string()),
            pincode: Some("400001".to_string()),
        }
    }

    fn od_draft(routing_code: Option<&str>) -> LedgerDraft {
        LedgerDraft::new("HDFC OD", BANK_OD)
            .with_bank_details(bank_details(routing_code))
            .with_mailing_details(mailing())
            .with_od_limit(Decimal::new(500000, 0))
    }

    #[rstest]
    #[case::income(DIRECT_INCOMES, UseAsRule::Choice(&INCOME_USE_AS), false, None)]
    #[case::expense(EXPENSES_INDIRECT, UseAsRule::Fixed(UseAs::CommissionPayable), false, None)]
    #[case::liability(CURRENT_LIABILITIES, UseAsRule::Fixed(UseAs::LoanDisbursement), false, None)]
    #[case::bank(BANK_ACCOUNTS, UseAsRule::NotApplicable, true, None)]
    #[case::bank_od(BANK_OD, UseAsRule::NotApplicable, true, Some(LimitKind::Od))]
    #[case::bank_occ(BANK_OCC, UseAsRule::NotApplicable, true, Some(LimitKind::Occ))]
    #[case::cash(CASH_IN_HAND, UseAsRule::NotApplicable, false, None)]
    fn test_field_rules(
        #[case] under: &str,
        #[case] use_as: UseAsRule,
        #[case] bank: bool,
        #[case] limit: Option<LimitKind>,
    ) {
        let rules = field_rules(under);
        assert_eq!(rules.use_as, use_as);
        assert_eq!(rules.bank_details, bank);
        assert_eq!(rules.mailing_details, bank);
        assert_eq!(rules.limit, limit);
    }

    #[rstest]
    #[case::valid("AAAA0123456", Some("AAAA0123456"))]
    #[case::lowercase("hdfc0001234", Some("HDFC0001234"))]
    #[case::padded("  SBIN0ABC123 ", Some("SBIN0ABC123"))]
    #[case::empty("", None)]
    #[case::blank("   ", None)]
    fn test_validate_routing_code_ok(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            validate_routing_code(code),
            Ok(expected.map(str::to_string))
        );
    }

    #[rstest]
    #[case::too_short("AAAA012345")]
    #[case::too_long("AAAA01234567")]
    #[case::fifth_not_zero("AAAA1123456")]
    #[case::digit_in_prefix("AAA10123456")]
    #[case::symbol("AAAA0-23456")]
    fn test_validate_routing_code_rejects(#[case] code: &str) {
        let err = validate_routing_code(code).unwrap_err();
        assert!(matches!(err, ChartError::FormatViolation { ref field, .. } if field == "routing code"));
    }

    #[test]
    fn test_assign_bank_od_with_valid_routing_code() {
        let assignment = assign(&od_draft(Some("AAAA0123456"))).unwrap();

        assert_eq!(assignment.under, BANK_OD);
        assert_eq!(assignment.use_as, None);
        assert_eq!(
            assignment.bank_details.unwrap().routing_code.as_deref(),
            Some("AAAA0123456")
        );
        assert_eq!(
            assignment.limit,
            Some(BankLimit {
                kind: LimitKind::Od,
                amount: Decimal::new(500000, 0),
            })
        );
    }

    #[test]
    fn test_assign_bank_od_with_short_routing_code_fails() {
        let err = assign(&od_draft(Some("AAAA012345"))).unwrap_err();
        assert!(matches!(err, ChartError::FormatViolation { .. }));
    }

    #[rstest]
    #[case::omitted(None)]
    #[case::empty(Some(""))]
    fn test_assign_bank_od_without_routing_code(#[case] code: Option<&str>) {
        let assignment = assign(&od_draft(code)).unwrap();
        assert_eq!(assignment.bank_details.unwrap().routing_code, None);
    }

    #[test]
    fn test_assign_bank_requires_details() {
        let err = assign(&LedgerDraft::new("HDFC Current", BANK_ACCOUNTS)).unwrap_err();

        let messages: Vec<String> = err.kinds().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec!["bank details is required", "mailing details is required"]
        );
    }

    #[test]
    fn test_assign_od_requires_od_limit() {
        let mut draft = od_draft(None);
        draft.od_limit = None;
        draft.occ_limit = Some(Decimal::new(100, 0));

        let err = assign(&draft).unwrap_err();
        assert_eq!(err, ChartError::required("OD limit"));
    }

    #[test]
    fn test_assign_occ_requires_occ_limit() {
        let draft = LedgerDraft::new("SBI OCC", BANK_OCC)
            .with_bank_details(bank_details(None))
            .with_mailing_details(mailing())
            .with_od_limit(Decimal::new(100, 0));

        let err = assign(&draft).unwrap_err();
        assert_eq!(err, ChartError::required("OCC limit"));
    }

    #[test]
    fn test_assign_occ_keeps_only_occ_limit() {
        let draft = LedgerDraft::new("SBI OCC", BANK_OCC)
            .with_bank_details(bank_details(None))
            .with_mailing_details(mailing())
            .with_od_limit(Decimal::new(1, 0))
            .with_occ_limit(Decimal::new(750000, 0));

        let assignment = assign(&draft).unwrap();
        assert_eq!(
            assignment.limit,
            Some(BankLimit {
                kind: LimitKind::Occ,
                amount: Decimal::new(750000, 0),
            })
        );
    }

    #[test]
    fn test_assign_collects_every_bank_failure() {
        let mut details = bank_details(Some("BAD"));
        details.holder_name = "  ".to_string();
        details.bank_name = String::new();
        let mut mail = mailing();
        mail.name = String::new();
        let draft = LedgerDraft::new("Broken", BANK_OD)
            .with_bank_details(details)
            .with_mailing_details(mail)
            .with_od_limit(Decimal::new(-5, 0));

        let err = assign(&draft).unwrap_err();

        assert!(matches!(err, ChartError::Rejected(_)));
        assert_eq!(err.kinds().len(), 5);
    }

    #[test]
    fn test_assign_bank_trims_text_fields() {
        let mut details = bank_details(None);
        details.holder_name = "  Sunrise  ".to_string();
        details.branch = Some("   ".to_string());
        let draft = LedgerDraft::new("HDFC Current", BANK_ACCOUNTS)
            .with_bank_details(details)
            .with_mailing_details(mailing());

        let bank = assign(&draft).unwrap().bank_details.unwrap();
        assert_eq!(bank.holder_name, "Sunrise");
        assert_eq!(bank.branch, None);
    }

    #[rstest]
    #[case::direct(DIRECT_EXPENSES)]
    #[case::expenses_direct(EXPENSES_DIRECT)]
    #[case::expenses_indirect(EXPENSES_INDIRECT)]
    #[case::indirect(INDIRECT_EXPENSES)]
    fn test_assign_expense_forces_commission_payable(#[case] under: &str) {
        let draft = LedgerDraft::new("Agent Commission", under).with_use_as("Fixed Deposit");
        let assignment = assign(&draft).unwrap();
        assert_eq!(assignment.use_as, Some(UseAs::CommissionPayable));
    }

    #[test]
    fn test_assign_current_liability_forces_loan_disbursement() {
        let draft = LedgerDraft::new("Loan Payable", CURRENT_LIABILITIES).with_use_as("garbage");
        let assignment = assign(&draft).unwrap();
        assert_eq!(assignment.use_as, Some(UseAs::LoanDisbursement));
    }

    #[rstest]
    #[case::omitted(None, UseAs::NotApplicable)]
    #[case::blank(Some(" "), UseAs::NotApplicable)]
    #[case::chosen(Some("Loan Misc. Charges"), UseAs::LoanMiscCharges)]
    #[case::chosen_any_case(Some("recurring deposit"), UseAs::RecurringDeposit)]
    fn test_assign_income_use_as_choice(#[case] raw: Option<&str>, #[case] expected: UseAs) {
        let mut draft = LedgerDraft::new("Processing Fees", INCOME_DIRECT);
        draft.use_as = raw.map(str::to_string);

        assert_eq!(assign(&draft).unwrap().use_as, Some(expected));
    }

    #[rstest]
    #[case::unknown("Gold Loan")]
    #[case::forced_value_not_offered("Commission payable")]
    fn test_assign_income_rejects_unlisted_use_as(#[case] raw: &str) {
        let draft = LedgerDraft::new("Processing Fees", INDIRECT_INCOMES).with_use_as(raw);
        let err = assign(&draft).unwrap_err();
        assert!(matches!(err, ChartError::FormatViolation { ref field, .. } if field == "use as"));
    }

    #[test]
    fn test_assign_plain_group_drops_conditional_fields() {
        let draft = LedgerDraft::new("Main Cash", CASH_IN_HAND)
            .with_use_as("Fixed Deposit")
            .with_bank_details(bank_details(Some("not even close")))
            .with_mailing_details(mailing())
            .with_od_limit(Decimal::new(10, 0));

        let assignment = assign(&draft).unwrap();

        assert_eq!(assignment.use_as, None);
        assert_eq!(assignment.bank_details, None);
        assert_eq!(assignment.mailing_details, None);
        assert_eq!(assignment.limit, None);
    }

    #[test]
    fn test_assign_requires_under() {
        let err = assign(&LedgerDraft::new("Orphan", "  ")).unwrap_err();
        assert_eq!(err, ChartError::required("under"));
    }

    #[test]
    fn test_assign_opening_balance_defaults_to_debit() {
        let mut draft = LedgerDraft::new("Main Cash", CASH_IN_HAND);
        draft.opening_balance = Some(Decimal::new(1000, 0));

        let assignment = assign(&draft).unwrap();
        assert_eq!(assignment.opening_balance_type, Some(BalanceType::Debit));
    }

    #[test]
    fn test_assign_rejects_negative_opening_balance() {
        let draft = LedgerDraft::new("Main Cash", CASH_IN_HAND)
            .with_opening_balance(Decimal::new(-1, 0), BalanceType::Credit);
        assert!(matches!(
            assign(&draft),
            Err(ChartError::FormatViolation { .. })
        ));
    }
}
