//! Mandatory-field and value-grammar validation.
//!
//! Validation does not short-circuit: every mandatory tag and every format
//! rule is evaluated and the full issue set is returned together, so one
//! conversion attempt reports every defect at once. Amount positivity is
//! checked here syntactically (a nonzero digit must be present) even
//! though decimal parsing happens later in the normalizer.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use mtmx_model::{FieldIssue, MessageType, ValidationOutcome};
use mtmx_parse::FieldSet;

use crate::tables::{has_transaction_blocks, mandatory_tags};

static RE_DATE_CCY_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}[A-Z]{3}[\d,.]+$").expect("static regex"));
static RE_CCY_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[\d,.]+$").expect("static regex"));
static RE_BALANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[CD]\d{6}[A-Z]{3}[\d,.]+$").expect("static regex"));
static RE_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d,.]+$").expect("static regex"));

/// Maximum length of an MT reference field (`16x`).
const MAX_REFERENCE_LEN: usize = 16;

const CHARGE_CODES: &[&str] = &["OUR", "BEN", "SHA"];

/// Validate a field set against the mandatory table and value grammars of
/// `message_type`.
pub fn validate(fields: &FieldSet, message_type: MessageType) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    for mandatory in mandatory_tags(message_type) {
        if !fields.has_any(mandatory.options) {
            outcome.push(FieldIssue::missing(mandatory.label));
        }
    }

    if has_transaction_blocks(message_type) {
        check_transaction_blocks(fields, message_type, &mut outcome);
    }

    check_value_grammars(fields, message_type, &mut outcome);

    debug!(
        message_type = %message_type,
        errors = outcome.errors.len(),
        warnings = outcome.warnings.len(),
        "validation finished"
    );
    outcome
}

/// MT102/MT101 repeating 21/32B(/59) sequence consistency.
fn check_transaction_blocks(
    fields: &FieldSet,
    message_type: MessageType,
    outcome: &mut ValidationOutcome,
) {
    let transactions = fields.count("21");
    if transactions == 0 {
        outcome.push(FieldIssue::missing("21"));
        return;
    }
    if fields.count("32B") != transactions {
        outcome.push(FieldIssue::format(
            "32B",
            format!(
                "expected one 32B per transaction block ({} block(s), {} 32B field(s))",
                transactions,
                fields.count("32B")
            ),
        ));
    }
    if message_type == MessageType::Mt102 && fields.count("59") != transactions {
        outcome.push(FieldIssue::format(
            "59",
            format!(
                "expected one beneficiary per transaction block ({} block(s), {} 59 field(s))",
                transactions,
                fields.count("59")
            ),
        ));
    }
}

fn check_value_grammars(
    fields: &FieldSet,
    message_type: MessageType,
    outcome: &mut ValidationOutcome,
) {
    for value in fields.all("32A") {
        check_date_ccy_amount("32A", value, outcome);
    }
    for value in fields.all("32B") {
        check_ccy_amount("32B", value, false, outcome);
    }
    for value in fields.all("30") {
        check_date6("30", value, outcome);
    }
    for value in fields.all("71A") {
        if !CHARGE_CODES.contains(&value.trim()) {
            outcome.push(FieldIssue::code("71A", value.trim()));
        }
    }
    for tag in ["20", "21"] {
        for value in fields.all(tag) {
            if value.is_empty() {
                outcome.push(FieldIssue::format(tag, "reference is empty"));
            } else if value.len() > MAX_REFERENCE_LEN {
                outcome.push(
                    FieldIssue::format(tag, "reference exceeds 16 characters").warning(),
                );
            }
        }
    }

    // Optional fields: present-but-malformed is a warning, not an error.
    for value in fields.all("33B") {
        check_ccy_amount("33B", value, true, outcome);
    }
    for tag in ["71F", "71G"] {
        for value in fields.all(tag) {
            check_ccy_amount(tag, value, true, outcome);
        }
    }
    for value in fields.all("36") {
        if !RE_RATE.is_match(value.trim()) {
            outcome.push(FieldIssue::format("36", "exchange rate is not numeric").warning());
        }
    }

    if matches!(message_type, MessageType::Mt940 | MessageType::Mt950) {
        for tag in ["60F", "62F"] {
            for value in fields.all(tag) {
                check_balance(tag, value, outcome);
            }
        }
        for value in fields.all("61") {
            let first_line = value.lines().next().unwrap_or("").as_bytes();
            if first_line.len() < 8 || !first_line[..6].iter().all(u8::is_ascii_digit) {
                outcome.push(
                    FieldIssue::format("61", "statement line does not start with YYMMDD").warning(),
                );
            }
        }
    }
}

/// `32A` grammar: YYMMDD date, 3-letter currency, decimal-comma amount.
fn check_date_ccy_amount(tag: &str, value: &str, outcome: &mut ValidationOutcome) {
    let trimmed = value.trim();
    if !RE_DATE_CCY_AMOUNT.is_match(trimmed) {
        outcome.push(FieldIssue::format(
            tag,
            "expected YYMMDD date, 3-letter currency and amount",
        ));
        return;
    }
    if !valid_date6(&trimmed[..6]) {
        outcome.push(FieldIssue::format(tag, "date is not a valid calendar date"));
    }
    check_amount_digits(tag, &trimmed[9..], false, outcome);
}

/// `32B`-style grammar: 3-letter currency followed by an amount.
fn check_ccy_amount(tag: &str, value: &str, optional: bool, outcome: &mut ValidationOutcome) {
    let trimmed = value.trim();
    if !RE_CCY_AMOUNT.is_match(trimmed) {
        let issue = FieldIssue::format(tag, "expected 3-letter currency and amount");
        outcome.push(if optional { issue.warning() } else { issue });
        return;
    }
    check_amount_digits(tag, &trimmed[3..], optional, outcome);
}

/// Amount must be a single decimal-comma number with a nonzero digit.
fn check_amount_digits(tag: &str, amount: &str, optional: bool, outcome: &mut ValidationOutcome) {
    let separators = amount.bytes().filter(|b| *b == b',' || *b == b'.').count();
    if separators > 1 {
        let issue = FieldIssue::format(tag, "amount has more than one decimal separator");
        outcome.push(if optional { issue.warning() } else { issue });
        return;
    }
    if !amount.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        let issue = FieldIssue::format(tag, "amount must be positive");
        outcome.push(if optional { issue.warning() } else { issue });
    }
}

fn check_date6(tag: &str, value: &str, outcome: &mut ValidationOutcome) {
    let trimmed = value.trim();
    if trimmed.len() != 6 || !trimmed.bytes().all(|b| b.is_ascii_digit()) || !valid_date6(trimmed) {
        outcome.push(FieldIssue::format(tag, "expected a valid YYMMDD date"));
    }
}

fn check_balance(tag: &str, value: &str, outcome: &mut ValidationOutcome) {
    let trimmed = value.trim();
    if !RE_BALANCE.is_match(trimmed) {
        outcome.push(FieldIssue::format(
            tag,
            "expected C/D mark, YYMMDD date, currency and amount",
        ));
        return;
    }
    if !valid_date6(&trimmed[1..7]) {
        outcome.push(FieldIssue::format(tag, "date is not a valid calendar date"));
    }
}

/// Calendar check for a 6-digit date, century fixed at 2000.
fn valid_date6(digits: &str) -> bool {
    let Ok(yy) = digits[0..2].parse::<i32>() else {
        return false;
    };
    let Ok(mm) = digits[2..4].parse::<u32>() else {
        return false;
    };
    let Ok(dd) = digits[4..6].parse::<u32>() else {
        return false;
    };
    chrono::NaiveDate::from_ymd_opt(2000 + yy, mm, dd).is_some()
}
