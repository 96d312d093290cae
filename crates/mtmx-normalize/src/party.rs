//! Party and institution block splitting.
//!
//! MT party fields (`50K`, `59`) are multi-line: an optional `/`-prefixed
//! account line, a name line, then unstructured address lines. Institution
//! fields (`52`, `53`, `56`, `57`, `58`) lead with a BIC on the A options
//! and with an account or name on the D options.

/// Maximum address lines carried by the source fields.
pub const MAX_ADDRESS_LINES: usize = 4;

/// Split result of a party block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyBlock {
    pub account: Option<String>,
    pub name: Option<String>,
    pub address_lines: Vec<String>,
}

/// Split result of an institution block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionBlock {
    pub bic: Option<String>,
    pub name: Option<String>,
}

/// Split a party field value into account, name and address lines.
///
/// Line 1, when `/`-prefixed, is the account identifier; the next line is
/// the party name; anything after that is kept as ordered address lines,
/// bounded to the source field's 4-line constraint. No country or city
/// substructure is inferred.
pub fn party_block(raw: &str) -> PartyBlock {
    let mut lines = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut block = PartyBlock::default();
    if lines.first().is_some_and(|l| l.starts_with('/')) {
        let account = lines.remove(0);
        block.account = Some(account[1..].to_string());
    }
    if !lines.is_empty() {
        block.name = Some(lines.remove(0));
        lines.truncate(MAX_ADDRESS_LINES);
        block.address_lines = lines;
    }
    block
}

/// True if `value` has the BIC shape: 6 letters, 2 alphanumerics, and an
/// optional 3-alphanumeric branch code.
pub fn is_bic(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 8 && bytes.len() != 11 {
        return false;
    }
    bytes[..6].iter().all(u8::is_ascii_uppercase)
        && bytes[6..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Split an institution field value into BIC and name.
///
/// The first line is taken as the BIC when it matches the BIC shape; a
/// `/`-prefixed first line (party identifier on D options) is skipped and
/// the remaining lines become the institution name.
pub fn institution_block(raw: &str) -> InstitutionBlock {
    let lines = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>();

    let mut block = InstitutionBlock::default();
    let Some(first) = lines.first() else {
        return block;
    };

    if is_bic(first) {
        block.bic = Some((*first).to_string());
        if lines.len() > 1 {
            block.name = Some(lines[1..].join(" "));
        }
    } else if first.starts_with('/') {
        if lines.len() > 1 {
            block.name = Some(lines[1..].join(" "));
        }
    } else {
        block.name = Some(lines.join(" "));
    }
    block
}
