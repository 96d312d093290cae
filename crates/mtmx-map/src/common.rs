//! Shared field-to-model building blocks used by all mappers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use mtmx_model::{Account, Agent, AgentChain, MonetaryAmount, Party, PostalAddress};
use mtmx_normalize::{amount, date_yymmdd, institution_block, party_block};
use mtmx_parse::FieldSet;

use crate::{MapError, MapResult};

/// Letter options for the agent-chain fields.
pub(crate) const ORDERING: &[&str] = &["52A", "52D"];
pub(crate) const SENDERS_CORRESPONDENT: &[&str] = &["53A", "53B", "53D"];
pub(crate) const RECEIVERS_CORRESPONDENT: &[&str] = &["54A", "54B", "54D"];
pub(crate) const INTERMEDIARY: &[&str] = &["56A", "56C", "56D"];
pub(crate) const ACCOUNT_WITH: &[&str] = &["57A", "57B", "57C", "57D"];

/// First value among the party-field options, or a missing-field fault.
pub(crate) fn required<'a>(fields: &'a FieldSet, tag: &'static str) -> MapResult<&'a str> {
    fields.first(tag).ok_or(MapError::MissingField(tag))
}

/// Unwrap an optional field's value, dropping it when malformed.
///
/// Validation has already recorded a warning for the field; a mapper must
/// not turn it into a fatal fault.
pub(crate) fn optional_value<T>(result: MapResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "dropping malformed optional field");
            None
        }
    }
}

pub(crate) fn required_of<'a>(
    fields: &'a FieldSet,
    label: &'static str,
    options: &[&str],
) -> MapResult<&'a str> {
    fields
        .first_of(options)
        .map(|(_, value)| value)
        .ok_or(MapError::MissingField(label))
}

/// Build a party from a `50K`/`50F`/`59`-style multi-line block.
///
/// A block with an account line but no name keeps the account and leaves
/// the name empty; downstream rendering always emits `Nm`.
pub(crate) fn map_party(raw: &str) -> Party {
    let block = party_block(raw);
    Party {
        name: block.name.unwrap_or_default(),
        address: if block.address_lines.is_empty() {
            None
        } else {
            Some(PostalAddress {
                lines: block.address_lines,
            })
        },
        account: block.account.map(|id| Account { id, currency: None }),
    }
}

/// Build an agent from an institution field value.
pub(crate) fn map_agent(raw: &str) -> Agent {
    let block = institution_block(raw);
    Agent {
        bic: block.bic,
        name: block.name,
    }
}

fn optional_agent(fields: &FieldSet, options: &[&str]) -> Option<Agent> {
    fields
        .first_of(options)
        .map(|(_, value)| map_agent(value))
        .filter(|agent| !agent.is_empty())
}

/// Scan the agent-chain fields of a payment message.
pub(crate) fn agent_chain(fields: &FieldSet) -> AgentChain {
    AgentChain {
        ordering: optional_agent(fields, ORDERING),
        senders_correspondent: optional_agent(fields, SENDERS_CORRESPONDENT),
        receivers_correspondent: optional_agent(fields, RECEIVERS_CORRESPONDENT),
        intermediary: optional_agent(fields, INTERMEDIARY),
        account_with: optional_agent(fields, ACCOUNT_WITH),
    }
}

/// Decompose a `32A`-shaped value into settlement date and amount.
pub(crate) fn date_ccy_amount(
    tag: &'static str,
    raw: &str,
) -> MapResult<(NaiveDate, MonetaryAmount)> {
    let trimmed = raw.trim();
    // The date must be 6 ASCII digits before the slices below are taken.
    let bytes = trimmed.as_bytes();
    if bytes.len() < 10 || !bytes[..6].iter().all(u8::is_ascii_digit) {
        return Err(MapError::Malformed {
            tag,
            value: raw.to_string(),
        });
    }
    let date = date_yymmdd(&trimmed[..6]).map_err(|source| MapError::Field { tag, source })?;
    let (currency, value) = split_ccy_amount(tag, &trimmed[6..])?;
    Ok((date, MonetaryAmount::new(currency, value)))
}

/// Decompose a `32B`-shaped value into a monetary amount.
pub(crate) fn ccy_amount(tag: &'static str, raw: &str) -> MapResult<MonetaryAmount> {
    let (currency, value) = split_ccy_amount(tag, raw.trim())?;
    Ok(MonetaryAmount::new(currency, value))
}

fn split_ccy_amount<'a>(tag: &'static str, raw: &'a str) -> MapResult<(&'a str, Decimal)> {
    let bytes = raw.as_bytes();
    if bytes.len() < 4 || !bytes[..3].iter().all(u8::is_ascii_uppercase) {
        return Err(MapError::Malformed {
            tag,
            value: raw.to_string(),
        });
    }
    let value = amount(&raw[3..]).map_err(|source| MapError::Field { tag, source })?;
    Ok((&raw[..3], value))
}

/// Lines of a free-text field (`70`, `72`), empty lines dropped.
pub(crate) fn text_lines(fields: &FieldSet, tag: &str) -> Vec<String> {
    fields
        .all(tag)
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
