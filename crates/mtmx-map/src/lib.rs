//! Semantic mapping from validated MT field sets to canonical MX documents.
//!
//! One mapper per message type, all sharing the party, agent and amount
//! building blocks in [`common`]. Mappers run after validation, so a
//! missing mandatory field here is an engine fault, not user input error;
//! the orchestrator reports [`MapError`] as an internal failure.

use chrono::NaiveDateTime;
use thiserror::Error;

use mtmx_normalize::NormalizeError;

pub mod common;
pub mod ids;
pub mod mt101;
pub mod mt102;
pub mod mt103;
pub mod mt202;
pub mod mt940;
pub mod mt9xx;

pub use ids::IdSupply;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("field :{0}: is absent after validation")]
    MissingField(&'static str),

    #[error("field :{tag}: value {value:?} does not have the expected shape")]
    Malformed { tag: &'static str, value: String },

    #[error("field :{tag}: could not be normalized: {source}")]
    Field {
        tag: &'static str,
        source: NormalizeError,
    },
}

pub type MapResult<T> = Result<T, MapError>;

/// Per-conversion mapping context.
///
/// The creation timestamp is injected by the orchestrator rather than read
/// from a clock here, which keeps mapping a pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct MapContext {
    pub created_at: NaiveDateTime,
}

impl MapContext {
    pub fn at(created_at: NaiveDateTime) -> Self {
        Self { created_at }
    }
}
