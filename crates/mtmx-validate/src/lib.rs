//! Message-type-aware validation of tokenized MT field sets.
//!
//! The tokenizer guarantees structure (tags and values); this crate checks
//! content: mandatory-tag presence per message type, repeating-block
//! consistency, and value grammars for dated amounts, balances, charge
//! codes and references. All issues are accumulated into a single
//! [`mtmx_model::ValidationOutcome`].

pub mod tables;
pub mod validator;

pub use tables::{MandatoryTag, has_transaction_blocks, mandatory_tags};
pub use validator::validate;
