//! SWIFT MT tokenization: raw text → ordered `(tag, value)` field set,
//! plus tag-profile message-type detection.

pub mod detect;
pub mod field_set;
pub mod tokenizer;

pub use detect::{DetectError, detect};
pub use field_set::{Field, FieldSet};
pub use tokenizer::{ParseError, tokenize};
