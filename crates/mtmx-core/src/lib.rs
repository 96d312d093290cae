//! Conversion orchestration: one entry point running the full
//! tokenize → detect → validate → map → serialize pipeline.

pub mod clock;
pub mod converter;
pub mod hash;
pub mod registry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use converter::Converter;
pub use hash::sha256_hex;
pub use registry::{MapFn, mapper_for};
