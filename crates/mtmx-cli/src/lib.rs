//! CLI library components for the MT converter.

pub mod logging;
