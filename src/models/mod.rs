//! Models loaded from external sources at startup.

pub mod config;
