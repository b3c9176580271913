//! Domain values shared by the upstream client and the pagination layer.

pub mod article;
pub mod types;
