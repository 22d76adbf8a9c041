//! CLI subcommand implementations.

pub mod account;
pub mod metadata;
pub mod orders;
pub mod pies;
pub mod positions;
