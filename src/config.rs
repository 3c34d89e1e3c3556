//! Configuration loader and schema types.
//!
//! Settings come from an optional TOML file and `TAPEDECK__*` environment
//! variables; command-line flags are layered on top at startup.

mod load;
mod schema;

pub use schema::*;
