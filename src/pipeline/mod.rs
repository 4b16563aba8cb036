//! Top-level flows run by the CLI.

mod lookup;

pub use lookup::{LookupOptions, LookupOutcome, run_lookup};
