//! Configuration and dependency wiring for the indexer binary.

mod dependencies;

pub use dependencies::Dependencies;
