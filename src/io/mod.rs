//! File input.

pub mod ingest;
