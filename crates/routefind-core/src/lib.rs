//! Routefind Core Library
//!
//! Weighted graph model, least-cost route engine, and the ingestion and
//! response layers around them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod response;
