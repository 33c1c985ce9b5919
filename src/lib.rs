//! IPFS Intake Service Library
//!
//! This library crate defines the core modules of the intake tier.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems plus the
//! shared plumbing they hang off:
//!
//! - **`ingest`**: The write side. Accepts CID submissions (single, JSON
//!   bulk, CSV upload), validates and chunks them, and hands them to the
//!   work queue for the downstream fetch worker.
//! - **`store`**: The read side. Derives record keys from CIDs and serves
//!   the records the fetch worker has written, by CID or as a full
//!   dataset listing.
//! - **`queue`**: The hand-off layer. Defines the queue item wire format
//!   and the durable at-least-once enqueue contract shared with the
//!   worker.
//! - **`config`** / **`error`**: Startup configuration from the
//!   environment, and the one error type every handler maps onto HTTP.

pub mod config;
pub mod error;
pub mod ingest;
pub mod queue;
pub mod store;
