//! Metadata Store Module
//!
//! Read side of the intake service: key derivation, the store contract,
//! its in-memory realization, and the HTTP read path.
//!
//! ## Core Concepts
//!
//! - **Addressing**: every CID maps to exactly one record key (`keys`),
//!   so any instance of the service finds a record written by any worker
//!   without coordination.
//! - **Contract**: `MetadataStore` (`backend`) is the narrow read
//!   interface the service requires. Records are written by the
//!   downstream fetch worker; the intake tier has no write path.
//! - **Catalog**: `RecordCatalog` composes addressing with the contract
//!   into the lookup and listing operations served over HTTP.

pub mod backend;
pub mod catalog;
pub mod handlers;
pub mod keys;
pub mod memory;
pub mod types;
