//! Work Queue Module
//!
//! Hand-off point between the intake API and the downstream fetch worker:
//! the queue item wire format, the enqueue contract, and its in-memory
//! realization.
//!
//! The intake tier only ever enqueues. Consuming, retrying, and writing
//! resulting records all happen in the worker, which shares nothing with
//! this service but the item format and the store keyspace.

pub mod backend;
pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;
