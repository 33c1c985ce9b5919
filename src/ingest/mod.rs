//! Ingestion Module
//!
//! Write side of the intake service: the three submission paths (single
//! CID, JSON bulk, CSV upload) and the coordinator that turns them into
//! work queue items.
//!
//! ## Core Concepts
//!
//! - **Accepted means queued**: a 202 promises only that the work is
//!   durably on the queue. Fetching happens later, in the worker.
//! - **Chunking**: CSV uploads are split into fixed-size items so one
//!   large upload becomes many small units of worker work, in row order.
//! - **First failure aborts**: a bad row or a refused enqueue stops the
//!   submission. Items queued before the failure stay queued; the error
//!   says how many.

pub mod coordinator;
pub mod handlers;
pub mod types;
