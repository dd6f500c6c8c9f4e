//! Resource access layer for parcelhub.
//!
//! This crate is the functional core: it knows how products and orders are laid
//! out in a single-key table, how identifiers are allocated, and how a full
//! table scan is paged. It has no knowledge of AWS types or HTTP; the table
//! itself is reached through the [`storage::TableClient`] trait.

pub mod resources;
pub mod storage;
