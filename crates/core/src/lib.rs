//! Domain core for the energy manager → plant → asset hierarchy.
//!
//! Holds the entity model, the error taxonomy, the capacity and integrity
//! validator, the [`store::EntityStore`] contract and the
//! [`hierarchy::HierarchyService`] that orchestrates them. Nothing in this
//! crate performs I/O directly; persistence is reached through the store
//! trait only.

pub mod error;
pub mod hierarchy;
pub mod models;
pub mod store;
pub mod types;
pub mod validation;
