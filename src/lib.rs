//! Cartwright - Mock e-commerce storefront backend.
//!
//! Accounts, catalog listing, a per-user staged cart, membership-tiered
//! checkout pricing, and an append-only order ledger, persisted through an
//! injected key-value store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
