//! BestCakes storefront state core.
//!
//! This crate is the single source of truth for the shopping cart and the
//! mock session, both synchronized with a durable local key-value store.
//! The presentation layer (the UI shell) calls into the stores here and
//! renders the snapshots they return; it never mutates state directly.
//!
//! There is no server tier: all operations are synchronous and run to
//! completion before the shell observes the new state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod services;
pub mod state;
pub mod storage;
