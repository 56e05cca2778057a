//! Shared domain types for Botforge.
//!
//! This crate contains the types used across the Botforge workspace engine:
//! bots, plugins, configuration documents, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod bot;
pub mod config;
pub mod error;
pub mod plugin;
