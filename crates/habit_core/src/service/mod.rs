//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage reads/writes into auth and habit use cases.
//! - Keep UI/FFI layers decoupled from storage details.
//!
//! # Invariants
//! - Services are constructed explicitly and own their storage adapter; there
//!   is no process-wide instance.
//! - Every mutation reads the full collection, edits it in memory and writes
//!   the full collection back.

pub mod auth_service;
pub mod habit_service;
