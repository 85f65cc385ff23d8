//! # hatch-core
//!
//! Core types, identifier formats, and error types for the hatchery
//! vaccination audit workspace.
//!
//! This crate provides the foundational types shared across all hatch crates:
//! - Entity structs for the audit record and its sub-documents
//! - Status and step enums with state machine transitions
//! - Audit number and sample id formatting helpers
//! - The environmental sampling plan generator
//! - The export/import bundle envelope
//! - Schedule helpers for the recurring audit calendar
//! - Cross-cutting error types and response shapes

pub mod bundle;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod sampling;
pub mod schedule;
