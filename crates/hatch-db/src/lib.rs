//! # hatch-db
//!
//! Persistence for hatchery audits.
//!
//! Every managed document (audit list, draft slot, settings, locations,
//! auditors) is a JSON value under a fixed key in a [`KeyValueStore`]. The
//! durable backend is a local libSQL database with a single `kv_store`
//! table; when it cannot be opened the store degrades to memory and says so.
//!
//! Repository methods live on [`AuditStore`] as `impl` blocks under
//! [`repos`].

pub mod error;
pub mod keys;
pub mod libsql_store;
pub mod memory;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;
mod test_support;

pub use error::DatabaseError;
pub use libsql_store::LibsqlStore;
pub use memory::MemoryStore;
pub use service::{AuditStore, StoreOptions};
pub use store::{KeyValueStore, open_store, probe};
