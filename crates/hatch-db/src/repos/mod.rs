//! Repository modules, each an `impl AuditStore` block.

pub mod audit;
pub mod draft;
pub mod ids;
pub mod reference;
pub mod settings;
pub mod statistics;
pub mod storage_info;
pub mod transfer;
