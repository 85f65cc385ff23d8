//! Per-invocation state shared by command handlers.

use std::path::Path;
use std::sync::Arc;

use hatch_config::HatchConfig;
use hatch_db::AuditStore;
use hatch_workflow::{AuditSession, WorkflowOptions};

pub struct AppContext {
    pub config: HatchConfig,
    pub store: Arc<AuditStore>,
}

impl AppContext {
    /// Open the project's store according to `config.storage`.
    pub async fn init(project_root: &Path, config: HatchConfig) -> anyhow::Result<Self> {
        let store = AuditStore::open(&config.storage, project_root).await?;
        tracing::debug!(root = %project_root.display(), kind = %store.kind(), "storage opened");
        if store.is_degraded() {
            tracing::warn!("running on in-memory storage; changes will be lost on exit");
        }
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    /// A workflow session with the persisted draft loaded.
    pub async fn session(&self) -> anyhow::Result<AuditSession> {
        let mut session = AuditSession::new(
            Arc::clone(&self.store),
            WorkflowOptions::from(&self.config.workflow),
        );
        session.resume().await?;
        Ok(session)
    }
}
