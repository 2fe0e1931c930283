//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::db::{
    ClientStore, PgClientStore, PgPrintJobStore, PgUserStore, PrintJobStore, UserStore,
};

/// Application state shared across all handlers.
///
/// Holds the configuration, the database pool (for health probes and session
/// storage), and the store trait objects the route handlers depend on.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    clients: Arc<dyn ClientStore>,
    print_jobs: Arc<dyn PrintJobStore>,
    users: Arc<dyn UserStore>,
}

impl AppState {
    /// Build state with `PostgreSQL`-backed stores.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let clients = Arc::new(PgClientStore::new(pool.clone()));
        let print_jobs = Arc::new(PgPrintJobStore::new(pool.clone()));
        let users = Arc::new(PgUserStore::new(pool.clone()));
        Self::with_stores(config, pool, clients, print_jobs, users)
    }

    /// Build state with explicit store implementations.
    ///
    /// Used by tests to substitute in-memory stores.
    #[must_use]
    pub fn with_stores(
        config: AdminConfig,
        pool: PgPool,
        clients: Arc<dyn ClientStore>,
        print_jobs: Arc<dyn PrintJobStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                clients,
                print_jobs,
                users,
            }),
        }
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Database pool (health probes, session store).
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// The client store.
    #[must_use]
    pub fn clients(&self) -> &dyn ClientStore {
        self.inner.clients.as_ref()
    }

    /// The print job store.
    #[must_use]
    pub fn print_jobs(&self) -> &dyn PrintJobStore {
        self.inner.print_jobs.as_ref()
    }

    /// The user store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }
}
