use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::ordering::{Clock, OrderGroupWorkflow, SystemClock};

/// Server state shared by every request handler
///
/// Cheap to clone: the pool and services are reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | pool | SQLite connection pool |
/// | jwt_service | token issuing and validation |
/// | clock | source of "now" for the order group workflow |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub clock: Arc<dyn Clock>,
}

impl ServerState {
    /// Build state from already opened resources (tests, embedding)
    pub fn new(config: Config, pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool,
            jwt_service,
            clock,
        }
    }

    /// Initialize server state
    ///
    /// 1. Make sure the database directory exists
    /// 2. Open the database and apply migrations
    /// 3. Wire the services with the system clock
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db_path = db_path
            .to_str()
            .ok_or_else(|| ServerError::Config(format!("Invalid database path: {db_path:?}")))?;
        let db = DbService::new(db_path)
            .await
            .map_err(|e| ServerError::Database(e.message))?;

        tracing::info!(
            database = %db_path,
            timezone = %config.business_timezone,
            "Server state initialized"
        );

        Ok(Self::new(config.clone(), db.pool, Arc::new(SystemClock)))
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Order group workflow bound to this state's pool, clock and time zone
    pub fn order_groups(&self) -> OrderGroupWorkflow {
        OrderGroupWorkflow::new(
            self.pool.clone(),
            self.clock.clone(),
            self.config.business_timezone,
            self.config.share_base_url(),
        )
    }
}
