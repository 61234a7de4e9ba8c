use std::sync::Arc;

use abacus_bootstrap::AppConfig;
use axum::Router;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::db;
use crate::infra::storage::sea_orm_repo::SeaOrmHistoryRepository;

/// Name of this module's section under `modules:` in the app config.
pub const MODULE_NAME: &str = "calculator";

/// The calculator module: owns its database connection and its service.
pub struct CalculatorModule {
    service: Arc<Service>,
    db: DatabaseConnection,
}

impl CalculatorModule {
    /// Read the module config, connect to the database and run migrations.
    ///
    /// # Errors
    /// Returns an error on a malformed module config or if the database
    /// cannot be prepared.
    pub async fn init(app: &AppConfig) -> anyhow::Result<Self> {
        info!("Initializing calculator module");

        let cfg: CalculatorConfig = app.module_config(MODULE_NAME)?;
        let db = db::connect_and_migrate(&app.database).await?;

        let module = Self::with_connection(db, &cfg);
        info!(
            history_limit = cfg.history_limit,
            reject_zero_operands = cfg.reject_zero_operands,
            "Calculator module initialized"
        );
        Ok(module)
    }

    /// Wire the module over an already migrated connection.
    #[must_use]
    pub fn with_connection(db: DatabaseConnection, cfg: &CalculatorConfig) -> Self {
        let repo = Arc::new(SeaOrmHistoryRepository::new(db.clone()));
        let service = Arc::new(Service::new(repo, ServiceConfig::from(cfg)));
        Self { service, db }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// Mount the calculator routes on `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering calculator REST routes");
        routes::register_routes(router, self.service())
    }

    /// Close the database pool. Call after the HTTP server has drained.
    ///
    /// # Errors
    /// Returns an error if the pool fails to close cleanly.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.db.close().await?;
        info!("Calculator module stopped");
        Ok(())
    }
}
