use crate::config::ServiceConfig;
use crate::handlers;
use crate::services::{AppError, MongoDb, MongoStudentStore, StudentStore};
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub store: Arc<dyn StudentStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;
        let store: Arc<dyn StudentStore> = Arc::new(MongoStudentStore::new(db));

        Self::build_with_store(config, store).await
    }

    /// Assembles the application around an explicit store, letting tests
    /// substitute an in-memory implementation.
    pub async fn build_with_store(
        config: ServiceConfig,
        store: Arc<dyn StudentStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/students",
                get(handlers::list_students).post(handlers::create_student),
            )
            .route(
                "/students/:name",
                get(handlers::get_student)
                    .put(handlers::update_student)
                    .delete(handlers::delete_student),
            )
            .route(
                "/students/college/:college_name",
                get(handlers::get_students_by_college),
            )
            // The HTML pages are plain files next to the API.
            .fallback_service(ServeDir::new(&config.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
