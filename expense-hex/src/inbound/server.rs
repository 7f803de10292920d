//! HTTP Server configuration and startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, middleware, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use expense_types::{CategoryRepository, ExpenditureRepository};

use super::handlers::{self, AppState};
use super::logging::log_requests;
use crate::ExpenseService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Expense API.
pub struct HttpServer<E: ExpenditureRepository, C: CategoryRepository> {
    state: Arc<AppState<E, C>>,
}

impl<E: ExpenditureRepository, C: CategoryRepository> HttpServer<E, C> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ExpenseService<E, C>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .route(
                "/expenditures",
                get(handlers::list_expenditures::<E, C>).post(handlers::create_expenditure::<E, C>),
            )
            .route(
                "/expenditures/{id}",
                get(handlers::get_expenditure::<E, C>)
                    .put(handlers::update_expenditure::<E, C>)
                    .delete(handlers::delete_expenditure::<E, C>),
            )
            .route("/categories", get(handlers::list_categories::<E, C>))
            .route("/categories/{id}", get(handlers::get_category::<E, C>))
            .method_not_allowed_fallback(handlers::method_not_allowed)
            .fallback(handlers::not_found)
            .layer(middleware::from_fn(log_requests))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
