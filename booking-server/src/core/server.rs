//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::middleware;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::auth::require_auth;
use crate::booking::retention;
use crate::core::{BackgroundTasks, Config, ServerState, TaskKind};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Build the full application router for the given state
    ///
    /// JWT 认证中间件在 Router 级别应用，require_auth 内部会跳过公共路由。
    pub fn build_router(state: ServerState) -> axum::Router {
        api::build_app()
            .layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(log_request))
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        // Start background tasks (daily retention purge)
        let mut tasks = BackgroundTasks::new();
        let purge_state = state.clone();
        let purge_token = tasks.shutdown_token();
        tasks.spawn("daily_purge", TaskKind::Periodic, async move {
            retention::run_daily_purge(purge_state, purge_token).await;
        });
        tasks.log_summary();

        let app = Self::build_router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("DineUp Booking Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        // Stop the purge scheduler before exiting
        tasks.shutdown().await;

        Ok(())
    }
}
