use crate::config::VerificationConfig;
use crate::handlers;
use crate::services::ScratchStore;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: VerificationConfig,
    pub scratch: ScratchStore,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: VerificationConfig) -> Result<Self, AppError> {
        let scratch = ScratchStore::new(&config.scratch.dir).await.map_err(|e| {
            tracing::error!(
                "Failed to initialize scratch store at {}: {}",
                config.scratch.dir,
                e
            );
            e
        })?;

        let state = AppState {
            config: config.clone(),
            scratch,
        };

        let app = Router::new()
            .route("/", get(handlers::welcome))
            .route("/health", get(handlers::health_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/api/speech-to-text", post(handlers::speech_to_text))
            .route("/api/analyze-sentiment", post(handlers::analyze_sentiment))
            .route("/api/verify-document", post(handlers::verify_document))
            .route(
                "/api/video-response-analysis",
                post(handlers::video_response_analysis),
            )
            // CORS is wide open; the onboarding frontend is served from
            // arbitrary dev hosts
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(from_fn(metrics_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .layer(from_fn(request_id_middleware))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
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
