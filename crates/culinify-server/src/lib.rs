//! Inbound HTTP server exposing the two recipe gateways.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};
use culinify_config::CulinifyConfig;
use log::info;
use routes::{generate_recipe_handler, save_recipe_handler};
use state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the gateway router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/generate-recipe", post(generate_recipe_handler))
        .route("/api/save-recipe", post(save_recipe_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the gateways until shutdown.
pub async fn serve(config: CulinifyConfig) -> anyhow::Result<()> {
    config.validate()?;
    let address = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::from_config(&config));
    let router = app(state);

    info!("binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server shut down");
    Ok(())
}

/// Resolve when ctrl-c or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if ctrl_c().await.is_ok() {
            info!("received ctrl-c, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
