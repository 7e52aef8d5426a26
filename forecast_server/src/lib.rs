//! # forecast_server - Gridcast HTTP API
//!
//! Thin axum layer over [`forecast_core`]. One route:
//!
//! - `POST /predict` - estimate materials for a project
//!
//! Cross-origin requests are allowed from anywhere. There is no
//! authentication and no state shared between requests.
//!
//! ## Auto-reload
//!
//! When started under `systemfd`, the server takes over the socket it is
//! handed instead of binding its own, so the port stays open while
//! `cargo watch` rebuilds and restarts the binary:
//!
//! ```text
//! systemfd --no-pid -s http::8000 -- cargo watch -x "run -p forecast_server"
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use forecast_server::{config::ServerConfig, serve, telemetry};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     telemetry::init_tracing();
//!     serve(ServerConfig::default()).await
//! }
//! ```

pub mod config;
pub mod routes;
pub mod telemetry;

use axum::routing::post;
use axum::Router;
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::config::ServerConfig;

/// Build the application router
pub fn router() -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Use the inherited socket if there is one, else bind `config`'s address
pub async fn bind_listener(
    config: &ServerConfig,
    inherited: Option<std::net::TcpListener>,
) -> std::io::Result<TcpListener> {
    match inherited {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            let listener = TcpListener::from_std(listener)?;
            info!(addr = %listener.local_addr()?, "using inherited listening socket");
            Ok(listener)
        }
        None => TcpListener::bind(config.socket_addr()).await,
    }
}

/// Bind (or inherit) the listening socket and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let inherited = ListenFd::from_env().take_tcp_listener(0)?;
    let listener = bind_listener(&config, inherited).await?;
    info!(addr = %listener.local_addr()?, "material forecast API listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    fn loopback() -> ServerConfig {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        }
    }

    #[tokio::test]
    async fn test_bind_listener_prefers_inherited_socket() {
        let inherited = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = inherited.local_addr().unwrap();

        let listener = bind_listener(&ServerConfig::default(), Some(inherited)).await.unwrap();
        assert_eq!(listener.local_addr().unwrap(), addr);
    }

    #[tokio::test]
    async fn test_bind_listener_binds_config_address() {
        let listener = bind_listener(&loopback(), None).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_inherited_socket_accepts_connections() {
        let inherited = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = inherited.local_addr().unwrap();
        let listener = bind_listener(&loopback(), Some(inherited)).await.unwrap();

        let (accepted, connected) = tokio::join!(listener.accept(), tokio::net::TcpStream::connect(addr));
        assert!(accepted.is_ok());
        assert!(connected.is_ok());
    }
}
